use crate::error::Error;
use crate::word::normalize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORD_LIST: &str = include_str!("resources/start.txt");

pub fn load_word_list_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(normalize)
        .filter(|word| !word.is_empty())
        .collect()
}

pub fn load_word_list_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, Error> {
    let path = path.as_ref();
    let to_error = |source| Error::WordList {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(to_error)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = normalize(&line.map_err(to_error)?);
        if !word.is_empty() {
            words.push(word);
        }
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_from_str_normalizes() {
        let words = load_word_list_from_str("Silkworm\r\n\n  cabbage  \n\t\nAIRPLANE");
        assert_eq!(words, ["silkworm", "cabbage", "airplane"]);
    }

    #[test]
    fn test_load_from_str_trailing_newline() {
        // A trailing newline must not produce an empty root candidate.
        let words = load_word_list_from_str("silkworm\n");
        assert_eq!(words, ["silkworm"]);
    }

    #[test]
    fn test_embedded_word_list() {
        let words = load_word_list_from_str(EMBEDDED_WORD_LIST);
        assert!(!words.is_empty());
        assert!(
            words
                .iter()
                .all(|w| w.chars().all(|c| c.is_ascii_lowercase()))
        );
        assert!(words.contains(&"silkworm".to_string()));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("word_scramble_test_start.txt");
        fs::write(&path, "Notebook\n\nmountain\n").unwrap();

        let words = load_word_list_from_file(&path).unwrap();
        assert_eq!(words, ["notebook", "mountain"]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = load_word_list_from_file("/nonexistent/word_scramble/start.txt");
        match result {
            Err(Error::WordList { path, .. }) => {
                assert!(path.ends_with("start.txt"));
            }
            other => panic!("Expected WordList error, got {other:?}"),
        }
    }
}
