use std::io;
use std::process::ExitCode;
use word_scramble::cli::{Cli, CliInterface, parse_cli};
use word_scramble::logging::{default_log_path, init_logging};
use word_scramble::tui::TuiInterface;
use word_scramble::{
    EMBEDDED_WORD_LIST, Error, GameInterface, RootWordSelector, ValidationEngine,
    WordListDictionary, game_loop, load_word_list_from_file, load_word_list_from_str,
};

fn main() -> ExitCode {
    let cli = parse_cli();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| if cli.tui { default_log_path() } else { None });
    init_logging(log_file.as_deref())?;

    let word_list = match &cli.word_list_path {
        Some(path) => load_word_list_from_file(path)?,
        None => load_word_list_from_str(EMBEDDED_WORD_LIST),
    };
    log::info!("Loaded {} root words", word_list.len());

    let dictionary = WordListDictionary::from_file(&cli.language, &cli.dictionary_path)?;

    let mut selector = match cli.seed {
        Some(seed) => RootWordSelector::from_seed(seed),
        None => RootWordSelector::new(),
    };
    let root = selector.select_root(&word_list);
    let mut engine = ValidationEngine::new(root, dictionary).with_language(&cli.language);

    let mut interface: Box<dyn GameInterface> = if cli.tui {
        Box::new(TuiInterface::new()?)
    } else {
        Box::new(CliInterface::new(io::stdin().lock()))
    };

    let summary = game_loop(&word_list, &mut selector, &mut engine, interface.as_mut());
    drop(interface);

    log::info!(
        "Played {} rounds, {} words accepted, final score {}",
        summary.rounds_started,
        summary.words_accepted,
        summary.final_score
    );
    Ok(())
}
