use crate::dictionary::SpellChecker;
use crate::engine::{RoundView, ValidationEngine};
use crate::info_log;
use crate::outcome::Outcome;
use crate::selector::RootWordSelector;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Raw text typed by the player.
    Submit(String),
    /// Abandon the round and play with another root word.
    NewWord,
    Exit,
}

/// Front end driven by [`game_loop`].
pub trait GameInterface {
    fn display_round(&mut self, round: &RoundView<'_>);
    /// Returns `None` when nothing actionable was entered.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_outcome(&mut self, outcome: Outcome, round: &RoundView<'_>);
    fn display_exit_message(&mut self);
}

/// Totals for one session of [`game_loop`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameSummary {
    pub rounds_started: u32,
    pub words_accepted: u32,
    pub final_score: u32,
}

pub fn game_loop<D, R, I>(
    word_list: &[String],
    selector: &mut RootWordSelector<R>,
    engine: &mut ValidationEngine<D>,
    interface: &mut I,
) -> GameSummary
where
    D: SpellChecker,
    R: Rng,
    I: GameInterface + ?Sized,
{
    let mut summary = GameSummary {
        rounds_started: 1,
        ..GameSummary::default()
    };
    interface.display_round(&engine.view());

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };

        match action {
            UserAction::Submit(raw) => {
                let outcome = engine.submit(&raw);
                if outcome.is_accepted() {
                    summary.words_accepted += 1;
                }
                interface.display_outcome(outcome, &engine.view());
            }
            UserAction::NewWord => {
                engine.reset(selector.select_root(word_list));
                summary.rounds_started += 1;
                interface.display_round(&engine.view());
            }
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
        }
    }

    summary.final_score = engine.score();
    info_log!("game_loop() - finished: {:?}", summary);
    summary
}
