//! One player's session: start, play, and restart games.
//!
//! The session owns the engine, a master RNG, and the current game, if
//! any. Each new game gets its own stream forked from the master RNG, so a
//! session seed reproduces every game played in it.

use log::debug;

use crate::command::parse_command;
use crate::core::{ArenaConfig, ConfigError, Direction, GameRng, GameState, Phase};
use crate::games::square_dash::SquareDash;
use crate::rules::{MoveOutcome, RejectReason, RulesEngine};
use crate::view::ViewModel;

/// A game session driven by a front end.
#[derive(Clone, Debug)]
pub struct Session {
    engine: SquareDash,
    rng: GameRng,
    game: Option<GameState>,
    /// Feedback shown before a game starts or after a rejected command.
    notice: String,
}

impl Session {
    /// Session on the standard arena.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            engine: SquareDash::default(),
            rng: GameRng::new(seed),
            game: None,
            notice: String::new(),
        }
    }

    /// Session on a custom arena.
    pub fn with_config(config: ArenaConfig, seed: u64) -> Result<Self, ConfigError> {
        Ok(Self {
            engine: SquareDash::new(config)?,
            rng: GameRng::new(seed),
            game: None,
            notice: String::new(),
        })
    }

    #[must_use]
    pub fn engine(&self) -> &SquareDash {
        &self.engine
    }

    /// The current game, if one has started.
    #[must_use]
    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.game.as_ref().map_or(Phase::NotStarted, |g| g.phase)
    }

    /// A new game may start before the first one or after one ends,
    /// never in the middle of play.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.phase() != Phase::Playing
    }

    /// Start a new game with full lives. Also used for "play again".
    pub fn start(&mut self) -> &GameState {
        let rng = self.rng.fork();
        debug!("starting game with seed {}", rng.seed());
        self.notice.clear();
        self.game.insert(self.engine.new_game_with_rng(rng))
    }

    /// Move in a direction.
    pub fn press(&mut self, direction: Direction) -> MoveOutcome {
        match self.game.as_mut() {
            Some(game) => {
                self.notice.clear();
                self.engine.apply_move(game, direction)
            }
            None => MoveOutcome::Rejected {
                reason: RejectReason::NotStarted,
            },
        }
    }

    /// Parse and apply a text command.
    ///
    /// A malformed command leaves the game untouched and sets the message.
    pub fn submit(&mut self, input: &str) -> Option<MoveOutcome> {
        match parse_command(input) {
            Ok(direction) => Some(self.press(direction)),
            Err(err) => {
                debug!("rejected command {:?}: {}", input, err);
                self.notice = err.to_string();
                None
            }
        }
    }

    /// Current frame for the front end.
    #[must_use]
    pub fn view(&self) -> ViewModel {
        match &self.game {
            Some(game) => {
                let mut view = ViewModel::from_state(game, self.engine.config());
                // A rejected command shadows the game message until the next input.
                if !self.notice.is_empty() {
                    view.message = self.notice.clone();
                }
                view
            }
            None => ViewModel::not_started(self.engine.config(), self.notice.clone()),
        }
    }
}
