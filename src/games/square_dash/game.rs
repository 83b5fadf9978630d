//! Square Dash rules implementation.

use log::{debug, info};

use crate::arena::{generate_layout, is_blocked, is_pulsing, ArenaBounds};
use crate::core::{
    ArenaConfig, BoardLayout, ConfigError, Direction, GameRng, GameState, MoveKind, MoveRecord, Phase,
    Position,
};
use crate::rules::{CrashCause, GameResult, MoveOutcome, RejectReason, RulesEngine};

/// Message shown when the last life is lost.
pub const GAME_OVER_MESSAGE: &str = "Game over! Flat as a pancake.";
/// Message shown on reaching the exit.
pub const VICTORY_MESSAGE: &str = "You escaped the crush!";

/// The Square Dash engine.
///
/// Holds only the validated configuration; all mutable data lives in the
/// [`GameState`] passed to each call.
#[derive(Clone, Debug)]
pub struct SquareDash {
    config: ArenaConfig,
}

impl Default for SquareDash {
    fn default() -> Self {
        Self {
            config: ArenaConfig::default(),
        }
    }
}

impl SquareDash {
    /// Create an engine for a custom arena.
    pub fn new(config: ArenaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Start a game on a fixed board instead of a random one.
    ///
    /// Respawns after a crash still draw from `seed`.
    #[must_use]
    pub fn game_with_layout(&self, layout: BoardLayout, seed: u64) -> GameState {
        GameState::new(&self.config, layout, GameRng::new(seed))
    }

    /// What would stop the first step of a move onto `target`.
    ///
    /// Pulses are judged at the state's current turn, before the move
    /// increments it.
    #[must_use]
    pub fn first_step_hazard(&self, state: &GameState, target: Position) -> Option<CrashCause> {
        if !ArenaBounds::of(state, &self.config).contains(target) {
            Some(CrashCause::Wall)
        } else if state.has_obstacle(target) {
            Some(CrashCause::Obstacle)
        } else if is_pulsing(state, &self.config, target) {
            Some(CrashCause::Pulse)
        } else {
            None
        }
    }

    /// Directions whose first step would not crash.
    #[must_use]
    pub fn safe_directions(&self, state: &GameState) -> Vec<Direction> {
        self.legal_directions(state)
            .into_iter()
            .filter(|&d| self.first_step_hazard(state, state.player.step(d)).is_none())
            .collect()
    }

    /// Lose a life; respawn on a new board or end the game.
    fn crash(&self, state: &mut GameState, cause: CrashCause) -> MoveOutcome {
        state.lives = state.lives.saturating_sub(1);

        if state.lives == 0 {
            state.phase = Phase::GameOver;
            state.message = GAME_OVER_MESSAGE.to_string();
            info!("crashed into {} with no lives left at turn {}", cause, state.turn);
            return MoveOutcome::Eliminated { cause };
        }

        let layout = generate_layout(&self.config, &mut state.rng);
        state.respawn(&self.config, layout);
        state.message = format!("Crashed! Lives remaining: {}", state.lives);
        info!("crashed into {}, {} lives left, new board laid out", cause, state.lives);

        MoveOutcome::Crashed {
            cause,
            lives_left: state.lives,
        }
    }

    fn resolve(&self, state: &mut GameState, direction: Direction) -> MoveOutcome {
        let from = state.player;
        let first = from.step(direction);

        if let Some(cause) = self.first_step_hazard(state, first) {
            return self.crash(state, cause);
        }

        let second = first.step(direction);
        let slid = !is_blocked(state, &self.config, second);
        let to = if slid { second } else { first };

        state.player = to;
        state.turn += 1;
        state.message.clear();
        debug!("turn {}: {} moved {} -> {}", state.turn, direction, from, to);

        if to == state.exit {
            state.phase = Phase::Victory;
            state.message = VICTORY_MESSAGE.to_string();
            info!("reached the exit at {} on turn {}", to, state.turn);
            return MoveOutcome::Escaped { at: to };
        }

        let shrunk = state.turn % self.config.shrink_interval == 0;
        if shrunk {
            state.border += 1;
            info!("arena shrinks to border {} at turn {}", state.border, state.turn);

            if !ArenaBounds::of(state, &self.config).contains(to) {
                return self.crash(state, CrashCause::Shrink);
            }
        }

        MoveOutcome::Moved { from, to, slid, shrunk }
    }
}

impl RulesEngine for SquareDash {
    fn config(&self) -> &ArenaConfig {
        &self.config
    }

    fn new_game_with_rng(&self, mut rng: GameRng) -> GameState {
        let layout = generate_layout(&self.config, &mut rng);
        debug!("new game: obstacles {:?}, exit {}", layout.obstacles, layout.exit);
        GameState::new(&self.config, layout, rng)
    }

    fn apply_move(&self, state: &mut GameState, direction: Direction) -> MoveOutcome {
        match state.phase {
            Phase::NotStarted => {
                return MoveOutcome::Rejected {
                    reason: RejectReason::NotStarted,
                }
            }
            Phase::GameOver | Phase::Victory => {
                return MoveOutcome::Rejected {
                    reason: RejectReason::GameFinished,
                }
            }
            Phase::Playing => {}
        }

        let turn = state.turn;
        let from = state.player;
        let outcome = self.resolve(state, direction);

        let kind = match outcome {
            MoveOutcome::Moved { slid: true, .. } => MoveKind::Slid,
            MoveOutcome::Moved { slid: false, .. } => MoveKind::Stepped,
            MoveOutcome::Escaped { .. } => MoveKind::Escaped,
            MoveOutcome::Crashed { .. } => MoveKind::Crashed,
            MoveOutcome::Eliminated { .. } => MoveKind::Eliminated,
            MoveOutcome::Rejected { .. } => return outcome,
        };

        state.record_move(MoveRecord {
            turn,
            direction,
            from,
            to: state.player,
            kind,
        });

        outcome
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        match state.phase {
            Phase::Victory => Some(GameResult::Escaped),
            Phase::GameOver => Some(GameResult::Crushed),
            Phase::NotStarted | Phase::Playing => None,
        }
    }
}
