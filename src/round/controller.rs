//! Round controller: turns offers into paced outcomes.
//!
//! ## State Machine
//!
//! ```text
//! Idle --offer--> AwaitingSecond --offer(other card)--> Resolving
//!   ^                                                      |
//!   |                                   outcome delay, apply effect
//!   |                                                      v
//!   +------------- settle delay, reopen gate ---------- Settling
//!
//! Resolving(Lose) or the final Match --> Finished
//! ```
//!
//! Delays are deadlines consumed by [`RoundController::advance`]. A single
//! long tick carries its leftover time into the next stage, so a host that
//! stalls for several seconds still ends in the right state.

use std::time::Duration;

use im::Vector;
use log::{debug, info};

use super::evaluator::{evaluate, MatchOutcome};
use super::event::{GameEvent, RoundRecord};
use super::outcome::{FailReason, LevelOutcome, LevelStatus};
use super::tracker::{IgnoreReason, Offer, SelectionTracker};
use crate::core::config::{GameConfig, RoundTiming};
use crate::core::entity::CardId;
use crate::core::rng::GameRng;
use crate::error::{LevelError, Result};
use crate::levels::LevelData;
use crate::table::Table;
use crate::timer::LevelTimer;

/// Observable phase of the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    /// Gate open, nothing selected.
    Idle,
    /// One card revealed, waiting for the second.
    AwaitingSecond,
    /// Two cards revealed; the outcome's effect is pending.
    Resolving(MatchOutcome),
    /// Effect applied, selections cleared; the gate is still closed.
    Settling,
    /// The level ended.
    Finished(LevelStatus),
}

#[derive(Clone, Copy, Debug)]
enum Stage {
    Effect {
        outcome: MatchOutcome,
        remaining: Duration,
    },
    Settle {
        remaining: Duration,
    },
}

/// Drives one level: accepts offers, evaluates pairs, and applies
/// outcomes after their delays.
///
/// The controller owns the table, the selections and the level progress;
/// nothing else mutates them. The host holds the controller, calls
/// [`offer`](Self::offer) on clicks and [`advance`](Self::advance) once
/// per frame, and drains [`GameEvent`]s to update the UI.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use flip_pair::cards::CardIdentity;
/// use flip_pair::core::{CardId, GameConfig};
/// use flip_pair::round::{GameEvent, RoundController};
/// use flip_pair::table::Table;
///
/// let config = GameConfig::new();
/// let table = Table::deal(
///     vec![CardIdentity::face(1), CardIdentity::face(1)],
///     config.flip_duration,
///     None,
/// );
/// let mut game = RoundController::new(table, 1, &config);
///
/// game.offer(CardId::new(0));
/// game.offer(CardId::new(1));
/// game.advance(Duration::from_secs(2));
///
/// let events = game.drain_events();
/// assert!(events.contains(&GameEvent::LevelComplete { confirmed_pairs: 1 }));
/// ```
#[derive(Clone, Debug)]
pub struct RoundController {
    table: Table,
    tracker: SelectionTracker,
    outcome: LevelOutcome,
    timing: RoundTiming,
    timer: LevelTimer,
    stage: Option<Stage>,
    status: LevelStatus,
    events: Vec<GameEvent>,
    history: Vector<RoundRecord>,
}

impl RoundController {
    /// Start a level on an already dealt table.
    #[must_use]
    pub fn new(table: Table, required_pairs: u32, config: &GameConfig) -> Self {
        Self {
            table,
            tracker: SelectionTracker::new(),
            outcome: LevelOutcome::new(required_pairs),
            timing: config.timing,
            timer: LevelTimer::new(config.timer_mode),
            stage: None,
            status: LevelStatus::Playing,
            events: Vec::new(),
            history: Vector::new(),
        }
    }

    /// Validate a level, deal it, and start it.
    ///
    /// The deal is shuffled when the config carries a shuffle seed.
    pub fn for_level(level: &LevelData, config: &GameConfig) -> Result<Self> {
        if config.flip_duration.is_zero() {
            return Err(LevelError::ZeroFlipDuration);
        }
        level.validate()?;

        let mut rng = config.shuffle_seed.map(GameRng::new);
        let table = Table::deal(level.identities(), config.flip_duration, rng.as_mut());
        info!(
            "Starting level '{}': {} cards, {} pairs required",
            level.level_name,
            table.len(),
            level.match_pair_count
        );

        Ok(Self::new(table, level.match_pair_count, config))
    }

    // === Input ===

    /// Offer a clicked card.
    ///
    /// Accepted offers reveal the card; the second accepted offer closes
    /// the gate and evaluates the pair immediately. Everything else is
    /// ignored without any state change.
    pub fn offer(&mut self, card: CardId) -> Offer {
        let offer = self.try_offer(card);

        match offer {
            Offer::First => debug!("First card selected: {}", card),
            Offer::Second => debug!("Second card selected: {}", card),
            Offer::Ignored(reason) => debug!("Ignored offer of {}: {:?}", card, reason),
        }

        offer
    }

    fn try_offer(&mut self, card: CardId) -> Offer {
        if self.status.is_terminal() {
            return Offer::Ignored(IgnoreReason::LevelOver);
        }

        let instance = match self.table.get(card) {
            None => return Offer::Ignored(IgnoreReason::UnknownCard),
            Some(instance) if !instance.in_play() => {
                return Offer::Ignored(IgnoreReason::NotInPlay)
            }
            Some(instance) => instance,
        };

        if self.tracker.is_gate_open()
            && instance.flip.is_rotating()
            && self.tracker.first().map(|s| s.card) != Some(card)
        {
            return Offer::Ignored(IgnoreReason::Rotating);
        }
        let identity = instance.identity().clone();

        let offer = self.tracker.offer(card, &identity);
        match offer {
            Offer::First => {
                self.table.reveal(card);
                self.events.push(GameEvent::CardRevealed(card));
            }
            Offer::Second => {
                self.table.reveal(card);
                self.events.push(GameEvent::CardRevealed(card));
                self.begin_resolution();
            }
            Offer::Ignored(_) => {}
        }
        offer
    }

    fn begin_resolution(&mut self) {
        let Some((first, second)) = self.tracker.pair() else {
            return;
        };

        let outcome = evaluate(&first.identity, &second.identity);
        let (first, second) = (first.card, second.card);

        info!("{} and {} evaluated: {:?}", first, second, outcome);

        self.history.push_back(RoundRecord {
            round: self.history.len() as u32 + 1,
            first,
            second,
            outcome,
        });
        self.events.push(GameEvent::PairEvaluated {
            first,
            second,
            outcome,
        });

        let remaining = match outcome {
            MatchOutcome::Lose => self.timing.blast,
            MatchOutcome::Match => self.timing.destroy,
            MatchOutcome::Mismatch => self.timing.flip_back,
        };
        self.stage = Some(Stage::Effect { outcome, remaining });
    }

    // === Ticking ===

    /// Advance one frame.
    ///
    /// Drives flip animations, the level clock, and any pending round
    /// stage. Countdown expiry fails the level after pending stages have
    /// been given this tick's time.
    pub fn advance(&mut self, dt: Duration) {
        self.table.advance(dt);

        if self.status.is_terminal() {
            return;
        }
        self.timer.advance(dt);

        let mut left = dt;
        while let Some(stage) = self.stage {
            match stage {
                Stage::Effect { outcome, remaining } => {
                    if left < remaining {
                        self.stage = Some(Stage::Effect {
                            outcome,
                            remaining: remaining - left,
                        });
                        break;
                    }
                    left -= remaining;
                    self.apply(outcome);
                }
                Stage::Settle { remaining } => {
                    if left < remaining {
                        self.stage = Some(Stage::Settle {
                            remaining: remaining - left,
                        });
                        break;
                    }
                    left -= remaining;
                    self.stage = None;
                    self.tracker.open_gate();
                    self.events.push(GameEvent::InputReopened);
                }
            }
        }

        if !self.status.is_terminal() && self.timer.is_expired() {
            self.fail(FailReason::TimeUp);
        }
    }

    fn apply(&mut self, outcome: MatchOutcome) {
        let pair = self.tracker.pair().map(|(a, b)| (a.card, b.card));
        self.tracker.clear();
        self.stage = None;

        let Some((first, second)) = pair else {
            return;
        };

        match outcome {
            MatchOutcome::Lose => self.fail(FailReason::Bomb),
            MatchOutcome::Match => {
                self.table.remove(first);
                self.table.remove(second);
                self.events.push(GameEvent::CardsRemoved(first, second));

                if self.outcome.record_match() {
                    self.complete();
                } else {
                    self.settle();
                }
            }
            MatchOutcome::Mismatch => {
                debug!("Not a match, flipping {} and {} back", first, second);
                self.table.hide(first);
                self.table.hide(second);
                self.events.push(GameEvent::CardsHidden(first, second));
                self.settle();
            }
        }
    }

    fn settle(&mut self) {
        self.stage = Some(Stage::Settle {
            remaining: self.timing.settle,
        });
    }

    fn complete(&mut self) {
        let confirmed_pairs = self.outcome.confirmed_pairs();
        info!("Level complete: all {} pairs matched", confirmed_pairs);

        self.status = LevelStatus::Complete;
        self.finish();
        self.events.push(GameEvent::LevelComplete { confirmed_pairs });
    }

    fn fail(&mut self, reason: FailReason) {
        info!("Level failed: {:?}", reason);

        self.status = LevelStatus::Failed(reason);
        self.finish();
        self.events.push(GameEvent::LevelFailed(reason));
    }

    fn finish(&mut self) {
        self.stage = None;
        self.tracker.clear();
        self.tracker.close_gate();
        self.timer.stop();
    }

    // === Queries ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        if self.status.is_terminal() {
            return RoundPhase::Finished(self.status);
        }
        match self.stage {
            Some(Stage::Effect { outcome, .. }) => RoundPhase::Resolving(outcome),
            Some(Stage::Settle { .. }) => RoundPhase::Settling,
            None if self.tracker.len() == 1 => RoundPhase::AwaitingSecond,
            None => RoundPhase::Idle,
        }
    }

    /// Level status.
    #[must_use]
    pub fn status(&self) -> LevelStatus {
        self.status
    }

    /// Is the input gate open?
    #[must_use]
    pub fn is_input_open(&self) -> bool {
        self.tracker.is_gate_open()
    }

    /// Matches confirmed so far.
    #[must_use]
    pub fn confirmed_pairs(&self) -> u32 {
        self.outcome.confirmed_pairs()
    }

    /// Matches needed to complete the level.
    #[must_use]
    pub fn required_pairs(&self) -> u32 {
        self.outcome.required_pairs()
    }

    /// The dealt cards.
    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The current round's selections.
    #[must_use]
    pub fn selections(&self) -> &SelectionTracker {
        &self.tracker
    }

    /// The level clock.
    #[must_use]
    pub fn timer(&self) -> &LevelTimer {
        &self.timer
    }

    /// Every evaluated pair so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        &self.history
    }

    /// Events queued since the last drain.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all queued events.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
