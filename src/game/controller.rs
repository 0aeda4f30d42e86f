//! The game controller: sole owner of match state.
//!
//! `GameController` holds the deck, the turn phase, the turn counter and
//! the deferred-task queue. Every change goes through one of four entry
//! points, each processed to completion before the next:
//!
//! - [`set_up_game`](GameController::set_up_game): deal a new deck
//! - [`handle_choice`](GameController::handle_choice): record a pick
//! - [`advance_time`](GameController::advance_time): let scheduled turn ends fire
//! - [`dispatch`](GameController::dispatch): route an [`Intent`] to the above
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use magic_match::core::MatchConfig;
//! use magic_match::game::{ChoiceOutcome, GameController};
//!
//! let mut game = GameController::new(MatchConfig::new().with_seed(42)).unwrap();
//! let keys: Vec<_> = game.deck().iter().map(|card| card.key).collect();
//!
//! assert_eq!(game.handle_choice(keys[0]), ChoiceOutcome::First);
//! assert!(matches!(game.handle_choice(keys[1]), ChoiceOutcome::Second { .. }));
//! assert!(game.is_locked());
//!
//! game.advance_time(Duration::from_millis(1000));
//! assert_eq!(game.turns(), 1);
//! assert!(!game.is_locked());
//! ```

use std::time::Duration;

use im::Vector;
use tracing::{debug, trace};

use super::phase::{ChoiceOutcome, IgnoredChoice, Intent, TurnPhase, TurnRecord};
use crate::cards::{CardKey, Deck, DeckCard, KeyAllocator};
use crate::core::{GameRng, GameRngState, MatchConfig, ScheduledTask, Scheduler, SessionToken, TaskKind};
use crate::error::Result;
use crate::view::BoardView;

/// Owns and advances the state of one table.
#[derive(Clone, Debug)]
pub struct GameController {
    config: MatchConfig,
    rng: GameRng,
    keys: KeyAllocator,
    scheduler: Scheduler,
    session: SessionToken,
    deck: Deck,
    phase: TurnPhase,
    turns: u32,
    history: Vector<TurnRecord>,
}

impl GameController {
    /// Validate the configuration and deal the first game.
    pub fn new(config: MatchConfig) -> Result<Self> {
        config.validate()?;

        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut controller = Self {
            config,
            rng,
            keys: KeyAllocator::new(),
            scheduler: Scheduler::new(),
            session: SessionToken::default(),
            deck: Deck::default(),
            phase: TurnPhase::Idle,
            turns: 0,
            history: Vector::new(),
        };
        controller.set_up_game();
        Ok(controller)
    }

    // === Transitions ===

    /// Start a new game.
    ///
    /// Deals a fresh shuffled deck, clears both selection slots and resets
    /// the turn counter. Safe at any point, including mid-resolution: the
    /// previous game's pending turn end is cancelled, and anything that
    /// slips through is rejected by its stale session token.
    pub fn set_up_game(&mut self) {
        self.session = self.session.next();
        let cancelled = self.scheduler.cancel_stale(self.session);

        self.deck = Deck::deal(&self.config.catalog, &mut self.rng, &mut self.keys);
        self.phase = TurnPhase::Idle;
        self.turns = 0;
        self.history = Vector::new();

        debug!(
            session = %self.session,
            cards = self.deck.len(),
            seed = self.rng.seed(),
            cancelled,
            "dealt new deck"
        );
    }

    /// Record a pick.
    ///
    /// Fills the first slot if it is empty, otherwise the second. Filling
    /// the second slot compares the pair, locks input and schedules the end
    /// of the turn. Picks while locked, repeats of the first pick, matched
    /// cards and cards from another deck are ignored.
    pub fn handle_choice(&mut self, key: CardKey) -> ChoiceOutcome {
        if let Some(reason) = self.reject_reason(key) {
            trace!(card = %key, ?reason, "ignored pick");
            return ChoiceOutcome::Ignored(reason);
        }

        match self.phase {
            TurnPhase::Idle => {
                self.phase = TurnPhase::OneSelected { first: key };
                trace!(card = %key, "first pick");
                ChoiceOutcome::First
            }
            TurnPhase::OneSelected { first } => self.resolve(first, key),
            TurnPhase::Resolving { .. } => ChoiceOutcome::Ignored(IgnoredChoice::Locked),
        }
    }

    /// End the pending turn now.
    ///
    /// Normally run by the scheduled task once the resolution delay has
    /// elapsed. Clears both slots, counts the turn and releases the input
    /// lock. Returns false when no resolution is pending.
    pub fn reset_turn(&mut self) -> bool {
        let TurnPhase::Resolving {
            first,
            second,
            matched,
            task,
        } = self.phase
        else {
            return false;
        };

        self.scheduler.cancel(task);
        self.turns += 1;
        self.history.push_back(TurnRecord {
            turn: self.turns,
            first,
            second,
            matched,
        });
        self.phase = TurnPhase::Idle;

        debug!(session = %self.session, turns = self.turns, matched, "turn complete");
        true
    }

    /// Move the clock forward, firing any turn end that falls due.
    ///
    /// Returns how many scheduled tasks took effect. The clock saturates
    /// at `Duration::MAX`.
    pub fn advance_time(&mut self, elapsed: Duration) -> usize {
        let until = self.scheduler.now().saturating_add(elapsed);
        let mut applied = 0;
        while let Some(task) = self.scheduler.pop_due(until) {
            if self.run_task(&task) {
                applied += 1;
            }
        }
        applied
    }

    /// Apply an intent from the render layer.
    ///
    /// Returns the pick outcome for `Select`, `None` for `NewGame`.
    pub fn dispatch(&mut self, intent: Intent) -> Option<ChoiceOutcome> {
        match intent {
            Intent::Select(key) => Some(self.handle_choice(key)),
            Intent::NewGame => {
                self.set_up_game();
                None
            }
        }
    }

    fn reject_reason(&self, key: CardKey) -> Option<IgnoredChoice> {
        if self.phase.is_locked() {
            return Some(IgnoredChoice::Locked);
        }
        let Some(card) = self.deck.get(key) else {
            return Some(IgnoredChoice::UnknownCard);
        };
        if card.matched {
            return Some(IgnoredChoice::AlreadyMatched);
        }
        if self.phase.choice1() == Some(key) {
            return Some(IgnoredChoice::AlreadySelected);
        }
        None
    }

    fn resolve(&mut self, first: CardKey, second: CardKey) -> ChoiceOutcome {
        let matched = match (self.deck.get(first), self.deck.get(second)) {
            (Some(a), Some(b)) => a.pairs_with(b),
            _ => false,
        };
        if matched {
            self.deck.mark_matched(&[first, second]);
        }

        let task = self
            .scheduler
            .schedule(self.config.resolution_delay, self.session, TaskKind::EndTurn);
        self.phase = TurnPhase::Resolving {
            first,
            second,
            matched,
            task,
        };

        debug!(
            session = %self.session,
            first = %first,
            second = %second,
            matched,
            "resolving turn"
        );
        ChoiceOutcome::Second { matched }
    }

    fn run_task(&mut self, task: &ScheduledTask) -> bool {
        if task.session != self.session {
            debug!(task_session = %task.session, session = %self.session, "suppressed stale task");
            return false;
        }

        match (task.kind, self.phase) {
            (TaskKind::EndTurn, TurnPhase::Resolving { task: pending, .. }) if pending == task.id => {
                self.reset_turn()
            }
            _ => {
                debug!(task = ?task.id, "suppressed orphaned task");
                false
            }
        }
    }

    // === Queries ===

    /// The configuration this controller was built with.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Cards on the table, in order.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Look up a card in the current deck.
    #[must_use]
    pub fn card(&self, key: CardKey) -> Option<&DeckCard> {
        self.deck.get(key)
    }

    /// Completed turns this game.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Current turn phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// First selection slot.
    #[must_use]
    pub fn choice1(&self) -> Option<CardKey> {
        self.phase.choice1()
    }

    /// Second selection slot.
    #[must_use]
    pub fn choice2(&self) -> Option<CardKey> {
        self.phase.choice2()
    }

    /// Is input locked while a resolution is pending?
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.phase.is_locked()
    }

    /// Should this card show its front?
    ///
    /// True for either pick and for matched cards.
    #[must_use]
    pub fn is_flipped(&self, key: CardKey) -> bool {
        self.phase.is_selected(key) || self.deck.get(key).is_some_and(|card| card.matched)
    }

    /// Token of the current game.
    #[must_use]
    pub fn session(&self) -> SessionToken {
        self.session
    }

    /// Turns completed this game, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Current reading of the controller's clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Time left before the pending turn ends, if one is pending.
    #[must_use]
    pub fn until_next_task(&self) -> Option<Duration> {
        self.scheduler.until_next()
    }

    /// Seed of the deal RNG, for replaying a match.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Position of the dealing RNG. The next deal is fixed by this state.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Snapshot for the render layer.
    #[must_use]
    pub fn board(&self) -> BoardView {
        BoardView::capture(self)
    }
}
