//! Wall-clock event loop around a `GameController`.
//!
//! The driver owns the controller and processes one event at a time:
//! an [`Intent`] from the render layer, or the deadline of a pending turn
//! end. After every event it publishes a fresh [`BoardView`].
//!
//! The controller's virtual clock is kept in step with tokio time, so the
//! resolution delay is measured in real milliseconds here while tests can
//! still drive the controller directly without sleeping.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info};

use crate::cards::CardKey;
use crate::error::{MatchError, Result};
use crate::game::{GameController, Intent};
use crate::view::BoardView;

/// Intents buffered before senders wait.
const INTENT_BUFFER: usize = 32;

/// Event loop that owns the game.
pub struct GameDriver {
    controller: GameController,
    intents: mpsc::Receiver<Intent>,
    board: watch::Sender<BoardView>,
}

/// Render-side handle: send intents, watch the board.
#[derive(Clone, Debug)]
pub struct DriverHandle {
    intents: mpsc::Sender<Intent>,
    board: watch::Receiver<BoardView>,
}

impl GameDriver {
    /// Wrap a controller. The driver does nothing until [`run`](Self::run).
    #[must_use]
    pub fn new(controller: GameController) -> (Self, DriverHandle) {
        let (intent_tx, intent_rx) = mpsc::channel(INTENT_BUFFER);
        let (board_tx, board_rx) = watch::channel(controller.board());

        let driver = Self {
            controller,
            intents: intent_rx,
            board: board_tx,
        };
        let handle = DriverHandle {
            intents: intent_tx,
            board: board_rx,
        };
        (driver, handle)
    }

    /// Process events until every handle is dropped.
    ///
    /// Returns the controller so its final state can be inspected.
    pub async fn run(mut self) -> GameController {
        info!(session = %self.controller.session(), "game driver started");
        let mut last = Instant::now();

        loop {
            let deadline = self.controller.until_next_task().and_then(|left| deadline_after(last, left));

            tokio::select! {
                intent = self.intents.recv() => {
                    last = self.sync_clock(last);
                    let Some(intent) = intent else {
                        break;
                    };
                    let outcome = self.controller.dispatch(intent);
                    debug!(?intent, ?outcome, "handled intent");
                }
                _ = sleep_until(deadline.unwrap_or(last)), if deadline.is_some() => {
                    last = self.sync_clock(last);
                }
            }

            self.board.send_replace(self.controller.board());
        }

        info!(turns = self.controller.turns(), "game driver stopped");
        self.controller
    }

    /// Advance the controller clock by the wall time since `last`.
    fn sync_clock(&mut self, last: Instant) -> Instant {
        let now = Instant::now();
        self.controller.advance_time(now.saturating_duration_since(last));
        now
    }
}

/// Wall-clock deadline `left` after `last`. `None` when it is out of range,
/// in which case the turn end only fires on a later event.
fn deadline_after(last: Instant, left: Duration) -> Option<Instant> {
    last.checked_add(left)
}

impl DriverHandle {
    /// Send an intent to the driver.
    pub async fn send(&self, intent: Intent) -> Result<()> {
        self.intents
            .send(intent)
            .await
            .map_err(|_| MatchError::DriverStopped)
    }

    /// Click a card.
    pub async fn select(&self, key: CardKey) -> Result<()> {
        self.send(Intent::Select(key)).await
    }

    /// Press "New Game".
    pub async fn new_game(&self) -> Result<()> {
        self.send(Intent::NewGame).await
    }

    /// The latest published board.
    #[must_use]
    pub fn board(&self) -> BoardView {
        self.board.borrow().clone()
    }

    /// Wait until the published board satisfies `predicate`.
    pub async fn wait_for(&mut self, predicate: impl FnMut(&BoardView) -> bool) -> Result<BoardView> {
        self.board
            .wait_for(predicate)
            .await
            .map(|board| board.clone())
            .map_err(|_| MatchError::DriverStopped)
    }
}
