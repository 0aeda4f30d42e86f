//! Deferred tasks on a virtual clock.
//!
//! The controller never sleeps. When a turn needs to end later it schedules
//! a task here, and the host moves the clock forward with
//! [`Scheduler::pop_due`] (usually through
//! [`GameController::advance_time`](crate::game::GameController::advance_time)).
//!
//! Every task is stamped with the [`SessionToken`] of the game that created
//! it. Starting a new game cancels the old session's tasks, and the
//! controller re-checks the token when a task fires, so a late resolution
//! can never touch a fresh deck.
//!
//! ```
//! use std::time::Duration;
//! use magic_match::core::{Scheduler, SessionToken, TaskKind};
//!
//! let mut scheduler = Scheduler::new();
//! let session = SessionToken::new(1);
//! scheduler.schedule(Duration::from_millis(1000), session, TaskKind::EndTurn);
//!
//! assert!(scheduler.pop_due(Duration::from_millis(999)).is_none());
//! assert!(scheduler.pop_due(Duration::from_millis(1000)).is_some());
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Identifies one dealt game. Bumped by every new game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionToken(pub u64);

impl SessionToken {
    /// Create a session token.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The token for the following game.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// Identifies one scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u64);

/// What a task does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    /// Clear both picks, count the turn and unlock input.
    EndTurn,
}

/// A task waiting for the clock to reach `due`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledTask {
    pub id: TaskId,
    /// Clock reading at which the task fires.
    pub due: Duration,
    /// Game that scheduled the task.
    pub session: SessionToken,
    pub kind: TaskKind,
}

/// Virtual-clock task queue.
///
/// Tasks fire in `due` order; ties fire in scheduling order.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: Duration,
    next_id: u64,
    pending: Vec<ScheduledTask>,
}

impl Scheduler {
    /// Create a scheduler with the clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock reading.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of tasks waiting to fire.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Schedule a task `delay` after the current clock reading.
    ///
    /// The due time saturates at `Duration::MAX`.
    pub fn schedule(&mut self, delay: Duration, session: SessionToken, kind: TaskKind) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.push(ScheduledTask {
            id,
            due: self.now.saturating_add(delay),
            session,
            kind,
        });
        id
    }

    /// Drop a single task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|task| task.id != id);
        self.pending.len() != before
    }

    /// Drop every task scheduled by sessions other than `keep`.
    ///
    /// Returns the number of tasks dropped.
    pub fn cancel_stale(&mut self, keep: SessionToken) -> usize {
        let before = self.pending.len();
        self.pending.retain(|task| task.session == keep);
        before - self.pending.len()
    }

    /// Time left until the next task fires, if any.
    #[must_use]
    pub fn until_next(&self) -> Option<Duration> {
        self.pending
            .iter()
            .map(|task| task.due.saturating_sub(self.now))
            .min()
    }

    /// Take the earliest task due at or before `until`.
    ///
    /// The clock moves to that task's due time. When nothing is due the
    /// clock moves to `until` and `None` is returned. The clock never runs
    /// backwards.
    pub fn pop_due(&mut self, until: Duration) -> Option<ScheduledTask> {
        let next = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due <= until)
            .min_by_key(|(_, task)| (task.due, task.id))
            .map(|(pos, _)| pos);

        match next {
            Some(pos) => {
                let task = self.pending.remove(pos);
                self.now = self.now.max(task.due);
                Some(task)
            }
            None => {
                self.now = self.now.max(until);
                None
            }
        }
    }
}
