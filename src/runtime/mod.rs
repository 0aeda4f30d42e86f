//! Async hosting for a match.
//!
//! [`GameDriver`] runs the controller on a tokio task and turns the
//! resolution delay into a real timer. The game stays single-threaded:
//! intents and timer deadlines are handled strictly one after another.
//!
//! ```no_run
//! use magic_match::core::MatchConfig;
//! use magic_match::game::GameController;
//! use magic_match::runtime::GameDriver;
//!
//! # async fn demo() -> magic_match::Result<()> {
//! let controller = GameController::new(MatchConfig::default())?;
//! let (driver, handle) = GameDriver::new(controller);
//! tokio::spawn(driver.run());
//!
//! let first = handle.board().cards[0].key();
//! handle.select(first).await?;
//! # Ok(())
//! # }
//! ```

mod driver;

pub use driver::{DriverHandle, GameDriver};
