//! Driver tests on a paused tokio clock.
//!
//! Time only moves when every task is idle, so resolution delays elapse
//! instantly but in the right order.

use std::time::Duration;

use magic_match::cards::CardKey;
use magic_match::core::MatchConfig;
use magic_match::error::MatchError;
use magic_match::game::GameController;
use magic_match::runtime::{DriverHandle, GameDriver};
use magic_match::view::BoardView;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn start(seed: u64) -> (tokio::task::JoinHandle<GameController>, DriverHandle) {
    init_tracing();
    let controller = GameController::new(MatchConfig::new().with_seed(seed)).unwrap();
    let (driver, handle) = GameDriver::new(controller);
    (tokio::spawn(driver.run()), handle)
}

fn mismatch(board: &BoardView) -> (CardKey, CardKey) {
    let a = &board.cards[0];
    let b = board.cards.iter().find(|v| v.card.image != a.card.image).unwrap();
    (a.key(), b.key())
}

fn pair(board: &BoardView) -> (CardKey, CardKey) {
    let a = &board.cards[0];
    let b = board.cards[1..].iter().find(|v| v.card.image == a.card.image).unwrap();
    (a.key(), b.key())
}

#[tokio::test(start_paused = true)]
async fn test_initial_board_published() {
    let (task, handle) = start(1);

    let board = handle.board();
    assert_eq!(board.cards.len(), 12);
    assert_eq!(board.turns, 0);

    drop(handle);
    let controller = task.await.unwrap();
    assert_eq!(controller.turns(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_mismatch_resolves_after_delay() {
    let (task, mut handle) = start(42);
    let (a, b) = mismatch(&handle.board());
    let started = tokio::time::Instant::now();

    handle.select(a).await.unwrap();
    handle.select(b).await.unwrap();

    let locked = handle.wait_for(|board| board.locked).await.unwrap();
    assert_eq!(locked.face_up().count(), 2);
    assert_eq!(locked.turns, 0);

    let done = handle.wait_for(|board| board.turns == 1).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(1000));
    assert!(!done.locked);
    assert_eq!(done.face_up().count(), 0);

    drop(handle);
    task.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_match_stays_face_up() {
    let (task, mut handle) = start(42);
    let (a, b) = pair(&handle.board());

    handle.select(a).await.unwrap();
    handle.select(b).await.unwrap();

    let done = handle.wait_for(|board| board.turns == 1).await.unwrap();
    assert_eq!(done.matched_pairs, 1);
    assert!(done.card(a).unwrap().flipped);
    assert!(done.card(b).unwrap().flipped);

    drop(handle);
    task.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_new_game_cancels_pending_resolution() {
    let (task, mut handle) = start(42);
    let old = handle.board();
    let (a, b) = mismatch(&old);

    handle.select(a).await.unwrap();
    handle.select(b).await.unwrap();
    handle.wait_for(|board| board.locked).await.unwrap();

    handle.new_game().await.unwrap();
    let fresh = handle
        .wait_for(|board| board.session != old.session)
        .await
        .unwrap();
    assert_eq!(fresh.turns, 0);
    assert!(!fresh.locked);
    assert!(fresh.cards.iter().all(|v| !v.card.matched));

    // Let the old deadline pass
    tokio::time::sleep(Duration::from_secs(3)).await;

    let later = handle.board();
    assert_eq!(later.turns, 0);
    assert_eq!(later.session, fresh.session);
    assert_eq!(later.face_up().count(), 0);

    drop(handle);
    let controller = task.await.unwrap();
    assert_eq!(controller.turns(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_stopped_driver_reports_error() {
    let init = GameController::new(MatchConfig::new().with_seed(1)).unwrap();
    let (driver, handle) = GameDriver::new(init);
    drop(driver);

    assert_eq!(handle.new_game().await, Err(MatchError::DriverStopped));
}
