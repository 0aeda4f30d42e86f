//! End-to-end game flow tests.
//!
//! These drive a `GameController` through whole turns and games the way
//! a render layer would: read the board, click, let time pass.

use std::time::Duration;

use magic_match::cards::{CardKey, CardTemplate, Catalog};
use magic_match::core::MatchConfig;
use magic_match::game::{ChoiceOutcome, GameController, IgnoredChoice, Intent, TurnPhase};
use magic_match::view::{BoardView, CardFace};

const DELAY: Duration = Duration::from_millis(1000);

fn new_game(seed: u64) -> GameController {
    GameController::new(MatchConfig::new().with_seed(seed)).unwrap()
}

/// Keys of two cards sharing an image.
fn find_pair(game: &GameController) -> (CardKey, CardKey) {
    let cards: Vec<_> = game.deck().iter().filter(|c| !c.matched).collect();
    for (i, a) in cards.iter().enumerate() {
        if let Some(b) = cards[i + 1..].iter().find(|b| b.image == a.image) {
            return (a.key, b.key);
        }
    }
    panic!("no unmatched pair left");
}

/// Keys of two cards with different images.
fn find_mismatch(game: &GameController) -> (CardKey, CardKey) {
    let cards: Vec<_> = game.deck().iter().filter(|c| !c.matched).collect();
    let a = cards[0];
    let b = cards.iter().find(|b| b.image != a.image).unwrap();
    (a.key, b.key)
}

/// Click through the board, the way a player would.
fn click(game: &mut GameController, key: CardKey) -> Option<ChoiceOutcome> {
    let intent = game.board().click(key)?;
    game.dispatch(intent)
}

// =============================================================================
// Deal
// =============================================================================

/// A new game deals two cards of each template, twelve in total.
#[test]
fn test_deck_composition() {
    for seed in 0..20 {
        let game = new_game(seed);
        let deck = game.deck();

        assert_eq!(deck.len(), 12);
        for template in Catalog::standard().iter() {
            assert_eq!(deck.count_of(&template.image), 2, "seed {seed}");
        }
    }
}

/// Different seeds give different layouts.
#[test]
fn test_layouts_vary_by_seed() {
    let layout = |seed| -> Vec<String> {
        new_game(seed).deck().iter().map(|c| c.image.clone()).collect()
    };

    assert_ne!(layout(1), layout(2));
}

/// A custom catalog deals two cards per template as well.
#[test]
fn test_custom_catalog() {
    let catalog = Catalog::new(vec![
        CardTemplate::new("moon"),
        CardTemplate::new("star"),
        CardTemplate::new("sun"),
    ])
    .unwrap();
    let game = GameController::new(MatchConfig::new().with_seed(3).with_catalog(catalog)).unwrap();

    assert_eq!(game.deck().len(), 6);
    assert_eq!(game.deck().count_of("moon"), 2);
    assert_eq!(game.deck().total_pairs(), 3);
}

// =============================================================================
// Turns
// =============================================================================

/// Matching pair: both matched after the delay, one turn, slots cleared.
#[test]
fn test_matching_turn() {
    let mut game = new_game(42);
    let (a, b) = find_pair(&game);

    assert_eq!(click(&mut game, a), Some(ChoiceOutcome::First));
    assert_eq!(click(&mut game, b), Some(ChoiceOutcome::Second { matched: true }));

    game.advance_time(DELAY);

    assert!(game.card(a).unwrap().matched);
    assert!(game.card(b).unwrap().matched);
    assert_eq!(game.turns(), 1);
    assert_eq!(game.choice1(), None);
    assert_eq!(game.choice2(), None);

    // Matched cards stay face up
    let board = game.board();
    assert_eq!(board.card(a).unwrap().face(), CardFace::Front);
    assert_eq!(board.card(b).unwrap().face(), CardFace::Front);
}

/// Mismatch: nothing matched, both flip back, one turn.
#[test]
fn test_mismatching_turn() {
    let mut game = new_game(42);
    let (a, b) = find_mismatch(&game);

    click(&mut game, a);
    click(&mut game, b);

    let during = game.board();
    assert_eq!(during.card(a).unwrap().face(), CardFace::Front);
    assert_eq!(during.card(b).unwrap().face(), CardFace::Front);

    game.advance_time(DELAY);

    let after = game.board();
    assert!(!game.card(a).unwrap().matched);
    assert!(!game.card(b).unwrap().matched);
    assert_eq!(after.card(a).unwrap().face(), CardFace::Back);
    assert_eq!(after.card(b).unwrap().face(), CardFace::Back);
    assert_eq!(after.turns, 1);
    assert_eq!(game.phase(), TurnPhase::Idle);
}

/// Clicks on the board are dropped while locked, on picked cards and on
/// matched cards.
#[test]
fn test_board_drops_clicks() {
    let mut game = new_game(7);
    let (a, b) = find_pair(&game);

    click(&mut game, a);
    assert_eq!(click(&mut game, a), None); // face up

    click(&mut game, b);
    let (c, _) = find_mismatch(&game);
    assert_eq!(click(&mut game, c), None); // disabled
    assert_eq!(game.choice1(), Some(a));
    assert_eq!(game.choice2(), Some(b));

    game.advance_time(DELAY);
    assert_eq!(click(&mut game, a), None); // matched
    assert_eq!(game.phase(), TurnPhase::Idle);
}

/// The controller also guards itself when the board is bypassed.
#[test]
fn test_controller_drops_bad_intents() {
    let mut game = new_game(7);
    let (a, b) = find_mismatch(&game);

    game.dispatch(Intent::Select(a));
    game.dispatch(Intent::Select(b));
    assert_eq!(
        game.dispatch(Intent::Select(a)),
        Some(ChoiceOutcome::Ignored(IgnoredChoice::Locked))
    );
    assert_eq!(game.turns(), 0);
}

/// Clearing the whole board takes at least one turn per pair.
#[test]
fn test_play_to_completion() {
    let mut game = new_game(11);

    // A few misses first
    for _ in 0..3 {
        let (a, b) = find_mismatch(&game);
        click(&mut game, a);
        click(&mut game, b);
        game.advance_time(DELAY);
    }

    while !game.deck().all_matched() {
        let (a, b) = find_pair(&game);
        click(&mut game, a);
        click(&mut game, b);
        game.advance_time(DELAY);
    }

    assert_eq!(game.turns(), 9);
    assert_eq!(game.deck().matched_pairs(), 6);
    assert_eq!(game.history().len(), 9);
    assert_eq!(game.history().iter().filter(|t| t.matched).count(), 6);

    let board = game.board();
    assert_eq!(board.face_up().count(), 12);
    assert!(board.cards.iter().all(|view| view.click().is_none()));
}

/// The resolution delay comes from configuration.
#[test]
fn test_configured_delay() {
    let config = MatchConfig::new()
        .with_seed(5)
        .with_resolution_delay(Duration::from_millis(250));
    let mut game = GameController::new(config).unwrap();
    let (a, b) = find_mismatch(&game);

    click(&mut game, a);
    click(&mut game, b);

    game.advance_time(Duration::from_millis(249));
    assert!(game.is_locked());
    game.advance_time(Duration::from_millis(1));
    assert!(!game.is_locked());
    assert_eq!(game.turns(), 1);
}

// =============================================================================
// New game
// =============================================================================

/// New game while a mismatch is resolving: fresh deck, counter 0, and the
/// old timer does nothing.
#[test]
fn test_new_game_during_mismatch_delay() {
    let mut game = new_game(42);

    // Finish one matching turn so the old deck has matched cards
    let (p, q) = find_pair(&game);
    click(&mut game, p);
    click(&mut game, q);
    game.advance_time(DELAY);

    let (a, b) = find_mismatch(&game);
    click(&mut game, a);
    click(&mut game, b);
    game.advance_time(DELAY / 2);

    game.dispatch(Intent::NewGame);
    let fresh: BoardView = game.board();

    assert_eq!(fresh.cards.len(), 12);
    assert_eq!(fresh.turns, 0);
    assert!(!fresh.locked);
    assert!(fresh.cards.iter().all(|view| !view.card.matched));
    assert!(fresh.card(a).is_none());

    // Pick one card in the new game, then let the old deadline pass
    let first = fresh.cards[0].key();
    click(&mut game, first);
    game.advance_time(DELAY * 2);

    assert_eq!(game.turns(), 0);
    assert_eq!(game.choice1(), Some(first));
    assert!(!game.is_locked());
}

/// Picks from a discarded deck never reach the new one.
#[test]
fn test_old_keys_rejected_after_new_game() {
    let mut game = new_game(9);
    let old: Vec<CardKey> = game.deck().iter().map(|c| c.key).collect();

    game.set_up_game();

    for key in old {
        assert_eq!(
            game.handle_choice(key),
            ChoiceOutcome::Ignored(IgnoredChoice::UnknownCard)
        );
    }
    assert_eq!(game.phase(), TurnPhase::Idle);
}

/// Games in one controller continue the same seeded stream.
#[test]
fn test_successive_games_reproducible() {
    let mut a = new_game(77);
    let mut b = new_game(77);

    for _ in 0..3 {
        a.set_up_game();
        b.set_up_game();
        let left: Vec<_> = a.deck().iter().map(|c| c.image.clone()).collect();
        let right: Vec<_> = b.deck().iter().map(|c| c.image.clone()).collect();
        assert_eq!(left, right);
    }
}
