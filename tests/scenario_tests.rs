//! End-to-end rule scenarios through the public API.

use animal_game::{
    get_state, make_move, new_game, Color, Game, GameBuilder, GameState, MoveError, Square,
    Variant,
};

fn sq(label: &str) -> Square {
    label.parse().unwrap()
}

// =============================================================================
// Opening and turn order
// =============================================================================

/// Marmoset slides three squares diagonally along an empty path.
#[test]
fn test_marmoset_opening_slide() {
    let mut game = new_game();

    assert!(make_move(&mut game, "b1", "e4"));
    assert_eq!(game.turn(), Color::Amethyst);
    assert_eq!(get_state(&game), GameState::Unfinished);

    let piece = game.board().get(sq("e4")).unwrap();
    assert_eq!(piece.variant(), Variant::Marmoset);
    assert_eq!(piece.color(), Color::Tangerine);
    assert!(game.board().get(sq("b1")).is_none());
}

/// Moving TANGERINE while AMETHYST is to move is rejected without side effects.
#[test]
fn test_wrong_side_rejected() {
    let mut game = new_game();
    assert!(make_move(&mut game, "b1", "e4"));
    let before = game.clone();

    assert!(!make_move(&mut game, "e4", "f5"));
    assert!(!make_move(&mut game, "c1", "c2"));
    assert_eq!(game, before);
    assert_eq!(game.turn(), Color::Amethyst);
}

/// AMETHYST cannot open the game.
#[test]
fn test_amethyst_cannot_move_first() {
    let mut game = new_game();
    assert_eq!(
        game.try_move("b7", "e4"),
        Err(MoveError::WrongTurn {
            square: sq("b7"),
            owner: Color::Amethyst,
            turn: Color::Tangerine,
        })
    );
}

#[test]
fn test_turns_alternate() {
    let mut game = new_game();
    let script = [("c1", "c2"), ("c7", "c6"), ("e1", "e2"), ("e7", "e6")];

    let mut expected = Color::Tangerine;
    for (start, end) in script {
        assert_eq!(game.turn(), expected);
        assert!(make_move(&mut game, start, end), "{start}-{end} should be legal");
        expected = expected.opponent();
    }
    assert_eq!(game.turn(), Color::Tangerine);
    assert_eq!(game.history().len(), 4);
}

// =============================================================================
// Winning
// =============================================================================

/// TANGERINE walks a Marmoset up the board and takes the Chinchilla on d7.
#[test]
fn test_capture_chinchilla_wins() {
    let mut game = new_game();

    assert!(make_move(&mut game, "b1", "e4"));
    assert!(make_move(&mut game, "a7", "a6"));
    assert!(make_move(&mut game, "e4", "c6"));
    assert!(make_move(&mut game, "a6", "a5"));
    assert!(make_move(&mut game, "c6", "d7"));

    assert_eq!(get_state(&game), GameState::TangerineWon);
    assert_eq!(game.turn(), Color::Tangerine);

    let last = game.last_move().unwrap();
    assert!(last.is_decisive());
    assert_eq!(last.captured.unwrap().variant(), Variant::Chinchilla);
    assert_eq!(game.board().chinchilla(Color::Amethyst), None);

    let after_win = game.clone();
    assert!(!make_move(&mut game, "a5", "a4"));
    assert!(!make_move(&mut game, "d7", "d6"));
    assert!(!make_move(&mut game, "c7", "d7"));
    assert_eq!(game, after_win);
    assert_eq!(game.try_move("a5", "a4"), Err(MoveError::GameOver));
}

/// The mover wins on a Chinchilla capture, whichever color it is.
#[test]
fn test_amethyst_can_win() {
    let mut game = GameBuilder::empty()
        .turn(Color::Amethyst)
        .piece(sq("d4"), Color::Amethyst, Variant::Chinchilla)
        .piece(sq("d1"), Color::Tangerine, Variant::Chinchilla)
        .build();

    assert!(make_move(&mut game, "d4", "d1"));
    assert_eq!(get_state(&game), GameState::AmethystWon);
    assert_eq!(game.turn(), Color::Amethyst);
}

/// Taking any other piece does not end the game.
#[test]
fn test_ordinary_capture_continues() {
    let mut game = GameBuilder::standard()
        .piece(sq("c3"), Color::Amethyst, Variant::Okapi)
        .build();

    assert!(make_move(&mut game, "a1", "c3"));
    assert_eq!(get_state(&game), GameState::Unfinished);
    assert_eq!(game.turn(), Color::Amethyst);
    assert_eq!(game.board().piece_count(), 14);
}

// =============================================================================
// Piece-specific legality
// =============================================================================

/// Okapi moves one square; two squares straight ahead is out of reach.
#[test]
fn test_okapi_cannot_move_two() {
    let mut game = GameBuilder::empty()
        .piece(sq("d1"), Color::Tangerine, Variant::Okapi)
        .piece(sq("a1"), Color::Tangerine, Variant::Chinchilla)
        .piece(sq("g7"), Color::Amethyst, Variant::Chinchilla)
        .build();

    assert!(!make_move(&mut game, "d1", "d3"));
    assert_eq!(game.turn(), Color::Tangerine);
    assert!(make_move(&mut game, "d1", "d2"));
}

/// Narwhal's diagonal jump cannot land on a friend but can capture an enemy.
#[test]
fn test_narwhal_jump_onto_friend_and_enemy() {
    let mut blocked = GameBuilder::standard()
        .piece(sq("c3"), Color::Tangerine, Variant::Okapi)
        .build();
    assert!(!make_move(&mut blocked, "a1", "c3"));
    assert_eq!(blocked.try_move("a1", "c3"), Err(MoveError::FriendlyCapture(sq("c3"))));

    let mut open = GameBuilder::standard()
        .piece(sq("c3"), Color::Amethyst, Variant::Okapi)
        .build();
    assert!(make_move(&mut open, "a1", "c3"));
    let captured = open.last_move().unwrap().captured.unwrap();
    assert_eq!(captured.color(), Color::Amethyst);
}

#[test]
fn test_chinchilla_slide_limit() {
    let mut game = GameBuilder::empty()
        .piece(sq("a1"), Color::Tangerine, Variant::Chinchilla)
        .piece(sq("g7"), Color::Amethyst, Variant::Chinchilla)
        .build();

    assert!(!make_move(&mut game, "a1", "a5"));
    assert!(make_move(&mut game, "a1", "a4"));
}

#[test]
fn test_slider_cannot_pass_through_pieces() {
    let mut game = new_game();
    // d1 Chinchilla: e1 is a friendly Okapi, so f1/g1 are unreachable.
    assert!(!make_move(&mut game, "d1", "f1"));
    // b1 Marmoset: c2 and d3 are both empty.
    assert!(make_move(&mut game, "b1", "d3"));
}

// =============================================================================
// Malformed input
// =============================================================================

#[test]
fn test_malformed_labels_rejected() {
    let mut game = new_game();
    let before = game.clone();

    for bad in ["", "b", "b11", "h1", "a0", "a8", "B1", " b1", "1b", "bb", "é1"] {
        assert!(!make_move(&mut game, bad, "e4"), "{bad:?} accepted as start");
        assert!(!make_move(&mut game, "b1", bad), "{bad:?} accepted as end");
    }
    assert_eq!(game, before);
}

#[test]
fn test_repeated_rejection_is_stable() {
    let mut game: Game = new_game();
    let before = game.clone();

    assert!(!make_move(&mut game, "c1", "c3"));
    let once = game.clone();
    assert!(!make_move(&mut game, "c1", "c3"));

    assert_eq!(once, before);
    assert_eq!(game, before);
}
