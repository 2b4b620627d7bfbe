//! End-to-end round scenarios.

use tictactoe_core::{
    GameState, GameStatus, Move, MoveOutcome, Player, Position, RejectReason, Scores, Square,
};

fn play(game: &mut GameState, cells: &[usize]) {
    for &cell in cells {
        let outcome = game.apply_move(cell);
        assert!(outcome.is_applied(), "cell {cell} rejected: {outcome:?}");
    }
}

#[test]
fn test_x_wins_top_row() {
    let mut game = GameState::new();
    play(&mut game, &[0, 4, 1, 5, 2]);

    match game.status() {
        GameStatus::Won(win) => assert_eq!(win.player, Player::X),
        other => panic!("expected X to win, got {other:?}"),
    }
    assert_eq!(
        game.winning_line(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
    assert_eq!(game.scores().wins(Player::X), 1);
    assert_eq!(game.scores().wins(Player::O), 0);
    assert_eq!(*game.scores().draws(), 0);
}

#[test]
fn test_full_board_without_line_is_draw() {
    // Final board X O X / O X O / O X O has five O marks, so O must open:
    // X plays once, the round is abandoned, and O starts the next one.
    let mut game = GameState::new();
    play(&mut game, &[0]);
    game.start_new_round();
    assert_eq!(game.current_player(), Player::O);

    play(&mut game, &[1, 0, 3, 2, 5, 4, 6, 7]);
    let outcome = game.apply_move(8);
    assert_eq!(outcome, MoveOutcome::Drawn(Move::new(Player::O, Position::BottomRight)));

    use Player::{O, X};
    let expected = [X, O, X, O, X, O, O, X, O].map(Square::Occupied);
    assert_eq!(game.board().squares(), &expected);
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.winning_line(), None);
    assert_eq!(*game.scores().draws(), 1);
    assert_eq!(game.scores().total_rounds(), 1);
}

#[test]
fn test_repeated_cell_is_ignored() {
    let mut game = GameState::new();
    play(&mut game, &[0]);
    let before = game.clone();

    let outcome = game.apply_move(0);
    assert_eq!(
        outcome,
        MoveOutcome::Rejected(RejectReason::SquareOccupied(Position::TopLeft))
    );
    assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(game.current_player(), Player::O);
    assert_eq!(game, before);
}

#[test]
fn test_new_round_after_win_keeps_scores() {
    let mut game = GameState::new();
    play(&mut game, &[0, 4, 1, 5, 2]);
    let scores = *game.scores();

    game.start_new_round();

    assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(!game.is_game_over());
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(*game.scores(), scores);
}

#[test]
fn test_new_round_after_o_wins_resets_to_x() {
    let mut game = GameState::new();
    play(&mut game, &[0, 4, 1, 2, 8, 6]);
    assert_eq!(game.winner(), Some(Player::O));
    assert_eq!(game.current_player(), Player::O);

    game.start_new_round();
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.scores().wins(Player::O), 1);
}

#[test]
fn test_reset_then_new_round_matches_double_reset() {
    let mut a = GameState::new();
    play(&mut a, &[0, 4, 1, 5, 2]);
    a.start_new_round();
    play(&mut a, &[3]);
    let mut b = a.clone();

    a.reset_all();
    a.start_new_round();
    b.reset_all();
    b.reset_all();

    assert_eq!(a, b);
    assert_eq!(*a.scores(), Scores::new());
    assert_eq!(a.current_player(), Player::X);
    assert_eq!(a.move_count(), 0);
}

#[test]
fn test_scores_accumulate_across_rounds() {
    let mut game = GameState::new();
    play(&mut game, &[0, 4, 1, 5, 2]);
    game.start_new_round();
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    game.start_new_round();
    play(&mut game, &[0, 4, 1, 2, 8, 6]);

    assert_eq!(*game.scores().x(), 1);
    assert_eq!(*game.scores().o(), 1);
    assert_eq!(*game.scores().draws(), 1);
}

#[test]
fn test_snapshot_serializes() {
    let mut game = GameState::new();
    play(&mut game, &[0, 4, 1, 5, 2]);
    let json = serde_json::to_value(&game).expect("serialize");
    assert_eq!(json["scores"]["x"], 1);
    assert_eq!(json["game_over"], true);

    let back: GameState = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, game);
}
