//! Tests for the No-Draw engine: three marks each, oldest evicted first.

use tictactoe_engine::{
    Game, GameInvariants, GameStatus, InvariantSet, MoveError, Player, RuleVariant, Square,
};

fn play(game: &mut Game, moves: &[usize]) {
    for &pos in moves {
        game.apply_move(pos).unwrap();
    }
}

#[test]
fn test_fourth_mark_evicts_oldest() {
    let mut game = Game::new(RuleVariant::NoDraw);
    // X: 0, 2, 4 then 6. O: 1, 3, 5 in between.
    play(&mut game, &[0, 1, 2, 3, 4, 5]);
    assert_eq!(game.oldest_mark(Player::X), Some(0));

    let applied = game.apply_move(6).unwrap();
    assert_eq!(applied.evicted, Some(0));
    assert_eq!(game.board().get(0), Some(Square::Empty));
    assert_eq!(game.history(Player::X).as_slice(), &[2, 4, 6]);
    // 2-4-6 is a line, and 0 is gone.
    assert_eq!(game.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_eviction_keeps_fifo_order() {
    let mut game = Game::new(RuleVariant::NoDraw);
    // X 0 | O 4 | X 8 | O 2 | X 6 | O 3 | X 5 (evicts 0) | O 1 (evicts 4)
    play(&mut game, &[0, 4, 8, 2, 6, 3]);
    assert_eq!(game.status(), GameStatus::InProgress);

    let x_move = game.apply_move(5).unwrap();
    assert_eq!(x_move.evicted, Some(0));
    assert_eq!(game.history(Player::X).as_slice(), &[8, 6, 5]);

    let o_move = game.apply_move(1).unwrap();
    assert_eq!(o_move.evicted, Some(4));
    assert_eq!(game.history(Player::O).as_slice(), &[2, 3, 1]);
    assert_eq!(game.board().count(Player::X), 3);
    assert_eq!(game.board().count(Player::O), 3);
}

#[test]
fn test_line_broken_by_eviction_does_not_win() {
    let mut game = Game::new(RuleVariant::NoDraw);
    // X holds 0, 1, 5 (oldest 0) when playing 2: top row would be complete,
    // but 0 leaves first.
    play(&mut game, &[0, 3, 1, 4, 5, 8]);
    let applied = game.apply_move(2).unwrap();
    assert_eq!(applied.evicted, Some(0));
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.current_player(), Player::O);
}

#[test]
fn test_may_replay_oldest_square() {
    let mut game = Game::new(RuleVariant::NoDraw);
    play(&mut game, &[0, 4, 8, 2, 6, 3]);
    // Would X's own 0 be accepted? It is X's oldest square.
    assert!(game.is_valid_move(0));
    // 8 is X's but not the oldest.
    assert_eq!(game.check_move(8), Err(MoveError::SquareOccupied(8)));
    assert_eq!(game.check_move(4), Err(MoveError::OpponentSquare(4)));

    let applied = game.apply_move(0).unwrap();
    assert_eq!(applied.evicted, Some(0));
    assert_eq!(game.board().get(0), Some(Square::Occupied(Player::X)));
    assert_eq!(game.history(Player::X).as_slice(), &[8, 6, 0]);
}

#[test]
fn test_replaying_oldest_square_never_draws() {
    let mut game = Game::new(RuleVariant::NoDraw);
    // Replaying the oldest square leaves the board as it was.
    play(&mut game, &[0, 1, 5, 2, 6, 3]);
    for _ in 0..4 {
        let oldest = game.oldest_mark(game.current_player()).unwrap();
        let before = game.board().empty_count();
        assert!(game.is_valid_move(oldest));
        game.apply_move(oldest).unwrap();
        assert_eq!(game.board().empty_count(), before);
        assert_ne!(game.status(), GameStatus::Draw);
    }
}

#[test]
fn test_invariants_hold_through_scripted_game() {
    let mut game = Game::new(RuleVariant::NoDraw);
    for pos in [0, 4, 8, 2, 6, 3, 5, 1, 7] {
        if game.is_terminal() {
            break;
        }
        if game.apply_move(pos).is_ok() {
            assert!(GameInvariants::check_all(&game).is_ok());
        }
    }
}
