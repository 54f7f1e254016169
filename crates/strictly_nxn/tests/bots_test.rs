//! Tests for bot strategies.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_nxn::bots::{blocking_coordinates, random_coordinates, winning_coordinates};
use strictly_nxn::{
    Action, Board, Bot, BotStrategy, Coordinates, GameState, MinimaxSearch, MoveError,
    MoveRequest, PlayerMark,
};

fn board_from(cells: &[(i32, i32, PlayerMark)], bounds: i32) -> Board {
    Board::with_moves(
        cells
            .iter()
            .map(|&(x, y, mark)| MoveRequest::new(Coordinates::new(x, y), mark))
            .collect(),
        bounds,
    )
}

fn corners() -> [Coordinates; 4] {
    [
        Coordinates::new(0, 0),
        Coordinates::new(0, 2),
        Coordinates::new(2, 0),
        Coordinates::new(2, 2),
    ]
}

#[test]
fn test_at_level_mapping() {
    assert!(matches!(BotStrategy::at_level(0), BotStrategy::Random));
    assert!(matches!(BotStrategy::at_level(1), BotStrategy::GreedyWin));
    assert!(matches!(BotStrategy::at_level(2), BotStrategy::GreedyWinOrBlock));
    assert!(matches!(BotStrategy::at_level(3), BotStrategy::Minimax(_)));
    assert!(matches!(BotStrategy::at_level(42), BotStrategy::Random));
}

#[test]
fn test_random_picks_empty_cell() {
    let board = board_from(&[(0, 0, PlayerMark::One), (1, 1, PlayerMark::Two)], 3);
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let coordinates = random_coordinates(&board, &mut rng).expect("Cells remain");
        assert!(board.remaining_coordinates().contains(&coordinates));
    }
}

#[test]
fn test_random_fails_on_full_board() {
    let board = board_from(&[(0, 0, PlayerMark::One)], 1);
    let mut rng = StdRng::seed_from_u64(7);
    assert_eq!(
        random_coordinates(&board, &mut rng),
        Err(MoveError::NoAvailableMoves)
    );
}

#[test]
fn test_winning_move_row() {
    let board = board_from(&[(0, 0, PlayerMark::One), (1, 0, PlayerMark::One)], 3);
    assert_eq!(
        winning_coordinates(&board, PlayerMark::One),
        Ok(Coordinates::new(2, 0))
    );
}

#[test]
fn test_winning_move_column_and_diagonals() {
    let column = board_from(&[(0, 0, PlayerMark::One), (0, 2, PlayerMark::One)], 3);
    assert_eq!(winning_coordinates(&column, PlayerMark::One), Ok(Coordinates::new(0, 1)));

    let diagonal = board_from(&[(0, 0, PlayerMark::One), (1, 1, PlayerMark::One)], 3);
    assert_eq!(winning_coordinates(&diagonal, PlayerMark::One), Ok(Coordinates::new(2, 2)));

    let anti = board_from(&[(0, 2, PlayerMark::One), (2, 0, PlayerMark::One)], 3);
    assert_eq!(winning_coordinates(&anti, PlayerMark::One), Ok(Coordinates::new(1, 1)));
}

#[test]
fn test_no_winning_move() {
    assert_eq!(
        winning_coordinates(&Board::new(3), PlayerMark::One),
        Err(MoveError::NoWinningMove)
    );
    let board = board_from(
        &[(0, 0, PlayerMark::One), (1, 2, PlayerMark::One), (2, 1, PlayerMark::One)],
        3,
    );
    assert_eq!(
        winning_coordinates(&board, PlayerMark::One),
        Err(MoveError::NoWinningMove)
    );
}

#[test]
fn test_greedy_win_takes_completing_cell() {
    let board = board_from(
        &[(0, 0, PlayerMark::One), (1, 2, PlayerMark::Two), (1, 0, PlayerMark::One)],
        3,
    );
    let state = GameState::from_board(board, PlayerMark::Two);
    let mut strategy = BotStrategy::GreedyWin;
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(
        strategy.coordinates(&state, PlayerMark::One, &mut rng),
        Ok(Coordinates::new(2, 0))
    );
}

#[test]
fn test_greedy_block_prevents_column() {
    let board = board_from(
        &[(0, 0, PlayerMark::One), (1, 1, PlayerMark::Two), (0, 1, PlayerMark::One)],
        3,
    );
    let state = GameState::from_board(board, PlayerMark::Two);
    let mut strategy = BotStrategy::GreedyWinOrBlock;
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(
        strategy.coordinates(&state, PlayerMark::Two, &mut rng),
        Ok(Coordinates::new(0, 2))
    );
}

#[test]
fn test_greedy_block_finds_later_threat() {
    // One threatens (1, 2); several empty cells come first in enumeration.
    let board = board_from(
        &[(1, 0, PlayerMark::One), (0, 0, PlayerMark::Two), (1, 1, PlayerMark::One)],
        3,
    );
    assert_eq!(
        blocking_coordinates(&board, PlayerMark::One),
        Ok(Coordinates::new(1, 2))
    );
    let state = GameState::from_board(board, PlayerMark::Two);
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut strategy = BotStrategy::GreedyWinOrBlock;
        assert_eq!(
            strategy.coordinates(&state, PlayerMark::Two, &mut rng),
            Ok(Coordinates::new(1, 2))
        );
    }
}

#[test]
fn test_greedy_prefers_win_over_block() {
    // Both marks have two in a row; the acting mark wins instead of blocking.
    let board = board_from(
        &[
            (0, 0, PlayerMark::One),
            (2, 0, PlayerMark::Two),
            (0, 1, PlayerMark::One),
            (2, 1, PlayerMark::Two),
        ],
        3,
    );
    let state = GameState::from_board(board, PlayerMark::Two);
    let mut strategy = BotStrategy::GreedyWinOrBlock;
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(
        strategy.coordinates(&state, PlayerMark::Two, &mut rng),
        Ok(Coordinates::new(2, 2))
    );
}

#[test]
fn test_minimax_answers_center_with_corner() {
    let state = GameState::new(3)
        .apply(Action::Move {
            coordinates: Coordinates::new(1, 1),
        })
        .expect("Legal opening");
    let mut strategy = BotStrategy::at_level(3);
    let mut rng = StdRng::seed_from_u64(0);
    let reply = strategy
        .coordinates(&state, PlayerMark::Two, &mut rng)
        .expect("Cells remain");
    assert!(corners().contains(&reply), "Edge reply {reply} loses");
}

#[test]
fn test_minimax_reply_to_center_holds_the_draw() {
    let board = board_from(&[(1, 1, PlayerMark::One)], 3);
    let mut search = MinimaxSearch::new();
    let choice = search
        .best_choice(&board, PlayerMark::Two, PlayerMark::Two)
        .expect("Cells remain");
    assert_eq!(choice.value, 0);
}

fn play_out(mut one: Bot, mut two: Bot, bounds: i32) -> GameState {
    let mut state = GameState::new(bounds);
    while !state.is_over() {
        let bot = if state.current_mark() == PlayerMark::One {
            &mut one
        } else {
            &mut two
        };
        let coordinates = bot.coordinates(&state).expect("Game not over");
        state = state.play(coordinates).expect("Bots pick legal cells");
    }
    state
}

#[test]
fn test_minimax_never_loses_as_second_player() {
    for seed in 0..20 {
        let state = play_out(
            Bot::seeded(PlayerMark::One, BotStrategy::Random, seed),
            Bot::seeded(PlayerMark::Two, BotStrategy::at_level(3), seed),
            3,
        );
        assert_ne!(state.winner(), PlayerMark::One, "seed {seed}");
    }
}

#[test]
fn test_minimax_never_loses_to_blocker() {
    for seed in 0..10 {
        let state = play_out(
            Bot::seeded(PlayerMark::One, BotStrategy::at_level(3), seed),
            Bot::seeded(PlayerMark::Two, BotStrategy::GreedyWinOrBlock, seed),
            3,
        );
        assert_ne!(state.winner(), PlayerMark::Two, "seed {seed}");
    }
}

#[test]
fn test_minimax_self_play_draws() {
    let state = play_out(
        Bot::seeded(PlayerMark::One, BotStrategy::at_level(3), 1),
        Bot::seeded(PlayerMark::Two, BotStrategy::at_level(3), 2),
        3,
    );
    assert_eq!(state.winner(), PlayerMark::None);
    assert!(state.is_tied());
}

#[test]
fn test_minimax_memo_survives_between_turns() {
    let mut bot = Bot::seeded(PlayerMark::One, BotStrategy::at_level(3), 0);
    let state = GameState::new(3);
    let first = bot.coordinates(&state).expect("Cells remain");

    let BotStrategy::Minimax(search) = bot.strategy() else {
        panic!("Level 3 is minimax");
    };
    let memo = search.memo_len();
    assert!(memo > 0);

    let state = state.play(first).expect("Legal");
    let reply = state.board().remaining_coordinates()[0];
    let state = state.play(reply).expect("Legal");
    let second = bot.coordinates(&state).expect("Cells remain");
    assert!(state.board().remaining_coordinates().contains(&second));

    let BotStrategy::Minimax(search) = bot.strategy() else {
        panic!("Level 3 is minimax");
    };
    // Every position reachable from the opening was solved on the first turn.
    assert_eq!(search.memo_len(), memo);
}

#[test]
fn test_bot_on_full_board_reports_no_moves() {
    let board = board_from(&[(0, 0, PlayerMark::One)], 1);
    let state = GameState::from_board(board, PlayerMark::Two);
    for level in 0..=3 {
        let mut bot = Bot::seeded(PlayerMark::Two, BotStrategy::at_level(level), 0);
        assert_eq!(bot.coordinates(&state), Err(MoveError::NoAvailableMoves));
    }
}
