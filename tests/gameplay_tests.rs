//! End-to-end gameplay scenarios driven through the public API.

use blockfall::{
    Board, Cell, EngineError, Game, LockReport, PieceSource, SequenceSource, Settings, Shape,
    TetrominoType, TickOutcome, points_for,
};

fn sequence_game(kinds: &[TetrominoType]) -> Game<SequenceSource> {
    Game::with_source(
        Board::default(),
        SequenceSource::new(kinds.to_vec()).unwrap(),
    )
}

fn drop_piece<S: PieceSource>(game: &mut Game<S>) -> LockReport {
    loop {
        match game.tick() {
            TickOutcome::Locked(report) => return report,
            TickOutcome::Fell => {}
            TickOutcome::Halted => panic!("game already over"),
        }
    }
}

fn fill_row(board: &mut Board, row: usize) {
    let bar = Shape::from_rows(&[&[1; 10]]);
    board.lock(&bar, 0, row as i32, TetrominoType::L);
}

#[test]
fn clears_rows_five_and_seven() {
    let mut board = Board::default();
    let dot = Shape::from_rows(&[&[1]]);
    fill_row(&mut board, 5);
    fill_row(&mut board, 7);
    board.lock(&dot, 0, 4, TetrominoType::I);
    board.lock(&dot, 1, 6, TetrominoType::J);
    board.lock(&dot, 2, 8, TetrominoType::T);

    assert_eq!(board.clear_full_rows(), 2);

    for row in 0..20 {
        assert!(!board.is_row_full(row).unwrap());
    }
    assert!(board.row(0).unwrap().iter().all(Cell::is_empty));
    assert!(board.row(1).unwrap().iter().all(Cell::is_empty));
    // rows 4 and 6 move down two and one respectively, row 8 stays
    assert_eq!(board.cell_at(6, 0).unwrap(), Cell::Filled(TetrominoType::I));
    assert_eq!(board.cell_at(7, 1).unwrap(), Cell::Filled(TetrominoType::J));
    assert_eq!(board.cell_at(8, 2).unwrap(), Cell::Filled(TetrominoType::T));
}

#[test]
fn scoring_table() {
    assert_eq!(points_for(0), 0);
    assert_eq!(points_for(1), 150);
    assert_eq!(points_for(4), 600);
}

#[test]
fn four_row_clear_with_vertical_i() {
    let mut game = sequence_game(&[TetrominoType::I]);

    // nine vertical bars leave a well in the last column
    for col in 0..9 {
        assert!(game.rotate());
        let x = game.active_piece().unwrap().x;
        for _ in col..x {
            assert!(game.move_left());
        }
        for _ in x..col {
            assert!(game.move_right());
        }
        let report = drop_piece(&mut game);
        assert_eq!(report.rows_cleared, 0);
    }
    assert!(game.rotate());
    while game.move_right() {}
    let report = drop_piece(&mut game);
    assert_eq!(report.rows_cleared, 4);
    assert_eq!(report.points_awarded, 600);
    assert_eq!(game.score(), 600);
    assert_eq!(game.lines_cleared(), 4);
    assert!(game.board().is_empty());
}

#[test]
fn o_then_two_bars_clear_one_row() {
    let mut game = sequence_game(&[TetrominoType::O, TetrominoType::I, TetrominoType::I]);

    let report = drop_piece(&mut game);
    assert_eq!(report.rows_cleared, 0);

    while game.move_left() {}
    assert_eq!(drop_piece(&mut game).rows_cleared, 0);

    while game.move_right() {}
    let report = drop_piece(&mut game);

    assert_eq!(report.rows_cleared, 1);
    assert_eq!(game.score(), 150);
    assert_eq!(game.lines_cleared(), 1);
}

#[test]
fn spawn_collision_ends_game_and_freezes_board() {
    let mut game = sequence_game(&[TetrominoType::O]);
    let mut last = None;
    while !game.is_game_over() {
        if let TickOutcome::Locked(report) = game.tick() {
            last = Some(report);
        }
    }
    assert!(last.unwrap().topped_out);

    let before = game.snapshot();
    for _ in 0..5 {
        assert_eq!(game.tick(), TickOutcome::Halted);
    }
    game.move_left();
    game.rotate();
    assert_eq!(game.snapshot(), before);
    assert!(!before.playable());
}

#[test]
fn reset_after_play() {
    let mut game = Game::with_seed(2024);
    for i in 0..500 {
        match i % 4 {
            0 => {
                game.move_left();
            }
            1 => {
                game.rotate();
            }
            _ => {
                game.tick();
            }
        }
    }
    game.reset();
    assert_eq!(game.score(), 0);
    assert_eq!(game.lines_cleared(), 0);
    assert!(!game.is_game_over());
    assert!(game.board().is_empty());
    assert_eq!(game.active_piece_cells().len(), 4);
}

#[test]
fn cell_queries_outside_board_fail() {
    let game = Game::with_seed(1);
    assert!(matches!(
        game.cell_at(0, 10),
        Err(EngineError::OutOfRange { col: 10, .. })
    ));
    assert!(game.cell_at(20, 0).is_err());
    assert!(game.cell_at(19, 9).is_ok());
}

#[test]
fn settings_drive_small_board() {
    let mut settings = Settings::default();
    settings.board.rows = 6;
    settings.board.cols = 5;
    settings.seed = Some(11);
    let mut game = Game::from_settings(&settings).unwrap();
    let mut ticks = 0;
    while !game.is_game_over() && ticks < 1_000 {
        game.tick();
        ticks += 1;
    }
    // a 6-row well without input fills up quickly
    assert!(game.is_game_over());
}

#[test]
fn snapshot_serializes_to_json() {
    let game = sequence_game(&[TetrominoType::T]);
    let json = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(json["score"], 0);
    assert_eq!(json["board"].as_array().unwrap().len(), 20);
    assert_eq!(json["active"].as_array().unwrap().len(), 4);
    assert_eq!(json["active"][0]["kind"], "T");
    assert_eq!(json["active"][0]["row"], 0);
    assert_eq!(json["active"][0]["col"], 5);
}
