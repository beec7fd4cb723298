//! Tests for the game record repository.

use diesel::Connection;
use diesel::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::NamedTempFile;

use gridmark::{
    BoardSize, GameRepository, GameSession, GameStatus, Mark, NewGameRecord, encode_board,
};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Creates a temporary database file with schema applied, returns the file
/// handle (must stay in scope to keep the file alive) and a ready repository.
fn setup_test_db() -> (NamedTempFile, GameRepository) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();

    let mut conn = SqliteConnection::establish(&db_path).expect("Failed to connect");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Migrations failed");

    let repo = GameRepository::new(db_path).expect("Failed to create repository");
    (db_file, repo)
}

/// Builds an insertable record via an actual engine move.
fn record_for_move(session: &mut GameSession, index: usize) -> NewGameRecord {
    let record = session.play(index).expect("move should be accepted");
    NewGameRecord::try_from(&record).expect("encoding failed")
}

/// Inserts a full 3x3 game won by X and returns its final status string.
fn insert_won_game(repo: &GameRepository) {
    let mut session = GameSession::new(BoardSize::Three);
    for index in [0, 4, 1, 5, 2] {
        let row = record_for_move(&mut session, index);
        repo.record_move(row).expect("Insert failed");
    }
    assert_eq!(session.status(), GameStatus::Won(Mark::X));
}

#[test]
fn test_record_move_returns_saved_row() {
    let (_db, repo) = setup_test_db();
    let mut session = GameSession::new(BoardSize::Three);
    let row = record_for_move(&mut session, 4);

    let saved = repo.record_move(row).expect("Insert failed");
    assert!(*saved.id() > 0);
    assert_eq!(saved.status(), "in_progress");
    assert_eq!(saved.current_player(), "X");
}

#[test]
fn test_saved_board_round_trips() {
    let (_db, repo) = setup_test_db();
    let mut session = GameSession::new(BoardSize::Four);
    let row = record_for_move(&mut session, 7);

    let saved = repo.record_move(row).expect("Insert failed");
    let board = saved.decode_board().expect("Board should decode");
    assert_eq!(&board, session.board());
    assert_eq!(board.size(), 4);
}

#[test]
fn test_recent_completed_excludes_unfinished_rows() {
    let (_db, repo) = setup_test_db();

    // A game abandoned mid-play leaves only non-terminal rows.
    let mut session = GameSession::new(BoardSize::Three);
    for index in [0, 4] {
        let row = record_for_move(&mut session, index);
        repo.record_move(row).expect("Insert failed");
    }

    assert!(repo.recent_completed(10).expect("Query failed").is_empty());

    insert_won_game(&repo);
    let completed = repo.recent_completed(10).expect("Query failed");
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].status(), "Player X won");
}

#[test]
fn test_recent_completed_orders_newest_first() {
    let (_db, repo) = setup_test_db();
    insert_won_game(&repo);
    insert_won_game(&repo);
    insert_won_game(&repo);

    let completed = repo.recent_completed(10).expect("Query failed");
    assert_eq!(completed.len(), 3);
    assert!(completed[0].id() > completed[1].id());
    assert!(completed[1].id() > completed[2].id());
}

#[test]
fn test_recent_completed_respects_limit() {
    let (_db, repo) = setup_test_db();
    for _ in 0..4 {
        insert_won_game(&repo);
    }
    let completed = repo.recent_completed(2).expect("Query failed");
    assert_eq!(completed.len(), 2);
}

#[test]
fn test_scoreboard_lists_at_most_ten() {
    let (_db, repo) = setup_test_db();
    for _ in 0..12 {
        insert_won_game(&repo);
    }

    let entries = repo.scoreboard().expect("Query failed");
    assert_eq!(entries.len(), 10);
    assert!(entries.iter().all(|e| e.status() == "Player X won"));
    // Newest first.
    assert!(entries.first().expect("non-empty").id() > entries.last().expect("non-empty").id());
}

#[test]
fn test_scoreboard_empty_store() {
    let (_db, repo) = setup_test_db();
    assert!(repo.scoreboard().expect("Query failed").is_empty());
}

#[test]
fn test_status_strings_are_bit_exact() {
    let (_db, repo) = setup_test_db();
    insert_won_game(&repo);

    let completed = repo.recent_completed(1).expect("Query failed");
    let record = &completed[0];
    assert_eq!(record.status(), "Player X won");
    assert_eq!(
        record.parse_status().expect("Status should parse"),
        GameStatus::Won(Mark::X)
    );
    assert_eq!(record.parse_player().expect("Player should parse"), Mark::X);
}

#[test]
fn test_parse_rejects_foreign_status_row() {
    let (_db, repo) = setup_test_db();
    let session = GameSession::new(BoardSize::Three);
    let board_json = encode_board(session.board()).expect("encoding failed");
    let row = NewGameRecord::new(board_json, "X".to_string(), "abandoned".to_string());
    let saved = repo.record_move(row).expect("Insert failed");

    assert!(saved.parse_status().is_err());
    // Foreign statuses also never show up as completed games.
    assert!(repo.recent_completed(10).expect("Query failed").is_empty());
}
