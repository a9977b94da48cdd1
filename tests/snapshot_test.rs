//! Snapshot tests - JSON shape seen by out-of-process hosts

use serde_json::Value;
use tile_tetris::core::{Game, GameConfig, GameSnapshot, PieceSource};
use tile_tetris::types::PieceKind;

fn locked_game() -> Game {
    let mut game = Game::with_source(
        GameConfig::default(),
        PieceSource::sequence(vec![PieceKind::O, PieceKind::T]),
    )
    .unwrap();
    game.start();
    while game.pieces_locked() == 0 {
        game.advance_time(1000);
    }
    game
}

#[test]
fn test_snapshot_json_fields() {
    let game = locked_game();
    let json: Value = serde_json::to_value(game.snapshot()).unwrap();

    assert_eq!(json["bounds"]["x_min"], -5);
    assert_eq!(json["bounds"]["width"], 10);
    assert_eq!(json["game_over"], false);
    assert_eq!(json["pieces_locked"], 1);
    assert!(json.get("next").is_none());

    let cells = json["cells"].as_array().expect("cells array");
    assert_eq!(cells.len(), 4);
    assert_eq!(cells[0]["kind"], "o");
    assert_eq!(cells[0]["y"], -10);

    assert_eq!(json["active"]["kind"], "t");
    assert_eq!(json["active"]["rotation"], 0);
    assert_eq!(json["active"]["cells"].as_array().map(Vec::len), Some(4));
}

#[test]
fn test_snapshot_survives_json() {
    let snapshot = locked_game().snapshot();
    let text = serde_json::to_string(&snapshot).unwrap();
    let back: GameSnapshot = serde_json::from_str(&text).unwrap();
    assert_eq!(back, snapshot);
}

#[test]
fn test_text_rows_after_lock() {
    let rows = locked_game().snapshot().text_rows();
    assert_eq!(rows.len(), 20);
    assert!(rows.iter().all(|row| row.chars().count() == 10));

    let glyph = rows[19].chars().nth(4).expect("column 4");
    assert_ne!(glyph, '.');
    assert_eq!(rows[19], rows[18]);
    // Falling T sits at the top, drawn with the active marker.
    assert!(rows[0].contains('@'));
}
