//! Level pack loading from disk

use std::path::PathBuf;

use tui_beads::assets::{load_level_pack, parse_level_pack};
use tui_beads::core::SliderGame;
use tui_beads::engine::AnyGame;
use tui_beads::types::{GameKind, SceneState};

fn temp_pack(name: &str, json: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("tui-beads-{}-{}.json", name, std::process::id()));
    std::fs::write(&path, json).unwrap();
    path
}

fn bundled_pack() -> String {
    std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/levels.json")).unwrap()
}

#[tokio::test]
async fn test_load_bundled_pack() {
    let path = temp_pack("bundled", &bundled_pack());
    let levels = load_level_pack(&path).await.unwrap();
    let _ = std::fs::remove_file(&path);

    assert!(!levels.is_empty());
    let game = SliderGame::with_levels(levels).unwrap();
    assert_eq!(game.state(), SceneState::Loading);
}

#[tokio::test]
async fn test_missing_file_is_an_error() {
    let path = std::env::temp_dir().join("tui-beads-does-not-exist.json");
    let err = load_level_pack(&path).await.unwrap_err();
    assert!(format!("{:#}", err).contains("read level pack"));
}

#[test]
fn test_pack_feeds_any_game() {
    let levels = parse_level_pack(&bundled_pack()).unwrap();
    let count = levels.len();
    match AnyGame::new(GameKind::Slider, 0, levels).unwrap() {
        AnyGame::Slider(game) => assert_eq!(game.level_count(), count),
        other => panic!("unexpected game {:?}", other),
    }
}

#[test]
fn test_bundled_warmup_is_solvable() {
    use tui_beads::types::Key;

    let mut levels = parse_level_pack(&bundled_pack()).unwrap();
    levels.truncate(1);
    let mut game = SliderGame::with_levels(levels).unwrap();
    while game.state() == SceneState::Loading {
        game.step();
    }

    for key in [Key::Right, Key::Down, Key::Left, Key::Down] {
        game.key_down(key);
        for _ in 0..20 {
            game.step();
        }
    }
    assert_eq!(game.state(), SceneState::Won);
}
