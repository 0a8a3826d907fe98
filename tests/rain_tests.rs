//! Umbrella cats: win and lose paths

use tui_beads::core::RainGame;
use tui_beads::types::{GameEvent, Key, SceneState, SoundCue, RAIN_DEFAULT_SEED};

fn count_cue(events: &[GameEvent], cue: SoundCue) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, GameEvent::Sound(s) if s.cue == cue))
        .count()
}

/// Raise the umbrella over the lowest drop before every fall
fn guard(game: &mut RainGame) {
    if let Some(drop) = game.drops().iter().max_by_key(|d| d.y) {
        let key = ['a', 's', 'd', 'f'][game.cat_at(drop.x) as usize];
        game.key_down(Key::Char(key));
    }
}

#[test]
fn test_unguarded_drop_soaks_a_cat() {
    let mut game = RainGame::new(RAIN_DEFAULT_SEED);
    let mut events = Vec::new();
    game.spawn_tick();
    for _ in 0..30 {
        game.fall_tick();
    }
    game.drain_events(&mut events);

    assert_eq!(game.state(), SceneState::Lost);
    assert_eq!(count_cue(&events, SoundCue::Bloink), 1);
    assert_eq!(
        events.iter().filter(|e| **e == GameEvent::SceneChanged(SceneState::Lost)).count(),
        1
    );
    // frozen once lost
    let drops = game.drops().to_vec();
    game.fall_tick();
    game.spawn_tick();
    assert_eq!(game.drops(), drops.as_slice());
}

#[test]
fn test_guarded_run_is_won() {
    let mut game = RainGame::new(RAIN_DEFAULT_SEED);
    let mut events = Vec::new();

    // host order: fall every 5 ticks, spawn every 50
    for tick in 1..=2_000u32 {
        if game.state() != SceneState::Playing {
            break;
        }
        if tick % 5 == 0 {
            guard(&mut game);
            game.fall_tick();
        }
        if tick % 50 == 0 {
            game.spawn_tick();
        }
        game.drain_events(&mut events);
    }

    assert_eq!(game.state(), SceneState::Won);
    assert_eq!(game.caught(), game.quota());
    assert_eq!(count_cue(&events, SoundCue::Drip), 10);
    assert_eq!(count_cue(&events, SoundCue::Tada), 1);
    assert_eq!(count_cue(&events, SoundCue::Bloink), 0);
}

#[test]
fn test_same_seed_same_columns() {
    let mut a = RainGame::new(RAIN_DEFAULT_SEED);
    let mut b = RainGame::new(RAIN_DEFAULT_SEED);
    for _ in 0..5 {
        a.spawn_tick();
        b.spawn_tick();
    }
    assert_eq!(a.drops(), b.drops());
    assert!(a.drops().iter().all(|d| d.x >= 0 && d.x < 28 && d.y == -1));
}

#[test]
fn test_other_keys_do_nothing() {
    let mut game = RainGame::new(1);
    game.key_down(Key::Char('s'));
    game.key_down(Key::Char('z'));
    game.key_down(Key::Left);
    assert_eq!(game.active_cat(), Some(1));
}
