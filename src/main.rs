//! Terminal bead games runner (default binary).
//!
//! Picks one of the three games from the configuration, then drives it with a
//! fixed 16 ms host tick. Keys and mouse come in through crossterm; frames go
//! out through the framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use tui_beads::assets::load_level_pack_blocking;
use tui_beads::config::AppConfig;
use tui_beads::engine::{AnyGame, Game, Host, SoundSink};
use tui_beads::input::{map_key, should_quit, PointerTracker};
use tui_beads::logging;
use tui_beads::term::{
    grid_size, overlay_text, paint, status_line, BeadGrid, BeadView, FrameBuffer, Hud,
    TerminalRenderer, TerminalSound, TrailFade, Viewport,
};
use tui_beads::types::{GameEvent, HostInput, HOST_TICK_MS};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = AppConfig::from_env()?.apply_args(&args)?;
    logging::init(config.log_path.as_deref())?;

    let levels = match &config.levels {
        Some(path) => load_level_pack_blocking(path)?,
        None => Vec::new(),
    };
    let game = AnyGame::new(config.game, config.seed(), levels)?;
    let mut host = Host::new(game)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut host, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, host: &mut Host<AnyGame>, config: &AppConfig) -> Result<()> {
    let view = BeadView::default();
    let (w, h) = grid_size(host.game());
    let mut grid = BeadGrid::new(w, h);
    let mut fb = FrameBuffer::new(0, 0);
    let mut trail = TrailFade::new();
    let mut sound = TerminalSound::new(config.bell);
    let mut pointer = PointerTracker::new();
    let title = host.game().kind().title();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(HOST_TICK_MS as u64);

    loop {
        // Render.
        let (tw, th) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(tw, th);
        paint(host.game(), &trail, &mut grid);
        let status = status_line(host.game());
        let hud = Hud {
            title,
            status: &status,
            overlay: overlay_text(host.game()),
        };
        view.render_into(&grid, hud, viewport, &mut fb);
        term.draw_swap(&mut fb)?;
        if sound.take_bell() {
            term.bell()?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        info!("quit requested after {} ticks", host.ticks());
                        return Ok(());
                    }
                    if let Some(key) = map_key(key) {
                        host.dispatch(HostInput::KeyDown(key));
                    }
                }
                Event::Mouse(mouse) => {
                    let hit = |col, row| view.cell_at(&grid, viewport, col, row);
                    if let Some(input) = pointer.handle(mouse, hit) {
                        host.dispatch(input);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
            fan_out(host, &mut trail, &mut sound);
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            host.tick();
            trail.tick();
            fan_out(host, &mut trail, &mut sound);
        }
    }
}

/// Hand the events of the last callback to the sound sink and the trail layer
fn fan_out(host: &mut Host<AnyGame>, trail: &mut TrailFade, sound: &mut TerminalSound) {
    for event in host.drain_events() {
        match event {
            GameEvent::Sound(s) => sound.play(s),
            GameEvent::SceneChanged(state) => info!("scene: {}", state.as_str()),
            GameEvent::Crushed { id, at } => warn!("{:?} crushed at ({}, {})", id, at.x, at.y),
            _ => {}
        }
        trail.observe(&event);
    }
}
