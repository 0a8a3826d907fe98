use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_beads::core::{GravityGame, RainGame};
use tui_beads::engine::{AnyGame, Host};
use tui_beads::term::{paint, BeadGrid, BeadView, Hud, TrailFade, Viewport};
use tui_beads::types::{GameKind, Key, Pos};

fn busy_gravity() -> GravityGame {
    let mut game = GravityGame::new(12345);
    for y in 1..11 {
        for x in 1..11 {
            if (x + y) % 3 == 0 {
                game.spawn_at(Pos::new(x, y));
            }
        }
    }
    game
}

fn bench_gravity_step(c: &mut Criterion) {
    let mut game = busy_gravity();
    let mut events = Vec::new();

    c.bench_function("gravity_step_full_board", |b| {
        b.iter(|| {
            game.step();
            game.key_down(black_box(Key::Other));
            game.drain_events(&mut events);
            events.clear();
        })
    });
}

fn bench_rain_fall(c: &mut Criterion) {
    c.bench_function("rain_fall_tick", |b| {
        b.iter(|| {
            let mut game = RainGame::with_quota(300, 10);
            for _ in 0..10 {
                game.spawn_tick();
                game.fall_tick();
            }
            black_box(game.drops().len())
        })
    });
}

fn bench_host_tick(c: &mut Criterion) {
    let game = AnyGame::Gravity(busy_gravity());
    let mut host = match Host::new(game) {
        Ok(host) => host,
        Err(e) => panic!("host: {}", e),
    };

    c.bench_function("host_tick_16ms", |b| {
        b.iter(|| {
            host.tick();
            host.drain_events().count()
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let game = match AnyGame::new(GameKind::Rain, 300, Vec::new()) {
        Ok(game) => game,
        Err(e) => panic!("game: {}", e),
    };
    let view = BeadView::default();
    let trail = TrailFade::new();
    let mut grid = BeadGrid::new(28, 28);
    let mut fb = tui_beads::term::FrameBuffer::new(120, 40);

    c.bench_function("paint_and_render_rain", |b| {
        b.iter(|| {
            paint(&game, &trail, &mut grid);
            view.render_into(&grid, Hud::default(), Viewport::new(120, 40), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_gravity_step,
    bench_rain_fall,
    bench_host_tick,
    bench_render
);
criterion_main!(benches);
