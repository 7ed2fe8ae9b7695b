use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_raycaster::core::{Raycaster, World};
use tui_raycaster::engine::Session;
use tui_raycaster::term::{Canvas, Projector, Viewport};
use tui_raycaster::types::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

fn bench_cast(c: &mut Criterion) {
    let world = World::default();
    let mut caster = Raycaster::default();

    c.bench_function("cast_160_rays", |b| {
        b.iter(|| {
            black_box(caster.cast(black_box(&world)).len());
        })
    });
}

fn bench_draw_frame(c: &mut Criterion) {
    let world = World::default();
    let mut projector = Projector::default();
    let mut canvas = Canvas::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);

    c.bench_function("draw_frame_960x480", |b| {
        b.iter(|| {
            projector.draw_frame(black_box(&world), &mut canvas);
        })
    });
}

fn bench_compose(c: &mut Criterion) {
    let mut session = Session::new(World::default());
    session.tick();

    c.bench_function("compose_200x60", |b| {
        b.iter(|| {
            black_box(session.compose(Viewport::new(200, 60)).width());
        })
    });
}

criterion_group!(benches, bench_cast, bench_draw_frame, bench_compose);
criterion_main!(benches);
