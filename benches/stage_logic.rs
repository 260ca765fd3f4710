use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_stage::core::{StageGrid, StageManager};
use tetris_stage::engine::{FrameHost, Game, StageManagerObject};
use tetris_stage::term::{FrameBuffer, SceneView, Viewport};
use tetris_stage::types::{MINO_BLOCK_SIZE, STAGE_ORIGIN};

fn bench_grid_setup(c: &mut Criterion) {
    let mut grid = StageGrid::new(STAGE_ORIGIN, MINO_BLOCK_SIZE);

    c.bench_function("grid_setup", |b| {
        b.iter(|| {
            grid.setup();
            black_box(&grid);
        })
    });
}

fn bench_coords(c: &mut Criterion) {
    let grid = StageGrid::new(STAGE_ORIGIN, MINO_BLOCK_SIZE);

    c.bench_function("coords_sum", |b| {
        b.iter(|| {
            let sum: i32 = grid.coords().map(|(x, y)| x as i32 + y as i32).sum();
            black_box(sum)
        })
    });
}

fn bench_stage_query(c: &mut Criterion) {
    let mut manager = StageManager::new();
    manager.start();

    c.bench_function("stage_data_all_cells", |b| {
        b.iter(|| {
            for (x, y) in manager.grid().coords() {
                let _ = black_box(manager.stage_data(black_box(x), black_box(y)));
            }
        })
    });
}

fn bench_host_step(c: &mut Criterion) {
    let mut host = FrameHost::new();
    host.spawn(Box::new(Game::new()));
    host.spawn(Box::new(StageManagerObject::new()));
    host.step();

    c.bench_function("host_step", |b| {
        b.iter(|| {
            black_box(host.step().commands().len());
        })
    });
}

fn bench_scene_render(c: &mut Criterion) {
    let mut host = FrameHost::new();
    host.spawn(Box::new(Game::new()));
    host.spawn(Box::new(StageManagerObject::new()));
    host.step();

    let view = SceneView::default();
    let mut fb = FrameBuffer::new(80, 40);

    c.bench_function("scene_render_80x40", |b| {
        b.iter(|| {
            view.render_into(host.render_context(), Viewport::new(80, 40), &mut fb);
            black_box(&fb);
        })
    });
}

criterion_group!(
    benches,
    bench_grid_setup,
    bench_coords,
    bench_stage_query,
    bench_host_step,
    bench_scene_render
);
criterion_main!(benches);
