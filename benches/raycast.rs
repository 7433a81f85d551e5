use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_raycaster::core::{cast_ray, shade_column, Frame, PlayerPose, RenderMode, TileGrid};

fn bench_cast_column(c: &mut Criterion) {
    let grid = TileGrid::default_map();
    let pose = PlayerPose::default();

    c.bench_function("cast_ray_center_column", |b| {
        b.iter(|| cast_ray(black_box(60), 120, &pose, &grid))
    });
}

fn bench_shade_column(c: &mut Criterion) {
    let grid = TileGrid::default_map();
    let pose = PlayerPose::default();
    let hit = cast_ray(60, 120, &pose, &grid);
    let mut column = vec![' '; 40];

    c.bench_function("shade_column_40_rows", |b| {
        b.iter(|| shade_column(black_box(hit), pose.depth, &mut column))
    });
}

fn bench_frame_serial(c: &mut Criterion) {
    let grid = TileGrid::default_map();
    let pose = PlayerPose::default();
    let mut frame = Frame::new(120, 40);

    c.bench_function("frame_120x40_serial", |b| {
        b.iter(|| frame.render(black_box(&pose), &grid, RenderMode::Serial))
    });
}

fn bench_frame_parallel(c: &mut Criterion) {
    let grid = TileGrid::default_map();
    let pose = PlayerPose::default();
    let mut frame = Frame::new(120, 40);

    c.bench_function("frame_120x40_parallel", |b| {
        b.iter(|| frame.render(black_box(&pose), &grid, RenderMode::Parallel))
    });
}

criterion_group!(
    benches,
    bench_cast_column,
    bench_shade_column,
    bench_frame_serial,
    bench_frame_parallel
);
criterion_main!(benches);
