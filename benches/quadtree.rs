use ballpit::SimConfig;
use ballpit::sim::{Body, World, build_tree, resolve_collisions};
use ballpit::spatial::{Point, Quadtree, Rectangle};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use rand_pcg::Pcg32;

fn field() -> Rectangle {
    Rectangle::new(640.0, 360.0, 1280.0, 720.0).expect("valid field")
}

fn random_points(count: usize) -> Vec<Point<usize>> {
    let mut rng = Pcg32::seed_from_u64(1);
    (0..count)
        .map(|i| Point::new(rng.random_range(0.0..1280.0), rng.random_range(0.0..720.0), i))
        .collect()
}

fn insert_benchmark(c: &mut Criterion) {
    let points = random_points(500);
    c.bench_function("quadtree_build_500", |b| {
        b.iter(|| {
            let mut quadtree = Quadtree::new(field(), 4).expect("valid capacity");
            for point in &points {
                quadtree.insert(black_box(*point));
            }
            quadtree
        })
    });
}

fn query_benchmark(c: &mut Criterion) {
    let mut quadtree = Quadtree::new(field(), 4).expect("valid capacity");
    for point in random_points(500) {
        quadtree.insert(point);
    }
    let range = Rectangle::new(400.0, 300.0, 60.0, 60.0).expect("valid range");

    c.bench_function("quadtree_query", |b| {
        b.iter(|| {
            let mut found = Vec::new();
            quadtree.query(black_box(&range), &mut found);
            found.len()
        })
    });
}

fn collisions_benchmark(c: &mut Criterion) {
    let mut world = World::new(SimConfig::default(), 3);
    for _ in 0..199 {
        world.add_body();
    }
    // Spread the bodies out from the spawn point first
    for frame in 0..600 {
        world.frame(frame as f64 * 16.0);
    }
    let bodies: Vec<Body> = world.bodies().to_vec();
    let config = world.config().clone();

    c.bench_function("resolve_collisions_200", |b| {
        b.iter(|| {
            let mut bodies = bodies.clone();
            let tree = build_tree(&bodies, &config);
            resolve_collisions(black_box(&mut bodies), &tree, &config.viewport)
        })
    });
}

criterion_group!(
    quadtree_benchmarks,
    insert_benchmark,
    query_benchmark,
    collisions_benchmark
);
criterion_main!(quadtree_benchmarks);
