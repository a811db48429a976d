use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ridgeline::{build_mesh, generate_heightmap, TerrainKind, TerrainPreset};

fn preset_for(kind: TerrainKind) -> TerrainPreset {
    TerrainPreset {
        kind,
        roughness: 24.0,
        feature_count: 12,
        ..TerrainPreset::default()
    }
}

fn bench_heightmap(c: &mut Criterion) {
    let mut group = c.benchmark_group("Heightmap Synthesis");

    for &width in &[100, 1000, 10000] {
        for kind in [TerrainKind::RockyMountains, TerrainKind::RollingHills] {
            let preset = preset_for(kind);
            group.bench_function(format!("{kind:?}_{width}"), |b| {
                b.iter(|| {
                    let mut rng = ChaCha8Rng::seed_from_u64(42);
                    black_box(generate_heightmap(width, 1, &preset, &mut rng).unwrap());
                });
            });
        }
    }

    group.finish();
}

fn bench_meshing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Mesh Building");

    for &width in &[100, 1000, 10000] {
        let preset = preset_for(TerrainKind::RockyMountains);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let heights = generate_heightmap(width, 1, &preset, &mut rng).unwrap();
        group.bench_function(format!("build_mesh_{width}"), |b| {
            b.iter(|| {
                black_box(build_mesh(&heights, width, 1));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_heightmap, bench_meshing);
criterion_main!(benches);
