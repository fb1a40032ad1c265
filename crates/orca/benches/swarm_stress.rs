use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use krill::{Particle, SwarmOptions, simulate};
use orca::{Dashboard, Grouping, SwarmConfig};
use orca_core::{IngestReport, Record};
use std::hint::black_box;

// Shaped like a full draft dataset: picks 1..224, radii in the dashboard's
// 1-12px range, everything pulled to one midline.
fn stress_particles(n: u32) -> Vec<Particle> {
    (0..n)
        .map(|i| Particle {
            id: i,
            x_target: 40.0 + f64::from(i % 224) / 223.0 * 820.0,
            y_target: 230.0,
            radius: 1.0 + f64::from(i % 12),
        })
        .collect()
}

fn stress_records(n: u32) -> Vec<Record> {
    let nations = ["CA", "US", "SE", "FI", "RU", "CZ", "SK", "DE", "CH", "LV"];
    let positions = ["C", "LW", "RW", "D", "G"];
    (0..n)
        .map(|i| Record {
            overall_pick: i % 224 + 1,
            year: 1963 + (i as i32 % 60),
            player: format!("Player {i}"),
            nationality: nations[i as usize % nations.len()].to_string(),
            position: positions[i as usize % positions.len()].to_string(),
            goals: i * 7 % 500,
            assists: i * 11 % 700,
            points: i * 7 % 500 + i * 11 % 700,
            games_played: i * 13 % 1400,
        })
        .collect()
}

fn bench_swarm_stress(c: &mut Criterion) {
    let particles = stress_particles(2000);
    let opts = SwarmOptions::default();

    let mut group = c.benchmark_group("swarm_stress");
    group.sample_size(20);

    group.bench_function("relax_2000_particles", |b| {
        b.iter(|| {
            let snapshot = simulate(black_box(&particles), &opts).expect("layout");
            black_box(snapshot.len());
        });
    });

    let records = stress_records(2000);
    let report = IngestReport {
        rows: records.len(),
        coerced: 0,
    };
    let dashboard = Dashboard::from_records(records, report);
    let base_view = dashboard.swarm_view(SwarmConfig::default());

    // Fresh view per run so every snapshot request actually simulates
    // instead of hitting the cache.
    group.bench_function("grouped_snapshot_2000_records", |b| {
        b.iter_batched(
            || base_view.clone(),
            |mut view| {
                let snapshot = view.snapshot(Grouping::Nationality).expect("layout");
                black_box(snapshot.len());
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_swarm_stress);
criterion_main!(benches);
