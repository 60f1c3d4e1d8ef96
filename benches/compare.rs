use rand::Rng;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spaceship::Complex;

const COUNTS: [usize; 2] = [1000, 10000];

fn random_values(count: usize) -> Vec<Complex> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| Complex::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0)))
        .collect()
}

fn benchmark_relations(c: &mut Criterion) {
    for count in COUNTS {
        let values = random_values(count);

        c.bench_function(format!("compare {count}").as_str(), |b| {
            b.iter(|| {
                for pair in values.windows(2) {
                    black_box(pair[0].compare(&pair[1]));
                }
            });
        });

        c.bench_function(format!("equals {count}").as_str(), |b| {
            b.iter(|| {
                for pair in values.windows(2) {
                    black_box(pair[0].equals(&pair[1]));
                }
            });
        });

        c.bench_function(format!("sort {count}").as_str(), |b| {
            b.iter(|| {
                let mut values = values.clone();
                values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
                black_box(values);
            });
        });
    }
}

criterion_group!(benches, benchmark_relations);
criterion_main!(benches);
