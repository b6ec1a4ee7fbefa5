#[macro_use]
extern crate criterion;

use bimatch::random::random_graph;
use bimatch::{MatchingConfig, MatchingRun};
use criterion::Criterion;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn criterion_function(c: &mut Criterion) {
    c.bench_function_over_inputs(
        "hopcroft_karp sparse",
        |b, size| {
            let mut rng = SmallRng::seed_from_u64(**size as u64);
            // average degree of about 4
            let p = 4.0 / **size as f64;
            let graph = random_graph(&mut rng, **size, **size, p);
            b.iter(|| {
                let run = MatchingRun::from_config(&MatchingConfig::new(&graph))
                    .expect("random graphs are valid");
                assert!(run.complete);
            })
        },
        &[100, 1000, 4000],
    );
    c.bench_function("hopcroft_karp dense 300x300 without greedy seed", |b| {
        let mut rng = SmallRng::seed_from_u64(300);
        let graph = random_graph(&mut rng, 300, 300, 0.5);
        let mut config = MatchingConfig::new(&graph);
        config.greedy_bootstrap = false;
        b.iter(|| MatchingRun::from_config(&config).expect("random graphs are valid"))
    });
}

criterion_group!(benches, criterion_function);
criterion_main!(benches);
