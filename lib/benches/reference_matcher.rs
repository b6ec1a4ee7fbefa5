#[macro_use]
extern crate criterion;

use bimatch::bipartite::maximum_bipartite_matching;
use bimatch::random::random_graph;
use bimatch::GraphView;
use criterion::Criterion;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn criterion_function(c: &mut Criterion) {
    c.bench_function_over_inputs(
        "reference matcher sparse",
        |b, size| {
            let mut rng = SmallRng::seed_from_u64(**size as u64);
            let p = 4.0 / **size as f64;
            let graph = random_graph(&mut rng, **size, **size, p);
            let view = GraphView::new(&graph).expect("random graphs are valid");
            let mut seen = Vec::with_capacity(view.right_count());
            let mut matches = Vec::with_capacity(view.right_count());
            b.iter(|| maximum_bipartite_matching(&view, &mut seen, &mut matches))
        },
        &[100, 1000, 4000],
    );
}

criterion_group!(benches, criterion_function);
criterion_main!(benches);
