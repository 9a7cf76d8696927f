//! Benchmark for tree diffing performance.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scissors_core::{
    diff_trees, ClassEntry, DiffOptions, FieldEntry, MappingTree, MethodEntry, ParameterEntry,
};

/// Synthetic tree; every `rename_every`-th method gets a distinct name suffix.
fn synthetic_tree(classes: usize, suffix: &str, rename_every: usize) -> MappingTree {
    let namespaces = vec!["intermediary".to_string(), "named".to_string()];
    let classes = (0..classes)
        .map(|c| {
            let mut class = ClassEntry::new(vec![format!("c/C{}", c), format!("pkg/Class{}", c)]);
            for f in 0..8 {
                class = class.with_field(FieldEntry::new(
                    "I",
                    vec![format!("f{}", f), format!("field{}", f)],
                ));
            }
            for m in 0..16 {
                let name = if (c * 16 + m) % rename_every == 0 {
                    format!("method{}{}", m, suffix)
                } else {
                    format!("method{}", m)
                };
                class = class.with_method(
                    MethodEntry::new("(II)V", vec![format!("m{}", m), name])
                        .with_parameter(ParameterEntry::new(
                            1,
                            vec!["p1".to_string(), "first".to_string()],
                        ))
                        .with_parameter(ParameterEntry::new(
                            2,
                            vec!["p2".to_string(), "second".to_string()],
                        )),
                );
            }
            class
        })
        .collect();
    MappingTree::new(namespaces, classes)
}

fn bench_diff_identical(c: &mut Criterion) {
    let tree = synthetic_tree(2000, "", 1);

    c.bench_function("diff_2000_classes_identical", |b| {
        b.iter(|| diff_trees(black_box(&tree), black_box(&tree), &DiffOptions::default()))
    });
}

fn bench_diff_sparse_changes(c: &mut Criterion) {
    let a = synthetic_tree(2000, "Renamed", 7);
    let b = synthetic_tree(2000, "", 7);

    c.bench_function("diff_2000_classes_sequential", |bench| {
        bench.iter(|| diff_trees(black_box(&a), black_box(&b), &DiffOptions::default()))
    });

    let parallel = DiffOptions::default().parallel(true);
    c.bench_function("diff_2000_classes_parallel", |bench| {
        bench.iter(|| diff_trees(black_box(&a), black_box(&b), &parallel))
    });
}

criterion_group!(benches, bench_diff_identical, bench_diff_sparse_changes);
criterion_main!(benches);
