use std::sync::Arc;

use claimcheck::{check_item, check_item_with_config, MatchConfig, PolicyDocument};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const WELLNESS: &str = include_str!("../policies/wellness.json");

fn policy_load_bench(c: &mut Criterion) {
    c.bench_function("policy_from_json_str", |b| {
        b.iter(|| {
            let doc = PolicyDocument::from_json_str(black_box(WELLNESS)).expect("bench policy");
            black_box(doc);
        });
    });
}

fn check_item_bench(c: &mut Criterion) {
    let policy = PolicyDocument::from_json_str(WELLNESS).expect("bench policy");

    c.bench_function("check_item_cold_matcher", |b| {
        b.iter(|| {
            let result = check_item(black_box("yogaa mat"), &policy).expect("bench check");
            black_box(result);
        });
    });
}

fn check_item_with_config_bench(c: &mut Criterion) {
    let policy = Arc::new(PolicyDocument::from_json_str(WELLNESS).expect("bench policy"));
    let cfg = MatchConfig::default();

    c.bench_function("check_item_with_config_suggestion", |b| {
        b.iter(|| {
            let result =
                check_item_with_config(black_box("crossfit box"), Arc::clone(&policy), cfg.clone())
                    .expect("bench check");
            black_box(result);
        });
    });
}

criterion_group!(
    benches,
    policy_load_bench,
    check_item_bench,
    check_item_with_config_bench
);
criterion_main!(benches);
