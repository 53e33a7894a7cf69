//! Benchmarks for the tailor pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tailor::registry::BuiltinThemes;
use tailor::{compose, flatten_colours, TailwindConfig, Theme, TokenSet};

// -- Parsing benchmarks --

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let theme_yaml = serde_yaml::to_string(&BuiltinThemes::financial_dark()).unwrap();
    let tokens_yaml = serde_yaml::to_string(&TokenSet::default_tokens()).unwrap();

    group.bench_function("parse_theme", |b| {
        b.iter(|| Theme::parse(black_box(&theme_yaml)).unwrap())
    });

    group.bench_function("parse_tokens", |b| {
        b.iter(|| TokenSet::parse(black_box(&tokens_yaml)).unwrap())
    });

    group.finish();
}

// -- Composition benchmarks --

fn bench_composing(c: &mut Criterion) {
    let mut group = c.benchmark_group("composing");

    let tokens = TokenSet::default_tokens();
    let theme = BuiltinThemes::financial_dark();

    group.bench_function("flatten_colours", |b| {
        b.iter(|| flatten_colours(black_box(&theme.colours)).unwrap())
    });

    group.bench_function("compose", |b| {
        b.iter(|| compose(black_box(&tokens), black_box(&theme)).unwrap())
    });

    group.bench_function("compose_to_json", |b| {
        b.iter(|| {
            let extend = compose(black_box(&tokens), black_box(&theme)).unwrap();
            TailwindConfig::new(vec!["./src/**/*.rs".to_string()], "class", extend)
                .to_json()
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_composing);
criterion_main!(benches);
