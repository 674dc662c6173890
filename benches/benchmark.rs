//! Performance benchmarks for readability-sandbox.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - Every back-end on a small synthetic article
//! - Markdown rendering of an extracted result
//! - Local HTML files under `bench-data/` when present

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use readability_sandbox::{extract, parse, render, Backend};
use std::fs;

const SAMPLE_HTML: &str = include_str!("../assets/sample.html");

fn bench_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    group.throughput(Throughput::Bytes(SAMPLE_HTML.len() as u64));

    for backend in Backend::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(backend), &backend, |b, backend| {
            b.iter(|| extract(black_box(SAMPLE_HTML), *backend));
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let Ok(result) = extract(SAMPLE_HTML, Backend::Readability) else {
        return;
    };

    c.bench_function("render_markdown", |b| {
        b.iter(|| render(black_box(&result)));
    });
}

/// Full request path minus transport, on local files of varying sizes
fn bench_local_html(c: &mut Criterion) {
    let html_dir = "bench-data";
    let sample_files = ["small.html", "medium.html", "large.html"];

    let mut group = c.benchmark_group("local_files");

    for filename in &sample_files {
        let path = format!("{html_dir}/{filename}");
        if let Ok(html) = fs::read_to_string(&path) {
            let size_kb = html.len() / 1024;
            group.throughput(Throughput::Bytes(html.len() as u64));
            group.bench_with_input(
                BenchmarkId::new("parse", format!("{filename} ({size_kb}KB)")),
                &html,
                |b, html| {
                    b.iter(|| parse(black_box(html), "readability"));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_backends, bench_render, bench_local_html);
criterion_main!(benches);
