use criterion::{Criterion, criterion_group, criterion_main};
use starlibrary_engine::{parse_str, render_html};
mod common;

fn bench_parse_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("parse", |b| {
        b.iter(|| {
            let blocks = parse_str(std::hint::black_box(&content));
            std::hint::black_box(blocks);
        });
    });

    let blocks = parse_str(&content);
    group.bench_function("render", |b| {
        b.iter(|| {
            let html = render_html(std::hint::black_box(&blocks));
            std::hint::black_box(html);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse_and_render);
criterion_main!(benches);
