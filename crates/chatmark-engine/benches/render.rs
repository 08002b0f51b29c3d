use chatmark_engine::{Renderer, parsing::runs::extract_runs};
use criterion::{Criterion, criterion_group, criterion_main};
mod common;

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(10);

    let content = common::generate_chat_content(100);
    let renderer = Renderer::default();

    group.bench_function("full_pipeline", |b| {
        b.iter(|| {
            let html = renderer.render(std::hint::black_box(&content));
            std::hint::black_box(html);
        });
    });

    group.bench_function("extract_runs", |b| {
        b.iter(|| {
            let runs = extract_runs(std::hint::black_box(&content));
            std::hint::black_box(runs);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
