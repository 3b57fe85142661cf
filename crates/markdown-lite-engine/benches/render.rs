use criterion::{Criterion, criterion_group, criterion_main};
use markdown_lite_engine::to_html;

fn bench_large_inputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(10);

    let inputs = [
        ("plain_text", "a".repeat(1_000_000)),
        ("underscores", "_".repeat(20_000)),
        ("links", "[g](u) ".repeat(5_000)),
        ("escapes", "\\_".repeat(30_000)),
        ("garbage", format!("{}{}", "[".repeat(2_000), ")".repeat(2_000))),
        (
            "mixed_document",
            "# Title _here_\n\nSome __strong _and em_ text__ with [a link](u).\n".repeat(1_000),
        ),
    ];

    for (name, input) in &inputs {
        group.bench_function(*name, |b| {
            b.iter(|| std::hint::black_box(to_html(std::hint::black_box(input))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_large_inputs);
criterion_main!(benches);
