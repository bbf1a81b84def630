use criterion::{criterion_group, criterion_main};

mod pipeline;

criterion_group!(
    benches,
    pipeline::bench_encode,
    pipeline::bench_decode,
    pipeline::bench_evaluate_line,
    pipeline::bench_assemble_and_answer
);
criterion_main!(benches);
