mod common;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use practical::{compile, compile_json};

fn bench_compiler(c: &mut Criterion) {
    for (label, path) in common::WORKLOADS {
        let source = common::load_source(path);
        let program = common::load_program(path);

        c.bench_function(&format!("compile_json_{label}"), |b| {
            b.iter(|| {
                let out = compile_json(black_box(&source)).expect("compile");
                black_box(out);
            })
        });

        c.bench_function(&format!("compile_only_{label}"), |b| {
            b.iter(|| {
                let out = compile(black_box(&program)).expect("compile");
                black_box(out);
            })
        });
    }
}

criterion_group!(benches, bench_compiler);
criterion_main!(benches);
