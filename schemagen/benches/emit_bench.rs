use criterion::{black_box, criterion_group, criterion_main, Criterion};
use schemagen::emit::{netlist, schematic, DesignMeta};
use schemagen::{build_model, parser, registry, SequentialIdGenerator};

fn bench_parse_and_build(c: &mut Criterion) {
    let reg = registry::builtin();

    c.bench_function("parse_and_build", |b| {
        b.iter(|| build_model(black_box(parser::builtin_netlist()), black_box(&reg)));
    });
}

fn bench_emit_netlist(c: &mut Criterion) {
    let reg = registry::builtin();
    let (model, _) = build_model(parser::builtin_netlist(), &reg);
    let meta = DesignMeta::with_date("bench-board", "2024-01-01 00:00:00");

    c.bench_function("emit_netlist", |b| {
        b.iter(|| netlist::emit(black_box(&model), black_box(&reg), black_box(&meta)));
    });
}

fn bench_emit_schematic(c: &mut Criterion) {
    let reg = registry::builtin();
    let (model, _) = build_model(parser::builtin_netlist(), &reg);

    c.bench_function("emit_schematic", |b| {
        b.iter(|| {
            let mut ids = SequentialIdGenerator::new();
            schematic::emit(black_box(&model), black_box(&reg), &mut ids, 8)
        });
    });
}

criterion_group!(
    benches,
    bench_parse_and_build,
    bench_emit_netlist,
    bench_emit_schematic
);
criterion_main!(benches);
