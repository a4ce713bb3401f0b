use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use nestcss::{RuntimeInstance, StyleSheetBuffer, Variables, compile_source, expand_selectors};

fn bench_expand_selectors(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand_selectors");

    // Each level holds three alternatives, so output grows as 3^depth
    for depth in [1, 2, 4, 6] {
        let stack: Vec<Vec<String>> = (0..depth)
            .map(|level| (0..3).map(|i| format!(".l{level}-{i}")).collect())
            .collect();

        group.throughput(Throughput::Elements(3u64.pow(depth as u32)));
        group.bench_with_input(BenchmarkId::new("depth", depth), &stack, |b, stack| {
            b.iter(|| expand_selectors(black_box(stack)))
        });
    }
    group.finish();
}

fn bench_rerender(c: &mut Criterion) {
    let mut source = String::from("$color: red;\n$gap: 4px;\n");
    for i in 0..50 {
        source.push_str(&format!(
            ".block-{i}, section {{ color: $color; .inner {{ margin: $gap; span {{ padding: $gap; }} }} }}\n"
        ));
    }
    let program = compile_source(&source).expect("benchmark stylesheet compiles");
    let mut instance = RuntimeInstance::new(program, StyleSheetBuffer::new()).unwrap();
    let overrides: Variables = [("$color", "blue")].into_iter().collect();

    c.bench_function("render_with_variables_50_blocks", |b| {
        b.iter(|| instance.render_with_variables(black_box(&overrides)))
    });
}

criterion_group!(benches, bench_expand_selectors, bench_rerender);
criterion_main!(benches);
