use std::rc::Rc;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use frieza::{lexer::lexer::tokenize, parser::parser::parse};

fn front_end(source: &str) {
    let tokens = tokenize(source.to_string(), None).unwrap();
    let program = parse(tokens, Rc::new("bench".to_string())).unwrap();
    assert!(!program.is_empty());
}

fn long_expr(c: &mut Criterion) {
    let mut group = c.benchmark_group("long-expr");

    let mut source = "1".to_string();
    for _i in 0..1000 {
        source.push_str(" + 1");
    }
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("long-expr", |b| b.iter(|| front_end(&source)));
}

fn stress_precedence(c: &mut Criterion) {
    let mut group = c.benchmark_group("stress-precedence");

    let mut source = "x = 1".to_string();
    for _i in 0..200 {
        source.push_str(" - (2 * -y) / 3 + 5 * 5");
    }
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("stress-precedence", |b| b.iter(|| front_end(&source)));
}

fn many_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("many-statements");

    let mut source = String::new();
    for i in 0..500 {
        source.push_str(&format!("value{} = {} * 2.5 // comment\n", i, i));
    }
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("many-statements", |b| b.iter(|| front_end(&source)));
}

criterion_group!(benches, long_expr, stress_precedence, many_statements);
criterion_main!(benches);
