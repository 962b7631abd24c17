use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tol::engine::TclEngine;
use tol::processor::Processor;
use tol::report::Reporter;

fn owned(args: &[&str]) -> Vec<String> {
    args.iter().map(|&s| s.to_owned()).collect()
}

/// `-c` pieces for a list of `n` words, closed and measured with `llength`.
fn continued_list(n: usize) -> Vec<String> {
    let mut args = owned(&["-c", "set l [list"]);
    for i in 0..n {
        args.push("-c".to_owned());
        args.push(format!("w{i}"));
    }
    args.extend(owned(&["]", "-p", "llength $l"]));
    args
}

fn run(args: &[String]) -> Vec<u8> {
    let mut p = Processor::new(TclEngine::new(), Reporter::new(Vec::new(), Vec::new()));
    p.run(args).unwrap();
    p.into_reporter().into_inner().0
}

fn bench_scan(c: &mut Criterion) {
    let plain = owned(&["set a 1", "incr a", "-p", "expr {$a * 2}"]);
    let with_reset = owned(&["set a 1", "-r", "-s", "a", "2", "-p", "set a"]);
    let continued_small = continued_list(8);
    let continued_large = continued_list(128);

    let mut g = c.benchmark_group("scan");

    g.bench_function("plain", |b| b.iter(|| run(black_box(&plain))));
    g.bench_function("reset_and_set", |b| b.iter(|| run(black_box(&with_reset))));
    g.bench_function("continue_8", |b| b.iter(|| run(black_box(&continued_small))));
    g.bench_function("continue_128", |b| b.iter(|| run(black_box(&continued_large))));

    g.finish();
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
