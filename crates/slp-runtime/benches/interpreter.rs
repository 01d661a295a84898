//! Interpreter execution benchmarks
//!
//! Measures:
//! - The canonical sample program end to end
//! - Lookup cost as the binding chain grows
//! - The maxargs walk over a long statement sequence

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use slp_runtime::{maxargs, samples, BinOp, Exp, Interpreter, OutputWriter, Stm};
use std::cell::RefCell;
use std::rc::Rc;

/// `x0 := 0; x1 := x0 + 1; ...; print(xN)`
fn assignment_chain(len: usize) -> Stm {
    let first = Stm::assign("x0", Exp::num(0));
    let rest = (1..len)
        .map(|i| {
            Stm::assign(
                format!("x{}", i),
                Exp::op(Exp::id(format!("x{}", i - 1)), BinOp::Plus, Exp::num(1)),
            )
        })
        .chain(std::iter::once(Stm::print(vec![Exp::id(format!("x{}", len - 1))])));
    Stm::sequence(first, rest)
}

/// Discard print output so iterations don't accumulate memory
fn sink() -> OutputWriter {
    Rc::new(RefCell::new(std::io::sink()))
}

fn bench_canonical_program(c: &mut Criterion) {
    let program = samples::prog();
    c.bench_function("interp_canonical_prog", |b| {
        let interp = Interpreter::with_output(sink());
        b.iter(|| interp.interpret(black_box(&program)))
    });
}

fn bench_lookup_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("interp_assignment_chain");
    for len in [10, 100, 1000] {
        let program = assignment_chain(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &program, |b, program| {
            let interp = Interpreter::with_output(sink());
            b.iter(|| interp.interpret(black_box(program)))
        });
    }
    group.finish();
}

fn bench_maxargs(c: &mut Criterion) {
    let program = assignment_chain(1000);
    c.bench_function("maxargs_chain_1000", |b| b.iter(|| maxargs(black_box(&program))));
}

criterion_group!(benches, bench_canonical_program, bench_lookup_depth, bench_maxargs);
criterion_main!(benches);
