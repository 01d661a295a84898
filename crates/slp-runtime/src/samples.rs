//! Built-in sample programs
//!
//! There is no parser, so programs are assembled here as AST literals and
//! handed to the interpreter by the caller.

use crate::ast::{BinOp, Exp, Stm};

/// A named sample program
pub struct Sample {
    pub name: &'static str,
    pub description: &'static str,
    build: fn() -> Stm,
}

impl Sample {
    /// Build a fresh copy of the program
    pub fn program(&self) -> Stm {
        (self.build)()
    }
}

/// Name of the canonical sample
pub const DEFAULT_SAMPLE: &str = "prog";

/// All built-in samples, canonical program first
pub const SAMPLES: &[Sample] = &[
    Sample {
        name: "prog",
        description: "a := 5 + 3; b := (print(a, a - 1), 10 * a); print(b)",
        build: prog,
    },
    Sample {
        name: "sequencing",
        description: "x := 1; x := 2; print(x)",
        build: sequencing,
    },
    Sample {
        name: "operand-order",
        description: "print((x := 1, x) + (x := 2, x), x)",
        build: operand_order,
    },
    Sample {
        name: "shadowing",
        description: "rebinding keeps the newest value visible",
        build: shadowing,
    },
    Sample {
        name: "nested-print",
        description: "prints nested in print arguments and assignments",
        build: nested_print,
    },
    Sample {
        name: "unbound",
        description: "reads an identifier that was never assigned",
        build: unbound,
    },
    Sample {
        name: "div-by-zero",
        description: "prints, then divides by a zero-valued variable",
        build: div_by_zero,
    },
];

/// Look up a sample by name
pub fn find(name: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|sample| sample.name == name)
}

/// The canonical program
///
/// ```text
/// a := 5 + 3;
/// b := (print(a, a - 1), 10 * a);
/// print(b)
/// ```
///
/// Prints `8 7` then `80`; its widest print has two arguments.
pub fn prog() -> Stm {
    Stm::compound(
        Stm::assign("a", Exp::op(Exp::num(5), BinOp::Plus, Exp::num(3))),
        Stm::compound(
            Stm::assign(
                "b",
                Exp::eseq(
                    Stm::print(vec![
                        Exp::id("a"),
                        Exp::op(Exp::id("a"), BinOp::Minus, Exp::num(1)),
                    ]),
                    Exp::op(Exp::num(10), BinOp::Times, Exp::id("a")),
                ),
            ),
            Stm::print(vec![Exp::id("b")]),
        ),
    )
}

fn sequencing() -> Stm {
    Stm::compound(
        Stm::compound(
            Stm::assign("x", Exp::num(1)),
            Stm::assign("x", Exp::num(2)),
        ),
        Stm::print(vec![Exp::id("x")]),
    )
}

fn operand_order() -> Stm {
    Stm::print(vec![
        Exp::op(
            Exp::eseq(Stm::assign("x", Exp::num(1)), Exp::id("x")),
            BinOp::Plus,
            Exp::eseq(Stm::assign("x", Exp::num(2)), Exp::id("x")),
        ),
        Exp::id("x"),
    ])
}

fn shadowing() -> Stm {
    Stm::sequence(
        Stm::assign("n", Exp::num(1)),
        vec![
            Stm::assign("m", Exp::op(Exp::id("n"), BinOp::Times, Exp::num(100))),
            Stm::assign("n", Exp::op(Exp::id("n"), BinOp::Plus, Exp::num(1))),
            Stm::print(vec![Exp::id("n"), Exp::id("m")]),
        ],
    )
}

fn nested_print() -> Stm {
    Stm::sequence(
        Stm::assign(
            "a",
            Exp::eseq(
                Stm::print(vec![Exp::num(1), Exp::num(2), Exp::num(3)]),
                Exp::num(7),
            ),
        ),
        vec![Stm::print(vec![
            Exp::id("a"),
            Exp::eseq(
                Stm::print(vec![Exp::num(0), Exp::num(0), Exp::num(0), Exp::num(0)]),
                Exp::op(Exp::id("a"), BinOp::Div, Exp::num(2)),
            ),
        ])],
    )
}

fn unbound() -> Stm {
    Stm::compound(
        Stm::assign("a", Exp::num(1)),
        Stm::print(vec![Exp::id("a"), Exp::id("b")]),
    )
}

fn div_by_zero() -> Stm {
    Stm::sequence(
        Stm::assign("zero", Exp::op(Exp::num(3), BinOp::Minus, Exp::num(3))),
        vec![
            Stm::print(vec![Exp::num(42)]),
            Stm::print(vec![Exp::op(Exp::num(1), BinOp::Div, Exp::id("zero"))]),
        ],
    )
}
