//! Static maximum-argument analysis
//!
//! Walks a program without executing it and reports the widest `print`
//! statement reachable from the root, including prints nested inside
//! expression sequences.

use crate::ast::{Exp, Stm};

/// Maximum number of arguments of any `print` reachable from `stm`
///
/// An assignment only contributes when its right-hand side is itself an
/// expression sequence; statements can only enter expression position
/// through `Eseq`.
pub fn maxargs(stm: &Stm) -> usize {
    match stm {
        Stm::Compound(first, second) => maxargs(first).max(maxargs(second)),
        Stm::Assign(_, exp) => match exp.as_ref() {
            Exp::Eseq(stm, exp) => maxargs(stm).max(maxargs_exp(exp)),
            _ => 0,
        },
        Stm::Print(exps) => exps.len(),
    }
}

/// Maximum number of arguments of any `print` nested inside `exp`
pub fn maxargs_exp(exp: &Exp) -> usize {
    match exp {
        Exp::Id(_) | Exp::Num(_) => 0,
        Exp::Op(left, right, _) => maxargs_exp(left).max(maxargs_exp(right)),
        Exp::Eseq(stm, exp) => maxargs(stm).max(maxargs_exp(exp)),
    }
}
