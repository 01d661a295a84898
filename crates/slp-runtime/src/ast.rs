//! Abstract Syntax Tree (AST) definitions
//!
//! Two closed grammars: statements ([`Stm`]) and expressions ([`Exp`]).
//! There is no textual syntax; programs are built directly from these types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// AST schema version
///
/// Included in JSON dumps. Increment when making breaking changes to the
/// AST structure.
pub const AST_VERSION: u32 = 1;

/// Statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stm {
    /// `stm1; stm2`
    Compound(Box<Stm>, Box<Stm>),
    /// `id := exp`
    Assign(String, Box<Exp>),
    /// `print(e1, e2, ...)`, never empty
    Print(Vec<Exp>),
}

/// Expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Exp {
    Id(String),
    Num(i64),
    Op(Box<Exp>, Box<Exp>, BinOp),
    /// Run the statement for its effects, then yield the expression
    Eseq(Box<Stm>, Box<Exp>),
}

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinOp {
    Plus,
    Minus,
    Times,
    Div,
}

impl BinOp {
    /// Source-like symbol for the operator
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Plus => "+",
            BinOp::Minus => "-",
            BinOp::Times => "*",
            BinOp::Div => "/",
        }
    }
}

impl Stm {
    pub fn compound(first: Stm, second: Stm) -> Self {
        Stm::Compound(Box::new(first), Box::new(second))
    }

    pub fn assign(id: impl Into<String>, exp: Exp) -> Self {
        Stm::Assign(id.into(), Box::new(exp))
    }

    pub fn print(exps: Vec<Exp>) -> Self {
        Stm::Print(exps)
    }

    /// Chain statements left to right into right-nested `Compound`s
    pub fn sequence(first: Stm, rest: impl IntoIterator<Item = Stm>) -> Self {
        let mut rest: Vec<Stm> = rest.into_iter().collect();
        match rest.pop() {
            None => first,
            Some(last) => {
                let tail = rest
                    .into_iter()
                    .rev()
                    .fold(last, |acc, stm| Stm::compound(stm, acc));
                Stm::compound(first, tail)
            }
        }
    }
}

impl Exp {
    pub fn id(name: impl Into<String>) -> Self {
        Exp::Id(name.into())
    }

    pub fn num(n: i64) -> Self {
        Exp::Num(n)
    }

    pub fn op(left: Exp, op: BinOp, right: Exp) -> Self {
        Exp::Op(Box::new(left), Box::new(right), op)
    }

    pub fn eseq(stm: Stm, exp: Exp) -> Self {
        Exp::Eseq(Box::new(stm), Box::new(exp))
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Stm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stm::Compound(first, second) => write!(f, "{}; {}", first, second),
            Stm::Assign(id, exp) => write!(f, "{} := {}", id, exp),
            Stm::Print(exps) => {
                f.write_str("print(")?;
                for (i, exp) in exps.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", exp)?;
                }
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for Exp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exp::Id(name) => f.write_str(name),
            Exp::Num(n) => write!(f, "{}", n),
            Exp::Op(left, right, op) => {
                write_operand(f, left)?;
                write!(f, " {} ", op)?;
                write_operand(f, right)
            }
            Exp::Eseq(stm, exp) => write!(f, "({}, {})", stm, exp),
        }
    }
}

/// Nested operators are parenthesized so the rendering stays unambiguous
fn write_operand(f: &mut fmt::Formatter<'_>, exp: &Exp) -> fmt::Result {
    match exp {
        Exp::Op(..) => write!(f, "({})", exp),
        _ => write!(f, "{}", exp),
    }
}

/// Versioned program wrapper for JSON serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionedProgram {
    /// AST schema version
    pub ast_version: u32,
    /// Root statement
    pub program: Stm,
}

impl VersionedProgram {
    pub fn new(program: Stm) -> Self {
        Self {
            ast_version: AST_VERSION,
            program,
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl From<Stm> for VersionedProgram {
    fn from(program: Stm) -> Self {
        Self::new(program)
    }
}
