//! Expression evaluation

use crate::ast::{BinOp, Exp};
use crate::interpreter::Interpreter;
use crate::symbol::SymbolTable;
use crate::value::{EvalResult, RuntimeError, Value};

impl Interpreter {
    /// Evaluate an expression against `table`
    ///
    /// Returns the value together with the table reflecting every side effect
    /// performed while evaluating it. Identifier and literal evaluation hand
    /// back the same table version they were given.
    pub fn interpret_expression(
        &self,
        exp: &Exp,
        table: &SymbolTable,
    ) -> EvalResult<(Value, SymbolTable)> {
        match exp {
            Exp::Id(name) => Ok((table.lookup(name)?, table.clone())),
            Exp::Num(n) => Ok((*n, table.clone())),
            Exp::Op(left, right, op) => {
                // The right operand sees the left operand's effects
                let (lhs, table) = self.interpret_expression(left, table)?;
                let (rhs, table) = self.interpret_expression(right, &table)?;
                Ok((apply_binary(*op, lhs, rhs)?, table))
            }
            Exp::Eseq(stm, exp) => {
                let table = self.interpret_statement(stm, table)?;
                self.interpret_expression(exp, &table)
            }
        }
    }
}

/// Apply an arithmetic operator
///
/// Add, subtract and multiply wrap on overflow. Division truncates toward
/// zero; `i64::MIN / -1` wraps instead of trapping.
pub fn apply_binary(op: BinOp, lhs: Value, rhs: Value) -> EvalResult<Value> {
    match op {
        BinOp::Plus => Ok(lhs.wrapping_add(rhs)),
        BinOp::Minus => Ok(lhs.wrapping_sub(rhs)),
        BinOp::Times => Ok(lhs.wrapping_mul(rhs)),
        BinOp::Div => {
            if rhs == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(lhs.wrapping_div(rhs))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Stm;
    use crate::output::capture_writer;
    use rstest::rstest;

    fn interp() -> Interpreter {
        Interpreter::with_output(capture_writer().0)
    }

    #[test]
    fn test_num_returns_same_table() {
        let table = SymbolTable::new().update("a", 1);
        let (value, after) = interp()
            .interpret_expression(&Exp::num(7), &table)
            .unwrap();
        assert_eq!(value, 7);
        assert!(after.ptr_eq(&table));
    }

    #[test]
    fn test_id_reads_without_extending_table() {
        let table = SymbolTable::new().update("a", 5);
        let (value, after) = interp()
            .interpret_expression(&Exp::id("a"), &table)
            .unwrap();
        assert_eq!(value, 5);
        assert!(after.ptr_eq(&table));
    }

    #[test]
    fn test_unbound_identifier() {
        let err = interp()
            .interpret_expression(&Exp::id("nope"), &SymbolTable::new())
            .unwrap_err();
        assert_eq!(err, RuntimeError::unbound("nope"));
    }

    #[rstest]
    #[case(BinOp::Plus, 5, 3, 8)]
    #[case(BinOp::Minus, 5, 8, -3)]
    #[case(BinOp::Times, -4, 6, -24)]
    #[case(BinOp::Div, 7, 2, 3)]
    #[case(BinOp::Div, -7, 2, -3)]
    #[case(BinOp::Div, 7, -2, -3)]
    #[case(BinOp::Plus, i64::MAX, 1, i64::MIN)]
    #[case(BinOp::Div, i64::MIN, -1, i64::MIN)]
    fn test_apply_binary(
        #[case] op: BinOp,
        #[case] lhs: i64,
        #[case] rhs: i64,
        #[case] expected: i64,
    ) {
        assert_eq!(apply_binary(op, lhs, rhs), Ok(expected));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            apply_binary(BinOp::Div, 1, 0),
            Err(RuntimeError::DivisionByZero)
        );
    }

    #[test]
    fn test_operands_evaluated_left_to_right() {
        // (x := 1, x) + (x := 2, x) with x initially unbound
        let exp = Exp::op(
            Exp::eseq(Stm::assign("x", Exp::num(1)), Exp::id("x")),
            BinOp::Plus,
            Exp::eseq(Stm::assign("x", Exp::num(2)), Exp::id("x")),
        );
        let (value, table) = interp()
            .interpret_expression(&exp, &SymbolTable::new())
            .unwrap();
        assert_eq!(value, 3);
        assert_eq!(table.lookup("x"), Ok(2));
    }

    #[test]
    fn test_right_operand_sees_left_effects() {
        // (y := 10, 1) * y
        let exp = Exp::op(
            Exp::eseq(Stm::assign("y", Exp::num(10)), Exp::num(1)),
            BinOp::Times,
            Exp::id("y"),
        );
        let (value, _) = interp()
            .interpret_expression(&exp, &SymbolTable::new())
            .unwrap();
        assert_eq!(value, 10);
    }

    #[test]
    fn test_division_by_zero_from_evaluated_operand() {
        let table = SymbolTable::new().update("z", 0);
        let exp = Exp::op(Exp::num(10), BinOp::Div, Exp::id("z"));
        let err = interp().interpret_expression(&exp, &table).unwrap_err();
        assert_eq!(err, RuntimeError::DivisionByZero);
    }
}
