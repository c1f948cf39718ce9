//! Expression evaluator for record filter expressions.
//!
//! Evaluates parsed filter ASTs against VCF records.

use crate::error::{Result, SvStatError};
use crate::filter::{BinaryOp, Expr, UnaryOp};
use crate::row::VcfRecord;
use crate::value::Value;

/// Evaluate a filter expression against a VCF record.
///
/// # Arguments
///
/// * `expr` - The parsed filter expression AST
/// * `record` - The record to test
///
/// # Returns
///
/// The result of evaluating the expression as a `Value`.
pub fn evaluate<'a>(expr: &'a Expr, record: &'a VcfRecord) -> Result<Value<'a>> {
    match expr {
        Expr::String(s) => Ok(Value::Text(s)),
        Expr::Bool(b) => Ok(Value::Bool(*b)),
        Expr::Column(column) => Ok(Value::Text(record.get(*column))),
        Expr::Binary(left, op, right) => evaluate_binary(left, *op, right, record),
        Expr::Unary(UnaryOp::Not, inner) => Ok(Value::Bool(!evaluate(inner, record)?.truthy())),
    }
}

/// Evaluate a binary operation.
fn evaluate_binary<'a>(
    left: &'a Expr,
    op: BinaryOp,
    right: &'a Expr,
    record: &'a VcfRecord,
) -> Result<Value<'a>> {
    let left_val = evaluate(left, record)?;

    // Logical operators short-circuit before touching the right side
    match op {
        BinaryOp::And if !left_val.truthy() => return Ok(Value::Bool(false)),
        BinaryOp::Or if left_val.truthy() => return Ok(Value::Bool(true)),
        _ => {}
    }

    let right_val = evaluate(right, record)?;

    let result = match op {
        BinaryOp::Eq => values_equal(&left_val, &right_val)?,
        BinaryOp::NotEq => !values_equal(&left_val, &right_val)?,
        BinaryOp::Contains => {
            let (l, r) = text_operands(&left_val, &right_val)?;
            l.contains(r)
        }
        BinaryOp::StartsWith => {
            let (l, r) = text_operands(&left_val, &right_val)?;
            l.starts_with(r)
        }
        BinaryOp::And | BinaryOp::Or => right_val.truthy(),
    };
    Ok(Value::Bool(result))
}

/// Check if two values of the same kind are equal.
fn values_equal(left: &Value, right: &Value) -> Result<bool> {
    match (left, right) {
        (Value::Text(l), Value::Text(r)) => Ok(l == r),
        (Value::Bool(l), Value::Bool(r)) => Ok(l == r),
        _ => Err(type_mismatch(left, right)),
    }
}

fn text_operands<'a>(left: &Value<'a>, right: &Value<'a>) -> Result<(&'a str, &'a str)> {
    match (left.as_text(), right.as_text()) {
        (Some(l), Some(r)) => Ok((l, r)),
        _ => Err(type_mismatch(left, right)),
    }
}

fn type_mismatch(left: &Value, right: &Value) -> SvStatError {
    SvStatError::TypeMismatch {
        left: left.type_name().to_string(),
        right: right.type_name().to_string(),
    }
}
