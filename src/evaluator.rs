use crate::ast::{Document, Value};
use crate::QuillError;

/// Evaluate a whitespace-tokenized postfix expression against the bindings
/// accumulated so far.
///
/// Token dispatch order is fixed: digits, then context lookup, then
/// operators. A context key spelled entirely in digits is therefore
/// unreachable; the digit check always claims the token first.
///
/// An expression that leaves the stack empty evaluates to `Value::Null`.
/// Leftover operands below the top are discarded, not reported.
pub fn evaluate(expression: &str, context: &Document, line: usize) -> Result<Value, QuillError> {
    let mut stack: Vec<Value> = Vec::new();

    for token in expression.split_whitespace() {
        if is_digits(token) {
            stack.push(Value::Integer(parse_integer(token, line)?));
        } else if let Some(value) = context.get(token) {
            stack.push(value.clone());
        } else {
            match token {
                "+" | "-" | "*" => apply_arithmetic(token, &mut stack, line)?,
                "sort()" => apply_sort(&mut stack, line)?,
                _ => {
                    return Err(QuillError::UnknownToken {
                        token: token.to_string(),
                        line,
                        hint: Some("Expected a number, a declared name, or one of + - * sort()".into()),
                        code: Some(203),
                    });
                }
            }
        }
    }

    Ok(stack.pop().unwrap_or(Value::Null))
}

pub(crate) fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

pub(crate) fn parse_integer(token: &str, line: usize) -> Result<i64, QuillError> {
    token.parse::<i64>().map_err(|_| QuillError::SyntaxError {
        message: format!("Integer literal '{}' is out of range", token),
        line,
        hint: Some("Integers must fit in a signed 64-bit value".into()),
        code: Some(201),
    })
}

fn apply_arithmetic(operator: &str, stack: &mut Vec<Value>, line: usize) -> Result<(), QuillError> {
    let b = pop_operand(operator, stack, line)?;
    let a = pop_operand(operator, stack, line)?;

    match (&a, &b) {
        (Value::Integer(a), Value::Integer(b)) => {
            let result = match operator {
                "+" => a.checked_add(*b),
                "-" => a.checked_sub(*b),
                _ => a.checked_mul(*b),
            };
            let result = result.ok_or_else(|| QuillError::TypeMismatch {
                message: format!("Integer overflow evaluating '{} {} {}'", a, b, operator),
                line,
                hint: Some("Results must fit in a signed 64-bit value".into()),
                code: Some(204),
            })?;
            stack.push(Value::Integer(result));
            Ok(())
        }
        _ => Err(QuillError::TypeMismatch {
            message: format!(
                "Operator '{}' needs two integers, found {} and {}",
                operator,
                a.kind(),
                b.kind()
            ),
            line,
            hint: None,
            code: Some(204),
        }),
    }
}

fn apply_sort(stack: &mut Vec<Value>, line: usize) -> Result<(), QuillError> {
    let operand = pop_operand("sort()", stack, line)?;

    let items = match operand {
        Value::List(items) => items,
        other => {
            return Err(QuillError::TypeMismatch {
                message: format!("sort() needs a list, found {}", other.kind()),
                line,
                hint: None,
                code: Some(204),
            });
        }
    };

    stack.push(Value::List(sort_items(items, line)?));
    Ok(())
}

/// Ascending natural order: integers numerically, text lexicographically.
/// Mixed element kinds fail fast instead of attempting a partial comparison.
fn sort_items(items: Vec<Value>, line: usize) -> Result<Vec<Value>, QuillError> {
    if items.iter().all(|v| matches!(v, Value::Integer(_))) {
        let mut numbers: Vec<i64> = items
            .iter()
            .map(|v| v.as_integer().unwrap_or_default())
            .collect();
        numbers.sort_unstable();
        return Ok(numbers.into_iter().map(Value::Integer).collect());
    }

    if items.iter().all(|v| matches!(v, Value::Text(_))) {
        let mut texts: Vec<String> = items
            .into_iter()
            .map(|v| match v {
                Value::Text(s) => s,
                _ => unreachable!(),
            })
            .collect();
        texts.sort();
        return Ok(texts.into_iter().map(Value::Text).collect());
    }

    Err(QuillError::TypeMismatch {
        message: "sort() needs a list of all integers or all text".into(),
        line,
        hint: Some("Mixed-kind lists have no natural ordering".into()),
        code: Some(204),
    })
}

fn pop_operand(operator: &str, stack: &mut Vec<Value>, line: usize) -> Result<Value, QuillError> {
    stack.pop().ok_or_else(|| QuillError::StackUnderflow {
        operator: operator.to_string(),
        line,
        hint: Some("Each operator needs its operands pushed first".into()),
        code: Some(205),
    })
}

// -- Tests --
