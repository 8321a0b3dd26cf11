use crate::{
    error::EvalError,
    rpn::ops::{self, Function, Operator},
};

/// An RPN token after classification against the operator, function, and
/// constant tables. Constants are resolved to their values here, so the
/// evaluator only ever dispatches over these three forms.
#[derive(Debug, PartialEq)]
enum RpnToken {
    Number(f64),
    Operator(Operator),
    Function(Function),
}

/// Evaluates an RPN token sequence to a single value.
///
/// Tokens are processed strictly left to right against a local operand
/// stack: numbers and constants are pushed, operators and functions pop
/// their operands and push the result. Operand order follows the input, so
/// for binary applications the second-popped value is the left operand.
///
/// # Parameters
/// - `tokens`: The RPN sequence, as produced by [`convert`].
///
/// # Returns
/// The single value the sequence reduces to.
///
/// # Errors
/// - `UnsupportedToken` or `MalformedNumber` for unrecognized tokens.
/// - `InsufficientOperands` if the stack underflows.
/// - `DivisionByZero` if the right operand of `/` is exactly zero.
/// - `MalformedExpression` if anything but one value remains at the end.
///
/// [`convert`]: crate::rpn::converter::convert
pub fn evaluate(tokens: &[String]) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match classify(token)? {
            RpnToken::Number(value) => stack.push(value),

            RpnToken::Operator(op) => {
                let (left, right) = pop_two(&mut stack, op.symbol())?;
                stack.push(apply_operator(op, left, right)?);
            },

            RpnToken::Function(function) => {
                let value = apply_function(&mut stack, function)?;
                stack.push(value);
            },
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(EvalError::MalformedExpression { remaining: stack.len() }),
    }
}

/// Classifies a single RPN token.
///
/// # Errors
/// - `MalformedNumber` if the token starts like a number but does not parse.
/// - `UnsupportedToken` for anything else unrecognized.
fn classify(token: &str) -> Result<RpnToken, EvalError> {
    if let Some(op) = Operator::from_symbol(token) {
        return Ok(RpnToken::Operator(op));
    }
    if let Some(function) = Function::from_name(token) {
        return Ok(RpnToken::Function(function));
    }
    if let Some(value) = ops::constant_value(token) {
        return Ok(RpnToken::Number(value));
    }
    if let Ok(value) = token.parse::<f64>() {
        return Ok(RpnToken::Number(value));
    }
    if token.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return Err(EvalError::MalformedNumber { token: token.to_owned() });
    }
    Err(EvalError::UnsupportedToken { token: token.to_owned() })
}

/// Applies a binary operator.
fn apply_operator(op: Operator, left: f64, right: f64) -> Result<f64, EvalError> {
    Ok(match op {
        Operator::Add => left + right,
        Operator::Sub => left - right,
        Operator::Mul => left * right,
        Operator::Div => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            left / right
        },
        Operator::Pow => left.powf(right),
    })
}

/// Pops a function's operands off the stack and applies it.
fn apply_function(stack: &mut Vec<f64>, function: Function) -> Result<f64, EvalError> {
    Ok(match function {
        Function::Sin => pop_one(stack, function.name())?.sin(),
        Function::Cos => pop_one(stack, function.name())?.cos(),
        Function::Tan => pop_one(stack, function.name())?.tan(),
        Function::Max => {
            let (left, right) = pop_two(stack, function.name())?;
            left.max(right)
        },
        Function::Min => {
            let (left, right) = pop_two(stack, function.name())?;
            left.min(right)
        },
    })
}

/// Pops one operand, failing with the consumer's name on underflow.
fn pop_one(stack: &mut Vec<f64>, name: &str) -> Result<f64, EvalError> {
    stack.pop()
         .ok_or_else(|| EvalError::InsufficientOperands { name: name.to_owned() })
}

/// Pops two operands, failing with the consumer's name on underflow. The
/// second-popped value is returned first: it is the left operand.
fn pop_two(stack: &mut Vec<f64>, name: &str) -> Result<(f64, f64), EvalError> {
    let right = stack.pop();
    let left = stack.pop();
    match (left, right) {
        (Some(left), Some(right)) => Ok((left, right)),
        _ => Err(EvalError::InsufficientOperands { name: name.to_owned() }),
    }
}
