/**
 * Checked Arithmetic
 *
 * Overflow, underflow and division-by-zero detection for token amounts.
 * Nothing in here wraps or truncates silently: every boundary violation
 * comes back as a MathError carrying a readable cause.
 *
 * Made by LabsX402 for Solana
 * https://x.com/LabsX402
 */

use std::fmt;

/// Token quantity in the asset's smallest unit
pub type Amount = u64;

pub const ADDITION_OVERFLOW: &str = "addition overflow";
pub const SUBTRACTION_UNDERFLOW: &str = "subtraction underflow";
pub const MULTIPLICATION_OVERFLOW: &str = "multiplication overflow";
pub const DIVISION_BY_ZERO: &str = "division by zero";
pub const MODULO_BY_ZERO: &str = "modulo by zero";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    Overflow(&'static str),
    Underflow(&'static str),
    DivisionByZero(&'static str),
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::Overflow(m) => write!(f, "overflow: {}", m),
            MathError::Underflow(m) => write!(f, "underflow: {}", m),
            MathError::DivisionByZero(m) => write!(f, "division by zero: {}", m),
        }
    }
}

pub fn add(a: Amount, b: Amount) -> Result<Amount, MathError> {
    let c = a.wrapping_add(b);
    if c < a {
        return Err(MathError::Overflow(ADDITION_OVERFLOW));
    }
    Ok(c)
}

pub fn sub(a: Amount, b: Amount) -> Result<Amount, MathError> {
    sub_with(a, b, SUBTRACTION_UNDERFLOW)
}

/// `a - b`, failing with `message` when `b > a`
pub fn sub_with(a: Amount, b: Amount, message: &'static str) -> Result<Amount, MathError> {
    if b > a {
        return Err(MathError::Underflow(message));
    }
    Ok(a - b)
}

pub fn mul(a: Amount, b: Amount) -> Result<Amount, MathError> {
    if a == 0 {
        return Ok(0);
    }
    let c = a.wrapping_mul(b);
    if c / a != b {
        return Err(MathError::Overflow(MULTIPLICATION_OVERFLOW));
    }
    Ok(c)
}

pub fn div(a: Amount, b: Amount) -> Result<Amount, MathError> {
    div_with(a, b, DIVISION_BY_ZERO)
}

/// Integer quotient rounded toward zero
pub fn div_with(a: Amount, b: Amount, message: &'static str) -> Result<Amount, MathError> {
    if b == 0 {
        return Err(MathError::DivisionByZero(message));
    }
    Ok(a / b)
}

pub fn modulo(a: Amount, b: Amount) -> Result<Amount, MathError> {
    modulo_with(a, b, MODULO_BY_ZERO)
}

pub fn modulo_with(a: Amount, b: Amount, message: &'static str) -> Result<Amount, MathError> {
    if b == 0 {
        return Err(MathError::DivisionByZero(message));
    }
    Ok(a % b)
}
