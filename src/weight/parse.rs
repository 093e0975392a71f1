//! Reading expressions from text
//!
//! The grammar accepts the rendered form (`(a+b)`, `pow(a,b)`, `log(x)`) as
//! well as ordinary infix notation with the usual precedence:
//!
//! ```text
//! sum     := product (('+' | '-') product)*
//! product := unary (('*' | '/') unary)*
//! unary   := '-' unary | power
//! power   := primary ('^' unary)?
//! primary := number | call | identifier | '(' sum ')'
//! call    := ('log' | 'exp') '(' sum ')' | 'pow' '(' sum ',' sum ')'
//! ```
//!
//! Every node goes through the simplifying constructors, so parsed text is
//! folded exactly like programmatic construction.

use crate::error::{Result, WeightError};
use crate::weight::algebra::{add, divide, exp_of, log_of, multiply, negate, power, subtract};
use crate::weight::expr::WeightExpr;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, char, multispace0, one_of},
    combinator::recognize,
    error::ErrorKind,
    multi::many0,
    number::complete::recognize_float,
    sequence::pair,
    IResult, Parser,
};
use std::str::FromStr;

type ParseError<'a> = nom::error::Error<&'a str>;
type PResult<'a, O> = IResult<&'a str, O, ParseError<'a>>;

impl WeightExpr {
    /// Parse an expression from text
    ///
    /// # Examples
    ///
    /// ```
    /// use weight_algebra::weight::{ParamDefs, WeightExpr};
    ///
    /// let expr = WeightExpr::parse("exp(-(rate * t))").unwrap();
    /// let defs = ParamDefs::new().with("rate", 0.0).with("t", 3.0);
    /// assert_eq!(expr.eval(&defs), 1.0);
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        match sum(input) {
            Ok((remainder, expr)) => {
                // Make sure the entire input was consumed
                if remainder.trim().is_empty() {
                    Ok(expr)
                } else {
                    Err(WeightError::Parse {
                        message: format!("Unexpected trailing characters: '{}'", remainder.trim()),
                    })
                }
            }
            Err(e) => Err(WeightError::Parse {
                message: format!("{:?}", e),
            }),
        }
    }
}

impl FromStr for WeightExpr {
    type Err = WeightError;

    fn from_str(s: &str) -> Result<Self> {
        WeightExpr::parse(s)
    }
}

fn space(input: &str) -> PResult<'_, &str> {
    multispace0(input)
}

/// A single character, after optional whitespace
fn symbol(input: &str, c: char) -> PResult<'_, char> {
    let (input, _) = space(input)?;
    char(c).parse(input)
}

/// One of the characters in `ops`, after optional whitespace
fn operator<'a>(input: &'a str, ops: &str) -> PResult<'a, char> {
    let (input, _) = space(input)?;
    one_of(ops).parse(input)
}

fn identifier(input: &str) -> PResult<'_, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ))
    .parse(input)
}

/// An unsigned literal: integer unless it carries a fraction or exponent
fn number(input: &str) -> PResult<'_, WeightExpr> {
    let (rest, text) = recognize_float::<&str, ParseError<'_>>(input)?;
    let failure = || nom::Err::Error(ParseError::new(input, ErrorKind::Float));
    let expr = if text.contains(|c: char| matches!(c, '.' | 'e' | 'E')) {
        WeightExpr::Float(text.parse::<f64>().map_err(|_| failure())?)
    } else {
        match text.parse::<i64>() {
            Ok(i) => WeightExpr::Integer(i),
            Err(_) => WeightExpr::Float(text.parse::<f64>().map_err(|_| failure())?),
        }
    };
    Ok((rest, expr))
}

fn call(input: &str) -> PResult<'_, WeightExpr> {
    let (input, name) = identifier(input)?;
    let (input, _) = symbol(input, '(')?;
    let (input, first) = sum(input)?;
    let (input, expr) = match name {
        "log" => (input, log_of(first)),
        "exp" => (input, exp_of(first)),
        "pow" => {
            let (input, _) = symbol(input, ',')?;
            let (input, second) = sum(input)?;
            (input, power(first, second))
        }
        _ => return Err(nom::Err::Error(ParseError::new(input, ErrorKind::Tag))),
    };
    let (input, _) = symbol(input, ')')?;
    Ok((input, expr))
}

fn parens(input: &str) -> PResult<'_, WeightExpr> {
    let (input, _) = symbol(input, '(')?;
    let (input, expr) = sum(input)?;
    let (input, _) = symbol(input, ')')?;
    Ok((input, expr))
}

fn primary(input: &str) -> PResult<'_, WeightExpr> {
    let (input, _) = space(input)?;

    if let Ok(result) = number(input) {
        return Ok(result);
    }

    if let Ok(result) = call(input) {
        return Ok(result);
    }

    if let Ok((rest, name)) = identifier(input) {
        return Ok((rest, WeightExpr::param(name)));
    }

    parens(input)
}

fn power_expr(input: &str) -> PResult<'_, WeightExpr> {
    let (input, base) = primary(input)?;
    match operator(input, "^") {
        Ok((rest, _)) => {
            let (rest, exponent) = unary(rest)?;
            Ok((rest, power(base, exponent)))
        }
        Err(nom::Err::Error(_)) => Ok((input, base)),
        Err(e) => Err(e),
    }
}

fn unary(input: &str) -> PResult<'_, WeightExpr> {
    match operator(input, "-") {
        Ok((rest, _)) => {
            let (rest, operand) = unary(rest)?;
            // A negated literal is itself a literal
            let expr = match operand {
                WeightExpr::Integer(i) => WeightExpr::Integer(-i),
                WeightExpr::Float(x) => WeightExpr::Float(-x),
                other => negate(other),
            };
            Ok((rest, expr))
        }
        Err(nom::Err::Error(_)) => power_expr(input),
        Err(e) => Err(e),
    }
}

fn product(input: &str) -> PResult<'_, WeightExpr> {
    let (mut input, mut acc) = unary(input)?;
    loop {
        match operator(input, "*/") {
            Ok((rest, op)) => {
                let (rest, rhs) = unary(rest)?;
                acc = if op == '*' {
                    multiply(acc, rhs)
                } else {
                    divide(acc, rhs)
                };
                input = rest;
            }
            Err(nom::Err::Error(_)) => return Ok((input, acc)),
            Err(e) => return Err(e),
        }
    }
}

fn sum(input: &str) -> PResult<'_, WeightExpr> {
    let (mut input, mut acc) = product(input)?;
    loop {
        match operator(input, "+-") {
            Ok((rest, op)) => {
                let (rest, rhs) = product(rest)?;
                acc = if op == '+' {
                    add(acc, rhs)
                } else {
                    subtract(acc, rhs)
                };
                input = rest;
            }
            Err(nom::Err::Error(_)) => return Ok((input, acc)),
            Err(e) => return Err(e),
        }
    }
}
