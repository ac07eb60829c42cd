//! `calc`: arithmetic overloaded over integers, bignums and doubles, plus
//! a rounding-mode enum and an accumulator class.

use bind::{native_enum, package, Interp};
use num_bigint::{BigInt, Sign};
use std::error::Error as StdError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow")]
    Overflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundMode {
    Floor,
    Ceil,
    Nearest,
    Trunc,
}

native_enum!(RoundMode = "round-mode" { Floor, Ceil, Nearest, Trunc });

impl RoundMode {
    pub fn apply(self, x: f64) -> f64 {
        match self {
            RoundMode::Floor => x.floor(),
            RoundMode::Ceil => x.ceil(),
            RoundMode::Nearest => x.round(),
            RoundMode::Trunc => x.trunc(),
        }
    }
}

/// Running total, driven through its handle.
#[derive(Debug, Default)]
pub struct Accumulator {
    total: f64,
    count: u64,
}

package!(pub CALC = "calc", "1.0", register);

fn checked(value: Option<i64>) -> Result<i64, CalcError> {
    value.ok_or(CalcError::Overflow)
}

fn register(interp: &mut Interp) -> Result<(), Box<dyn StdError + Send + Sync>> {
    let calc = interp.create_command("calc");

    // Integers first so untyped words prefer them; bignums catch what
    // overflows i64; doubles take the rest.
    calc.add_subcommand("add")
        .add_function(|a: i64, b: i64| checked(a.checked_add(b)))
        .add_function(|a: BigInt, b: BigInt| a + b)
        .add_function(|a: f64, b: f64| a + b);

    calc.add_subcommand("sub")
        .add_function(|a: i64, b: i64| checked(a.checked_sub(b)))
        .add_function(|a: BigInt, b: BigInt| a - b)
        .add_function(|a: f64, b: f64| a - b);

    calc.add_subcommand("mul")
        .add_function(|a: i64, b: i64| checked(a.checked_mul(b)))
        .add_function(|a: BigInt, b: BigInt| a * b)
        .add_function(|a: f64, b: f64| a * b);

    calc.add_subcommand("div")
        .add_function(|a: i64, b: i64| {
            if b == 0 {
                return Err(CalcError::DivisionByZero);
            }
            checked(a.checked_div(b))
        })
        .add_function(|a: BigInt, b: BigInt| {
            if b.sign() == Sign::NoSign {
                return Err(CalcError::DivisionByZero);
            }
            Ok(a / b)
        })
        .add_function(|a: f64, b: f64| {
            if b == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            Ok(a / b)
        });

    calc.add_subcommand("sum")
        .add_function(|xs: Vec<i64>| {
            xs.into_iter()
                .try_fold(0i64, |acc, x| acc.checked_add(x))
                .ok_or(CalcError::Overflow)
        })
        .add_function(|xs: Vec<f64>| xs.into_iter().sum::<f64>());

    calc.add_subcommand("round")
        .add_function(|mode: RoundMode, x: f64| mode.apply(x));

    interp.create_command("round-mode").add_enum::<RoundMode>();

    interp
        .add_class::<Accumulator>("accumulator")
        .constructor(Accumulator::default)
        .constructor(|start: f64| Accumulator {
            total: start,
            count: 0,
        })
        .method("add", |acc: &mut Accumulator, x: f64| {
            acc.total += x;
            acc.count += 1;
            acc.total
        })
        .method("add", |acc: &mut Accumulator, xs: Vec<f64>| {
            acc.total += xs.iter().sum::<f64>();
            acc.count += xs.len() as u64;
            acc.total
        })
        .method("total", |acc: &mut Accumulator| acc.total)
        .method("count", |acc: &mut Accumulator| acc.count)
        .method("mean", |acc: &mut Accumulator| {
            (acc.count > 0).then(|| acc.total / acc.count as f64)
        });

    Ok(())
}
