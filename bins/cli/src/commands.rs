//! Arithmetic subcommands.
//!
//! Every operand is parsed as exact decimal text and built with the same
//! defaults, so all operands share one currency.

use std::cmp::Ordering;

use clap::Subcommand;
use monetra_money::{Money, MoneyDefaults, MoneyResult};

/// One calculation to run.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Normalize an amount and print it
    Show {
        /// Amount, e.g. 2.345
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Add two amounts
    Add {
        /// Left operand
        #[arg(allow_hyphen_values = true)]
        left: String,
        /// Right operand
        #[arg(allow_hyphen_values = true)]
        right: String,
    },

    /// Subtract the second amount from the first
    Sub {
        /// Left operand
        #[arg(allow_hyphen_values = true)]
        left: String,
        /// Right operand
        #[arg(allow_hyphen_values = true)]
        right: String,
    },

    /// Multiply an amount by an integer or decimal factor
    Mul {
        /// Amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Factor; integers keep the amount's scale
        #[arg(allow_hyphen_values = true)]
        factor: String,
    },

    /// Divide an amount, printing quotient and remainder
    Div {
        /// Dividend
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Divisor (integer or decimal)
        #[arg(allow_hyphen_values = true)]
        divisor: String,
    },

    /// Compare two amounts by value
    Cmp {
        /// Left operand
        #[arg(allow_hyphen_values = true)]
        left: String,
        /// Right operand
        #[arg(allow_hyphen_values = true)]
        right: String,
    },
}

impl Command {
    /// Runs the command and returns the text to print.
    pub fn run(&self, defaults: MoneyDefaults, scale: Option<u32>) -> MoneyResult<String> {
        let parse = |text: &str| build(text, defaults, scale);

        match self {
            Self::Show { amount } => Ok(parse(amount)?.display()),
            Self::Add { left, right } => Ok(parse(left)?.add(&parse(right)?)?.display()),
            Self::Sub { left, right } => Ok(parse(left)?.subtract(&parse(right)?)?.display()),
            Self::Mul { amount, factor } => {
                let amount = parse(amount)?;
                let product = match factor.trim().parse::<i64>() {
                    Ok(factor) => amount.multiply_by_integer(factor)?,
                    Err(_) => amount.multiply_by_decimal(factor.as_str())?,
                };
                Ok(product.display())
            }
            Self::Div { amount, divisor } => {
                let amount = parse(amount)?;
                let division = match divisor.trim().parse::<i64>() {
                    Ok(divisor) => amount.divide_by_integer(divisor)?,
                    Err(_) => amount.divide_by_decimal(divisor.as_str())?,
                };
                Ok(format!(
                    "quotient: {}\nremainder: {}",
                    division.quotient.display(),
                    division.remainder.display()
                ))
            }
            Self::Cmp { left, right } => {
                let left = parse(left)?;
                let right = parse(right)?;
                let sign = match left.compare(&right)? {
                    Ordering::Less => "<",
                    Ordering::Equal => "=",
                    Ordering::Greater => ">",
                };
                Ok(format!("{} {sign} {}", left.display(), right.display()))
            }
        }
    }
}

fn build(text: &str, defaults: MoneyDefaults, scale: Option<u32>) -> MoneyResult<Money> {
    let builder = Money::builder(text);
    match scale {
        Some(scale) => builder.scale(scale),
        None => builder,
    }
    .build_with(defaults)
}
