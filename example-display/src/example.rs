use std::iter::Sum;
use std::ops::Mul;

use crate::config::DEFAULT_UNAVAILABLE_MESSAGE;
use crate::render::{render_product, render_square, render_sum_with, Operand};

/// A worked example ready to be rendered into the example block.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkedExample<T = i64> {
    /// Flash-sum games: a signed sequence and its total.
    Sum { numbers: Vec<T>, result: T },
    /// Multiplication games.
    Product { first: T, second: T, result: T },
    /// Squares game.
    Square { base: T, result: T },
}

impl<T: Operand> WorkedExample<T> {
    pub fn sum(numbers: Vec<T>, result: T) -> Self {
        Self::Sum { numbers, result }
    }

    pub fn product(first: T, second: T, result: T) -> Self {
        Self::Product {
            first,
            second,
            result,
        }
    }

    pub fn square(base: T, result: T) -> Self {
        Self::Square { base, result }
    }

    pub fn render(&self) -> String {
        self.render_with(DEFAULT_UNAVAILABLE_MESSAGE)
    }

    /// Render, using `unavailable_message` for an empty sum.
    pub fn render_with(&self, unavailable_message: &str) -> String {
        match self {
            Self::Sum { numbers, result } => render_sum_with(numbers, *result, unavailable_message),
            Self::Product {
                first,
                second,
                result,
            } => render_product(*first, *second, *result),
            Self::Square { base, result } => render_square(*base, *result),
        }
    }
}

impl<T: Operand + Sum<T>> WorkedExample<T> {
    /// A sum whose result is computed from the numbers.
    pub fn sum_of(numbers: Vec<T>) -> Self {
        let result = numbers.iter().copied().sum();
        Self::Sum { numbers, result }
    }
}

impl<T: Operand + Mul<Output = T>> WorkedExample<T> {
    /// A product whose result is computed from the factors.
    pub fn product_of(first: T, second: T) -> Self {
        Self::product(first, second, first * second)
    }

    /// A square whose result is computed from the base.
    pub fn square_of(base: T) -> Self {
        Self::square(base, base * base)
    }
}
