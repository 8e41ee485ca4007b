//! Expression renderers.
//!
//! Every renderer produces the same fixed structure:
//!
//! ```text
//! div.simple-expression
//!   div.expression-line
//!     span.expression   span.equals   span.result
//! ```
//!
//! Results are supplied by the caller and written as-is; nothing here checks
//! them against the operands.

use std::fmt::{self, Write};

use pagedom::escape_html;

use crate::config::DEFAULT_UNAVAILABLE_MESSAGE;

/// A number that can appear in a rendered expression.
pub trait Operand: Copy {
    /// True for values written with a `+` prefix in a signed sequence.
    fn is_non_negative(self) -> bool;

    /// Write the value with its natural sign.
    fn write_plain(self, out: &mut String);
}

macro_rules! signed_operand {
    ($($t:ty),*) => {
        $(
            impl Operand for $t {
                fn is_non_negative(self) -> bool {
                    self >= 0
                }

                fn write_plain(self, out: &mut String) {
                    let _ = write!(out, "{self}");
                }
            }
        )*
    };
}

macro_rules! unsigned_operand {
    ($($t:ty),*) => {
        $(
            impl Operand for $t {
                fn is_non_negative(self) -> bool {
                    true
                }

                fn write_plain(self, out: &mut String) {
                    let _ = write!(out, "{self}");
                }
            }
        )*
    };
}

macro_rules! float_operand {
    ($($t:ty),*) => {
        $(
            impl Operand for $t {
                // -0.0 >= 0.0 holds, NaN >= 0.0 does not
                fn is_non_negative(self) -> bool {
                    self >= 0.0
                }

                fn write_plain(self, out: &mut String) {
                    if self == 0.0 {
                        out.push('0');
                    } else {
                        let _ = write!(out, "{self}");
                    }
                }
            }
        )*
    };
}

signed_operand!(i8, i16, i32, i64, i128, isize);
unsigned_operand!(u8, u16, u32, u64, u128, usize);
float_operand!(f32, f64);

fn plain<T: Operand>(value: T) -> String {
    let mut out = String::new();
    value.write_plain(&mut out);
    out
}

/// Format a number with an explicit sign: `+n` for non-negative values,
/// the natural `-n` otherwise.
pub fn format_signed<T: Operand>(value: T) -> String {
    let mut out = String::new();
    write_signed(value, &mut out);
    out
}

fn write_signed<T: Operand>(value: T, out: &mut String) {
    if value.is_non_negative() {
        out.push('+');
    }
    value.write_plain(out);
}

/// One rendered expression and its result, before markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionLine {
    pub expression: String,
    pub result: String,
}

impl ExpressionLine {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
        }
    }

    /// `+a-b+c...`, or `None` for an empty sequence.
    pub fn sum<N: Operand, R: Operand>(numbers: &[N], result: R) -> Option<Self> {
        if numbers.is_empty() {
            return None;
        }

        let mut expression = String::new();
        for &number in numbers {
            write_signed(number, &mut expression);
        }

        Some(Self::new(expression, plain(result)))
    }

    /// `a × b`.
    pub fn product<N: Operand, R: Operand>(first: N, second: N, result: R) -> Self {
        Self::new(format!("{} × {}", plain(first), plain(second)), plain(result))
    }

    /// `base²`.
    pub fn square<N: Operand, R: Operand>(base: N, result: R) -> Self {
        Self::new(format!("{}²", plain(base)), plain(result))
    }

    pub fn to_markup(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ExpressionLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<div class="simple-expression">"#)?;
        writeln!(f, r#"    <div class="expression-line">"#)?;
        writeln!(
            f,
            r#"        <span class="expression">{}</span>"#,
            escape_html(&self.expression)
        )?;
        writeln!(f, r#"        <span class="equals">=</span>"#)?;
        writeln!(
            f,
            r#"        <span class="result">{}</span>"#,
            escape_html(&self.result)
        )?;
        writeln!(f, r#"    </div>"#)?;
        writeln!(f, r#"</div>"#)
    }
}

/// Placeholder shown when there are no numbers to display.
pub fn unavailable_markup(message: &str) -> String {
    format!("<p>{}</p>", escape_html(message))
}

/// Render a signed sum such as `+5-3+2 = 4`.
///
/// An empty sequence renders the default "data unavailable" placeholder.
pub fn render_sum<N: Operand, R: Operand>(numbers: &[N], result: R) -> String {
    render_sum_with(numbers, result, DEFAULT_UNAVAILABLE_MESSAGE)
}

/// [`render_sum`] with a custom placeholder message.
pub fn render_sum_with<N: Operand, R: Operand>(
    numbers: &[N],
    result: R,
    unavailable_message: &str,
) -> String {
    match ExpressionLine::sum(numbers, result) {
        Some(line) => line.to_markup(),
        None => unavailable_markup(unavailable_message),
    }
}

/// Render `first × second = result`.
pub fn render_product<N: Operand, R: Operand>(first: N, second: N, result: R) -> String {
    ExpressionLine::product(first, second, result).to_markup()
}

/// Render `base² = result`.
pub fn render_square<N: Operand, R: Operand>(base: N, result: R) -> String {
    ExpressionLine::square(base, result).to_markup()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_signed_integers() {
        assert_eq!(format_signed(0), "+0");
        assert_eq!(format_signed(7), "+7");
        assert_eq!(format_signed(-7), "-7");
        assert_eq!(format_signed(42u32), "+42");
        assert_eq!(format_signed(i64::MIN), "-9223372036854775808");
    }

    #[test]
    fn test_format_signed_floats() {
        assert_eq!(format_signed(2.5), "+2.5");
        assert_eq!(format_signed(-2.5), "-2.5");
        assert_eq!(format_signed(3.0f64), "+3");
        assert_eq!(format_signed(-0.0f64), "+0");
    }

    #[test]
    fn test_format_signed_float_extremes() {
        // Large magnitudes and infinities use Rust's float text, not exponent notation
        assert_eq!(format_signed(1e21f64), "+1000000000000000000000");
        assert_eq!(format_signed(-1e21f64), "-1000000000000000000000");
        assert_eq!(format_signed(f64::INFINITY), "+inf");
        assert_eq!(format_signed(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_signed(f64::NAN), "NaN");
    }

    #[test]
    fn test_plain_negative_zero() {
        assert_eq!(plain(-0.0f32), "0");
        assert_eq!(plain(-1.5f32), "-1.5");
    }

    #[test]
    fn test_sum_line_empty() {
        assert_eq!(ExpressionLine::sum::<i32, i32>(&[], 0), None);
    }
}
