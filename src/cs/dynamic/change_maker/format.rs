//! Text input and output for the change maker.
//!
//! Input is two lines: space-delimited denominations, then the amount.
//! Output groups equal coins, e.g. `1 x 5, 3 x 1` for `[5, 1, 1, 1]`.

use super::Combination;
use crate::error::{ChangeError, Result};

/// Parses the two-line input format into raw denominations and amount.
///
/// Values are not validated beyond being integers; that is left to
/// [`ChangeMaker`](super::ChangeMaker).
///
/// # Examples
///
/// ```
/// use changemaker::cs::dynamic::change_maker::format::parse_input;
///
/// let (coins, amount) = parse_input("25 10 5 1\n8\n").unwrap();
/// assert_eq!(coins, vec![25, 10, 5, 1]);
/// assert_eq!(amount, 8);
/// ```
pub fn parse_input(input: &str) -> Result<(Vec<i64>, i64)> {
    let mut lines = input.lines().filter(|line| !line.trim().is_empty());

    let coins_line = lines
        .next()
        .ok_or_else(|| ChangeError::parse(input, "missing denominations line"))?;
    let coins = parse_list(coins_line, char::is_whitespace)?;

    let amount_line = lines
        .next()
        .ok_or_else(|| ChangeError::parse(input, "missing amount line"))?;
    let amount = parse_value(amount_line.trim())?;

    Ok((coins, amount))
}

/// Parses a list of integers separated by `separator`, skipping empty fields.
pub fn parse_list<P>(text: &str, separator: P) -> Result<Vec<i64>>
where
    P: Fn(char) -> bool,
{
    text.split(separator)
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(parse_value)
        .collect()
}

fn parse_value(field: &str) -> Result<i64> {
    field
        .parse()
        .map_err(|err: std::num::ParseIntError| ChangeError::parse(field, err.to_string()))
}

/// Renders a non-increasing combination as `"<count> x <value>"` groups.
///
/// ```
/// use changemaker::cs::dynamic::change_maker::format::combination_to_string;
///
/// assert_eq!(combination_to_string(&[5, 1, 1, 1]), "1 x 5, 3 x 1");
/// ```
pub fn combination_to_string(combination: &[usize]) -> String {
    combination
        .chunk_by(|a, b| a == b)
        .map(|group| format!("{} x {}", group.len(), group[0]))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Full report: a header, then either `No solution` or one numbered line per
/// combination.
pub fn render_report(combinations: Option<&[Combination]>) -> String {
    let mut out = String::from("Change count:\n");
    match combinations {
        None => out.push_str("No solution\n"),
        Some(combinations) => {
            for (i, combination) in combinations.iter().enumerate() {
                out.push_str(&format!("{}: {}\n", i + 1, combination_to_string(combination)));
            }
        }
    }
    out
}
