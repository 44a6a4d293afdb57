//! Best-effort parsing of free-text ingredient lines.
//!
//! A line such as `"1 1/2 cups plain flour"` is split into a count, a
//! canonical unit and the remaining ingredient name. Anything that does not
//! fit the pattern is kept as a plain ingredient without count or unit.

use crate::model::ParsedIngredient;

/// Long unit spellings and the short form they are normalized to
const UNIT_SYNONYMS: &[(&str, &str)] = &[
    ("tablespoons", "tbsp"),
    ("tablespoon", "tbsp"),
    ("ounces", "oz"),
    ("ounce", "oz"),
    ("teaspoons", "tsp"),
    ("teaspoon", "tsp"),
    ("cups", "cup"),
    ("pounds", "pound"),
];

/// Every unit recognized after normalization
const UNITS: &[&str] = &["tbsp", "oz", "tsp", "cup", "pound", "kg", "g"];

const VULGAR_FRACTIONS: &[(char, f64)] = &[
    ('½', 0.5),
    ('⅓', 1.0 / 3.0),
    ('⅔', 2.0 / 3.0),
    ('¼', 0.25),
    ('¾', 0.75),
    ('⅛', 0.125),
];

/// Parse one raw ingredient line.
pub fn parse_ingredient(line: &str) -> ParsedIngredient {
    let cleaned = strip_parentheses(&line.to_lowercase());
    let tokens: Vec<String> = cleaned
        .split_whitespace()
        .map(|token| canonical_unit(token).unwrap_or(token).to_string())
        .collect();

    let numeric_prefix = tokens
        .iter()
        .take_while(|token| parse_number(token).is_some())
        .count();

    if numeric_prefix == 0 {
        return plain(&tokens);
    }

    let count = parse_count(&tokens[..numeric_prefix]);
    let rest = &tokens[numeric_prefix..];

    // Qualifiers before the unit ("2 large tablespoons") stay with the ingredient
    match rest.iter().position(|t| UNITS.contains(&t.as_str())) {
        Some(at) => ParsedIngredient {
            count,
            unit: rest[at].clone(),
            ingredient: rest[..at]
                .iter()
                .chain(&rest[at + 1..])
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" "),
        },
        None => ParsedIngredient {
            count,
            unit: String::new(),
            ingredient: rest.join(" "),
        },
    }
}

/// Parse all lines of a recipe, preserving their order.
pub fn parse_ingredients<S: AsRef<str>>(lines: &[S]) -> Vec<ParsedIngredient> {
    lines.iter().map(|l| parse_ingredient(l.as_ref())).collect()
}

fn plain(tokens: &[String]) -> ParsedIngredient {
    ParsedIngredient {
        count: None,
        unit: String::new(),
        ingredient: tokens.join(" "),
    }
}

/// Map a unit spelling to its canonical short form.
///
/// Returns `None` for tokens that are not units at all.
pub fn canonical_unit(token: &str) -> Option<&'static str> {
    let token = token.trim_end_matches('.');
    UNIT_SYNONYMS
        .iter()
        .find(|(long, _)| *long == token)
        .map(|(_, short)| *short)
        .or_else(|| UNITS.iter().find(|u| **u == token).copied())
}

/// Remove `(...)` asides such as "(about 200g)".
fn strip_parentheses(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut depth = 0usize;
    for c in line.chars() {
        match c {
            '(' => {
                depth += 1;
                out.push(' ');
            }
            ')' if depth > 0 => depth -= 1,
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

/// Sum the numeric tokens of a mixed number like `["1", "1/2"]`.
fn parse_count(tokens: &[String]) -> Option<f64> {
    tokens
        .iter()
        .map(|t| parse_number(t))
        .try_fold(0.0, |acc, n| n.map(|n| acc + n))
}

/// Parse a single numeric token: integer, decimal, fraction, vulgar
/// fraction, or a hyphenated pair such as `1-1/2` or `2-3`.
fn parse_number(token: &str) -> Option<f64> {
    if let Some((left, right)) = token.split_once('-') {
        let left = parse_simple(left)?;
        let right = parse_simple(right)?;
        // "1-1/2" is a mixed number, "2-3" is a range and keeps its lower bound
        return Some(if right < 1.0 { left + right } else { left });
    }
    parse_simple(token)
}

fn parse_simple(token: &str) -> Option<f64> {
    if let Some((_, value)) = VULGAR_FRACTIONS.iter().find(|(c, _)| token == c.to_string()) {
        return Some(*value);
    }
    if let Some((num, den)) = token.split_once('/') {
        let num = parse_decimal(num)?;
        let den = parse_decimal(den)?;
        return if den == 0.0 { None } else { Some(num / den) };
    }
    parse_decimal(token)
}

fn parse_decimal(token: &str) -> Option<f64> {
    let valid = !token.is_empty()
        && token.chars().all(|c| c.is_ascii_digit() || c == '.')
        && token.chars().any(|c| c.is_ascii_digit());
    if valid {
        token.parse().ok()
    } else {
        None
    }
}

/// Format a count for display, using mixed fractions where they are exact
/// enough (`1.5` becomes `"1 1/2"`).
pub fn format_count(count: f64) -> String {
    let whole = count.trunc();
    let fraction = count - whole;

    if fraction.abs() < 0.01 {
        return format!("{}", whole as i64);
    }
    if fraction > 0.99 {
        return format!("{}", whole as i64 + 1);
    }

    for den in 2..=8u32 {
        let num = (fraction * den as f64).round();
        if num >= 1.0 && (fraction - num / den as f64).abs() < 0.01 {
            return if whole == 0.0 {
                format!("{}/{}", num as u32, den)
            } else {
                format!("{} {}/{}", whole as i64, num as u32, den)
            };
        }
    }

    let rounded = format!("{:.2}", count);
    rounded.trim_end_matches('0').trim_end_matches('.').to_string()
}
