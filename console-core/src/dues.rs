//! Dues calculator
//!
//! Pure functions over a member's hand-written dues ledger string and the
//! payment log. The parser is total: any unparseable fragment counts as
//! zero and the whole string never fails.

use shared::models::{Member, Payment};

/// Parse a dues ledger string into a rupee amount.
///
/// Accepted forms:
/// - a decimal numeral, optionally suffixed with the literal `/-`
/// - a `+`-separated sum of such numerals
///
/// Every `/-` literal and all whitespace are stripped before the numeric
/// parse. Each summand is evaluated on its own: a summand containing
/// `paid` (case-insensitive) counts as zero, anything else is read as its
/// longest leading numeric prefix, so `"400/-"` is 400, `"abc"` is 0 and
/// `"100+200+paid"` is 300. The empty string is zero. Negative numerals
/// subtract from the total.
pub fn parse_dues(dues: &str) -> f64 {
    let clean: String = dues
        .replace("/-", "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    clean.split('+').map(summand).sum()
}

/// One `+`-separated fragment: paid markers are settled, the rest parse
/// numerically.
fn summand(s: &str) -> f64 {
    if s.to_lowercase().contains("paid") {
        return 0.0;
    }
    leading_number(s)
}

/// Longest leading numeric prefix, zero when there is none.
fn leading_number(s: &str) -> f64 {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        match c {
            '-' | '+' if i == 0 => {}
            '.' if !seen_dot => seen_dot = true,
            '0'..='9' => {}
            _ => break,
        }
        end = i + c.len_utf8();
    }
    s[..end].parse::<f64>().unwrap_or(0.0)
}

/// Effective balance: declared dues net of recorded payments, clamped at
/// zero. Deterministic in the member and payment set alone.
pub fn effective_dues(member: &Member, payments: &[Payment]) -> f64 {
    let paid: f64 = payments
        .iter()
        .filter(|p| p.member_id == member.id)
        .map(|p| p.amount)
        .sum();
    (parse_dues(&member.dues) - paid).max(0.0)
}
