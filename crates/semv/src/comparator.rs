//! Version precedence

use std::cmp::Ordering;

use crate::number::Number;
use crate::operator::Operator;
use crate::parser::{parse, ParseError};
use crate::version::Version;

/// Compare two versions by precedence: major, minor and patch numerically, then the
/// pre-release. Build metadata is never consulted.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.major
        .cmp(&b.major)
        .then_with(|| a.minor.cmp(&b.minor))
        .then_with(|| a.patch.cmp(&b.patch))
        .then_with(|| compare_pre_release(&a.pre_release, &b.pre_release))
}

/// Compare two pre-release strings.
///
/// An empty pre-release (a normal version) outranks any pre-release. Otherwise the
/// dot-separated identifiers are compared pairwise:
///
///  1. integer identifiers (digits with an optional `+`/`-` sign) are compared numerically,
///  2. a numeric identifier is lower than an alphanumeric one,
///  3. alphanumeric identifiers are compared in ASCII order.
///
/// If one list is a prefix of the other, the longer list is greater.
pub fn compare_pre_release(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }

    let mut left = a.split('.');
    let mut right = b.split('.');
    loop {
        match (left.next(), right.next()) {
            (Some(l), Some(r)) => match compare_identifier(l, r) {
                Ordering::Equal => continue,
                ord => return ord,
            },
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return Ordering::Equal,
        }
    }
}

fn compare_identifier(a: &str, b: &str) -> Ordering {
    match (signed_integer(a), signed_integer(b)) {
        (Some(a), Some(b)) => compare_signed(&a, &b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// An identifier read as a signed integer: `(negative, magnitude)`. Zero is never negative.
fn signed_integer(identifier: &str) -> Option<(bool, Number)> {
    let (negative, digits) = match identifier.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, identifier.strip_prefix('+').unwrap_or(identifier)),
    };
    let magnitude = Number::parse(digits)?;
    Some((negative && magnitude != Number::from(0), magnitude))
}

fn compare_signed(a: &(bool, Number), b: &(bool, Number)) -> Ordering {
    match (a.0, b.0) {
        (false, false) => a.1.cmp(&b.1),
        (true, true) => b.1.cmp(&a.1),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
    }
}

/// Parse both strings and compare them. The first parse error wins.
pub fn compare_strings(a: &str, b: &str) -> Result<Ordering, ParseError> {
    let a = parse(a)?;
    let b = parse(b)?;
    Ok(compare(&a, &b))
}

/// Operator-driven comparison of parsed versions
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::GreaterThan, version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::GreaterThanOrEqual, version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::LessThan, version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::LessThanOrEqual, version2)
    }

    /// Check if version1 == version2 (field-wise, see [`Version::is_equal`])
    pub fn equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::Equal, version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, Operator::NotEqual, version2)
    }

    /// Compare version1 to version2 using the given operator
    pub fn compare(version1: &Version, operator: Operator, version2: &Version) -> bool {
        match operator {
            Operator::Equal => version1.is_equal(version2),
            Operator::NotEqual => !version1.is_equal(version2),
            Operator::LessThan => version1.less_than(version2),
            Operator::LessThanOrEqual => version1.less_or_equal(version2),
            Operator::GreaterThan => version1.greater_than(version2),
            Operator::GreaterThanOrEqual => version1.greater_or_equal(version2),
        }
    }
}
