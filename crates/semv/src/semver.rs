//! Semver facade providing high-level version operations

use crate::comparator::Comparator;
use crate::operator::Operator;
use crate::parser::{parse, ParseError};
use crate::version::Version;

/// Main facade for sorting and string-level checks
pub struct Semver;

impl Semver {
    /// Sort versions in ascending order
    pub fn sort(versions: &mut [Version]) {
        versions.sort();
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &mut [Version]) {
        versions.sort_by(|a, b| b.cmp(a));
    }

    /// Sort version strings in ascending order, rewriting each element in its rendered
    /// form. On a parse error the slice is left untouched.
    pub fn sort_strings(versions: &mut [String]) -> Result<(), ParseError> {
        Self::usort_strings(versions, true)
    }

    /// Sort version strings in descending order
    pub fn rsort_strings(versions: &mut [String]) -> Result<(), ParseError> {
        Self::usort_strings(versions, false)
    }

    fn usort_strings(versions: &mut [String], ascending: bool) -> Result<(), ParseError> {
        let mut parsed = versions
            .iter()
            .map(|v| parse(v))
            .collect::<Result<Vec<_>, _>>()?;

        if ascending {
            Self::sort(&mut parsed);
        } else {
            Self::rsort(&mut parsed);
        }

        for (slot, version) in versions.iter_mut().zip(parsed) {
            *slot = version.to_string();
        }

        Ok(())
    }

    /// Parse both strings and evaluate `version1 <operator> version2`
    pub fn check(version1: &str, operator: Operator, version2: &str) -> Result<bool, ParseError> {
        let version1 = parse(version1)?;
        let version2 = parse(version2)?;
        Ok(Comparator::compare(&version1, operator, &version2))
    }

    /// Highest version by precedence
    pub fn max<'a, I>(versions: I) -> Option<&'a Version>
    where
        I: IntoIterator<Item = &'a Version>,
    {
        versions.into_iter().max()
    }

    /// Lowest version by precedence
    pub fn min<'a, I>(versions: I) -> Option<&'a Version>
    where
        I: IntoIterator<Item = &'a Version>,
    {
        versions.into_iter().min()
    }
}
