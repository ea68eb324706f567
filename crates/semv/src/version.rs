//! The parsed version value

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::comparator::compare;
use crate::number::Number;
use crate::parser::{parse, ParseError};

/// A parsed `MAJOR.MINOR.PATCH[-PRE][+BUILD]` version.
///
/// Values are immutable and only produced by [`parse`]. The comparison operators follow
/// semver precedence, so `==` ignores build metadata and treats numerically equal
/// pre-release identifiers (`1` and `01`) as equal. Use [`Version::is_equal`] for the
/// stricter field-wise check.
#[derive(Debug, Clone)]
pub struct Version {
    pub(crate) major: Number,
    pub(crate) minor: Number,
    pub(crate) patch: Number,
    pub(crate) pre_release: String,
    pub(crate) build_metadata: String,
}

impl Version {
    pub fn major(&self) -> &Number {
        &self.major
    }

    pub fn minor(&self) -> &Number {
        &self.minor
    }

    pub fn patch(&self) -> &Number {
        &self.patch
    }

    /// Pre-release text without the leading `-`, empty for a normal version
    pub fn pre_release(&self) -> &str {
        &self.pre_release
    }

    /// Build metadata text without the leading `+`, possibly empty
    pub fn build_metadata(&self) -> &str {
        &self.build_metadata
    }

    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Field-wise equality: numeric components equal and pre-release text identical.
    /// Build metadata is not consulted.
    pub fn is_equal(&self, other: &Version) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.pre_release == other.pre_release
    }

    pub fn less_than(&self, other: &Version) -> bool {
        compare(self, other) == Ordering::Less
    }

    pub fn less_or_equal(&self, other: &Version) -> bool {
        compare(self, other) != Ordering::Greater
    }

    pub fn greater_than(&self, other: &Version) -> bool {
        compare(self, other) == Ordering::Greater
    }

    pub fn greater_or_equal(&self, other: &Version) -> bool {
        compare(self, other) != Ordering::Less
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release)?;
        }

        if !self.build_metadata.is_empty() {
            write!(f, "+{}", self.build_metadata)?;
        }

        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}
