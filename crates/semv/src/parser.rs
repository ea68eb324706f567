//! Version string parsing
//!
//! The input is scanned once, left to right, with a cursor over the five fields of a
//! version. `.` advances the cursor only while it sits on major or minor, the first `-`
//! (before any `+`) opens the pre-release and the first `+` opens the build metadata.
//! Everything else is appended to the field under the cursor.

use std::fmt;

use thiserror::Error;

use crate::number::Number;
use crate::version::Version;

/// The five fields of a version string, in scan order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Major,
    Minor,
    Patch,
    PreRelease,
    BuildMetadata,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Major => "major",
            Field::Minor => "minor",
            Field::Patch => "patch",
            Field::PreRelease => "pre-release",
            Field::BuildMetadata => "build metadata",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid semver syntax \"{input}\": {field} is not a non-negative integer")]
    InvalidSyntax { input: String, field: Field },
}

impl ParseError {
    /// The string that failed to parse
    pub fn input(&self) -> &str {
        match self {
            ParseError::InvalidSyntax { input, .. } => input,
        }
    }
}

/// Scanner state: the field under the cursor plus the two one-shot switches.
struct Scanner {
    fields: [String; 5],
    cursor: Field,
    entered_pre_release: bool,
    entered_build_metadata: bool,
}

impl Scanner {
    fn new() -> Self {
        Self {
            fields: Default::default(),
            cursor: Field::Major,
            entered_pre_release: false,
            entered_build_metadata: false,
        }
    }

    fn feed(&mut self, c: char) {
        match c {
            '.' if self.cursor == Field::Major => self.cursor = Field::Minor,
            '.' if self.cursor == Field::Minor => self.cursor = Field::Patch,
            '-' if !self.entered_pre_release && !self.entered_build_metadata => {
                self.entered_pre_release = true;
                self.cursor = Field::PreRelease;
            }
            '+' if !self.entered_build_metadata => {
                self.entered_build_metadata = true;
                self.cursor = Field::BuildMetadata;
            }
            _ => self.fields[self.cursor.index()].push(c),
        }
    }

    fn finish(self, input: &str) -> Result<Version, ParseError> {
        let [major, minor, patch, pre_release, build_metadata] = self.fields;

        let numeric = |text: &str, field: Field| {
            Number::parse(text).ok_or_else(|| {
                log::trace!("Rejecting {:?}: {} component {:?} is not numeric", input, field, text);
                ParseError::InvalidSyntax {
                    input: input.to_string(),
                    field,
                }
            })
        };

        Ok(Version {
            major: numeric(&major, Field::Major)?,
            minor: numeric(&minor, Field::Minor)?,
            patch: numeric(&patch, Field::Patch)?,
            pre_release,
            build_metadata,
        })
    }
}

/// Parse a version string.
///
/// Only the three numeric components are validated; pre-release and build metadata
/// are kept verbatim.
pub fn parse(input: &str) -> Result<Version, ParseError> {
    let mut scanner = Scanner::new();
    for c in input.chars() {
        scanner.feed(c);
    }
    scanner.finish(input)
}

/// Parse a version string, panicking on invalid input.
pub fn must_parse(input: &str) -> Version {
    match parse(input) {
        Ok(version) => version,
        Err(e) => panic!("{}", e),
    }
}

/// Check whether a string parses as a version
pub fn is_valid(input: &str) -> bool {
    parse(input).is_ok()
}
