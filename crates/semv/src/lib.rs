//! Semantic Versioning 2.0.0 for Rust
//!
//! This crate parses `MAJOR.MINOR.PATCH[-PRE][+BUILD]` version strings, orders them by
//! semver precedence and sorts collections of them.
//!
//! ```
//! use semv::{parse, Semver};
//!
//! let rc = parse("1.0.0-rc.1").unwrap();
//! let release = parse("1.0.0+build.7").unwrap();
//! assert!(rc < release);
//!
//! let mut versions = vec!["2.0.0".to_string(), "1.0.0-alpha".to_string()];
//! Semver::sort_strings(&mut versions).unwrap();
//! assert_eq!(versions, ["1.0.0-alpha", "2.0.0"]);
//! ```

mod comparator;
mod number;
mod operator;
mod parser;
mod semver;
mod version;

pub use comparator::{compare, compare_pre_release, compare_strings, Comparator};
pub use number::Number;
pub use operator::{InvalidOperatorError, Operator};
pub use parser::{is_valid, must_parse, parse, Field, ParseError};
pub use semver::Semver;
pub use version::Version;
