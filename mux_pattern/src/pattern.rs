pub mod error;
pub mod parser;
pub mod segment;


use serde::Serialize;
use std::str::FromStr;

pub use self::error::{ErrorKind, PatternError, render_diagnostic};
pub use self::parser::{HttpToken, PatternParser, TokenPredicate};
pub use self::segment::Segment;

/// A compiled route registration: an optional method, an optional host and a path.
///
/// Built only by [`compile`] or [`PatternParser::parse`] and never modified afterwards.
#[derive(Clone, Debug, Serialize)]
pub struct Pattern {
    // The string the pattern was compiled from
    pub(crate) raw: String,

    // Empty when any method matches
    pub(crate) method: String,

    // Empty when any host matches
    pub(crate) host: String,

    // Path segments, left to right
    pub(crate) segments: Vec<Segment>,
}

/// Compiles `s` with the default HTTP token rules.
///
/// ```
/// use mux_pattern::{compile, Segment};
///
/// let p = compile("POST example.com/foo/{w}").unwrap();
/// assert_eq!(p.method(), "POST");
/// assert_eq!(p.host(), "example.com");
/// assert_eq!(p.segments(), &[Segment::literal("foo"), Segment::wildcard("w")]);
/// ```
pub fn compile(s: &str) -> Result<Pattern, PatternError> {
    PatternParser::new().parse(s)
}

impl Pattern {
    pub fn parse(s: &str) -> Result<Self, PatternError> {
        compile(s)
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn last_segment(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// True when the pattern ends in a catch-all, named or from a trailing slash.
    pub fn has_trailing_multi(&self) -> bool {
        self.last_segment().is_some_and(Segment::is_multi)
    }

    /// Names bound by the pattern's wildcards, left to right.
    pub fn wildcard_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::wildcard_name)
    }
}

// `raw` is kept for diagnostics only; "GET\t/x" and "GET /x" are the same pattern.
impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.method == other.method && self.host == other.host && self.segments == other.segments
    }
}

impl Eq for Pattern {}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        compile(s)
    }
}

/// Writes the pattern in registration syntax. Compiling the output gives back
/// an equal pattern.
impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.method.is_empty() {
            write!(f, "{} ", self.method)?;
        } else if self.host.contains([' ', '\t']) {
            // A blank in the host would otherwise be read as the method separator.
            write!(f, " ")?;
        }
        write!(f, "{}", self.host)?;
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}
