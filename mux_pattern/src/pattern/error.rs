use serde::Serialize;
use std::fmt;

/// A rejected registration pattern.
///
/// Every variant except `EmptyPattern` carries `at`, the byte offset into the
/// original string of the token that caused the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    // The input string was empty.
    EmptyPattern,
    // The text before the first blank is not an HTTP token.
    InvalidMethod { at: usize, method: String },
    // No '/' after the optional method and host.
    MissingSlash { at: usize },
    // A '{' in the host, usually a path missing its leading '/'.
    HostContainsBrace { at: usize },
    // Braces that do not wrap the whole segment, or extra braces inside a wildcard.
    BadWildcardSegment { at: usize },
    // "{}" or "{...}".
    EmptyWildcard { at: usize },
    // Wildcard name that is not an identifier.
    BadWildcardName { at: usize, name: String },
    // "{$...}".
    BadWildcard { at: usize },
    // "{$}" followed by more path.
    DollarNotAtEnd { at: usize },
    // "{name...}" followed by more path.
    MultiNotAtEnd { at: usize },
    // The same wildcard name used twice.
    DuplicateWildcardName { at: usize, name: String },
    // A method-qualified path that clean_path would rewrite.
    UncleanPath { at: usize },
}

/// The kind of a [`PatternError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    EmptyPattern,
    InvalidMethod,
    MissingSlash,
    HostContainsBrace,
    BadWildcardSegment,
    EmptyWildcard,
    BadWildcardName,
    BadWildcard,
    DollarNotAtEnd,
    MultiNotAtEnd,
    DuplicateWildcardName,
    UncleanPath,
}

impl PatternError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyPattern => ErrorKind::EmptyPattern,
            Self::InvalidMethod { .. } => ErrorKind::InvalidMethod,
            Self::MissingSlash { .. } => ErrorKind::MissingSlash,
            Self::HostContainsBrace { .. } => ErrorKind::HostContainsBrace,
            Self::BadWildcardSegment { .. } => ErrorKind::BadWildcardSegment,
            Self::EmptyWildcard { .. } => ErrorKind::EmptyWildcard,
            Self::BadWildcardName { .. } => ErrorKind::BadWildcardName,
            Self::BadWildcard { .. } => ErrorKind::BadWildcard,
            Self::DollarNotAtEnd { .. } => ErrorKind::DollarNotAtEnd,
            Self::MultiNotAtEnd { .. } => ErrorKind::MultiNotAtEnd,
            Self::DuplicateWildcardName { .. } => ErrorKind::DuplicateWildcardName,
            Self::UncleanPath { .. } => ErrorKind::UncleanPath,
        }
    }

    /// Byte offset into the pattern string, `None` for an empty pattern.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::EmptyPattern => None,
            Self::InvalidMethod { at, .. }
            | Self::MissingSlash { at }
            | Self::HostContainsBrace { at }
            | Self::BadWildcardSegment { at }
            | Self::EmptyWildcard { at }
            | Self::BadWildcardName { at, .. }
            | Self::BadWildcard { at }
            | Self::DollarNotAtEnd { at }
            | Self::MultiNotAtEnd { at }
            | Self::DuplicateWildcardName { at, .. }
            | Self::UncleanPath { at } => Some(*at),
        }
    }

    /// The human-readable message, without the offset prefix.
    pub fn message(&self) -> String {
        match self {
            Self::EmptyPattern => "empty pattern".to_string(),
            Self::InvalidMethod { method, .. } => format!("invalid method {:?}", method),
            Self::MissingSlash { .. } => "host/path missing /".to_string(),
            Self::HostContainsBrace { .. } => {
                "host contains '{' (missing initial '/'?)".to_string()
            }
            Self::BadWildcardSegment { .. } => {
                "bad wildcard segment (must start with '{' and end with '}')".to_string()
            }
            Self::EmptyWildcard { .. } => "empty wildcard".to_string(),
            Self::BadWildcardName { name, .. } => format!("bad wildcard name {:?}", name),
            Self::BadWildcard { .. } => "bad wildcard \"{$...}\"".to_string(),
            Self::DollarNotAtEnd { .. } => "{$} not at end".to_string(),
            Self::MultiNotAtEnd { .. } => "{...} wildcard not at end".to_string(),
            Self::DuplicateWildcardName { name, .. } => {
                format!("duplicate wildcard name {:?}", name)
            }
            Self::UncleanPath { .. } => "non-CANONICAL path".to_string(),
        }
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset() {
            Some(at) => write!(f, "at offset {}: {}", at, self.message()),
            None => write!(f, "{}", self.message()),
        }
    }
}

impl std::error::Error for PatternError {}

/// Renders `raw` with a caret under the byte the error points at.
///
/// ```text
/// GET /a//b
///       ^ at offset 6: non-CANONICAL path
/// ```
pub fn render_diagnostic(raw: &str, err: &PatternError) -> String {
    let Some(at) = err.offset() else {
        return err.to_string();
    };
    // Column in chars, so multi-byte text before the offset lines up.
    let column = raw
        .char_indices()
        .take_while(|(i, _)| *i < at)
        .map(|(_, c)| if c == '\t' { '\t' } else { ' ' })
        .collect::<String>();
    format!("{}\n{}^ {}", raw, column, err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offset() {
        let err = PatternError::UncleanPath { at: 4 };
        assert_eq!(err.to_string(), "at offset 4: non-CANONICAL path");
        assert_eq!(PatternError::EmptyPattern.to_string(), "empty pattern");
    }

    #[test]
    fn messages_quote_names() {
        let err = PatternError::DuplicateWildcardName { at: 5, name: "a".into() };
        assert_eq!(err.message(), "duplicate wildcard name \"a\"");
        let err = PatternError::InvalidMethod { at: 0, method: "G:T".into() };
        assert_eq!(err.to_string(), "at offset 0: invalid method \"G:T\"");
    }

    #[test]
    fn kind_and_offset() {
        let err = PatternError::BadWildcardName { at: 7, name: "1x".into() };
        assert_eq!(err.kind(), ErrorKind::BadWildcardName);
        assert_eq!(err.offset(), Some(7));
        assert_eq!(PatternError::EmptyPattern.offset(), None);
    }

    #[test]
    fn diagnostic_caret_under_offset() {
        let err = PatternError::UncleanPath { at: 6 };
        assert_eq!(
            render_diagnostic("GET /a//b", &err),
            "GET /a//b\n      ^ at offset 6: non-CANONICAL path"
        );
    }

    #[test]
    fn diagnostic_keeps_tabs_aligned() {
        let err = PatternError::MissingSlash { at: 4 };
        assert_eq!(
            render_diagnostic("GET\tx", &err),
            "GET\tx\n   \t^ at offset 4: host/path missing /"
        );
    }
}
