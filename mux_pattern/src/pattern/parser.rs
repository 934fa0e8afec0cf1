use std::collections::HashSet;

use mux_lib::url_encoding::percent_decode_segment;

use super::error::PatternError;
use super::segment::Segment;
use super::Pattern;
use crate::path::{clean_path, first_unclean_segment};
use crate::{debug_error, debug_log, debug_trace, debug_warn};

/// Decides which characters may appear in a method name.
///
/// Implemented by [`HttpToken`] and by any `Fn(char) -> bool`, so tests can
/// swap in a fake.
pub trait TokenPredicate {
    fn is_token_char(&self, c: char) -> bool;
}

/// The RFC 9110 token grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpToken;

impl TokenPredicate for HttpToken {
    fn is_token_char(&self, c: char) -> bool {
        mux_lib::token::is_token_char(c)
    }
}

impl<F: Fn(char) -> bool> TokenPredicate for F {
    fn is_token_char(&self, c: char) -> bool {
        self(c)
    }
}

/// Compiles registration strings into [`Pattern`]s.
///
/// ```
/// use mux_pattern::PatternParser;
///
/// let parser = PatternParser::new().with_token_predicate(|c: char| c.is_ascii_uppercase());
/// assert!(parser.parse("GET /").is_ok());
/// assert!(parser.parse("get /").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PatternParser<P = HttpToken> {
    token: P,
}

impl PatternParser<HttpToken> {
    pub fn new() -> Self {
        Self { token: HttpToken }
    }
}

impl<P: TokenPredicate> PatternParser<P> {
    /// Replaces the method-character predicate.
    pub fn with_token_predicate<Q: TokenPredicate>(self, token: Q) -> PatternParser<Q> {
        PatternParser { token }
    }

    // Syntax:
    //
    //   [METHOD] [HOST]/[PATH]
    //
    // - METHOD is an HTTP token, followed by at least one space or tab.
    // - HOST is everything up to the first '/' and may not contain '{'.
    // - PATH is '/'-separated segments. A segment is a literal (percent-decoded),
    //   "{name}", "{name...}" or "{$}". The last two must end the path.
    // - A trailing '/' becomes an unnamed catch-all.
    // - Wildcard names are identifiers and are distinct within one pattern.
    // - With a method other than CONNECT the path must already be clean.
    //
    // Offsets in errors are byte offsets into `s`. The first problem found wins.
    pub fn parse(&self, s: &str) -> Result<Pattern, PatternError> {
        let result = self.parse_pattern(s);
        #[allow(unused_variables)]
        match &result {
            Ok(p) => {
                debug_log!("compiled {:?} into {} segments", s, p.segments().len());
            }
            Err(e) => {
                debug_error!("rejected pattern {:?}: {}", s, e);
            }
        }
        result
    }

    fn parse_pattern(&self, s: &str) -> Result<Pattern, PatternError> {
        if s.is_empty() {
            return Err(PatternError::EmptyPattern);
        }

        let (method, rest, mut off) = match s.find([' ', '\t']) {
            Some(i) => {
                let rest = s[i + 1..].trim_start_matches([' ', '\t']);
                (&s[..i], rest, s.len() - rest.len())
            }
            None => ("", s, 0),
        };
        if !method.is_empty() && !method.chars().all(|c| self.token.is_token_char(c)) {
            return Err(PatternError::InvalidMethod { at: 0, method: method.to_string() });
        }

        let Some(slash) = rest.find('/') else {
            return Err(PatternError::MissingSlash { at: off });
        };
        let host = &rest[..slash];
        if let Some(j) = host.find('{') {
            return Err(PatternError::HostContainsBrace { at: off + j });
        }
        off += slash;
        let path = &rest[slash..];
        debug_trace!("method={:?} host={:?} path={:?} at {}", method, host, path, off);

        let segments = parse_path(path, off)?;

        // Requests are cleaned before matching, so an unclean path could never match.
        if !method.is_empty() && method != "CONNECT" && clean_path(path) != path {
            let at = off + first_unclean_segment(path).unwrap_or(0);
            return Err(PatternError::UncleanPath { at });
        }

        Ok(Pattern {
            raw: s.to_string(),
            method: method.to_string(),
            host: host.to_string(),
            segments,
        })
    }
}

/// Splits `path` (which starts with '/') into segments. `base` is the offset
/// of `path` in the full pattern string.
fn parse_path(path: &str, base: usize) -> Result<Vec<Segment>, PatternError> {
    let mut segments = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut rest = path;
    let mut off = base;

    while let Some(after_slash) = rest.strip_prefix('/') {
        rest = after_slash;
        off += 1;
        if rest.is_empty() {
            break;
        }
        let end = rest.find('/').unwrap_or(rest.len());
        let (body, tail) = rest.split_at(end);
        let segment = parse_segment(body, off, tail.is_empty(), &mut seen)?;
        debug_trace!("segment {:?} at {}", segment, off);
        segments.push(segment);
        rest = tail;
        off += end;
    }

    if path.ends_with('/') && !matches!(segments.last(), Some(Segment::End | Segment::Multi(_))) {
        segments.push(Segment::Multi(String::new()));
    }
    Ok(segments)
}

fn parse_segment<'a>(
    body: &'a str,
    at: usize,
    at_end: bool,
    seen: &mut HashSet<&'a str>,
) -> Result<Segment, PatternError> {
    let Some(braced) = body.strip_prefix('{') else {
        if body.contains(['{', '}']) {
            return Err(PatternError::BadWildcardSegment { at });
        }
        let bytes = percent_decode_segment(body);
        if std::str::from_utf8(&bytes).is_err() {
            debug_warn!("literal {:?} at {} decodes to bytes that are not UTF-8", body, at);
        }
        return Ok(Segment::Literal(bytes));
    };

    let Some(inner) = braced.strip_suffix('}') else {
        return Err(PatternError::BadWildcardSegment { at });
    };
    if inner.contains(['{', '}']) {
        return Err(PatternError::BadWildcardSegment { at });
    }
    if inner.is_empty() {
        return Err(PatternError::EmptyWildcard { at });
    }
    if inner == "$" {
        if !at_end {
            return Err(PatternError::DollarNotAtEnd { at });
        }
        return Ok(Segment::End);
    }

    let (name, multi) = match inner.strip_suffix("...") {
        Some(name) => (name, true),
        None => (inner, false),
    };
    if multi && name == "$" {
        return Err(PatternError::BadWildcard { at });
    }
    if name.is_empty() {
        return Err(PatternError::EmptyWildcard { at });
    }
    if !is_valid_wildcard_name(name) {
        return Err(PatternError::BadWildcardName { at, name: name.to_string() });
    }
    if multi && !at_end {
        return Err(PatternError::MultiNotAtEnd { at });
    }
    if !seen.insert(name) {
        return Err(PatternError::DuplicateWildcardName { at, name: name.to_string() });
    }

    Ok(if multi {
        Segment::Multi(name.to_string())
    } else {
        Segment::Wildcard(name.to_string())
    })
}

/// A letter or '_' followed by letters, digits or '_'.
fn is_valid_wildcard_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_names() {
        for ok in ["a", "_", "_x1", "id", "über", "x_y_z"] {
            assert!(is_valid_wildcard_name(ok), "{:?} should be valid", ok);
        }
        for bad in ["", "1a", "a-b", "a.b", "$", "a b"] {
            assert!(!is_valid_wildcard_name(bad), "{:?} should be invalid", bad);
        }
    }

    #[test]
    fn path_offsets_point_at_segment_body() {
        let err = parse_path("/a/{b}/{b}", 10).unwrap_err();
        assert_eq!(err, PatternError::DuplicateWildcardName { at: 17, name: "b".into() });
    }

    #[test]
    fn trailing_slash_becomes_unnamed_multi() {
        let segs = parse_path("/a/", 0).unwrap();
        assert_eq!(segs, vec![Segment::literal("a"), Segment::multi("")]);
    }

    #[test]
    fn end_marker_gets_no_trailing_multi() {
        let segs = parse_path("/a/{$}", 0).unwrap();
        assert_eq!(segs, vec![Segment::literal("a"), Segment::End]);
    }

    #[test]
    fn fake_token_predicate_is_used() {
        let parser = PatternParser::new().with_token_predicate(|c: char| c == 'X');
        assert!(parser.parse("XX /").is_ok());
        assert_eq!(
            parser.parse("GET /").unwrap_err(),
            PatternError::InvalidMethod { at: 0, method: "GET".into() }
        );
    }

    #[test]
    fn closure_predicate_accepts_what_http_rejects() {
        let parser = PatternParser::new().with_token_predicate(|_: char| true);
        let p = parser.parse("G@T /x").unwrap();
        assert_eq!(p.method(), "G@T");
    }
}
