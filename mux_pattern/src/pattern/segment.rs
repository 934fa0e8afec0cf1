use mux_lib::url_encoding::percent_encode_segment;
use serde::{Serialize, Serializer};
use std::borrow::Cow;

/// One slash-delimited unit of a compiled path.
#[derive(Clone, Debug, Serialize)]
pub enum Segment {
    Literal(#[serde(serialize_with = "lossy_text")] Vec<u8>), // Percent-decoded bytes, e.g. b"foo"
    Wildcard(String), // "{name}", matches exactly one path component
    Multi(String), // "{name...}", or "" for the implicit trailing-slash catch-all
    End, // "{$}", the path must end here
}

impl Segment {
    pub fn literal<T: Into<Vec<u8>>>(bytes: T) -> Self {
        Self::Literal(bytes.into())
    }

    pub fn wildcard<T: Into<String>>(name: T) -> Self {
        Self::Wildcard(name.into())
    }

    pub fn multi<T: Into<String>>(name: T) -> Self {
        Self::Multi(name.into())
    }

    /// The decoded literal bytes, the wildcard name, or `b"/"` for the end marker.
    pub fn bytes(&self) -> &[u8] {
        match self {
            Segment::Literal(b) => b,
            Segment::Wildcard(s) | Segment::Multi(s) => s.as_bytes(),
            Segment::End => b"/",
        }
    }

    /// [`Segment::bytes`] as text. Literal bytes that are not UTF-8 are replaced lossily.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.bytes())
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Wildcard(_) | Segment::Multi(_))
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, Segment::Multi(_))
    }

    /// The name this segment binds, if any. The implicit trailing catch-all has none.
    pub fn wildcard_name(&self) -> Option<&str> {
        match self {
            Segment::Wildcard(name) | Segment::Multi(name) if !name.is_empty() => Some(name),
            _ => None,
        }
    }
}

// The end marker compares as the literal "/", the text it is stored under.
impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Segment::Wildcard(l), Segment::Wildcard(r)) => l == r,
            (Segment::Multi(l), Segment::Multi(r)) => l == r,
            (Segment::Wildcard(_) | Segment::Multi(_), _)
            | (_, Segment::Wildcard(_) | Segment::Multi(_)) => false,
            (l, r) => l.bytes() == r.bytes(),
        }
    }
}

impl Eq for Segment {}

/// Writes the segment back in pattern syntax, without the leading `/`.
impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Literal(bytes) if matches!(bytes.as_slice(), b"." | b"..") => {
                write!(f, "{}", "%2E".repeat(bytes.len()))
            }
            Segment::Literal(bytes) => write!(f, "{}", percent_encode_segment(bytes)),
            Segment::Wildcard(name) => write!(f, "{{{}}}", name),
            Segment::Multi(name) if name.is_empty() => Ok(()),
            Segment::Multi(name) => write!(f, "{{{}...}}", name),
            Segment::End => write!(f, "{{$}}"),
        }
    }
}

fn lossy_text<S: Serializer, T: AsRef<[u8]>>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(bytes.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_marker_equals_slash_literal() {
        assert_eq!(Segment::End, Segment::literal("/"));
        assert_eq!(Segment::End.text(), "/");
        assert!(!Segment::End.is_wildcard());
    }

    #[test]
    fn literal_bytes_need_not_be_utf8() {
        let raw = Segment::literal(vec![0xFFu8]);
        assert_eq!(raw.bytes(), &[0xFFu8]);
        assert_eq!(raw.text(), "\u{FFFD}");
        assert_ne!(raw, Segment::literal("%FF"));
    }

    #[test]
    fn wildcards_never_equal_literals() {
        assert_ne!(Segment::wildcard("a"), Segment::literal("a"));
        assert_ne!(Segment::wildcard("a"), Segment::multi("a"));
        assert_ne!(Segment::multi(""), Segment::literal(""));
    }

    #[test]
    fn flags_follow_kind() {
        let multi = Segment::multi("rest");
        assert!(multi.is_wildcard() && multi.is_multi());
        let single = Segment::wildcard("id");
        assert!(single.is_wildcard() && !single.is_multi());
        assert!(!Segment::literal("x").is_wildcard());
    }

    #[test]
    fn wildcard_name_skips_unnamed_multi() {
        assert_eq!(Segment::multi("").wildcard_name(), None);
        assert_eq!(Segment::multi("p").wildcard_name(), Some("p"));
        assert_eq!(Segment::literal("p").wildcard_name(), None);
    }

    #[test]
    fn display_in_pattern_syntax() {
        assert_eq!(Segment::literal("a/b").to_string(), "a%2Fb");
        assert_eq!(Segment::literal("..").to_string(), "%2E%2E");
        assert_eq!(Segment::literal(vec![0xFFu8]).to_string(), "%FF");
        assert_eq!(Segment::wildcard("id").to_string(), "{id}");
        assert_eq!(Segment::multi("rest").to_string(), "{rest...}");
        assert_eq!(Segment::multi("").to_string(), "");
        assert_eq!(Segment::End.to_string(), "{$}");
    }

    #[test]
    fn serializes_as_tagged_enum() {
        let json = serde_json::to_string(&vec![Segment::literal("a"), Segment::End]).unwrap();
        assert_eq!(json, r#"[{"Literal":"a"},"End"]"#);
    }
}
