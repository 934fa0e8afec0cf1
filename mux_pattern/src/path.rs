//! Lexical URL path canonicalization
//!
//! All functions here are pure string transformations. Nothing is percent-decoded
//! and nothing touches the filesystem.

/// Returns the canonical form of `path`.
///
/// - the result always starts with `/`
/// - empty and `.` segments are dropped
/// - `..` removes the previous segment and never climbs above the root
/// - a trailing `/` on the input is kept, unless the result is the bare root
///
/// # Examples
///
/// ```
/// use mux_pattern::path::clean_path;
///
/// assert_eq!(clean_path("/foo/../bar/./..//baz"), "/baz");
/// assert_eq!(clean_path("x//"), "/x/");
/// assert_eq!(clean_path("a//b/////c"), "/a/b/c");
/// ```
pub fn clean_path(path: &str) -> String {
    let mut stack: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            s => stack.push(s),
        }
    }

    let mut out = String::with_capacity(path.len() + 1);
    for segment in &stack {
        out.push('/');
        out.push_str(segment);
    }
    if out.is_empty() {
        out.push('/');
    } else if path.ends_with('/') {
        out.push('/');
    }
    out
}

/// Returns true if `path` is already in the form produced by [`clean_path`].
pub fn is_clean_path(path: &str) -> bool {
    first_unclean_segment(path).is_none()
}

/// Finds the byte offset of the `/` that introduces the first segment
/// [`clean_path`] would rewrite: an empty segment that is not the last one,
/// or a `.` or `..` segment anywhere.
///
/// A path that does not start with `/` is unclean at offset 0.
pub fn first_unclean_segment(path: &str) -> Option<usize> {
    if !path.starts_with('/') {
        return Some(0);
    }
    let mut slash = 0;
    loop {
        let body = slash + 1;
        let end = path[body..].find('/').map(|i| body + i);
        let segment = &path[body..end.unwrap_or(path.len())];
        match (segment, end) {
            ("." | "..", _) | ("", Some(_)) => return Some(slash),
            _ => {}
        }
        slash = end?;
    }
}
