//! HTTP token classification (RFC 9110, section 5.6.2).
//!
//! ```text
//! token = 1*tchar
//! tchar = "!" / "#" / "$" / "%" / "&" / "'" / "*" / "+" / "-" / "." /
//!         "^" / "_" / "`" / "|" / "~" / DIGIT / ALPHA
//! ```

/// Returns true if `c` may appear in an HTTP token, such as a method name. 
pub fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '-' | '.' | '^' | '_' | '`' | '|' | '~'
        )
}

/// Returns true if `method` is a non-empty HTTP token. 
pub fn is_valid_method(method: &str) -> bool {
    !method.is_empty() && method.chars().all(is_token_char)
}
