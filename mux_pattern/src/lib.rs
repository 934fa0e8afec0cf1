pub mod debug; 
pub mod path;
pub mod pattern;

pub use path::clean_path;
pub use pattern::{
    ErrorKind, HttpToken, Pattern, PatternError, PatternParser, Segment, TokenPredicate, compile,
    render_diagnostic,
};
