use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, percent_encode}; 

/// Characters that must be escaped when a literal path segment is written back
/// into a pattern string. `/` would split the segment, `%` would start an
/// escape, braces would start a wildcard and blanks would end the method.
const SEGMENT: &AsciiSet = &CONTROLS.add(b' ').add(b'%').add(b'/').add(b'{').add(b'}'); 

/// Decodes `%XX` escapes in a single path segment into raw bytes. 
/// 
/// A `%` that is not followed by two hex digits is kept as it is. 
/// The result need not be valid UTF-8: `%FF` decodes to the single byte `0xFF`. 
pub fn percent_decode_segment(segment: &str) -> Vec<u8> {
    percent_decode_str(segment).collect()
} 

/// Escapes decoded segment bytes so that `percent_decode_segment` gives them back. 
/// Bytes outside ASCII are always escaped. 
pub fn percent_encode_segment(segment: &[u8]) -> String {
    percent_encode(segment, SEGMENT).to_string()
} 
