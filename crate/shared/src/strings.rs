//! Leaf string routines: trims, case transforms, padding, replacement and
//! substring extraction. Trims and case transforms operate on Unicode scalar
//! values; `substring` operates on byte offsets (see its documentation).

/// The characters the trim routines strip when no custom set is given.
pub const DEFAULT_SPACE: &str = " \t\r\n";

/// Removes leading characters contained in `chars`
pub fn trim_start(s: &str, chars: &str) -> String {
    s.trim_start_matches(|c| chars.contains(c)).to_string()
}

/// Removes trailing characters contained in `chars`
pub fn trim_end(s: &str, chars: &str) -> String {
    s.trim_end_matches(|c| chars.contains(c)).to_string()
}

/// Removes leading and trailing characters contained in `chars`
pub fn trim(s: &str, chars: &str) -> String {
    s.trim_matches(|c| chars.contains(c)).to_string()
}

/// Lowercases the input
pub fn to_lower(s: &str) -> String {
    s.to_lowercase()
}

/// Uppercases the input
pub fn to_upper(s: &str) -> String {
    s.to_uppercase()
}

/// Lowercases the input, then upper-cases the first letter of each
/// whitespace-delimited word
///
/// ### Arguments
/// * `s` - The text to transform
/// * `also_first_char` - Whether the very first letter is capitalized too
pub fn capitalize(s: &str, also_first_char: bool) -> String {
    let mut capitalize_next = also_first_char;
    let mut out = String::with_capacity(s.len());
    for c in s.to_lowercase().chars() {
        if c.is_alphabetic() && capitalize_next {
            out.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            if c.is_whitespace() {
                capitalize_next = true;
            }
            out.push(c);
        }
    }
    out
}

/// Pads the input on the left with `fill` up to `width` characters
///
/// Inputs already `width` characters or longer are returned unchanged.
pub fn pad_left(s: &str, width: usize, fill: char) -> String {
    let length = s.chars().count();
    if length >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + width - length);
    for _ in length..width {
        out.push(fill);
    }
    out.push_str(s);
    out
}

/// Replaces every non-overlapping occurrence of `from` with `to`
///
/// An empty `from` matches nothing and returns the input unchanged.
pub fn replace(s: &str, from: &str, to: &str) -> String {
    if from.is_empty() {
        return s.to_string();
    }
    s.replace(from, to)
}

/// Returns the substring of `count` bytes starting at byte offset `start`
///
/// Out-of-range offsets are clamped to the input and snapped back to the
/// nearest UTF-8 boundary, so the call is total and never panics.
pub fn substring(s: &str, start: usize, count: usize) -> String {
    let mut begin = start.min(s.len());
    while !s.is_char_boundary(begin) {
        begin -= 1;
    }
    let mut end = begin.saturating_add(count).min(s.len());
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s[begin..end].to_string()
}
