/// Formats the candidate names a misspelled reference could have meant
///
/// The output has the shape `Missing <name>, could be: a b c`. Callers pass
/// the candidates pre-sorted when they need deterministic messages.
pub fn match_strings(name: &str, candidates: &[String]) -> String {
    let mut message = format!("Missing {}, could be: ", name);
    let mut first = true;
    for candidate in candidates {
        if first {
            first = false;
        } else {
            message.push(' ');
        }
        message.push_str(candidate);
    }
    message
}
