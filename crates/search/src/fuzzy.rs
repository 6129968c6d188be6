//! Greedy subsequence matching.

/// Count how many characters of `pattern` a single greedy pass over `text` consumes.
///
/// The scan walks `text` left to right and advances in `pattern` whenever the
/// current text character equals the next pending pattern character. There is
/// no backtracking and no skipping ahead in the pattern, so an out-of-order
/// character stalls the match until it shows up later in `text`.
///
/// # Arguments
/// * `pattern` - Characters to consume, in order
/// * `text` - Text to walk
///
/// # Returns
/// Number of pattern characters consumed (at most the pattern's char count)
pub fn greedy_match_count(pattern: &str, text: &str) -> usize {
    let mut pending = pattern.chars().peekable();
    let mut consumed = 0;

    for c in text.chars() {
        match pending.peek() {
            Some(&p) if p == c => {
                pending.next();
                consumed += 1;
            }
            Some(_) => {}
            None => break,
        }
    }

    consumed
}

/// Check if text contains all characters of pattern in order.
///
/// # Arguments
/// * `pattern` - Pattern characters to find
/// * `text` - Text to search in
///
/// # Returns
/// true if every pattern character is consumed by the greedy pass
pub fn is_subsequence(pattern: &str, text: &str) -> bool {
    greedy_match_count(pattern, text) == pattern.chars().count()
}
