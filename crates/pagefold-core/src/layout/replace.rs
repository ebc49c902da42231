//! Single-pass substring search and replace
//!
//! The match strings are short fixed markers, so candidate windows are
//! compared character by character; no automaton is built. Each call scans
//! the source exactly once, left to right, copying unmatched text verbatim.

/// Replace every occurrence of `pat` in `source` with `replacement`.
pub fn replace(source: &str, pat: &str, replacement: &str) -> String {
    replace_from(source, pat, replacement, 0)
}

/// Replace every occurrence of `pat`, starting the search at `search_from`.
///
/// `search_from` must lie on a character boundary (callers pass positions
/// previously located in `source`). A `pat` equal to `replacement`, or an
/// empty `pat`, returns the source unchanged.
pub fn replace_from(source: &str, pat: &str, replacement: &str, search_from: usize) -> String {
    if pat.is_empty() || pat == replacement {
        return source.to_string();
    }
    // Pre-size so the buffer does not grow on replacement
    let extra = replacement.len().saturating_sub(pat.len());
    let mut out = String::with_capacity(source.len() + extra);

    let start = search_from.min(source.len());
    out.push_str(&source[..start]);

    let bytes = source.as_bytes();
    let pat_bytes = pat.as_bytes();
    let first = pat_bytes[0];
    let mut run = start;
    let mut i = start;
    while i < bytes.len() {
        if bytes[i] == first && window_matches(bytes, i, pat_bytes) {
            out.push_str(&source[run..i]);
            out.push_str(replacement);
            i += pat_bytes.len();
            run = i;
        } else {
            i += 1;
        }
    }
    out.push_str(&source[run..]);
    out
}

/// Replace any of `pats` with `replacement`, one left-to-right scan.
///
/// All patterns are tested at each position; the first in priority order
/// that matches is consumed. Useful for newline normalization, where
/// `["\r\n", "\r", "\n"]` must be tried longest first.
pub fn replace_multi(source: &str, pats: &[&str], replacement: &str) -> String {
    if pats.is_empty() {
        return source.to_string();
    }
    let mut out = String::with_capacity(source.len() + 32);

    let bytes = source.as_bytes();
    let mut run = 0;
    let mut i = 0;
    'scan: while i < bytes.len() {
        for pat in pats {
            let pat_bytes = pat.as_bytes();
            if !pat_bytes.is_empty() && window_matches(bytes, i, pat_bytes) {
                out.push_str(&source[run..i]);
                out.push_str(replacement);
                i += pat_bytes.len();
                run = i;
                continue 'scan;
            }
        }
        i += 1;
    }
    out.push_str(&source[run..]);
    out
}

/// Remove every occurrence of the given characters.
pub fn remove_chars(source: &str, chars: &[char]) -> String {
    source.chars().filter(|c| !chars.contains(c)).collect()
}

fn window_matches(bytes: &[u8], at: usize, pat: &[u8]) -> bool {
    if at + pat.len() > bytes.len() {
        return false;
    }
    for (j, &p) in pat.iter().enumerate() {
        if bytes[at + j] != p {
            return false;
        }
    }
    true
}
