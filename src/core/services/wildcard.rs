//! Wildcard matcher - `*` and `?` glob matching of a single token
//!
//! This module contains pure matching logic with no I/O dependencies.
//!
//! - `?` matches exactly one character
//! - `*` matches any run of characters, including none
//! - matching is case-sensitive and there is no escape syntax
//!
//! Literal segments between stars are located first-fit, left to right,
//! without backtracking. A pattern such as `a*b*c` therefore commits to the
//! first `b` after the prefix.

/// Check if a wildcard pattern matches a value
///
/// # Examples
///
/// ```
/// use artifact_filter::core::services::wildcard;
///
/// assert!(wildcard::matches("some-*-id", "some-artifact-id"));
/// assert!(wildcard::matches("a?c", "abc"));
/// assert!(!wildcard::matches("a*b*c", "acb"));
/// ```
#[must_use]
pub fn matches(pattern: &str, value: &str) -> bool {
    let pat: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = value.chars().collect();

    if !pat.contains(&'*') {
        return pat.len() == text.len()
            && pat.iter().zip(&text).all(|(p, c)| char_matches(*p, *c));
    }

    // Pattern is exactly "*"
    if pat.len() == 1 {
        return true;
    }

    // Pattern bounds are inclusive, text bounds half-open
    let mut pat_start = 0;
    let mut pat_end = pat.len() - 1;
    let mut text_start = 0;
    let mut text_end = text.len();

    // Characters before the first star
    while pat[pat_start] != '*' && text_start < text_end {
        if !char_matches(pat[pat_start], text[text_start]) {
            return false;
        }
        pat_start += 1;
        text_start += 1;
    }
    if text_start == text_end {
        return only_stars(&pat[pat_start..=pat_end]);
    }

    // Characters after the last star
    while pat[pat_end] != '*' && text_start < text_end {
        if !char_matches(pat[pat_end], text[text_end - 1]) {
            return false;
        }
        pat_end -= 1;
        text_end -= 1;
    }
    if text_start == text_end {
        return only_stars(&pat[pat_start..=pat_end]);
    }

    // Both pat_start and pat_end now sit on a star
    while pat_start != pat_end && text_start < text_end {
        let Some(next_star) = (pat_start + 1..=pat_end).find(|&i| pat[i] == '*') else {
            break;
        };
        if next_star == pat_start + 1 {
            pat_start += 1;
            continue;
        }

        let segment = &pat[pat_start + 1..next_star];
        let Some(found) = find_segment(segment, &text[text_start..text_end]) else {
            return false;
        };

        pat_start = next_star;
        text_start += found + segment.len();
    }

    only_stars(&pat[pat_start..=pat_end])
}

/// Check if a token carries any wildcard character
#[must_use]
pub fn has_wildcard(token: &str) -> bool {
    token.contains(['*', '?'])
}

const fn char_matches(pattern: char, c: char) -> bool {
    pattern == '?' || pattern == c
}

fn only_stars(pat: &[char]) -> bool {
    pat.iter().all(|&c| c == '*')
}

/// First offset in `text` where `segment` matches, `?` matching any character
fn find_segment(segment: &[char], text: &[char]) -> Option<usize> {
    if segment.len() > text.len() {
        return None;
    }
    (0..=text.len() - segment.len()).find(|&offset| {
        segment
            .iter()
            .zip(&text[offset..])
            .all(|(p, c)| char_matches(*p, *c))
    })
}
