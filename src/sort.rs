//! Natural ordering for filenames.
//!
//! Digit runs compare by numeric magnitude and everything else compares
//! case-insensitively, so `image2.png` sorts before `image10.png`.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::OnceLock;

fn digit_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").expect("static pattern"))
}

/// One token of a natural sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NaturalToken {
    /// Lowercased non-digit run
    Text(String),
    /// Digit run with leading zeros stripped (kept as text so any length compares safely)
    Number(String),
}

impl Ord for NaturalToken {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (NaturalToken::Number(a), NaturalToken::Number(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (NaturalToken::Text(a), NaturalToken::Text(b)) => a.cmp(b),
            (NaturalToken::Number(_), NaturalToken::Text(_)) => Ordering::Less,
            (NaturalToken::Text(_), NaturalToken::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for NaturalToken {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the natural sort key for a string.
///
/// Empty input produces an empty key.
pub fn natural_key(s: &str) -> Vec<NaturalToken> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for m in digit_runs().find_iter(s) {
        if m.start() > last {
            tokens.push(NaturalToken::Text(s[last..m.start()].to_lowercase()));
        }
        let digits = m.as_str().trim_start_matches('0');
        let digits = if digits.is_empty() { "0" } else { digits };
        tokens.push(NaturalToken::Number(digits.to_string()));
        last = m.end();
    }

    if last < s.len() {
        tokens.push(NaturalToken::Text(s[last..].to_lowercase()));
    }

    tokens
}

/// Compare two strings in natural order.
///
/// Keys that compare equal (`a01` vs `a1`, `A` vs `a`) fall back to byte order,
/// so the ordering is total.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_key(a)
        .cmp(&natural_key(b))
        .then_with(|| a.cmp(b))
}

/// Sort a slice of names in natural order.
pub fn natural_sort<S: AsRef<str>>(names: &mut [S]) {
    names.sort_by_cached_key(|name| (natural_key(name.as_ref()), name.as_ref().to_string()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_runs_sort_by_magnitude() {
        let mut names = vec!["image10.png", "image2.png", "image1.png"];
        natural_sort(&mut names);
        assert_eq!(names, vec!["image1.png", "image2.png", "image10.png"]);
    }

    #[test]
    fn test_lexicographic_would_invert() {
        let mut lexical = vec!["image10.png", "image2.png"];
        lexical.sort();
        assert_eq!(lexical, vec!["image10.png", "image2.png"]);

        assert_eq!(natural_cmp("image2.png", "image10.png"), Ordering::Less);
    }

    #[test]
    fn test_case_insensitive_text() {
        assert_eq!(natural_key("IMAGE"), natural_key("image"));
        let mut names = vec!["b.png", "A.png", "c.png"];
        natural_sort(&mut names);
        assert_eq!(names, vec!["A.png", "b.png", "c.png"]);
    }

    #[test]
    fn test_edge_inputs() {
        assert!(natural_key("").is_empty());
        assert_eq!(
            natural_key("nodigits"),
            vec![NaturalToken::Text("nodigits".into())]
        );
        assert_eq!(
            natural_key("12abc"),
            vec![
                NaturalToken::Number("12".into()),
                NaturalToken::Text("abc".into())
            ]
        );
    }

    #[test]
    fn test_leading_zeros_and_huge_numbers() {
        assert_eq!(natural_key("a007"), natural_key("a7"));
        assert_ne!(natural_cmp("a007", "a7"), Ordering::Equal);

        let huge = format!("img{}.png", "9".repeat(60));
        assert_eq!(natural_cmp("img5.png", &huge), Ordering::Less);
    }

    #[test]
    fn test_zero_run() {
        assert_eq!(natural_key("000"), vec![NaturalToken::Number("0".into())]);
    }
}
