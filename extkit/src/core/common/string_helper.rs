// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Returns the trimmed text, or [`None`] if nothing but whitespace is left.
#[must_use]
pub fn trimmed_or_none(text: &str) -> Option<&str> {
    let it = text.trim();
    if it.is_empty() { None } else { Some(it) }
}

/// Uppercases the first character and leaves the rest of the text as is. Handles
/// characters whose uppercase form is more than one character, eg: `ß` -> `SS`.
#[must_use]
pub fn capitalized_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case("  hello ", Some("hello") ; "surrounding whitespace")]
    #[test_case("hello", Some("hello") ; "no whitespace")]
    #[test_case(" \t\n", None ; "whitespace only")]
    #[test_case("", None ; "empty")]
    fn test_trimmed_or_none(input: &str, expected: Option<&str>) {
        assert_eq2!(trimmed_or_none(input), expected);
    }

    #[test_case("hello world", "Hello world" ; "lowercase first")]
    #[test_case("Already", "Already" ; "already capitalized")]
    #[test_case("ßeta", "SSeta" ; "multi char uppercase")]
    #[test_case("", "" ; "empty")]
    fn test_capitalized_first(input: &str, expected: &str) {
        assert_eq2!(capitalized_first(input), expected);
    }
}
