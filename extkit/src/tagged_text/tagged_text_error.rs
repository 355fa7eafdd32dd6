// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::TaggedComponents;
use miette::SourceSpan;

/// Every way [`split_by_tag_names()`] can fail. None of these are retryable; the caller
/// is expected to fall back to the raw, unparsed string (which is what
/// [`AttributedText`] does).
///
/// | Kind                        | Cause                                                    |
/// | :-------------------------- | :------------------------------------------------------- |
/// | [`NestedTagsNotSupported`]  | An opening tag shows up while another tag is still open  |
/// | [`InvalidOpeningTag`]       | `<x` is cut short, or not followed by `>`                |
/// | [`SlashFoundInOpeningTag`]  | `</` where a fresh opening tag was expected              |
/// | [`OpeningTagNameNotFound`]  | The char after `<` isn't an allowed tag name             |
/// | [`InvalidClosingTag`]       | `</x` is cut short or not followed by `>`, or a stray leading `>` |
/// | [`ClosingTagSlashNotFound`] | `<` inside an open tag isn't followed by `/`             |
/// | [`ClosingTagNameNotFound`]  | The char after `</` isn't an allowed tag name            |
/// | [`UnknownErrorOccurred`]    | A stray `>` past the start, or the input ends inside an open tag |
///
/// [`split_by_tag_names()`]: super::split_by_tag_names
/// [`AttributedText`]: super::AttributedText
/// [`NestedTagsNotSupported`]: Self::NestedTagsNotSupported
/// [`InvalidOpeningTag`]: Self::InvalidOpeningTag
/// [`SlashFoundInOpeningTag`]: Self::SlashFoundInOpeningTag
/// [`OpeningTagNameNotFound`]: Self::OpeningTagNameNotFound
/// [`InvalidClosingTag`]: Self::InvalidClosingTag
/// [`ClosingTagSlashNotFound`]: Self::ClosingTagSlashNotFound
/// [`ClosingTagNameNotFound`]: Self::ClosingTagNameNotFound
/// [`UnknownErrorOccurred`]: Self::UnknownErrorOccurred
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumCount,
    strum_macros::EnumIter,
)]
pub enum TagParseErrorKind {
    #[strum(to_string = "nested tags not supported")]
    NestedTagsNotSupported,
    #[strum(to_string = "invalid opening tag")]
    InvalidOpeningTag,
    #[strum(to_string = "slash found in opening tag")]
    SlashFoundInOpeningTag,
    #[strum(to_string = "opening tag name not found")]
    OpeningTagNameNotFound,
    #[strum(to_string = "invalid closing tag")]
    InvalidClosingTag,
    #[strum(to_string = "closing tag slash not found")]
    ClosingTagSlashNotFound,
    #[strum(to_string = "closing tag name not found")]
    ClosingTagNameNotFound,
    #[strum(to_string = "unknown error occurred")]
    UnknownErrorOccurred,
}

impl TagParseErrorKind {
    #[must_use]
    pub fn help(self) -> &'static str {
        match self {
            Self::NestedTagsNotSupported => {
                "Close the open tag before opening another one, eg: `<b>a</b><i>b</i>`"
            }
            Self::InvalidOpeningTag => "Opening tags look like `<b>`",
            Self::SlashFoundInOpeningTag => {
                "There is no open tag to close here, remove the `</x>` or add a `<x>` before it"
            }
            Self::OpeningTagNameNotFound | Self::ClosingTagNameNotFound => {
                "Tag names are single characters and must be in the allowed set"
            }
            Self::InvalidClosingTag => "Closing tags look like `</b>`",
            Self::ClosingTagSlashNotFound => {
                "Only a closing tag like `</b>` can appear inside an open tag"
            }
            Self::UnknownErrorOccurred => {
                "A `>` must belong to a tag, and every open tag must be closed before the end of the text"
            }
        }
    }
}

/// Returned by [`split_by_tag_names()`]. Carries the [`TagParseErrorKind`], where
/// scanning stopped, and the components that were complete before the failure. Render it
/// with [`miette`] to get the offending spot labelled in the input.
///
/// [`split_by_tag_names()`]: super::split_by_tag_names
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("Could not split tagged text: {kind} (at char {char_offset})")]
#[diagnostic(code(extkit::tagged_text::split_by_tag_names))]
pub struct TagParseError {
    pub kind: TagParseErrorKind,

    /// Offset in chars (not bytes) into the input.
    pub char_offset: usize,

    /// Components flushed before the failure. Their concatenated text is a prefix of the
    /// tag-stripped input.
    pub components_before_failure: TaggedComponents,

    #[source_code]
    input: String,

    #[label("stopped here")]
    span: SourceSpan,

    #[help]
    help: Option<String>,
}

impl TagParseError {
    #[must_use]
    pub fn new(
        kind: TagParseErrorKind,
        input: &str,
        char_offset: usize,
        components_before_failure: TaggedComponents,
    ) -> Self {
        let span = {
            let mut iter = input.char_indices().skip(char_offset);
            match iter.next() {
                Some((byte_offset, ch)) => SourceSpan::from((byte_offset, ch.len_utf8())),
                None => SourceSpan::from((input.len(), 0)),
            }
        };

        Self {
            kind,
            char_offset,
            components_before_failure,
            input: input.to_string(),
            span,
            help: Some(kind.help().to_string()),
        }
    }

    #[must_use]
    pub fn input(&self) -> &str { &self.input }

    #[must_use]
    pub fn span(&self) -> SourceSpan { self.span }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_there_are_eight_distinct_kinds() {
        assert_eq2!(TagParseErrorKind::COUNT, 8);
        let messages: std::collections::HashSet<String> =
            TagParseErrorKind::iter().map(|it| it.to_string()).collect();
        assert_eq2!(messages.len(), 8);
    }

    #[test]
    fn test_span_uses_byte_offsets() {
        // "é" is 2 bytes, so the 3rd char starts at byte 3.
        let err = TagParseError::new(
            TagParseErrorKind::InvalidClosingTag,
            "éa>",
            2,
            TaggedComponents::new(),
        );
        assert_eq2!(err.span().offset(), 3);
        assert_eq2!(err.span().len(), 1);
    }

    #[test]
    fn test_span_at_end_of_input_is_empty() {
        let err = TagParseError::new(
            TagParseErrorKind::UnknownErrorOccurred,
            "<b>abc",
            6,
            TaggedComponents::new(),
        );
        assert_eq2!(err.span().offset(), 6);
        assert_eq2!(err.span().len(), 0);
    }

    #[test]
    fn test_display_names_kind_and_offset() {
        let err = TagParseError::new(
            TagParseErrorKind::SlashFoundInOpeningTag,
            "</b>",
            0,
            TaggedComponents::new(),
        );
        assert_eq2!(
            err.to_string(),
            "Could not split tagged text: slash found in opening tag (at char 0)"
        );
    }
}
