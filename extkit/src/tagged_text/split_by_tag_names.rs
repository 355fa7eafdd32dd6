// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{CLOSING_TAG_LEN, DEBUG_TAGGED_TEXT, OPENING_TAG_LEN, TAG_CLOSE_CHAR,
            TAG_OPEN_CHAR, TAG_SLASH_CHAR, TagParseError, TagParseErrorKind,
            TaggedComponent, TaggedComponents};
use crate::InlineString;
use std::collections::HashSet;

/// Splits `text` into an ordered list of plain and tagged runs.
///
/// The grammar is deliberately tiny:
/// - A tag name is exactly one char, and it must be in `allowed_tags`.
/// - An opening tag is `<x>`, a closing tag is `</x>`.
/// - Tags never nest. Opening any tag (even the same one) while another is open fails.
/// - There is no escaping. `<` always starts a tag and a `>` that isn't part of a tag
///   is an error.
///
/// The scan is a single left to right pass. Plain text is accumulated until a `<` shows
/// up, at which point it is flushed as a plain component. The text inside a tag is
/// flushed as a tagged component when its closing tag is consumed.
///
/// ```
/// use extkit::{TaggedComponent, split_by_tag_names, tag_names};
///
/// let it = split_by_tag_names("a <b>b</b> c", &tag_names!['b']).unwrap();
/// assert_eq!(
///     it.as_slice(),
///     &[
///         TaggedComponent::plain("a "),
///         TaggedComponent::tagged('b', "b"),
///         TaggedComponent::plain(" c"),
///     ]
/// );
/// ```
///
/// # Errors
///
/// Returns a [`TagParseError`] describing the first violation. See
/// [`TagParseErrorKind`] for all of them.
pub fn split_by_tag_names(
    text: &str,
    allowed_tags: &HashSet<char>,
) -> Result<TaggedComponents, TagParseError> {
    let chars: Vec<char> = text.chars().collect();
    let mut scanner = Scanner {
        text,
        chars: &chars,
        allowed_tags,
        components: TaggedComponents::new(),
        pending: InlineString::new(),
        open_tag: None,
    };

    let mut index = 0;
    while let Some(&ch) = chars.get(index) {
        index = match (ch, scanner.open_tag) {
            (TAG_OPEN_CHAR, None) => scanner.consume_opening_tag(index)?,
            (TAG_OPEN_CHAR, Some(tag_name)) => {
                scanner.consume_closing_tag(index, tag_name)?
            }
            // A closing bracket at the very start can't belong to any tag.
            (TAG_CLOSE_CHAR, _) if index == 0 => {
                return Err(scanner.fail(TagParseErrorKind::InvalidClosingTag, index));
            }
            // Opening and closing tags consume their own `>`, so any other one is stray.
            (TAG_CLOSE_CHAR, _) => {
                return Err(scanner.fail(TagParseErrorKind::UnknownErrorOccurred, index));
            }
            _ => {
                scanner.pending.push(ch);
                index + 1
            }
        };
    }

    if scanner.open_tag.is_some() {
        return Err(scanner.fail(TagParseErrorKind::UnknownErrorOccurred, chars.len()));
    }

    scanner.flush_plain();
    Ok(scanner.components)
}

/// Adds [`split_by_tag_names()`] as a method on strings.
///
/// ```
/// use extkit::{SplitByTagNames, TagParseErrorKind, tag_names};
///
/// let err = "Lorem </b> ipsum".split_by_tag_names(&tag_names!['b']).unwrap_err();
/// assert_eq!(err.kind, TagParseErrorKind::SlashFoundInOpeningTag);
/// ```
pub trait SplitByTagNames {
    /// # Errors
    ///
    /// See [`split_by_tag_names()`].
    fn split_by_tag_names(
        &self,
        allowed_tags: &HashSet<char>,
    ) -> Result<TaggedComponents, TagParseError>;
}

impl<T: AsRef<str> + ?Sized> SplitByTagNames for T {
    fn split_by_tag_names(
        &self,
        allowed_tags: &HashSet<char>,
    ) -> Result<TaggedComponents, TagParseError> {
        split_by_tag_names(self.as_ref(), allowed_tags)
    }
}

/// Working state for one call to [`split_by_tag_names()`]. Never shared across calls.
struct Scanner<'a> {
    text: &'a str,
    chars: &'a [char],
    allowed_tags: &'a HashSet<char>,
    components: TaggedComponents,
    pending: InlineString,
    open_tag: Option<char>,
}

impl Scanner<'_> {
    fn is_allowed(&self, maybe_tag_name: Option<char>) -> bool {
        maybe_tag_name.is_some_and(|it| self.allowed_tags.contains(&it))
    }

    fn char_at(&self, index: usize) -> Option<char> { self.chars.get(index).copied() }

    /// `index` points at the `<`. Returns the index right after the `>`.
    fn consume_opening_tag(&mut self, index: usize) -> Result<usize, TagParseError> {
        self.flush_plain();

        let maybe_tag_name = self.char_at(index + 1);
        if maybe_tag_name == Some(TAG_SLASH_CHAR) {
            return Err(self.fail(TagParseErrorKind::SlashFoundInOpeningTag, index));
        }
        let Some(tag_name) = maybe_tag_name else {
            return Err(self.fail(TagParseErrorKind::InvalidOpeningTag, index));
        };
        if !self.is_allowed(Some(tag_name)) {
            return Err(self.fail(TagParseErrorKind::OpeningTagNameNotFound, index + 1));
        }
        if self.char_at(index + 2) != Some(TAG_CLOSE_CHAR) {
            return Err(self.fail(TagParseErrorKind::InvalidOpeningTag, index + 2));
        }

        self.open_tag = Some(tag_name);
        Ok(index + OPENING_TAG_LEN)
    }

    /// `index` points at the `<` while `tag_name` is open. Returns the index right after
    /// the `>`.
    fn consume_closing_tag(
        &mut self,
        index: usize,
        tag_name: char,
    ) -> Result<usize, TagParseError> {
        // `/`, the tag name, and `>` must all follow.
        if index + CLOSING_TAG_LEN > self.chars.len() {
            return Err(self.fail(TagParseErrorKind::InvalidClosingTag, index));
        }

        let after_open = self.char_at(index + 1);
        if after_open != Some(TAG_SLASH_CHAR) && self.is_allowed(after_open) {
            return Err(self.fail(TagParseErrorKind::NestedTagsNotSupported, index));
        }
        if after_open != Some(TAG_SLASH_CHAR) {
            return Err(self.fail(TagParseErrorKind::ClosingTagSlashNotFound, index + 1));
        }
        if !self.is_allowed(self.char_at(index + 2)) {
            return Err(self.fail(TagParseErrorKind::ClosingTagNameNotFound, index + 2));
        }
        if self.char_at(index + 3) != Some(TAG_CLOSE_CHAR) {
            return Err(self.fail(TagParseErrorKind::InvalidClosingTag, index + 3));
        }

        let text = std::mem::take(&mut self.pending).into_string();
        self.push(TaggedComponent::tagged(tag_name, text));
        self.open_tag = None;
        Ok(index + CLOSING_TAG_LEN)
    }

    fn flush_plain(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.pending).into_string();
        self.push(TaggedComponent::plain(text));
    }

    fn push(&mut self, component: TaggedComponent) {
        DEBUG_TAGGED_TEXT.then(|| {
            tracing::trace!(
                message = "split_by_tag_names -> flushed component",
                tag_name = ?component.tag_name,
                text = ?component.text
            );
        });
        self.components.push(component);
    }

    fn fail(&mut self, kind: TagParseErrorKind, char_offset: usize) -> TagParseError {
        tracing::debug!(
            message = "split_by_tag_names -> failed",
            kind = %kind,
            char_offset
        );
        TagParseError::new(
            kind,
            self.text,
            char_offset,
            std::mem::take(&mut self.components),
        )
    }
}
