// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::InlineVec;

/// A run of text, either plain (`tag_name` is [`None`]) or wrapped in a single
/// character tag, eg: `<b>ipsum</b>` is `{ tag_name: Some('b'), text: "ipsum" }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaggedComponent {
    pub tag_name: Option<char>,
    pub text: String,
}

impl TaggedComponent {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            tag_name: None,
            text: text.into(),
        }
    }

    pub fn tagged(tag_name: char, text: impl Into<String>) -> Self {
        Self {
            tag_name: Some(tag_name),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn is_plain(&self) -> bool { self.tag_name.is_none() }
}

/// Ordered list of components. Concatenating their text, in order, gives back the input
/// with all the tag markup removed.
pub type TaggedComponents = InlineVec<TaggedComponent>;

pub trait ConcatText {
    /// Joins the text of every component, dropping the tags.
    fn concat_text(&self) -> String;
}

impl ConcatText for [TaggedComponent] {
    fn concat_text(&self) -> String {
        let capacity = self.iter().map(|it| it.text.len()).sum();
        self.iter()
            .fold(String::with_capacity(capacity), |mut acc, it| {
                acc.push_str(&it.text);
                acc
            })
    }
}
