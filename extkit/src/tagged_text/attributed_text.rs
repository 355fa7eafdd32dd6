// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{TaggedComponent, split_by_tag_names};
use crate::InlineVec;
use std::collections::{HashMap, HashSet};

/// A run of text and the style to render it with. The style type is up to the caller,
/// eg: a color, a font weight, or a whole style struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan<S> {
    pub style: S,
    pub text: String,
}

/// Turns tagged text into styled spans.
///
/// The keys of the style table are the allowed tag names, and plain runs get the base
/// style. If the text can't be split (including a tag with no style), the whole raw
/// string (markup included) becomes a single span in the base style, so a typo in a
/// tagged string degrades the rendering rather than losing the text.
///
/// ```
/// use std::collections::HashMap;
/// use extkit::{AttributedText, StyledSpan};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Weight { Regular, Bold }
///
/// let styles = HashMap::from([('b', Weight::Bold)]);
///
/// let it = AttributedText::new("Tap <b>here</b>", &styles, Weight::Regular);
/// assert_eq!(it.spans()[1], StyledSpan { style: Weight::Bold, text: "here".into() });
///
/// // Unbalanced markup falls back to the raw string.
/// let it = AttributedText::new("Tap <b>here", &styles, Weight::Regular);
/// assert!(it.is_fallback());
/// assert_eq!(it.plain_text(), "Tap <b>here");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributedText<S> {
    spans: InlineVec<StyledSpan<S>>,
    is_fallback: bool,
}

impl<S: Clone> AttributedText<S> {
    pub fn new(text: &str, styles: &HashMap<char, S>, base_style: S) -> Self {
        let allowed_tags: HashSet<char> = styles.keys().copied().collect();

        match split_by_tag_names(text, &allowed_tags) {
            Ok(components) => Self {
                spans: components
                    .into_iter()
                    .map(|TaggedComponent { tag_name, text }| StyledSpan {
                        style: tag_name
                            .and_then(|it| styles.get(&it))
                            .unwrap_or(&base_style)
                            .clone(),
                        text,
                    })
                    .collect(),
                is_fallback: false,
            },
            Err(error) => {
                tracing::warn!(
                    message = "Could not parse tagged text, using raw text instead",
                    error = ?miette::Report::new(error)
                );
                let mut spans = InlineVec::new();
                spans.push(StyledSpan {
                    style: base_style,
                    text: text.to_string(),
                });
                Self {
                    spans,
                    is_fallback: true,
                }
            }
        }
    }

    #[must_use]
    pub fn spans(&self) -> &[StyledSpan<S>] { &self.spans }

    /// `true` if the text couldn't be split and the raw string was used instead.
    #[must_use]
    pub fn is_fallback(&self) -> bool { self.is_fallback }

    /// The text of all spans, in order, without any styling.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|it| it.text.as_str()).collect()
    }
}
