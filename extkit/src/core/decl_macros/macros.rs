// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic sugar
/// that helps having to write `Ok(())`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// A wrapper for `pretty_assertions::assert_eq!` macro. Only use this in tests, since
/// `pretty_assertions` is a dev dependency.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Build the set of allowed tag names for [`split_by_tag_names()`].
///
/// ```
/// use extkit::tag_names;
///
/// let tags = tag_names!['b', 'i'];
/// assert!(tags.contains(&'b'));
/// assert_eq!(tags.len(), 2);
/// ```
///
/// [`split_by_tag_names()`]: crate::split_by_tag_names
#[macro_export]
macro_rules! tag_names {
    (
        $($tag: expr),*
        $(,)* /* Optional trailing comma https://stackoverflow.com/a/43143459/2085356. */
    ) => {{
        #[allow(unused_mut)]
        let mut it = std::collections::HashSet::<char>::new();
        $(it.insert($tag);)*
        it
    }};
}
