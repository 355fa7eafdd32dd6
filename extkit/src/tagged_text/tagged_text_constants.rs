// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// All the markup literals that are used to perform splitting.
pub const TAG_OPEN_CHAR: char = '<';
pub const TAG_CLOSE_CHAR: char = '>';
pub const TAG_SLASH_CHAR: char = '/';

/// `<b>` is 3 chars long.
pub const OPENING_TAG_LEN: usize = 3;

/// `</b>` is 4 chars long.
pub const CLOSING_TAG_LEN: usize = 4;

/// Set this to `true` to trace every flushed component while splitting.
pub const DEBUG_TAGGED_TEXT: bool = false;
