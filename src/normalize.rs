//! # normalize: text clean-up passes for rendered page content
//!
//! Stateless string transforms applied to the raw text stream produced by
//! [`crate::render`]. Each function is total over arbitrary input, including
//! the empty string. The patterns are compiled once per process and shared.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

/// Column width the description is wrapped to.
pub const WRAP_WIDTH: usize = 80;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static TRIPLE_NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\n\n").unwrap());

static SPACES_BEFORE_NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +\n").unwrap());

const BULLET: char = '•';

/// Replace every maximal run of whitespace (newlines and tabs included) with one space.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// Replace each non-overlapping `\n\n\n` with `\n\n`, scanning left to right.
///
/// Longer runs are only partially reduced: four newlines become three,
/// five become four, six become four.
pub fn collapse_blank_lines(text: &str) -> String {
    TRIPLE_NEWLINE.replace_all(text, "\n\n").into_owned()
}

pub fn replace_bullets(text: &str) -> String {
    text.replace(BULLET, "-")
}

/// Drop the spaces that sit directly in front of a newline.
pub fn trim_trailing_spaces(text: &str) -> String {
    SPACES_BEFORE_NEWLINE.replace_all(text, "\n").into_owned()
}

/// Greedy word wrap at `width` display columns.
///
/// Lines are only broken at spaces; existing newlines are kept. A word wider
/// than `width` is emitted unbroken on a line of its own. Spaces swallowed by
/// a wrap, and spaces at the end of a source line, are dropped.
pub fn wrap(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / width.max(1));

    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let mut wrapper = LineWrapper {
            out: &mut out,
            width,
            column: 0,
            spaces: 0,
        };
        let mut word_start = None;
        for (pos, ch) in line.char_indices() {
            if ch == ' ' {
                if let Some(start) = word_start.take() {
                    wrapper.push_word(&line[start..pos]);
                }
                wrapper.spaces += 1;
            } else if word_start.is_none() {
                word_start = Some(pos);
            }
        }
        if let Some(start) = word_start {
            wrapper.push_word(&line[start..]);
        }
    }

    out
}

struct LineWrapper<'a> {
    out: &'a mut String,
    width: usize,
    column: usize,
    spaces: usize,
}

impl LineWrapper<'_> {
    fn push_word(&mut self, word: &str) {
        let word_width = word.width();
        if self.column > 0 && self.column + self.spaces + word_width > self.width {
            self.out.push('\n');
            self.column = 0;
        } else {
            self.out.extend(std::iter::repeat(' ').take(self.spaces));
            self.column += self.spaces;
        }
        self.spaces = 0;
        self.out.push_str(word);
        self.column += word_width;
    }
}

/// The full post-render pass, in order: trim, wrap, blank-line collapse,
/// bullet substitution, trailing-space trim.
pub fn normalize(raw: &str) -> String {
    let wrapped = wrap(raw.trim(), WRAP_WIDTH);
    let collapsed = collapse_blank_lines(&wrapped);
    trim_trailing_spaces(&replace_bullets(&collapsed))
}
