// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Positional tokenization.
//!
//! A word is a maximal run of alphanumeric characters. Everything else is a
//! boundary, and so is the end of the text: a word touching the last byte is
//! still emitted.
//!
//! "Alphanumeric" is `char::is_alphanumeric`: the Unicode `Alphabetic` and
//! `Numeric` properties. That is wider than the letter (`L*`) and number
//! (`N*`) general categories. It also takes in `Other_Alphabetic` code points,
//! such as combining vowel signs (`ा`, category Mc) and circled letters (`Ⓐ`,
//! category So). These stay inside the word instead of splitting it, so
//! "का" is one word, not "क" followed by a boundary.
//!
//! The filter sees the raw word and returns its normalized form. An empty
//! result drops the word. Offsets always describe the raw word, whatever
//! length the filtered value ends up with.

use crate::types::Token;

/// Word boundary detection: checks if character is a word separator.
#[inline]
fn is_word_boundary(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Split `text` into filtered, positional tokens.
///
/// `start`/`end` are byte offsets into `text`, so `&text[t.start..t.end]` is
/// always the raw word that produced `t`.
pub fn tokenize<F>(text: &str, filter: F) -> Vec<Token>
where
    F: Fn(&str) -> String,
{
    let mut tokens = Vec::with_capacity(text.len() / 10);
    let mut word_start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        if is_word_boundary(c) {
            if let Some(start) = word_start.take() {
                push_token(&mut tokens, text, start, i, &filter);
            }
        } else if word_start.is_none() {
            word_start = Some(i);
        }
    }
    // Word running into end of text
    if let Some(start) = word_start {
        push_token(&mut tokens, text, start, text.len(), &filter);
    }

    tokens
}

/// Split a raw query into words without any normalization.
pub fn split_words(text: &str) -> Vec<Token> {
    tokenize(text, str::to_string)
}

fn push_token<F>(tokens: &mut Vec<Token>, text: &str, start: usize, end: usize, filter: &F)
where
    F: Fn(&str) -> String,
{
    let value = filter(&text[start..end]);
    if !value.is_empty() {
        tokens.push(Token { value, start, end });
    }
}
