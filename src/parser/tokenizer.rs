//! Parenthesis-aware splitting of binding lists and bindings.
//!
//! ZMK binding arguments may nest modifier functions (`LS(LC(LA(LGUI)))`),
//! so neither `&` nor whitespace can be split on blindly. Both entry points
//! share [`split_top_level`], which only honours a delimiter at depth zero.

/// Where a top-level split happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// Every unit begins with this sigil. Text before the first sigil is
    /// dropped and the sigil itself is not part of the unit.
    Sigil(char),
    /// Units are separated by runs of whitespace.
    Whitespace,
}

/// Splits `text` on `delimiter`, ignoring delimiters nested inside `(` `)`.
///
/// Units are trimmed. With [`Delimiter::Whitespace`] empty units are never
/// produced; with [`Delimiter::Sigil`] every top-level sigil yields exactly
/// one unit, even an empty one.
///
/// A stray `)` at depth zero is kept as text, and an unclosed `(` swallows
/// the remainder of the input into the current unit.
#[must_use]
pub fn split_top_level(text: &str, delimiter: Delimiter) -> Vec<&str> {
    let mut units = Vec::new();
    let mut depth: usize = 0;
    // Byte offset where the current unit began, if one is open
    let mut start: Option<usize> = match delimiter {
        Delimiter::Sigil(_) => None,
        Delimiter::Whitespace => Some(0),
    };

    for (idx, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth > 0 => {}
            _ => match delimiter {
                Delimiter::Sigil(sigil) if ch == sigil => {
                    if let Some(begin) = start {
                        units.push(text[begin..idx].trim());
                    }
                    start = Some(idx + ch.len_utf8());
                }
                Delimiter::Whitespace if ch.is_whitespace() => {
                    if let Some(begin) = start {
                        push_non_empty(&mut units, &text[begin..idx]);
                    }
                    start = Some(idx + ch.len_utf8());
                }
                _ => {}
            },
        }
    }

    if let Some(begin) = start {
        match delimiter {
            Delimiter::Sigil(_) => units.push(text[begin..].trim()),
            Delimiter::Whitespace => push_non_empty(&mut units, &text[begin..]),
        }
    }

    units
}

fn push_non_empty<'a>(units: &mut Vec<&'a str>, unit: &'a str) {
    let unit = unit.trim();
    if !unit.is_empty() {
        units.push(unit);
    }
}

/// Splits a `bindings = < ... >` body into individual bindings.
///
/// `"&kp A &hml LS(LC(LA(LGUI))) W"` yields `["kp A", "hml LS(LC(LA(LGUI))) W"]`.
#[must_use]
pub fn split_units(text: &str, sigil: char) -> Vec<&str> {
    split_top_level(text, Delimiter::Sigil(sigil))
}

/// Splits one binding into its behavior name followed by its arguments.
///
/// `"hml LS(LC(LA(LGUI))) W"` yields `["hml", "LS(LC(LA(LGUI)))", "W"]`.
#[must_use]
pub fn split_words(text: &str) -> Vec<&str> {
    split_top_level(text, Delimiter::Whitespace)
}
