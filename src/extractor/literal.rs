//! Best-effort reading of JavaScript-style array and object literals.
//!
//! Nothing here is a parser: values are split on top-level delimiters while
//! skipping over strings, comments, and nested brackets. Anything that does not
//! look like a string or a number is kept as raw text.

use std::borrow::Cow;

use indexmap::IndexMap;

/// A scalar value recovered from source text.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Text(String),
    Number(f64),
    Raw(String),
}

impl Literal {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let cleaned = strip_comments(raw);
        let trimmed = cleaned.trim();
        if let Some(text) = unquote(trimmed) {
            return Self::Text(text);
        }
        parse_number(trimmed).map_or_else(|| Self::Raw(trimmed.to_string()), Self::Number)
    }

    /// Numeric reading; quoted numbers count, raw expressions do not.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => parse_number(s.trim()),
            Self::Raw(_) => None,
        }
    }

    #[must_use]
    pub fn as_label(&self) -> String {
        match self {
            Self::Text(s) | Self::Raw(s) => s.clone(),
            Self::Number(n) => n.to_string(),
        }
    }

    /// Only quoted strings are trusted as colors.
    #[must_use]
    pub fn as_color(&self) -> Option<&str> {
        match self {
            Self::Text(s) if !s.trim().is_empty() => Some(s.trim()),
            _ => None,
        }
    }
}

/// One entry of an array literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Object(IndexMap<String, Literal>),
    Scalar(Literal),
}

impl Element {
    /// First of `keys` present on an object element.
    #[must_use]
    pub fn field(&self, keys: &[&str]) -> Option<&Literal> {
        match self {
            Self::Object(fields) => keys.iter().find_map(|key| fields.get(*key)),
            Self::Scalar(_) => None,
        }
    }

    /// First of `keys` whose value reads as a number.
    #[must_use]
    pub fn number_field(&self, keys: &[&str]) -> Option<f64> {
        match self {
            Self::Object(fields) => keys
                .iter()
                .find_map(|key| fields.get(*key).and_then(Literal::as_number)),
            Self::Scalar(_) => None,
        }
    }

    /// First of `keys` whose value reads as a color string.
    #[must_use]
    pub fn color_field(&self, keys: &[&str]) -> Option<String> {
        match self {
            Self::Object(fields) => keys.iter().find_map(|key| {
                fields
                    .get(*key)
                    .and_then(Literal::as_color)
                    .map(ToString::to_string)
            }),
            Self::Scalar(_) => None,
        }
    }
}

/// Split the contents of a bracketed array literal (brackets included) into elements.
#[must_use]
pub fn parse_array(source: &str) -> Vec<Element> {
    let inner = strip_delimiters(source, '[', ']');
    split_top_level(inner, b',')
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty() && !piece.starts_with("..."))
        .map(parse_element)
        .collect()
}

fn parse_element(piece: &str) -> Element {
    if piece.starts_with('{') {
        Element::Object(parse_object(piece))
    } else {
        Element::Scalar(Literal::parse(piece))
    }
}

/// Read `key: value` pairs of an object literal. Shorthand and spread entries are skipped.
#[must_use]
pub fn parse_object(source: &str) -> IndexMap<String, Literal> {
    let inner = strip_delimiters(source, '{', '}');
    let mut fields = IndexMap::new();

    for entry in split_top_level(inner, b',') {
        let Some(colon) = find_top_level(entry, b':') else {
            continue;
        };
        let key = strip_comments(&entry[..colon]);
        let key = key.trim();
        let key = unquote(key).unwrap_or_else(|| key.to_string());
        if key.is_empty() || key.starts_with("...") {
            continue;
        }
        fields
            .entry(key)
            .or_insert_with(|| Literal::parse(&entry[colon + 1..]));
    }

    fields
}

fn strip_delimiters(source: &str, open: char, close: char) -> &str {
    let trimmed = source.trim();
    let trimmed = trimmed.strip_prefix(open).unwrap_or(trimmed);
    trimmed.strip_suffix(close).unwrap_or(trimmed)
}

fn unquote(text: &str) -> Option<String> {
    let quote = text.chars().next()?;
    if !matches!(quote, '"' | '\'' | '`') || text.len() < 2 || !text.ends_with(quote) {
        return None;
    }
    let inner = &text[1..text.len() - 1];

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(ch);
        }
    }
    Some(out)
}

fn parse_number(text: &str) -> Option<f64> {
    if text.is_empty() || !text.starts_with(|c: char| c.is_ascii_digit() || "+-.".contains(c)) {
        return None;
    }
    text.replace('_', "")
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Region kinds a [`Cursor`] steps over without looking inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opaque {
    String,
    Comment,
}

/// Walks source text, tracking nesting and skipping string and comment contents.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    const fn new(text: &'a str, pos: usize) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos,
        }
    }

    const fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn peek_is(&self, offset: usize, byte: u8) -> bool {
        self.bytes.get(self.pos + offset) == Some(&byte)
    }

    /// Advance past the string or comment starting at the cursor, if any.
    fn skip_opaque(&mut self) -> Option<Opaque> {
        match self.bytes[self.pos] {
            quote @ (b'"' | b'\'' | b'`') => {
                self.pos += 1;
                while !self.at_end() && self.bytes[self.pos] != quote {
                    if self.bytes[self.pos] == b'\\' {
                        self.pos += 1;
                    }
                    self.pos += 1;
                }
                self.pos = (self.pos + 1).min(self.bytes.len());
                Some(Opaque::String)
            }
            b'/' if self.peek_is(1, b'/') => {
                while !self.at_end() && self.bytes[self.pos] != b'\n' {
                    self.pos += 1;
                }
                Some(Opaque::Comment)
            }
            b'/' if self.peek_is(1, b'*') => {
                self.pos += 2;
                while !self.at_end() && !(self.bytes[self.pos] == b'*' && self.peek_is(1, b'/')) {
                    self.pos += 1;
                }
                self.pos = (self.pos + 2).min(self.bytes.len());
                Some(Opaque::Comment)
            }
            _ => None,
        }
    }
}

/// Drop `//` and `/* */` comments that sit outside string literals.
fn strip_comments(text: &str) -> Cow<'_, str> {
    if !text.contains("//") && !text.contains("/*") {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut cursor = Cursor::new(text, 0);
    let mut copied_from = 0;
    while !cursor.at_end() {
        let start = cursor.pos;
        match cursor.skip_opaque() {
            Some(Opaque::Comment) => {
                out.push_str(&text[copied_from..start]);
                copied_from = cursor.pos;
            }
            Some(Opaque::String) => {}
            None => cursor.pos += 1,
        }
    }
    out.push_str(&text[copied_from..]);
    Cow::Owned(out)
}

/// Byte offset of the bracket closing the one at `open`, honoring nesting, strings,
/// and comments. `None` when the text ends first.
#[must_use]
pub fn find_matching(text: &str, open: usize) -> Option<usize> {
    let mut cursor = Cursor::new(text, open);
    let mut depth = 0usize;

    while !cursor.at_end() {
        if cursor.skip_opaque().is_some() {
            continue;
        }
        match cursor.bytes[cursor.pos] {
            b'[' | b'{' | b'(' => depth += 1,
            b']' | b'}' | b')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(cursor.pos);
                }
            }
            _ => {}
        }
        cursor.pos += 1;
    }
    None
}

/// Offset of the first `target` byte outside any nesting, string, or comment.
#[must_use]
pub fn find_top_level(text: &str, target: u8) -> Option<usize> {
    let mut cursor = Cursor::new(text, 0);
    let mut depth = 0usize;

    while !cursor.at_end() {
        if cursor.skip_opaque().is_some() {
            continue;
        }
        let byte = cursor.bytes[cursor.pos];
        if byte == target && depth == 0 {
            return Some(cursor.pos);
        }
        match byte {
            b'[' | b'{' | b'(' => depth += 1,
            b']' | b'}' | b')' => depth = depth.saturating_sub(1),
            _ => {}
        }
        cursor.pos += 1;
    }
    None
}

/// Split on `separator` bytes that sit outside any nesting, string, or comment.
#[must_use]
pub fn split_top_level(text: &str, separator: u8) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut rest = text;
    while let Some(at) = find_top_level(rest, separator) {
        pieces.push(&rest[..at]);
        rest = &rest[at + 1..];
    }
    pieces.push(rest);
    pieces
}

#[cfg(test)]
#[path = "literal_tests.rs"]
mod tests;
