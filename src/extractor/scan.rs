use std::ops::Range;

use indexmap::IndexMap;
use regex::Regex;

use super::literal::{Element, find_matching, parse_array};

/// A `name = [ ... ]` assignment discovered in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayCandidate<'a> {
    pub name: &'a str,
    /// Byte range of the bracketed literal, brackets included. Runs to the next
    /// assignment, or the end of the input, when the closing bracket is missing.
    pub span: Range<usize>,
    /// Source text covered by `span`.
    pub source: &'a str,
}

impl ArrayCandidate<'_> {
    #[must_use]
    pub fn span_len(&self) -> usize {
        self.span.len()
    }

    #[must_use]
    pub fn elements(&self) -> Vec<Element> {
        parse_array(self.source)
    }

    /// Chart title derived from the identifier: `salesData` becomes `sales`.
    #[must_use]
    pub fn title(&self) -> &str {
        match self.name.strip_suffix("Data") {
            Some(stem) if !stem.is_empty() => stem,
            _ => self.name,
        }
    }
}

/// Line-anchored scanner for named array assignments.
pub struct ArrayScanner {
    assignment: Regex,
}

impl Default for ArrayScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ArrayScanner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            assignment: Regex::new(
                r"(?m)^[\t ]*(?:export\s+)?(?:(?:const|let|var)\s+)?([A-Za-z_$][A-Za-z0-9_$]*)\s*(?::[^=\n]*)?=\s*\[",
            )
            .expect("Invalid regex"),
        }
    }

    /// Collect every array assignment in discovery order. When a name is assigned more
    /// than once, the first assignment wins.
    ///
    /// A literal never extends past the start of the next assignment, so an unclosed
    /// bracket ends there rather than at the end of the input.
    #[must_use]
    pub fn discover<'a>(&self, code: &'a str) -> IndexMap<&'a str, ArrayCandidate<'a>> {
        let matches: Vec<_> = self
            .assignment
            .captures_iter(code)
            .filter_map(|caps| Some((caps.get(0)?, caps.get(1)?)))
            .collect();
        let mut candidates = IndexMap::new();

        for (i, (whole, name)) in matches.iter().enumerate() {
            if candidates.contains_key(name.as_str()) {
                continue;
            }
            let limit = matches
                .get(i + 1)
                .map_or(code.len(), |(next, _)| next.start());
            let open = whole.end() - 1;
            let end = find_matching(&code[..limit], open).map_or(limit, |close| close + 1);

            candidates.insert(
                name.as_str(),
                ArrayCandidate {
                    name: name.as_str(),
                    span: open..end,
                    source: &code[open..end],
                },
            );
        }

        candidates
    }
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
