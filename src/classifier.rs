use serde::Serialize;

/// Which rendering path an artifact takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Ready-made vector markup, embedded as is.
    Markup,
    /// Component-style source describing charts.
    Code,
}

impl ContentKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Markup => "markup",
            Self::Code => "code",
        }
    }
}

/// Decide whether `content` is vector markup or chart code.
///
/// Markup when the trimmed text starts with `<svg`, or when an `<svg` opening tag
/// followed by whitespace (one with attributes) appears anywhere.
#[must_use]
pub fn classify(content: &str) -> ContentKind {
    if content.trim_start().starts_with("<svg") || has_svg_open_tag(content) {
        ContentKind::Markup
    } else {
        ContentKind::Code
    }
}

fn has_svg_open_tag(content: &str) -> bool {
    content.match_indices("<svg").any(|(at, tag)| {
        content[at + tag.len()..]
            .chars()
            .next()
            .is_some_and(char::is_whitespace)
    })
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
