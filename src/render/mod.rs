//! Self-contained HTML documents for markup and chart artifacts.

mod charts;
mod template;

pub use charts::{ChartData, ChartDataset, chart_call, create_function, js_string};

use std::fmt::Write;

use crate::classifier::ContentKind;
use crate::config::RenderConfig;
use crate::extractor::ChartDeclaration;

use template::{
    BASE_STYLES, CHART_HELPERS, CHART_STYLES, DOCUMENT_OPEN, MARKUP_STYLES, PRINT_STYLES,
    THEME_TOGGLE,
};

/// Returned instead of a document when markup content is blank.
pub const NO_MARKUP_ERROR: &str = "Error: No SVG code provided";

/// Returned instead of a document when chart code is blank.
pub const NO_CODE_ERROR: &str = "Error: No TypeScript code provided";

const MARKUP_HEADING: &str = "SVG Visualization";
const CHART_HEADING: &str = "Chart Visualization";

/// What to put in the document body.
#[derive(Debug, Clone, Copy)]
pub enum Payload<'a> {
    /// Vector markup, embedded byte for byte.
    Markup(&'a str),
    /// Declarations, one chart panel each.
    Charts(&'a [ChartDeclaration]),
}

impl Payload<'_> {
    #[must_use]
    pub const fn kind(&self) -> ContentKind {
        match self {
            Self::Markup(_) => ContentKind::Markup,
            Self::Charts(_) => ContentKind::Code,
        }
    }
}

/// Builds complete documents. Holds no state besides its configuration.
#[derive(Debug, Clone, Default)]
pub struct DocumentRenderer {
    config: RenderConfig,
}

impl DocumentRenderer {
    #[must_use]
    pub const fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `payload` as a document labelled with `version`.
    ///
    /// Blank markup yields [`NO_MARKUP_ERROR`] rather than a document.
    #[must_use]
    pub fn render(&self, payload: &Payload<'_>, version: &str) -> String {
        if let Payload::Markup(markup) = payload
            && markup.trim().is_empty()
        {
            return NO_MARKUP_ERROR.to_string();
        }

        let mut output = String::new();
        let heading = match payload.kind() {
            ContentKind::Markup => MARKUP_HEADING,
            ContentKind::Code => CHART_HEADING,
        };
        let version = html_escape(version);

        self.write_head(&mut output, payload.kind(), heading, &version);
        Self::write_header(&mut output, heading, &version);
        match payload {
            Payload::Markup(markup) => Self::write_markup_body(&mut output, markup),
            Payload::Charts(declarations) => Self::write_chart_container(&mut output, declarations),
        }
        self.write_theme_script(&mut output);
        if let Payload::Charts(declarations) = payload {
            Self::write_chart_script(&mut output, declarations);
        }
        output.push_str("</body>\n</html>\n");

        output
    }

    fn write_head(&self, output: &mut String, kind: ContentKind, heading: &str, version: &str) {
        output.push_str(DOCUMENT_OPEN);
        writeln!(output, "    <title>{heading} ({version})</title>").ok();
        if kind == ContentKind::Code {
            for url in [
                &self.config.chart_script_url,
                &self.config.datalabels_script_url,
            ] {
                writeln!(output, "    <script src=\"{}\"></script>", html_escape(url)).ok();
            }
        }
        output.push_str("    <style>\n");
        output.push_str(BASE_STYLES);
        output.push_str(match kind {
            ContentKind::Markup => MARKUP_STYLES,
            ContentKind::Code => CHART_STYLES,
        });
        output.push_str(PRINT_STYLES);
        output.push_str("    </style>\n</head>\n<body>\n");
    }

    fn write_header(output: &mut String, heading: &str, version: &str) {
        output.push_str("    <div class=\"header\">\n");
        writeln!(
            output,
            r#"        <div><h1>{heading} <span class="version">{version}</span></h1></div>"#
        )
        .ok();
        output.push_str(THEME_TOGGLE);
        output.push_str("    </div>\n");
    }

    fn write_markup_body(output: &mut String, markup: &str) {
        output.push_str("    <div class=\"container\">\n");
        output.push_str("        <div class=\"svg-container\">\n");
        output.push_str(markup);
        output.push_str("\n        </div>\n");
        output.push_str("    </div>\n");
    }

    fn write_chart_container(output: &mut String, declarations: &[ChartDeclaration]) {
        output.push_str("    <div class=\"container\" id=\"chart-container\">\n");
        if declarations.is_empty() {
            output.push_str("        <p class=\"no-results\">No charts to display.</p>\n");
        }
        output.push_str("    </div>\n");
    }

    /// Theme toggle: stored choice first, system preference otherwise.
    fn write_theme_script(&self, output: &mut String) {
        let key = js_string(&self.config.theme_storage_key);
        output.push_str("    <script>\n");
        writeln!(
            output,
            r"        (function() {{
            const storageKey = {key};
            const toggleSwitch = document.getElementById('theme-toggle');
            let savedTheme = null;
            try {{ savedTheme = localStorage.getItem(storageKey); }} catch (e) {{}}
            const prefersDark = window.matchMedia('(prefers-color-scheme: dark)').matches;
            if (savedTheme === 'dark' || (!savedTheme && prefersDark)) {{
                document.body.classList.add('dark');
                toggleSwitch.checked = true;
            }}
            toggleSwitch.addEventListener('change', function(e) {{
                const dark = e.target.checked;
                document.body.classList.toggle('dark', dark);
                try {{ localStorage.setItem(storageKey, dark ? 'dark' : 'light'); }} catch (e) {{}}
                if (typeof updateChartsTheme === 'function') {{
                    updateChartsTheme();
                }}
            }});
        }})();"
        )
        .ok();
        output.push_str("    </script>\n");
    }

    fn write_chart_script(output: &mut String, declarations: &[ChartDeclaration]) {
        output.push_str("    <script>\n");
        output.push_str(CHART_HELPERS);
        output.push('\n');
        charts::write_chart_calls(output, declarations);
        output.push_str("    </script>\n");
    }
}

/// Render with the default configuration.
#[must_use]
pub fn render(payload: &Payload<'_>, version: &str) -> String {
    DocumentRenderer::default().render(payload, version)
}

/// Escape HTML special characters.
#[must_use]
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
