//! Syntax highlighting for code blocks.
//!
//! Output is class-based so a single rendered page can switch between the
//! light and dark stylesheet without re-rendering.

use folio_core::ThemePreference;
use syntect::{
    highlighting::ThemeSet,
    html::{ClassStyle, ClassedHTMLGenerator, css_for_theme_with_class_style},
    parsing::{SyntaxReference, SyntaxSet},
    util::LinesWithEndings,
};
use thiserror::Error;

/// Prefix on every generated highlight class.
const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hl-" };

const LIGHT_THEME: &str = "InspiredGitHub";
const DARK_THEME: &str = "base16-ocean.dark";

/// Syntax highlighting errors.
#[derive(Debug, Error)]
pub enum SyntaxError {
    /// Failed to highlight code.
    #[error("syntax highlighting failed: {0}")]
    Highlight(#[from] syntect::Error),

    /// Requested theme is not bundled.
    #[error("unknown highlight theme: {0}")]
    UnknownTheme(String),
}

/// Syntax highlighter using syntect.
#[derive(Debug)]
pub struct SyntaxHighlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    /// Create a highlighter with the bundled syntaxes and themes.
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        }
    }

    fn find_syntax(&self, lang: &str) -> Option<&SyntaxReference> {
        // Info strings may carry extras: "rust,ignore" or "js title=x".
        let token = lang.split([',', ' ']).next().unwrap_or_default().trim();
        if token.is_empty() {
            return None;
        }
        self.syntax_set.find_syntax_by_token(token)
    }

    /// Render a fenced code block.
    ///
    /// Known languages are highlighted; anything else is escaped into a plain
    /// `<pre><code>` block.
    pub fn highlight(&self, code: &str, lang: Option<&str>) -> String {
        let Some(syntax) = lang.and_then(|l| self.find_syntax(l)) else {
            return plain_code_block(code, lang);
        };

        match self.classed_html(code, syntax) {
            Ok(spans) => {
                let lang_class = lang.map(language_class).unwrap_or_default();
                format!("<pre class=\"hl-code\"><code{lang_class}>{spans}</code></pre>\n")
            }
            Err(err) => {
                tracing::warn!(error = %err, "falling back to plain code block");
                plain_code_block(code, lang)
            }
        }
    }

    fn classed_html(&self, code: &str, syntax: &SyntaxReference) -> Result<String, SyntaxError> {
        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, CLASS_STYLE);
        for line in LinesWithEndings::from(code) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }
        Ok(generator.finalize())
    }

    /// CSS for the highlight classes under `theme`.
    pub fn stylesheet(&self, theme: ThemePreference) -> Result<String, SyntaxError> {
        let name = match theme {
            ThemePreference::Light => LIGHT_THEME,
            ThemePreference::Dark => DARK_THEME,
        };
        let theme = self
            .theme_set
            .themes
            .get(name)
            .ok_or_else(|| SyntaxError::UnknownTheme(name.to_string()))?;
        Ok(css_for_theme_with_class_style(theme, CLASS_STYLE)?)
    }
}

fn language_class(lang: &str) -> String {
    let token = lang.split([',', ' ']).next().unwrap_or_default().trim();
    if token.is_empty() {
        String::new()
    } else {
        format!(" class=\"language-{}\"", html_escape(token))
    }
}

fn plain_code_block(code: &str, lang: Option<&str>) -> String {
    let lang_class = lang.map(language_class).unwrap_or_default();
    format!("<pre><code{lang_class}>{}</code></pre>\n", html_escape(code))
}

/// Escape HTML special characters.
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
