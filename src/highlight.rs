use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag, TagEnd};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::{SyntaxReference, SyntaxSet};
use thiserror::Error;

pub const THEME: &str = "base16-ocean.dark";

#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("highlight theme {0:?} is not bundled")]
    UnknownTheme(String),
    #[error("couldn't highlight code block: {0}")]
    Syntect(#[from] syntect::Error),
}

pub struct PulldownHighlighter {
    syntaxset: SyntaxSet,
    themeset: ThemeSet,
}

/// A highlighter that can be instantiated once and used many times for better performance.
impl PulldownHighlighter {
    pub fn new() -> PulldownHighlighter {
        let syntaxset = SyntaxSet::load_defaults_newlines();
        let themeset = ThemeSet::load_defaults();

        PulldownHighlighter {
            syntaxset,
            themeset,
        }
    }

    // The bundled syntaxes have no TypeScript; JavaScript is close enough for the demos.
    fn find_syntax(&self, lang: &str) -> Option<&SyntaxReference> {
        let token = match lang {
            "ts" | "typescript" => "js",
            other => other,
        };
        self.syntaxset.find_syntax_by_token(token)
    }

    /// Apply syntax highlighting to pulldown-cmark events.
    ///
    /// Code blocks are replaced by a single HTML event holding syntect's output; all other
    /// events pass through untouched.
    ///
    /// Highly based on <https://gitlab.com/eguiraud/highlight-pulldown>.
    pub fn highlight<'a, It>(&self, events: It) -> Result<Vec<Event<'a>>, HighlightError>
    where
        It: Iterator<Item = Event<'a>>,
    {
        let theme = self
            .themeset
            .themes
            .get(THEME)
            .ok_or_else(|| HighlightError::UnknownTheme(THEME.to_string()))?;

        let plain = self.syntaxset.find_syntax_plain_text();
        let mut syntax = plain;
        let mut in_code_block = false;
        let mut to_highlight = String::new();
        let mut out_events = Vec::new();

        for event in events {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    syntax = match kind {
                        CodeBlockKind::Fenced(lang) => self.find_syntax(&lang).unwrap_or(plain),
                        CodeBlockKind::Indented => plain,
                    };
                    in_code_block = true;
                }
                Event::End(TagEnd::CodeBlock) if in_code_block => {
                    let html =
                        highlighted_html_for_string(&to_highlight, &self.syntaxset, syntax, theme)?;

                    to_highlight.clear();
                    in_code_block = false;
                    out_events.push(Event::Html(CowStr::from(html)));
                }
                Event::Text(t) if in_code_block => to_highlight.push_str(&t),
                e => out_events.push(e),
            }
        }

        Ok(out_events)
    }
}

impl Default for PulldownHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulldown_cmark::Parser;

    fn render(markdown: &str) -> String {
        let events = PulldownHighlighter::new()
            .highlight(Parser::new(markdown))
            .unwrap();
        let mut html = String::new();
        pulldown_cmark::html::push_html(&mut html, events.into_iter());
        html
    }

    #[test]
    fn test_code_block_highlighted() {
        let html = render("```typescript\nconst count = signal(0);\n```\n");
        assert!(html.starts_with("<pre style="));
        assert!(html.contains("count"));
        assert!(html.contains("<span"));
    }

    #[test]
    fn test_prose_untouched() {
        let html = render("Plain *words* here.\n");
        assert_eq!(html, "<p>Plain <em>words</em> here.</p>\n");
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let html = render("```klingon\nqapla'\n```\n");
        assert!(html.contains("qapla"));
    }
}
