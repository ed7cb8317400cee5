//! Markdown rendering with syntax highlighting
//!
//! The blog store renders bodies to HTML here; the show store skips this
//! module entirely and hands raw markdown to the presentation layer.

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Markdown renderer with server-side syntax highlighting of fenced
/// code blocks.
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    highlight: bool,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self::with_options("base16-ocean.dark", true)
    }

    /// Create with a specific syntect theme; `highlight: false` emits
    /// plain escaped code blocks instead.
    pub fn with_options(theme: &str, highlight: bool) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.to_string(),
            highlight,
        }
    }

    /// Render markdown to HTML with GFM extensions. Raw embedded HTML
    /// passes through untouched.
    pub fn render(&self, markdown: &str) -> String {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_GFM;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        let mut code_lang: Option<String> = None;
        let mut code_buf = String::new();
        let mut in_code_block = false;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    in_code_block = true;
                    code_buf.clear();
                    code_lang = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                        _ => None,
                    };
                }
                Event::End(TagEnd::CodeBlock) => {
                    in_code_block = false;
                    let block = self.render_code_block(&code_buf, code_lang.as_deref());
                    events.push(Event::Html(CowStr::from(block)));
                    code_lang = None;
                }
                Event::Text(text) if in_code_block => {
                    code_buf.push_str(&text);
                }
                other => events.push(other),
            }
        }

        let mut out = String::new();
        html::push_html(&mut out, events.into_iter());
        out
    }

    /// Render one fenced code block, highlighted when possible.
    fn render_code_block(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        if self.highlight {
            let syntax = self
                .syntax_set
                .find_syntax_by_token(lang)
                .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
                .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

            let theme = self
                .theme_set
                .themes
                .get(&self.theme_name)
                .or_else(|| self.theme_set.themes.values().next());

            if let Some(theme) = theme {
                if let Ok(highlighted) =
                    highlighted_html_for_string(code, &self.syntax_set, syntax, theme)
                {
                    return format!(r#"<div class="highlight {}">{}</div>"#, lang, highlighted);
                }
            }
        }

        format!(
            r#"<pre><code class="language-{}">{}</code></pre>"#,
            lang,
            html_escape(code)
        )
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# On Rotation\n\nThis week's records.");
        assert!(html.contains("<h1>On Rotation</h1>"));
        assert!(html.contains("<p>This week's records.</p>"));
    }

    #[test]
    fn test_gfm_table() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_highlighted_code_block() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("```rust\nfn main() {}\n```");
        assert!(html.contains("highlight rust"));
    }

    #[test]
    fn test_plain_code_block_when_highlighting_disabled() {
        let renderer = MarkdownRenderer::with_options("base16-ocean.dark", false);
        let html = renderer.render("```\n<xml>\n```");
        assert!(html.contains(r#"<code class="language-text">"#));
        assert!(html.contains("&lt;xml&gt;"));
    }

    #[test]
    fn test_raw_html_passthrough() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("Intro\n\n<iframe src=\"https://example.com\"></iframe>\n");
        assert!(html.contains("<iframe src=\"https://example.com\"></iframe>"));
    }
}
