//! HTML rendering collaborator.
//!
//! Consumes [`Section`] descriptors and produces the final document. All
//! pixel-level concerns live here: markup, the embedded stylesheet, the
//! language selector, and the ripple animation (passed through verbatim from
//! the original design). The renderer itself never sees any of this.

use std::sync::OnceLock;

use regex::Regex;

use crate::content::Locale;
use crate::render::{Section, SectionSink};

/// Portrait animation, passed through verbatim.
const RIPPLE_STYLE: &str = r#"
@keyframes ripple {
    0% { transform: scale(1) skew(0deg, 0deg); }
    25% { transform: scale(1.05, 0.95) skew(1.5deg, -1.5deg); }
    50% { transform: scale(1) skew(0deg, 0deg); }
    75% { transform: scale(1.05, 0.95) skew(-1.5deg, 1.5deg); }
    100% { transform: scale(1) skew(0deg, 0deg); }
}

.ripple-image {
    width: 230px;
    animation: ripple 1.5s infinite ease-in-out;
    border-radius: 12px;
}
"#;

const PAGE_STYLE: &str = r#"
body { font-family: sans-serif; max-width: 720px; margin: 2rem auto; padding: 0 1rem; color: #222; }
nav.lang { text-align: right; }
nav.lang a { margin-left: 0.5rem; }
header.identity { display: flex; gap: 1.5rem; align-items: center; }
a.resume-button { display: inline-block; border: 1px solid #bbb; border-radius: 6px; padding: 0.4em 0.9em; text-decoration: none; color: inherit; }
progress.skill { width: 100%; height: 0.8em; }
div.tip { background: #e8f1fb; border-radius: 6px; padding: 0.7em 1em; margin: 0.5em 0; }
blockquote.motto { font-size: 1.4em; font-style: italic; color: #444; border-left: 4px solid #ccc; padding-left: 1em; }
blockquote.motto .attribution { font-size: 0.9em; color: #666; }
hr { border: none; border-top: 1px solid #ddd; margin: 2rem 0; }
footer { color: #666; font-size: 0.9em; }
"#;

static MARKDOWN_LINK_REGEX: OnceLock<Regex> = OnceLock::new();

/// Escape text for interpolation into HTML element content or attributes.
fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Convert `[text](url)` markdown links to anchors, escaping everything else.
fn render_inline_links(text: &str) -> String {
    let link_regex = MARKDOWN_LINK_REGEX
        .get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

    let mut result = String::with_capacity(text.len() * 2);
    let mut last_end = 0;

    for cap in link_regex.captures_iter(text) {
        let whole_match = cap.get(0).unwrap();
        let link_text = cap.get(1).unwrap().as_str();
        let link_url = cap.get(2).unwrap().as_str();

        result.push_str(&escape_html(&text[last_end..whole_match.start()]));
        result.push_str(&format!(
            r#"<a href="{}">{}</a>"#,
            escape_html(link_url),
            escape_html(link_text)
        ));

        last_end = whole_match.end();
    }

    result.push_str(&escape_html(&text[last_end..]));
    result
}

/// Accumulates emitted sections into a complete HTML document.
///
/// One instance per render pass; [`finish`](HtmlPage::finish) consumes it.
pub struct HtmlPage {
    locale: Locale,
    title: String,
    body: String,
}

impl HtmlPage {
    pub fn new(locale: Locale) -> HtmlPage {
        HtmlPage {
            locale,
            title: String::new(),
            body: String::new(),
        }
    }

    fn push_divider(&mut self) {
        self.body.push_str("<hr>\n");
    }

    /// Produce the final document around the accumulated sections.
    pub fn finish(self) -> String {
        let selector = Locale::ALL
            .iter()
            .map(|locale| {
                if *locale == self.locale {
                    format!("<strong>{}</strong>", escape_html(locale.native_name()))
                } else {
                    format!(
                        r#"<a href="/?lang={}">{}</a>"#,
                        locale.code(),
                        escape_html(locale.native_name())
                    )
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{title}</title>\n<style>{ripple}{page}</style>\n</head>\n<body>\n\
<nav class=\"lang\">\n{selector}\n</nav>\n{body}</body>\n</html>\n",
            lang = self.locale.code(),
            title = self.title,
            ripple = RIPPLE_STYLE,
            page = PAGE_STYLE,
            selector = selector,
            body = self.body,
        )
    }
}

impl SectionSink for HtmlPage {
    fn emit(&mut self, section: &Section) {
        match section {
            Section::Identity {
                name,
                job_title,
                portrait_data_uri,
                resume_label,
                resume_href,
                resume_filename,
            } => {
                self.title = format!("{} | {}", escape_html(name), escape_html(job_title));
                self.body.push_str(&format!(
                    "<header class=\"identity\">\n\
<img class=\"ripple-image\" src=\"{portrait}\" alt=\"{name}\">\n\
<div>\n<h1>{name}</h1>\n<p>{job_title}</p>\n\
<a class=\"resume-button\" href=\"{href}\" download=\"{filename}\">{label}</a>\n\
</div>\n</header>\n",
                    portrait = portrait_data_uri,
                    name = escape_html(name),
                    job_title = escape_html(job_title),
                    href = resume_href,
                    filename = resume_filename,
                    label = escape_html(resume_label),
                ));
            }

            Section::Intro { text } => {
                for paragraph in text.split("\n\n") {
                    self.body
                        .push_str(&format!("<p>{}</p>\n", escape_html(paragraph)));
                }
            }

            Section::Skills { heading, tabs } => {
                self.push_divider();
                self.body
                    .push_str(&format!("<h2>{}</h2>\n", escape_html(heading)));
                for (index, tab) in tabs.iter().enumerate() {
                    self.body.push_str(&format!(
                        "<details class=\"skill-tab\" id=\"{}\"{}>\n<summary>{}</summary>\n",
                        escape_html(tab.id),
                        if index == 0 { " open" } else { "" },
                        escape_html(tab.label),
                    ));
                    for skill in &tab.skills {
                        self.body.push_str(&format!(
                            "<p><strong>{}</strong></p>\n\
<progress class=\"skill\" value=\"{}\" max=\"100\">{}</progress>\n",
                            escape_html(skill.name),
                            skill.level,
                            skill.level,
                        ));
                    }
                    self.body.push_str("</details>\n");
                }
            }

            Section::Capabilities { heading, items } => {
                self.push_divider();
                self.body
                    .push_str(&format!("<h2>{}</h2>\n<ul>\n", escape_html(heading)));
                for item in *items {
                    self.body
                        .push_str(&format!("<li>{}</li>\n", escape_html(item)));
                }
                self.body.push_str("</ul>\n");
            }

            Section::Tips { heading, items } => {
                self.push_divider();
                self.body
                    .push_str(&format!("<h2>{}</h2>\n", escape_html(heading)));
                for item in *items {
                    self.body
                        .push_str(&format!("<div class=\"tip\">{}</div>\n", escape_html(item)));
                }
            }

            Section::Motto {
                heading,
                text,
                attribution,
            } => {
                self.push_divider();
                self.body.push_str(&format!(
                    "<h2>{}</h2>\n<blockquote class=\"motto\">\n\u{201c}{}\u{201d}<br>\n\
<span class=\"attribution\">{}</span>\n</blockquote>\n",
                    escape_html(heading),
                    escape_html(text),
                    escape_html(attribution),
                ));
            }

            Section::Certification { label } => {
                self.push_divider();
                self.body
                    .push_str(&format!("<h3>{}</h3>\n", escape_html(label)));
            }

            Section::Contact { footer } => {
                self.push_divider();
                self.body
                    .push_str(&format!("<footer>{}</footer>\n", render_inline_links(footer)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetStore;
    use crate::content::ProfileCatalog;
    use crate::render::{render_page, RenderContext};

    fn rendered(locale: Locale) -> String {
        let catalog = ProfileCatalog::load().unwrap();
        let assets = AssetStore {
            portrait_data_uri: "data:image/png;base64,dGVzdA==".to_string(),
            resume_pdf: b"%PDF-1.4 test".to_vec(),
        };
        let ctx = RenderContext {
            locale,
            content: catalog.get(locale),
            assets: &assets,
        };
        let mut page = HtmlPage::new(locale);
        render_page(&ctx, &mut page);
        page.finish()
    }

    // ==================== Escaping Tests ====================

    #[test]
    fn test_escape_html_metacharacters() {
        assert_eq!(
            escape_html(r#"<b>"R&D" isn't</b>"#),
            "&lt;b&gt;&quot;R&amp;D&quot; isn&#39;t&lt;/b&gt;"
        );
    }

    #[test]
    fn test_escape_html_passthrough() {
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_render_inline_links() {
        let html = render_inline_links("See [GitHub](https://github.com/x) & more");
        assert_eq!(
            html,
            r#"See <a href="https://github.com/x">GitHub</a> &amp; more"#
        );
    }

    #[test]
    fn test_render_inline_links_without_links() {
        assert_eq!(render_inline_links("no links"), "no links");
    }

    // ==================== Document Tests ====================

    #[test]
    fn test_document_structure_english() {
        let html = rendered(Locale::En);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains("Gareth Nassar"));
        assert!(html.contains("@keyframes ripple"));
        assert!(html.contains("data:image/png;base64,dGVzdA=="));
    }

    #[test]
    fn test_document_language_selector() {
        let html = rendered(Locale::En);
        // Current locale is highlighted, the other is a link.
        assert!(html.contains("<strong>English</strong>"));
        assert!(html.contains(r#"<a href="/?lang=fr">Français</a>"#));
    }

    #[test]
    fn test_french_document_uses_french_text() {
        let html = rendered(Locale::Fr);
        assert!(html.contains(r#"<html lang="fr">"#));
        assert!(html.contains("Administrateur réseaux et systèmes"));
        assert!(html.contains("🧠 Compétences"));
        assert!(html.contains(r#"download="resume.pdf""#));
    }

    #[test]
    fn test_progress_bars_carry_proficiency_values() {
        let html = rendered(Locale::En);
        assert!(html.contains(r#"<progress class="skill" value="95" max="100">"#));
    }

    #[test]
    fn test_sections_appear_in_page_order() {
        let html = rendered(Locale::En);
        let positions: Vec<usize> = [
            "<header class=\"identity\">",
            "🧠 Skills",
            "🛠️ What I Can Do",
            "💡 My Networking Tips",
            "💬 Signature Quote",
            "🎖️ CompTIA Network+",
            "<footer>",
        ]
        .iter()
        .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_contact_footer_links_become_anchors() {
        let html = rendered(Locale::En);
        assert!(html.contains(r#"<a href="https://www.linkedin.com/in/canuckcowboy/">LinkedIn</a>"#));
    }

    #[test]
    fn test_intro_split_into_paragraphs() {
        let html = rendered(Locale::En);
        let intro_paragraphs = html.matches("<p>For me, networking").count();
        assert_eq!(intro_paragraphs, 1);
        assert!(html.contains("<p>I approach every project"));
    }
}
