use crate::block::{Block, Span};
use crate::config::Config;
use crate::parser;
use crate::plan::PlanResponse;

/// Render blocks as an HTML fragment, with no whitespace between tags.
pub fn blocks_to_html(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            Block::Paragraph { content } => {
                out.push_str("<p>");
                spans_to_html(content, &mut out);
                out.push_str("</p>");
            }
            Block::List { items } => {
                out.push_str("<ul>");
                for item in items {
                    out.push_str("<li>");
                    spans_to_html(&item.content, &mut out);
                    out.push_str("</li>");
                }
                out.push_str("</ul>");
            }
        }
    }
    out
}

fn spans_to_html(spans: &[Span], out: &mut String) {
    for span in spans {
        match span {
            Span::Text(text) => out.push_str(&html_escape::encode_text(text)),
            Span::Bold(text) => {
                out.push_str("<strong>");
                out.push_str(&html_escape::encode_text(text));
                out.push_str("</strong>");
            }
            Span::KeyDetail(label) => {
                out.push_str("<span class=\"key-detail\">");
                out.push_str(&html_escape::encode_text(label));
                out.push_str("</span>");
            }
        }
    }
}

/// Render a whole plan as the fragment the web UI injects: one
/// `div.section` per section, then the email status line.
pub fn plan_to_html(plan: &PlanResponse, config: &Config) -> String {
    let mut out = String::new();
    for (name, text) in plan.sections() {
        out.push_str("<div class=\"section\"><h3>");
        out.push_str(&html_escape::encode_text(config.section_title(name)));
        out.push_str("</h3>");
        out.push_str(&blocks_to_html(&parser::convert(text)));
        out.push_str("</div>");
    }
    if let Some(message) = &plan.message {
        out.push_str("<p><strong>Email status:</strong> ");
        out.push_str(&html_escape::encode_text(message));
        out.push_str("</p>");
    }
    out
}
