use crate::block::{Block, ListItem, Span};
use crate::config::Config;
use crate::parser;
use crate::plan::PlanResponse;

/// Convert a plan to Typst markup: styled preamble, centered title, then one
/// heading per section with its converted blocks.
pub fn plan_to_typst(plan: &PlanResponse, config: &Config) -> String {
    let mut out = String::new();

    out.push_str("#set par(linebreaks: \"optimized\")\n");
    out.push_str(&format!("#set page(margin: {})\n", config.page.margin));
    if config.page.numbers {
        out.push_str("#set page(numbering: \"1\")\n");
    }
    out.push_str(&format!(
        "#show heading: set text(fill: rgb(\"{}\"))\n",
        config.colors.heading
    ));
    out.push_str(&format!(
        "#let key(body) = text(fill: rgb(\"{}\"), weight: \"bold\")[#body]\n\n",
        config.colors.accent
    ));

    out.push_str(&format!(
        "#align(center)[#text(size: 28pt, weight: \"bold\", fill: rgb(\"{}\"))[",
        config.colors.accent
    ));
    escape_text(&config.title, &mut out);
    out.push_str("]]\n\n");

    for (name, text) in plan.sections() {
        let blocks = parser::convert(text);

        // Keep each section heading attached to its first block
        out.push_str("#block(breakable: false)[\n= ");
        escape_text(config.section_title(name), &mut out);
        out.push_str("\n\n");
        match blocks.split_first() {
            Some((first, rest)) => {
                emit_block(first, &mut out);
                out.push_str("]\n\n");
                for block in rest {
                    emit_block(block, &mut out);
                }
            }
            None => {
                out.push_str("No details available.\n\n]\n\n");
            }
        }
    }

    out
}

fn emit_block(block: &Block, out: &mut String) {
    match block {
        Block::Paragraph { content } => {
            spans_to_typst(content, out);
            out.push_str("\n\n");
        }
        Block::List { items } => {
            // Keep small lists together, allow breaks in large ones
            if items.len() <= 5 {
                out.push_str("#block(breakable: false)[\n");
                list_to_typst(items, out);
                out.push_str("]\n\n");
            } else {
                list_to_typst(items, out);
                out.push('\n');
            }
        }
    }
}

fn list_to_typst(items: &[ListItem], out: &mut String) {
    for item in items {
        out.push_str("- ");
        spans_to_typst(&item.content, out);
        out.push('\n');
    }
}

fn spans_to_typst(spans: &[Span], out: &mut String) {
    for span in spans {
        match span {
            Span::Text(text) => escape_text(text, out),
            Span::Bold(text) => {
                out.push('*');
                escape_text(text, out);
                out.push('*');
            }
            Span::KeyDetail(label) => {
                out.push_str("#key[");
                escape_text(label, out);
                out.push(']');
            }
        }
    }
}

fn escape_text(text: &str, out: &mut String) {
    // Escape special Typst characters
    for ch in text.chars() {
        match ch {
            '#' | '*' | '_' | '@' | '$' | '\\' | '`' | '<' | '>' | '[' | ']' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREAMBLE: &str = "#set par(linebreaks: \"optimized\")\n\
        #set page(margin: 50pt)\n\
        #show heading: set text(fill: rgb(\"#004080\"))\n\
        #let key(body) = text(fill: rgb(\"#00008b\"), weight: \"bold\")[#body]\n\n\
        #align(center)[#text(size: 28pt, weight: \"bold\", fill: rgb(\"#00008b\"))[Your Travel Plan]]\n\n";

    fn render(text: &str) -> String {
        plan_to_typst(&PlanResponse::from_text(text), &Config::default())
    }

    #[test]
    fn paragraph_section() {
        assert_eq!(
            render("Hello world"),
            format!("{PREAMBLE}#block(breakable: false)[\n= Travel Plan\n\nHello world\n\n]\n\n")
        );
    }

    #[test]
    fn heading_stays_with_first_block_only() {
        assert_eq!(
            render("Intro\n\n- a\n- b"),
            format!(
                "{PREAMBLE}#block(breakable: false)[\n= Travel Plan\n\nIntro\n\n]\n\n\
                 #block(breakable: false)[\n- a\n- b\n]\n\n"
            )
        );
    }

    #[test]
    fn large_lists_may_break() {
        let rendered = render("- 1\n- 2\n- 3\n- 4\n- 5\n- 6");
        assert!(rendered.ends_with("= Travel Plan\n\n- 1\n- 2\n- 3\n- 4\n- 5\n- 6\n\n]\n\n"));
    }

    #[test]
    fn empty_section_gets_placeholder() {
        assert_eq!(
            render(""),
            format!(
                "{PREAMBLE}#block(breakable: false)[\n= Travel Plan\n\nNo details available.\n\n]\n\n"
            )
        );
    }

    #[test]
    fn bold_and_key_detail_markup() {
        let rendered = render("**Day 1** Group Size: 4");
        assert!(rendered.contains("*Day 1* #key[Group Size:] 4\n\n"));
    }

    #[test]
    fn escapes_special_chars() {
        let rendered = render("fares @ $40");
        assert!(rendered.contains("fares \\@ \\$40\n\n"));
    }

    #[test]
    fn page_numbers_are_opt_in() {
        let mut config = Config::default();
        config.page.numbers = true;
        let rendered = plan_to_typst(&PlanResponse::from_text("x"), &config);
        assert!(rendered.contains("#set page(numbering: \"1\")\n"));
    }
}
