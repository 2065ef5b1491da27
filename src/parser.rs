use std::sync::LazyLock;

use regex::Regex;

use crate::block::{Block, ListItem, Span};

static BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[*-]+\s+").unwrap());
static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#+\s*").unwrap());
static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static KEY_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("Group Size:|Budget per Person:|Trip Type:|Cost Level:|Preferences:").unwrap()
});

/// List accumulation state. Bullet lines accumulate into `Inside` until a
/// non-bullet line or end-of-input flushes the open list.
enum ListState {
    Outside,
    Inside(Vec<ListItem>),
}

impl ListState {
    fn push(&mut self, item: ListItem) {
        match self {
            ListState::Inside(items) => items.push(item),
            ListState::Outside => *self = ListState::Inside(vec![item]),
        }
    }

    fn flush(&mut self, blocks: &mut Vec<Block>) {
        if let ListState::Inside(items) = std::mem::replace(self, ListState::Outside) {
            blocks.push(Block::List { items });
        }
    }
}

/// Convert plan text into a sequence of blocks.
///
/// Total over any input: lines are split on `\n`, trimmed, and classified as
/// bullet items, blanks, or plain text in a single pass. Consecutive bullet
/// lines collapse into one list; blank lines emit nothing but close an open
/// list.
pub fn convert(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut state = ListState::Outside;

    for line in text.split('\n') {
        let trimmed = line.trim();
        if BULLET.is_match(trimmed) {
            let rest = BULLET.replace(trimmed, "");
            state.push(ListItem {
                content: inline(&rest),
            });
        } else {
            state.flush(&mut blocks);
            let content = inline(trimmed);
            if !content.is_empty() {
                blocks.push(Block::Paragraph { content });
            }
        }
    }
    state.flush(&mut blocks);

    blocks
}

/// Inline substitution pipeline: heading-marker strip, then `**...**`
/// emphasis, then detail-label highlighting. Labels are only recognized in
/// plain text, so a label inside emphasis markers stays plain.
fn inline(text: &str) -> Vec<Span> {
    let stripped = HEADING.replace(text, "");
    let text: &str = &stripped;

    let mut spans = Vec::new();
    let mut rest = 0;
    for m in EMPHASIS.find_iter(text) {
        if m.start() > rest {
            label_spans(&text[rest..m.start()], &mut spans);
        }
        let inner = &m.as_str()[2..m.as_str().len() - 2];
        spans.push(Span::Bold(inner.to_string()));
        rest = m.end();
    }
    if rest < text.len() {
        label_spans(&text[rest..], &mut spans);
    }

    spans
}

fn label_spans(text: &str, spans: &mut Vec<Span>) {
    let mut rest = 0;
    for m in KEY_LABEL.find_iter(text) {
        if m.start() > rest {
            spans.push(Span::Text(text[rest..m.start()].to_string()));
        }
        spans.push(Span::KeyDetail(m.as_str().to_string()));
        rest = m.end();
    }
    if rest < text.len() {
        spans.push(Span::Text(text[rest..].to_string()));
    }
}
