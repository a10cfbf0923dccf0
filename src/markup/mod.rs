//! Inline markup mini-language
//!
//! Question and message strings may embed three delimiter pairs, evaluated
//! in this fixed order:
//!
//! 1. `**text**` → bold
//! 2. `__text__` → underline
//! 3. `*text*` → italic
//!
//! Evaluation order matters on ambiguous input: a `**` pair is always
//! claimed by the bold pass before the italic pass sees any single `*`.
//! Pairing is non-greedy within each pass, unmatched delimiters are left
//! literal, and there is no escaping. Each pass scans the whole string, so
//! a pair opened inside a run formatted by an earlier pass may close
//! beyond it; the enclosed pieces keep their existing flags and gain the
//! new one. The runtime embedded in exported documents applies the same
//! three passes in the same order.
//!
//! One parse produces a flat span list that is rendered two ways — as a
//! styled ratatui [`Line`] for the interactive player and as HTML for the
//! exported document — so both runtimes share a single formatting model.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// A run of text with accumulated formatting flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupSpan {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

#[derive(Clone, Copy)]
enum Flag {
    Bold,
    Underline,
    Italic,
}

/// Parse a string into formatted spans, applying the three delimiter
/// passes in their fixed order. Spans that end up empty are dropped.
pub fn parse(text: &str) -> Vec<MarkupSpan> {
    let mut spans = vec![MarkupSpan {
        text: text.to_string(),
        bold: false,
        italic: false,
        underline: false,
    }];

    for (delimiter, flag) in [
        ("**", Flag::Bold),
        ("__", Flag::Underline),
        ("*", Flag::Italic),
    ] {
        spans = apply_pass(spans, delimiter, flag);
    }

    spans.retain(|span| !span.text.is_empty());
    spans
}

/// Run one non-greedy `delimiter` pass over the whole span sequence.
///
/// Both halves of a delimiter must sit inside a single span (a boundary
/// from an earlier pass breaks them apart, just as an injected tag does in
/// the exported runtime), but the enclosed region may cross boundaries:
/// every span piece inside it gains `flag` on top of its existing flags.
/// A delimiter with no later occurrence anywhere stays literal.
fn apply_pass(mut spans: Vec<MarkupSpan>, delimiter: &str, flag: Flag) -> Vec<MarkupSpan> {
    let mut out = Vec::new();
    let mut i = 0;

    while i < spans.len() {
        let Some(open) = spans[i].text.find(delimiter) else {
            out.push(spans[i].clone());
            i += 1;
            continue;
        };
        let after = open + delimiter.len();

        // Closing delimiter: first in the rest of this span, else the
        // next occurrence in any later span.
        if let Some(rel) = spans[i].text[after..].find(delimiter) {
            let close = after + rel;
            out.push(spans[i].with_text(&spans[i].text[..open]));
            out.push(spans[i].with_text(&spans[i].text[after..close]).with_flag(flag));
            spans[i].text = spans[i].text[close + delimiter.len()..].to_string();
            continue;
        }

        let closing = (i + 1..spans.len())
            .find_map(|j| spans[j].text.find(delimiter).map(|p| (j, p)));
        let Some((j, p)) = closing else {
            // Nothing left to pair with anywhere.
            out.push(spans[i].clone());
            i += 1;
            continue;
        };

        out.push(spans[i].with_text(&spans[i].text[..open]));
        out.push(spans[i].with_text(&spans[i].text[after..]).with_flag(flag));
        for span in &spans[i + 1..j] {
            out.push(span.clone().with_flag(flag));
        }
        out.push(spans[j].with_text(&spans[j].text[..p]).with_flag(flag));
        spans[j].text = spans[j].text[p + delimiter.len()..].to_string();
        i = j;
    }

    out
}

impl MarkupSpan {
    fn with_text(&self, text: &str) -> MarkupSpan {
        MarkupSpan {
            text: text.to_string(),
            bold: self.bold,
            italic: self.italic,
            underline: self.underline,
        }
    }

    fn with_flag(mut self, flag: Flag) -> MarkupSpan {
        match flag {
            Flag::Bold => self.bold = true,
            Flag::Underline => self.underline = true,
            Flag::Italic => self.italic = true,
        }
        self
    }
}

/// Render a markup string as a ratatui line on top of `base_style`.
pub fn to_line(text: &str, base_style: Style) -> Line<'static> {
    let spans = parse(text)
        .into_iter()
        .map(|span| {
            let mut style = base_style;
            if span.bold {
                style = style.add_modifier(Modifier::BOLD);
            }
            if span.italic {
                style = style.add_modifier(Modifier::ITALIC);
            }
            if span.underline {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            Span::styled(span.text, style)
        })
        .collect::<Vec<_>>();

    Line::from(spans)
}

/// Render a multi-line markup string as ratatui lines. Delimiter pairs may
/// span line breaks, matching the HTML rendering; the resulting spans are
/// split on `\n` afterwards.
pub fn to_lines(text: &str, base_style: Style) -> Vec<Line<'static>> {
    let mut lines = vec![Vec::new()];
    for span in parse(text) {
        let mut style = base_style;
        if span.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if span.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if span.underline {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        for (i, piece) in span.text.split('\n').enumerate() {
            if i > 0 {
                lines.push(Vec::new());
            }
            if !piece.is_empty() {
                if let Some(last) = lines.last_mut() {
                    last.push(Span::styled(piece.to_string(), style));
                }
            }
        }
    }
    lines.into_iter().map(Line::from).collect()
}

/// Render a markup string as HTML, escaping the text content and nesting
/// tags as `<strong>` > `<u>` > `<em>`, mirroring the pass order.
pub fn to_html(text: &str) -> String {
    let mut html = String::new();
    for span in parse(text) {
        let escaped = escape_html(&span.text);
        let mut open = String::new();
        let mut close = String::new();
        if span.bold {
            open.push_str("<strong>");
            close.insert_str(0, "</strong>");
        }
        if span.underline {
            open.push_str("<u>");
            close.insert_str(0, "</u>");
        }
        if span.italic {
            open.push_str("<em>");
            close.insert_str(0, "</em>");
        }
        html.push_str(&open);
        html.push_str(&escaped);
        html.push_str(&close);
    }
    html
}

/// Minimal HTML escaping for text interpolated into markup context.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
