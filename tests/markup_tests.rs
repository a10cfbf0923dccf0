// Integration tests for the inline markup mini-language

use ratatui::style::{Modifier, Style};
use twofold::markup::{parse, to_html, to_line, to_lines, MarkupSpan};

fn span(text: &str, bold: bool, italic: bool, underline: bool) -> MarkupSpan {
    MarkupSpan {
        text: text.to_string(),
        bold,
        italic,
        underline,
    }
}

#[test]
fn test_plain_text_is_one_span() {
    assert_eq!(parse("hello world"), vec![span("hello world", false, false, false)]);
}

#[test]
fn test_bold_delimiters() {
    assert_eq!(
        parse("a **b** c"),
        vec![
            span("a ", false, false, false),
            span("b", true, false, false),
            span(" c", false, false, false),
        ]
    );
}

#[test]
fn test_underline_delimiters() {
    assert_eq!(
        parse("__u__ rest"),
        vec![span("u", false, false, true), span(" rest", false, false, false)]
    );
}

#[test]
fn test_italic_delimiters() {
    assert_eq!(
        parse("x *i* y"),
        vec![
            span("x ", false, false, false),
            span("i", false, true, false),
            span(" y", false, false, false),
        ]
    );
}

#[test]
fn test_double_star_wins_over_italic() {
    // The bold pass runs before the italic pass, so ** is never read as
    // two italic delimiters.
    assert_eq!(parse("**b**"), vec![span("b", true, false, false)]);
}

#[test]
fn test_italic_nested_inside_bold() {
    assert_eq!(
        parse("**a *b* c**"),
        vec![
            span("a ", true, false, false),
            span("b", true, true, false),
            span(" c", true, false, false),
        ]
    );
}

#[test]
fn test_unmatched_delimiters_stay_literal() {
    assert_eq!(parse("lone *star"), vec![span("lone *star", false, false, false)]);
    assert_eq!(parse("half __under"), vec![span("half __under", false, false, false)]);
}

#[test]
fn test_leftover_double_star_collapses_to_empty_italic() {
    // An unpaired ** survives the bold pass and the italic pass then reads
    // it as an empty *...* pair, so the stars vanish from the output. This
    // matches the historical renderer.
    assert_eq!(
        parse("a **b"),
        vec![span("a ", false, false, false), span("b", false, false, false)]
    );
}

#[test]
fn test_triple_star_nests_bold_and_italic() {
    // Bold claims the outer ** pair, leaving one * on each side; the
    // italic pass then pairs those across the bold boundary. Both
    // renderers agree on bold+italic "x".
    assert_eq!(parse("***x***"), vec![span("x", true, true, false)]);
    assert_eq!(to_html("***x***"), "<strong><em>x</em></strong>");
}

#[test]
fn test_pair_opened_inside_bold_may_close_outside_it() {
    // Passes run over the whole string: a __ opened inside a bold run can
    // close after it, and every piece in between keeps its own flags while
    // gaining the underline.
    assert_eq!(
        parse("**a__b** c__d"),
        vec![
            span("a", true, false, false),
            span("b", true, false, true),
            span(" c", false, false, true),
            span("d", false, false, false),
        ]
    );
}

#[test]
fn test_pairing_is_non_greedy() {
    assert_eq!(
        parse("**a** mid **b**"),
        vec![
            span("a", true, false, false),
            span(" mid ", false, false, false),
            span("b", true, false, false),
        ]
    );
}

#[test]
fn test_delimiters_span_line_breaks() {
    assert_eq!(
        parse("**a\nb**"),
        vec![span("a\nb", true, false, false)]
    );
}

#[test]
fn test_html_rendering() {
    assert_eq!(to_html("**b**"), "<strong>b</strong>");
    assert_eq!(to_html("__u__"), "<u>u</u>");
    assert_eq!(to_html("*i*"), "<em>i</em>");
    assert_eq!(
        to_html("**a *b* c**"),
        "<strong>a </strong><strong><em>b</em></strong><strong> c</strong>"
    );
}

#[test]
fn test_html_escapes_content() {
    assert_eq!(to_html("1 < 2 & 3 > 2"), "1 &lt; 2 &amp; 3 &gt; 2");
    assert_eq!(to_html("**<b>**"), "<strong>&lt;b&gt;</strong>");
}

#[test]
fn test_line_rendering_matches_parse() {
    let line = to_line("a **b** c", Style::default());
    assert_eq!(line.spans.len(), 3);
    assert_eq!(line.spans[0].content, "a ");
    assert_eq!(line.spans[1].content, "b");
    assert!(line.spans[1].style.add_modifier.contains(Modifier::BOLD));
    assert!(!line.spans[0].style.add_modifier.contains(Modifier::BOLD));
}

#[test]
fn test_multiline_rendering_splits_lines() {
    let lines = to_lines("first\n**second**", Style::default());
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].spans[0].content, "first");
    assert_eq!(lines[1].spans[0].content, "second");
    assert!(lines[1].spans[0].style.add_modifier.contains(Modifier::BOLD));
}

#[test]
fn test_tui_and_html_render_the_same_spans() {
    // Both renderers consume the same parse, so the visible text and the
    // formatting boundaries must agree.
    let text = "mix **bold** and *italic* and __under__";
    let spans = parse(text);

    let plain: String = spans.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(plain, "mix bold and italic and under");

    let html = to_html(text);
    assert_eq!(
        html,
        "mix <strong>bold</strong> and <em>italic</em> and <u>under</u>"
    );
}
