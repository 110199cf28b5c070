use pretty_assertions::assert_eq;
use strategy_pdf::{StandardFont, sanitize, wrap_text};

#[test]
fn sanitize_replaces_typographic_punctuation() {
    assert_eq!(
        sanitize("Q3\u{2013}Q4 \u{201C}risk\u{201D} isn\u{2019}t \u{2014} low\u{2026}"),
        "Q3-Q4 \"risk\" isn't - low..."
    );
    assert_eq!(sanitize("\u{2022} item \u{2011} x"), "* item - x");
    assert_eq!(sanitize("\u{2018}a\u{2019}"), "'a'");
}

#[test]
fn sanitize_keeps_latin1_and_blanks_the_rest() {
    assert_eq!(sanitize("café £5 ±2"), "café £5 ±2");
    assert_eq!(sanitize("yen ¥ vs 円"), "yen ¥ vs  ");
    assert_eq!(sanitize("ok 👍"), "ok  ");
    assert_eq!(sanitize(""), "");
}

#[test]
fn measures_with_afm_widths() {
    // H e l l o = 722 + 556 + 222 + 222 + 556
    let w = StandardFont::Helvetica.text_width("Hello", 10.0);
    assert!((w - 22.78).abs() < 1e-3, "{w}");
    let bold = StandardFont::HelveticaBold.text_width("Hello", 10.0);
    assert!(bold > w);
    assert_eq!(StandardFont::TimesItalic.text_width("", 12.0), 0.0);
}

#[test]
fn empty_input_wraps_to_one_blank_line() {
    assert_eq!(wrap_text("", StandardFont::Helvetica, 11.0, 100.0), vec![String::new()]);
    assert_eq!(wrap_text(" ", StandardFont::Helvetica, 11.0, 100.0).len(), 1);
}

#[test]
fn short_text_stays_on_one_line() {
    assert_eq!(
        wrap_text("Short text.", StandardFont::Helvetica, 11.0, 455.0),
        vec!["Short text.".to_string()]
    );
}

#[test]
fn wrapped_lines_fit_unless_single_word() {
    let text = "Equity markets rallied while credit spreads tightened across \
                investment grade and high yield; supercalifragilisticexpialidocious \
                volatility remained subdued into the quarter end as rates eased";
    for max_width in [40.0, 80.0, 150.0, 300.0] {
        let lines = wrap_text(text, StandardFont::Helvetica, 11.0, max_width);
        assert!(lines.len() > 1);
        for line in &lines {
            let w = StandardFont::Helvetica.text_width(line, 11.0);
            assert!(
                w <= max_width || !line.contains(' '),
                "line {line:?} is {w}pt wide at max {max_width}"
            );
        }
        assert_eq!(lines.join(" "), text);
    }
}

#[test]
fn long_token_is_never_split() {
    let token = "x".repeat(200);
    let lines = wrap_text(&format!("a {token} b"), StandardFont::Helvetica, 11.0, 50.0);
    assert_eq!(lines, vec!["a".to_string(), token, "b".to_string()]);
}
