use crate::fonts::StandardFont;

/// Greedy word wrap. Words are separated by single spaces and are never
/// split, so a token wider than `max_width` overflows on a line of its own.
/// An empty input yields one blank line so blank source lines keep their
/// vertical space.
pub fn wrap_text(text: &str, font: StandardFont, font_size: f32, max_width: f32) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if font.text_width(&candidate, font_size) > max_width && !current.is_empty() {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Wrap a block that may contain embedded newlines. Each fragment is wrapped
/// on its own and the results are concatenated in order.
pub(crate) fn wrap_block(text: &str, font: StandardFont, font_size: f32, max_width: f32) -> Vec<String> {
    text.split('\n')
        .flat_map(|fragment| wrap_text(fragment, font, font_size, max_width))
        .collect()
}
