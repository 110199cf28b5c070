/// Replace punctuation the WinAnsi encoding cannot show with ASCII
/// look-alikes. Characters above U+00FF become a single space; Latin-1
/// characters pass through untouched.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{2011}' | '\u{2013}' | '\u{2014}' => out.push('-'),
            '\u{201C}' | '\u{201D}' => out.push('"'),
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{2026}' => out.push_str("..."),
            '\u{2022}' => out.push('*'),
            c if (c as u32) > 0xFF => out.push(' '),
            c => out.push(c),
        }
    }
    out
}
