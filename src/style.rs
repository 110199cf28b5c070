//! Layout and style configuration. Every magic number the flow engine
//! depends on lives in one of these structs.

use crate::fonts::StandardFont;
use crate::model::Rgb;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font: StandardFont,
    pub size: f32,
    pub color: Rgb,
}

impl TextStyle {
    pub fn width_of(&self, text: &str) -> f32 {
        self.font.text_width(text, self.size)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub navy: Rgb,
    pub accent: Rgb,
    pub charcoal: Rgb,
    pub light_gray: Rgb,
    pub divider: Rgb,
    pub note_bg: Rgb,
    pub accent_bg: Rgb,
    pub note_border: Rgb,
    pub note_label: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            navy: Rgb(0.173, 0.243, 0.314),
            accent: Rgb(0.0, 0.443, 0.890),
            charcoal: Rgb(0.2, 0.2, 0.2),
            light_gray: Rgb(0.6, 0.6, 0.6),
            divider: Rgb(0.878, 0.878, 0.878),
            note_bg: Rgb(1.0, 0.976, 0.898),
            accent_bg: Rgb(0.941, 0.969, 1.0),
            note_border: Rgb(0.941, 0.784, 0.314),
            note_label: Rgb(0.706, 0.588, 0.235),
        }
    }
}

/// Semantic text roles. Read-only once built.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleTable {
    pub palette: Palette,
    pub title: TextStyle,
    pub subtitle: TextStyle,
    pub date: TextStyle,
    pub section_title: TextStyle,
    pub section_number: TextStyle,
    pub body_text: TextStyle,
    pub highlight_label: TextStyle,
    pub highlight_text: TextStyle,
    pub page_footer: TextStyle,
    pub confidential: TextStyle,
    /// Vertical advance per wrapped body line.
    pub body_line_height: f32,
    /// Vertical advance per wrapped line inside a note box.
    pub highlight_line_height: f32,
}

impl Default for StyleTable {
    fn default() -> Self {
        let palette = Palette::default();
        let style = |font, size, color| TextStyle { font, size, color };
        StyleTable {
            title: style(StandardFont::HelveticaBold, 28.0, palette.navy),
            subtitle: style(StandardFont::Helvetica, 12.0, palette.light_gray),
            date: style(StandardFont::Helvetica, 10.0, palette.light_gray),
            section_title: style(StandardFont::HelveticaBold, 16.0, palette.navy),
            section_number: style(StandardFont::HelveticaBold, 10.0, palette.navy),
            body_text: style(StandardFont::Helvetica, 11.0, palette.charcoal),
            highlight_label: style(StandardFont::HelveticaBold, 8.0, palette.note_label),
            highlight_text: style(StandardFont::TimesItalic, 10.5, palette.charcoal),
            page_footer: style(StandardFont::Helvetica, 8.0, palette.light_gray),
            confidential: style(StandardFont::HelveticaBold, 8.0, palette.light_gray),
            body_line_height: 17.0,
            highlight_line_height: 16.0,
            palette,
        }
    }
}

/// Page size, margins and the two page-break reserves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    /// A section header never starts closer than this to the bottom margin.
    pub section_reserve: f32,
    /// A body line never starts closer than this to the bottom margin.
    pub line_reserve: f32,
    /// Extra drop below the top margin on pages opened by a break.
    pub continuation_inset: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        PageGeometry {
            page_width: 595.0,
            page_height: 842.0,
            margin_top: 72.0,
            margin_bottom: 60.0,
            margin_left: 60.0,
            margin_right: 60.0,
            section_reserve: 150.0,
            line_reserve: 50.0,
            continuation_inset: 20.0,
        }
    }
}

impl PageGeometry {
    pub fn content_width(&self) -> f32 {
        self.page_width - self.margin_left - self.margin_right
    }

    pub fn right_edge(&self) -> f32 {
        self.page_width - self.margin_right
    }

    /// Cursor position at the top of a page allocated by a page break.
    pub fn continuation_top(&self) -> f32 {
        self.page_height - self.margin_top - self.continuation_inset
    }

    /// True when a new section may not start at `y`.
    pub fn needs_break_before_section(&self, y: f32) -> bool {
        y < self.margin_bottom + self.section_reserve
    }

    /// True when another body line may not start at `y`.
    pub fn needs_break_before_line(&self, y: f32) -> bool {
        y < self.margin_bottom + self.line_reserve
    }
}

/// Fixed offsets of the decorative elements, in points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowMetrics {
    pub accent_bar_height: f32,
    pub title_drop: f32,
    pub subtitle_drop: f32,
    pub divider_drop: f32,
    pub cover_gap: f32,
    pub divider_thickness: f32,
    pub badge_radius: f32,
    pub badge_center_drop: f32,
    pub badge_border_width: f32,
    pub header_baseline_drop: f32,
    pub title_indent: f32,
    pub header_height: f32,
    pub body_indent: f32,
    pub note_inset: f32,
    pub note_text_indent: f32,
    pub note_padding: f32,
    pub note_border_width: f32,
    pub note_label_drop: f32,
    pub note_label_height: f32,
    pub note_bottom_gap: f32,
    pub section_gap: f32,
    pub footer_rule_y: f32,
    pub footer_text_y: f32,
    pub logo_height: f32,
    pub logo_max_width: f32,
}

impl Default for FlowMetrics {
    fn default() -> Self {
        FlowMetrics {
            accent_bar_height: 3.0,
            title_drop: 60.0,
            subtitle_drop: 25.0,
            divider_drop: 20.0,
            cover_gap: 40.0,
            divider_thickness: 0.5,
            badge_radius: 12.0,
            badge_center_drop: 8.0,
            badge_border_width: 1.0,
            header_baseline_drop: 12.0,
            title_indent: 32.0,
            header_height: 35.0,
            body_indent: 10.0,
            note_inset: 10.0,
            note_text_indent: 20.0,
            note_padding: 20.0,
            note_border_width: 0.5,
            note_label_drop: 12.0,
            note_label_height: 20.0,
            note_bottom_gap: 10.0,
            section_gap: 30.0,
            footer_rule_y: 45.0,
            footer_text_y: 30.0,
            logo_height: 40.0,
            logo_max_width: 120.0,
        }
    }
}

impl FlowMetrics {
    /// Height of a note box holding `lines` wrapped lines.
    pub fn note_box_height(&self, lines: usize, line_height: f32) -> f32 {
        lines as f32 * line_height + self.note_padding
    }
}

/// Fixed strings stamped onto every report.
#[derive(Clone, Debug, PartialEq)]
pub struct Labels {
    pub subtitle: String,
    pub note: String,
    pub confidential: String,
    pub producer: String,
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            subtitle: "Investment Strategy Analysis".into(),
            note: "CUSTOM NOTE".into(),
            confidential: "CONFIDENTIAL".into(),
            producer: "strategy-pdf".into(),
        }
    }
}
