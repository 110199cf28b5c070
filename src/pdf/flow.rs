use crate::model::Section;
use crate::style::{FlowMetrics, Labels, PageGeometry, StyleTable};

use super::canvas::{PageHandle, PageSet};
use super::layout::wrap_block;
use super::logo::Logo;

/// Current write position. `y` only decreases within a page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cursor {
    pub page: PageHandle,
    pub y: f32,
}

/// Places sections onto pages top to bottom, opening new pages as the
/// reserves require. Owns the page sequence and the cursor for one render.
pub(crate) struct PageFlow<'a> {
    pages: PageSet,
    cursor: Cursor,
    geometry: &'a PageGeometry,
    metrics: &'a FlowMetrics,
    styles: &'a StyleTable,
    labels: &'a Labels,
}

impl<'a> PageFlow<'a> {
    /// Allocate the cover page with the cursor at the top margin.
    pub(crate) fn new(
        geometry: &'a PageGeometry,
        metrics: &'a FlowMetrics,
        styles: &'a StyleTable,
        labels: &'a Labels,
    ) -> Self {
        let mut pages = PageSet::default();
        let page = pages.add_page();
        PageFlow {
            pages,
            cursor: Cursor {
                page,
                y: geometry.page_height - geometry.margin_top,
            },
            geometry,
            metrics,
            styles,
            labels,
        }
    }

    pub(crate) fn cursor(&self) -> Cursor {
        self.cursor
    }

    fn break_page(&mut self) {
        let page = self.pages.add_page();
        self.cursor = Cursor {
            page,
            y: self.geometry.continuation_top(),
        };
        log::debug!("page break: now on page {}", page.index() + 1);
    }

    /// Accent bar, title, subtitle with the date right-aligned beside it,
    /// then the divider. Leaves the cursor below the divider.
    pub(crate) fn draw_cover_header(&mut self, title: &str, date: &str, logo: Option<&Logo>) {
        let g = self.geometry;
        let m = self.metrics;
        let s = self.styles;
        let page = self.pages.page_mut(self.cursor.page);

        page.draw_rect(
            0.0,
            g.page_height - m.accent_bar_height,
            g.page_width,
            m.accent_bar_height,
            Some(s.palette.accent),
            None,
        );

        self.cursor.y -= m.title_drop;
        page.draw_text(title, g.margin_left, self.cursor.y, &s.title);

        if let Some(logo) = logo {
            let (w, h) = logo.fit(m.logo_height, m.logo_max_width);
            page.draw_logo(g.right_edge() - w, self.cursor.y, w, h);
        }

        self.cursor.y -= m.subtitle_drop;
        page.draw_text(&self.labels.subtitle, g.margin_left, self.cursor.y, &s.subtitle);
        let date_x = g.right_edge() - s.date.width_of(date);
        page.draw_text(date, date_x, self.cursor.y, &s.date);

        self.cursor.y -= m.divider_drop;
        page.draw_line(
            (g.margin_left, self.cursor.y),
            (g.right_edge(), self.cursor.y),
            m.divider_thickness,
            s.palette.divider,
        );

        self.cursor.y -= m.cover_gap;
    }

    /// Flow one section. `index` is zero-based; the badge shows `index + 1`.
    pub(crate) fn flow_section(&mut self, index: usize, section: &Section) {
        if self.geometry.needs_break_before_section(self.cursor.y) {
            log::debug!(
                "section {} would start at y={:.1}, below the section reserve",
                index + 1,
                self.cursor.y
            );
            self.break_page();
        }

        self.draw_section_header(index, section);

        if section.is_highlighted {
            self.draw_note_body(&section.content);
        } else {
            self.draw_plain_body(&section.content);
        }

        self.cursor.y -= self.metrics.section_gap;
    }

    fn draw_section_header(&mut self, index: usize, section: &Section) {
        let g = self.geometry;
        let m = self.metrics;
        let s = self.styles;
        let y = self.cursor.y;
        let page = self.pages.page_mut(self.cursor.page);

        let (badge_fill, badge_border) = if section.is_highlighted {
            (s.palette.note_bg, s.palette.note_border)
        } else {
            (s.palette.accent_bg, s.palette.accent)
        };
        let cx = g.margin_left + m.badge_radius;
        page.draw_circle(
            cx,
            y - m.badge_center_drop,
            m.badge_radius,
            Some(badge_fill),
            Some((badge_border, m.badge_border_width)),
        );

        let number = (index + 1).to_string();
        let number_x = cx - s.section_number.width_of(&number) / 2.0;
        page.draw_text(&number, number_x, y - m.header_baseline_drop, &s.section_number);

        page.draw_text(
            &section.title,
            g.margin_left + m.title_indent,
            y - m.header_baseline_drop,
            &s.section_title,
        );

        self.cursor.y -= m.header_height;
    }

    /// The whole note is drawn inside one box on the current page; it is
    /// never split across pages.
    fn draw_note_body(&mut self, content: &str) {
        let g = self.geometry;
        let m = self.metrics;
        let s = self.styles;
        let line_h = s.highlight_line_height;

        let lines = wrap_block(
            content,
            s.highlight_text.font,
            s.highlight_text.size,
            g.content_width() - 2.0 * m.note_text_indent,
        );
        let box_height = m.note_box_height(lines.len(), line_h);

        let page = self.pages.page_mut(self.cursor.page);
        page.draw_rect(
            g.margin_left + m.note_inset,
            self.cursor.y - box_height + m.note_inset,
            g.content_width() - 2.0 * m.note_inset,
            box_height,
            Some(s.palette.note_bg),
            Some((s.palette.note_border, m.note_border_width)),
        );
        page.draw_text(
            &self.labels.note,
            g.margin_left + m.note_text_indent,
            self.cursor.y - m.note_label_drop,
            &s.highlight_label,
        );
        self.cursor.y -= m.note_label_height;

        for line in &lines {
            page.draw_text(line, g.margin_left + m.note_text_indent, self.cursor.y, &s.highlight_text);
            self.cursor.y -= line_h;
        }
        self.cursor.y -= m.note_bottom_gap;
    }

    /// Body lines may continue onto new pages; the check runs before each line.
    fn draw_plain_body(&mut self, content: &str) {
        let g = self.geometry;
        let m = self.metrics;
        let s = self.styles;

        let lines = wrap_block(
            content,
            s.body_text.font,
            s.body_text.size,
            g.content_width() - 2.0 * m.body_indent,
        );

        for line in &lines {
            if g.needs_break_before_line(self.cursor.y) {
                self.break_page();
            }
            self.pages
                .page_mut(self.cursor.page)
                .draw_text(line, g.margin_left + m.body_indent, self.cursor.y, &s.body_text);
            self.cursor.y -= s.body_line_height;
        }
    }

    /// Hand over the finished page sequence for decoration.
    pub(crate) fn finish(self) -> PageSet {
        self.pages
    }
}
