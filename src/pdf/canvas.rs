use crate::fonts::StandardFont;
use crate::model::Rgb;

/// A single recorded drawing instruction. Coordinates are PDF user space
/// (origin bottom-left, y up).
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Text {
        text: String,
        x: f32,
        y: f32,
        font: StandardFont,
        size: f32,
        color: Rgb,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        thickness: f32,
        color: Rgb,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Option<Rgb>,
        border: Option<(Rgb, f32)>,
    },
    Circle {
        cx: f32,
        cy: f32,
        radius: f32,
        fill: Option<Rgb>,
        border: Option<(Rgb, f32)>,
    },
    /// The document logo scaled into the given box.
    Logo {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

/// One page's drawing surface.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    ops: Vec<DrawOp>,
}

impl Page {
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// All text drawn on the page, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub(crate) fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &crate::style::TextStyle) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            font: style.font,
            size: style.size,
            color: style.color,
        });
    }

    pub(crate) fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), thickness: f32, color: Rgb) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            thickness,
            color,
        });
    }

    pub(crate) fn draw_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Option<Rgb>,
        border: Option<(Rgb, f32)>,
    ) {
        self.ops.push(DrawOp::Rect {
            x,
            y,
            width,
            height,
            fill,
            border,
        });
    }

    pub(crate) fn draw_circle(
        &mut self,
        cx: f32,
        cy: f32,
        radius: f32,
        fill: Option<Rgb>,
        border: Option<(Rgb, f32)>,
    ) {
        self.ops.push(DrawOp::Circle {
            cx,
            cy,
            radius,
            fill,
            border,
        });
    }

    pub(crate) fn draw_logo(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ops.push(DrawOp::Logo {
            x,
            y,
            width,
            height,
        });
    }
}

/// Index of a page inside its `PageSet`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageHandle(usize);

impl PageHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Append-only page sequence owned by a single render.
#[derive(Debug, Default)]
pub(crate) struct PageSet {
    pages: Vec<Page>,
}

impl PageSet {
    pub(crate) fn add_page(&mut self) -> PageHandle {
        self.pages.push(Page::default());
        PageHandle(self.pages.len() - 1)
    }

    pub(crate) fn page_mut(&mut self, handle: PageHandle) -> &mut Page {
        &mut self.pages[handle.0]
    }

    pub(crate) fn len(&self) -> usize {
        self.pages.len()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Page> {
        self.pages.iter_mut()
    }

    pub(crate) fn into_pages(self) -> Vec<Page> {
        self.pages
    }
}
