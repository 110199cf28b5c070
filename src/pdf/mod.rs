mod canvas;
mod decorate;
mod flow;
mod layout;
mod logo;

use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::error::Error;
use crate::fonts::{StandardFont, register_fonts, to_winansi_bytes};
use crate::model::{Rgb, Section};
use crate::sanitize::sanitize;
use crate::style::{FlowMetrics, Labels, PageGeometry, StyleTable};

pub use canvas::{DrawOp, Page, PageHandle};
pub use flow::Cursor;
pub use layout::wrap_text;
pub use logo::Logo;

use decorate::decorate_pages;
use flow::PageFlow;

const LOGO_NAME: &[u8] = b"Im1";

/// Bezier control-point factor for approximating a quarter circle.
const KAPPA: f32 = 0.552_284_8;

/// Everything that shapes a render besides the input itself.
pub(crate) struct LayoutConfig<'a> {
    pub(crate) geometry: &'a PageGeometry,
    pub(crate) metrics: &'a FlowMetrics,
    pub(crate) styles: &'a StyleTable,
    pub(crate) labels: &'a Labels,
}

/// A fully laid out and decorated document, ready to serialize.
pub struct RenderedDocument {
    title: String,
    producer: String,
    page_width: f32,
    page_height: f32,
    pages: Vec<Page>,
    logo: Option<Logo>,
}

impl RenderedDocument {
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Encode the pages as a PDF byte buffer.
    pub fn to_pdf(&self) -> Vec<u8> {
        serialize(self)
    }
}

/// Sanitize the input, flow every section and stamp the footers. A logo
/// that cannot be decoded is left out rather than failing the render.
pub(crate) fn layout(
    config: &LayoutConfig<'_>,
    title: &str,
    sections: &[Section],
    logo: Option<&[u8]>,
    date: &str,
) -> Result<RenderedDocument, Error> {
    let logo = logo.and_then(|bytes| match Logo::decode(bytes) {
        Ok(logo) => Some(logo),
        Err(e) => {
            log::warn!("ignoring logo: {e}");
            None
        }
    });
    let title = sanitize(title);
    let labels = Labels {
        subtitle: sanitize(&config.labels.subtitle),
        note: sanitize(&config.labels.note),
        confidential: sanitize(&config.labels.confidential),
        producer: config.labels.producer.clone(),
    };

    if sections.is_empty() {
        log::warn!("rendering \"{title}\" with no sections");
    }

    let mut flow = PageFlow::new(config.geometry, config.metrics, config.styles, &labels);
    flow.draw_cover_header(&title, &sanitize(date), logo.as_ref());

    for (i, section) in sections.iter().enumerate() {
        let clean = Section {
            title: sanitize(&section.title),
            content: sanitize(&section.content),
            is_highlighted: section.is_highlighted,
        };
        flow.flow_section(i, &clean);
    }
    log::debug!("flow finished at y={:.1}", flow.cursor().y);

    let mut pages = flow.finish();
    decorate_pages(&mut pages, config.geometry, config.metrics, config.styles, &labels);

    Ok(RenderedDocument {
        title,
        producer: labels.producer,
        page_width: config.geometry.page_width,
        page_height: config.geometry.page_height,
        pages: pages.into_pages(),
        logo,
    })
}

fn fill_and_stroke(content: &mut Content, fill: Option<Rgb>, border: Option<(Rgb, f32)>) {
    if let Some(Rgb(r, g, b)) = fill {
        content.set_fill_rgb(r, g, b);
    }
    if let Some((Rgb(r, g, b), width)) = border {
        content.set_stroke_rgb(r, g, b);
        content.set_line_width(width);
    }
    match (fill.is_some(), border.is_some()) {
        (true, true) => {
            content.fill_nonzero_and_stroke();
        }
        (true, false) => {
            content.fill_nonzero();
        }
        (false, true) => {
            content.stroke();
        }
        (false, false) => {
            content.end_path();
        }
    }
}

fn circle_path(content: &mut Content, cx: f32, cy: f32, r: f32) {
    let k = r * KAPPA;
    content.move_to(cx + r, cy);
    content.cubic_to(cx + r, cy + k, cx + k, cy + r, cx, cy + r);
    content.cubic_to(cx - k, cy + r, cx - r, cy + k, cx - r, cy);
    content.cubic_to(cx - r, cy - k, cx - k, cy - r, cx, cy - r);
    content.cubic_to(cx + k, cy - r, cx + r, cy - k, cx + r, cy);
    content.close_path();
}

fn render_op(content: &mut Content, op: &DrawOp) {
    content.save_state();
    match op {
        DrawOp::Text {
            text,
            x,
            y,
            font,
            size,
            color,
        } => {
            let Rgb(r, g, b) = *color;
            content.set_fill_rgb(r, g, b);
            content
                .begin_text()
                .set_font(Name(font.resource_name().as_bytes()), *size)
                .next_line(*x, *y)
                .show(Str(&to_winansi_bytes(text)))
                .end_text();
        }
        DrawOp::Line {
            from,
            to,
            thickness,
            color,
        } => {
            let Rgb(r, g, b) = *color;
            content.set_stroke_rgb(r, g, b);
            content.set_line_width(*thickness);
            content.move_to(from.0, from.1);
            content.line_to(to.0, to.1);
            content.stroke();
        }
        DrawOp::Rect {
            x,
            y,
            width,
            height,
            fill,
            border,
        } => {
            content.rect(*x, *y, *width, *height);
            fill_and_stroke(content, *fill, *border);
        }
        DrawOp::Circle {
            cx,
            cy,
            radius,
            fill,
            border,
        } => {
            circle_path(content, *cx, *cy, *radius);
            fill_and_stroke(content, *fill, *border);
        }
        DrawOp::Logo {
            x,
            y,
            width,
            height,
        } => {
            content.transform([*width, 0.0, 0.0, *height, *x, *y]);
            content.x_object(Name(LOGO_NAME));
        }
    }
    content.restore_state();
}

fn serialize(doc: &RenderedDocument) -> Vec<u8> {
    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();
    let info_id = alloc();

    let fonts = register_fonts(&mut pdf, &mut alloc);

    let logo_ref = doc.logo.as_ref().map(|logo| {
        let xobj_ref = alloc();
        logo.write(&mut pdf, xobj_ref, &mut alloc);
        xobj_ref
    });

    let n = doc.pages.len();
    let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

    for (i, page) in doc.pages.iter().enumerate() {
        let mut content = Content::new();
        for op in page.ops() {
            render_op(&mut content, op);
        }
        let raw = content.finish();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(raw.as_slice(), 6);
        pdf.stream(content_ids[i], &compressed).filter(Filter::FlateDecode);
    }

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(n as i32);

    pdf.document_info(info_id)
        .title(TextStr(&doc.title))
        .producer(TextStr(&doc.producer));

    for i in 0..n {
        let mut page = pdf.page(page_ids[i]);
        page.media_box(Rect::new(0.0, 0.0, doc.page_width, doc.page_height))
            .parent(pages_id)
            .contents(content_ids[i]);
        let mut resources = page.resources();
        {
            let mut font_dict = resources.fonts();
            for (font, font_ref) in &fonts {
                font_dict.pair(Name(font.resource_name().as_bytes()), *font_ref);
            }
        }
        if let Some(logo_ref) = logo_ref {
            resources.x_objects().pair(Name(LOGO_NAME), logo_ref);
        }
    }

    pdf.finish()
}

/// Fonts drawn anywhere in the document, for diagnostics.
pub(crate) fn fonts_used(doc: &RenderedDocument) -> Vec<StandardFont> {
    let mut used: Vec<StandardFont> = Vec::new();
    for op in doc.pages.iter().flat_map(|p| p.ops()) {
        if let DrawOp::Text { font, .. } = op
            && !used.contains(font)
        {
            used.push(*font);
        }
    }
    used
}
