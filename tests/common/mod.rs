#![allow(dead_code)]

use chrono::NaiveDate;
use strategy_pdf::{DrawOp, Page, RenderedDocument, Renderer, Section, StandardFont};

pub fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

pub fn renderer() -> Renderer {
    Renderer::new().with_date(fixed_date())
}

pub fn layout(title: &str, sections: &[Section]) -> RenderedDocument {
    renderer()
        .layout(title, sections, None)
        .expect("layout succeeds")
}

/// `count` copies of a six-letter word separated by spaces.
pub fn words(count: usize) -> String {
    vec!["lorems"; count].join(" ")
}

/// Text ops on a page drawn with `font` at `size`, as (text, x, y).
pub fn texts_in_style(page: &Page, font: StandardFont, size: f32) -> Vec<(String, f32, f32)> {
    page.ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text {
                text,
                x,
                y,
                font: f,
                size: s,
                ..
            } if *f == font && (*s - size).abs() < 1e-3 => Some((text.clone(), *x, *y)),
            _ => None,
        })
        .collect()
}

pub fn body_lines(page: &Page) -> Vec<(String, f32, f32)> {
    texts_in_style(page, StandardFont::Helvetica, 11.0)
}

pub fn section_titles(page: &Page) -> Vec<(String, f32, f32)> {
    texts_in_style(page, StandardFont::HelveticaBold, 16.0)
}

pub fn count_text(doc: &RenderedDocument, needle: &str) -> usize {
    doc.pages()
        .iter()
        .flat_map(|p| p.texts())
        .filter(|t| *t == needle)
        .count()
}

/// Draw a small opaque PNG in memory.
pub fn png_logo(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([0, 113, 227]));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}

pub fn jpeg_logo(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([0, 113, 227]));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Jpeg)
        .expect("encode jpeg");
    out.into_inner()
}

pub fn gray_jpeg_logo(width: u32, height: u32) -> Vec<u8> {
    let img = image::GrayImage::from_pixel(width, height, image::Luma([90]));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Jpeg)
        .expect("encode jpeg");
    out.into_inner()
}

pub fn load_pdf(bytes: &[u8]) -> lopdf::Document {
    lopdf::Document::load_mem(bytes).expect("generated PDF parses")
}
