mod error;
pub mod export;
mod fonts;
pub mod input;
mod model;
mod pdf;
mod sanitize;
pub mod style;

pub use error::Error;
pub use fonts::StandardFont;
pub use model::{Rgb, Section};
pub use pdf::{Cursor, DrawOp, Logo, Page, PageHandle, RenderedDocument, wrap_text};
pub use sanitize::sanitize;

use std::path::Path;
use std::time::Instant;

use chrono::NaiveDate;

use style::{FlowMetrics, Labels, PageGeometry, StyleTable};

/// Render `sections` under `title` into a PDF, stamped with today's date.
pub fn generate_document(title: &str, sections: &[Section], logo: Option<&[u8]>) -> Result<Vec<u8>, Error> {
    Renderer::new().render(title, sections, logo)
}

/// Like [`generate_document`] but writes the PDF to `output`.
pub fn generate_document_to_file(
    title: &str,
    sections: &[Section],
    logo: Option<&[u8]>,
    output: &Path,
) -> Result<(), Error> {
    let bytes = generate_document(title, sections, logo)?;
    std::fs::write(output, &bytes).map_err(|e| {
        Error::Io(std::io::Error::new(e.kind(), format!("{}: {}", e, output.display())))
    })?;
    Ok(())
}

/// Report renderer with its layout configuration. Holds no per-render state,
/// so one instance can render any number of documents.
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    geometry: PageGeometry,
    metrics: FlowMetrics,
    styles: StyleTable,
    labels: Labels,
    date: Option<NaiveDate>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the cover-page date instead of reading the clock.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    fn date_string(&self) -> String {
        let date = self
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        date.format("%B %-d, %Y").to_string()
    }

    /// Lay out and decorate every page without encoding.
    pub fn layout(&self, title: &str, sections: &[Section], logo: Option<&[u8]>) -> Result<RenderedDocument, Error> {
        let config = pdf::LayoutConfig {
            geometry: &self.geometry,
            metrics: &self.metrics,
            styles: &self.styles,
            labels: &self.labels,
        };
        pdf::layout(&config, title, sections, logo, &self.date_string())
    }

    pub fn render(&self, title: &str, sections: &[Section], logo: Option<&[u8]>) -> Result<Vec<u8>, Error> {
        let t0 = Instant::now();

        let doc = self.layout(title, sections, logo)?;
        let t_layout = t0.elapsed();

        let bytes = doc.to_pdf();
        let t_total = t0.elapsed();

        log::info!(
            "Timing: layout={:.1}ms, serialize={:.1}ms, total={:.1}ms ({} sections, {} pages, fonts {:?}, output {} bytes)",
            t_layout.as_secs_f64() * 1000.0,
            (t_total - t_layout).as_secs_f64() * 1000.0,
            t_total.as_secs_f64() * 1000.0,
            sections.len(),
            doc.page_count(),
            pdf::fonts_used(&doc),
            bytes.len(),
        );

        Ok(bytes)
    }
}
