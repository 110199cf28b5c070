use crate::style::{FlowMetrics, Labels, PageGeometry, StyleTable};

use super::canvas::PageSet;

pub(crate) fn footer_text(page_num: usize, total_pages: usize) -> String {
    format!("Page {page_num} of {total_pages}")
}

/// Stamp the running footer on every page once the page count is final:
/// a rule, "Page i of N" on the left and the confidentiality marking flush
/// with the right margin.
pub(crate) fn decorate_pages(
    pages: &mut PageSet,
    geometry: &PageGeometry,
    metrics: &FlowMetrics,
    styles: &StyleTable,
    labels: &Labels,
) {
    let total = pages.len();
    let marking_x = geometry.right_edge() - styles.confidential.width_of(&labels.confidential);

    for (i, page) in pages.iter_mut().enumerate() {
        page.draw_line(
            (geometry.margin_left, metrics.footer_rule_y),
            (geometry.right_edge(), metrics.footer_rule_y),
            metrics.divider_thickness,
            styles.palette.divider,
        );
        page.draw_text(
            &footer_text(i + 1, total),
            geometry.margin_left,
            metrics.footer_text_y,
            &styles.page_footer,
        );
        page.draw_text(&labels.confidential, marking_x, metrics.footer_text_y, &styles.confidential);
    }
}
