//! Pipeline – ties together paper settings, page rendering, and the base
//! document template into a single function call.

use log::debug;
use serde::Serialize;

use crate::assets;
use crate::engine;
use crate::error::Result;
use crate::paper;
use crate::render::render_page;
use crate::report::Report;

/// The fixed assign set the base document template is evaluated against.
#[derive(Serialize)]
struct DocumentAssigns<'a> {
    title: &'a str,
    paper_settings: &'a str,
    normalize_css: &'static str,
    paper_css: &'static str,
    pages: &'a str,
    report_template: &'a str,
}

/// Full pipeline: [`Report`] → standalone HTML document string.
///
/// Performs no validation of its own; the only failures are those
/// propagated from page rendering or from the substitution engine, and no
/// partial document is returned on failure.
pub fn generate_html(report: &Report) -> Result<String> {
    // 1. Paper settings class token
    let paper_settings = paper::paper_settings(report.paper_size(), report.rotation());

    // 2. Render pages in the order they were added and concatenate the
    //    fragments with no separator.
    let mut pages = String::new();
    for page in report.pages() {
        pages.push_str(&render_page(page, report.padding_mm())?);
    }

    debug!(
        "assembling document: {} page(s), paper '{}', padding {}mm",
        report.pages().len(),
        paper_settings,
        report.padding_mm()
    );

    // 3. Fold everything into the base document template. The report-level
    //    template is inserted verbatim; it is never evaluated against a
    //    field mapping of its own.
    engine::eval(
        assets::DOCUMENT_TEMPLATE,
        &DocumentAssigns {
            title: report.title(),
            paper_settings: &paper_settings,
            normalize_css: assets::NORMALIZE_CSS,
            paper_css: assets::PAPER_CSS,
            pages: &pages,
            report_template: report.template(),
        },
    )
}
