//! Page renderer – takes a [`Page`] and produces one HTML sheet fragment.

use crate::engine;
use crate::error::Result;
use crate::report::Page;

/// Render `page` into an HTML fragment.
///
/// The page template is wrapped in a `<section>` carrying the fixed `sheet`
/// class and the padding class for `padding_mm`, then the combined text is
/// evaluated against the page's fields. The wrapper introduces no
/// placeholders of its own, so substituting after wrapping is equivalent to
/// substituting the inner template alone.
///
/// Unmatched placeholders are an engine failure and propagate unrecovered.
pub fn render_page(page: &Page, padding_mm: u32) -> Result<String> {
    let wrapped = format!(
        "<section class=\"sheet padding-{}mm\">\n{}\n</section>\n",
        padding_mm,
        page.template()
    );
    engine::eval(&wrapped, page.fields())
}
