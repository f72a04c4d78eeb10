//! Static assets embedded at compile time: the two print stylesheets and
//! the base document template. Loaded once, immutable for the process
//! lifetime; the core treats the stylesheet text as opaque blobs.

/// General normalisation rules, applied before the paper rules.
pub const NORMALIZE_CSS: &str = include_str!("../assets/normalize.css");

/// Sheet dimensions, padding classes, and print/screen media rules.
pub const PAPER_CSS: &str = include_str!("../assets/paper.css");

/// Base document template. Expects exactly the assigns `title`,
/// `paper_settings`, `normalize_css`, `paper_css`, `pages`, and
/// `report_template`.
pub const DOCUMENT_TEMPLATE: &str = include_str!("../assets/document.hbs");
