//! Report and page data model.
//!
//! A [`Report`] accumulates layout settings and an ordered sequence of
//! [`Page`]s; document generation itself lives in [`crate::pipeline`].
//! Pages are stored in the order they were added, which is the order they
//! appear in the final document.

use serde_json::Value;

use crate::error::{ReportError, Result};
use crate::paper::{PaperSize, Rotation, PADDINGS_MM};
use crate::source;

/// One unit of repeating content: a template plus the field values
/// substituted into it at render time. Immutable once added to a report.
#[derive(Debug, Clone)]
pub struct Page {
    template: String,
    fields: Value,
}

impl Page {
    /// Resolved template text.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Field mapping substituted when the page is rendered.
    pub fn fields(&self) -> &Value {
        &self.fields
    }
}

/// The top-level document aggregate: display metadata, a report-level
/// wrapper template, and the pages added so far.
///
/// Mutation goes through the setters so the paper-size, rotation, and
/// padding enumerations cannot be violated; a failed setter leaves the
/// report exactly as it was. Single-owner value: no two operations on the
/// same `Report` run concurrently.
#[derive(Debug, Clone)]
pub struct Report {
    title: String,
    paper_size: PaperSize,
    rotation: Rotation,
    padding_mm: u32,
    template: String,
    pages: Vec<Page>,
}

impl Default for Report {
    fn default() -> Self {
        Self {
            title: "Report".to_owned(),
            paper_size: PaperSize::default(),
            rotation: Rotation::default(),
            padding_mm: 10,
            template: String::new(),
            pages: Vec::new(),
        }
    }
}

impl Report {
    /// Create a report with default settings and no wrapper template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a report whose wrapper template is `template`: either inline
    /// template text or a path to a template file.
    pub fn with_template(template: &str) -> Result<Self> {
        Ok(Self {
            template: source::resolve(template)?,
            ..Self::default()
        })
    }

    /// Display title, substituted into the document head.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sheet size.
    pub fn paper_size(&self) -> PaperSize {
        self.paper_size
    }

    /// Sheet rotation.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Per-page padding in millimetres.
    pub fn padding_mm(&self) -> u32 {
        self.padding_mm
    }

    /// Report-level wrapper template, inserted verbatim into the document.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Pages in the order they were added.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Replace the display title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replace the sheet size.
    pub fn set_paper_size(&mut self, size: PaperSize) {
        self.paper_size = size;
    }

    /// Replace the sheet rotation.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// Replace the per-page padding. Only the paddings the paper stylesheet
    /// ships classes for are accepted; anything else fails with
    /// [`ReportError::InvalidArgument`] and the prior value stays in place.
    pub fn set_padding(&mut self, padding_mm: u32) -> Result<()> {
        if !PADDINGS_MM.contains(&padding_mm) {
            return Err(ReportError::InvalidArgument("Invalid padding"));
        }
        self.padding_mm = padding_mm;
        Ok(())
    }

    /// Append a page. `template` is resolved like the report template
    /// (inline text or file path); `fields` is the mapping of placeholder
    /// names to values, substituted when the page is rendered rather than
    /// now. Unmatched placeholders surface as a template error at
    /// generation time.
    pub fn add_page(&mut self, template: &str, fields: Value) -> Result<()> {
        let page = Page {
            template: source::resolve(template)?,
            fields,
        };
        self.pages.push(page);
        Ok(())
    }
}
