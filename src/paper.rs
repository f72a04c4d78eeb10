//! Paper vocabulary: sheet sizes, rotation, the padding whitelist, and the
//! paper-settings class token consumed by the print stylesheet.

use std::fmt;
use std::str::FromStr;

use crate::error::ReportError;

/// Supported sheet sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaperSize {
    /// 210 × 297 mm (default).
    #[default]
    A4,
    /// 297 × 420 mm.
    A3,
    /// 148 × 210 mm.
    A5,
    /// 5.5 × 8.5 in.
    HalfLetter,
    /// 8.5 × 11 in.
    Letter,
    /// 8.5 × 14 in.
    Legal,
    /// 5 × 8 in.
    JuniorLegal,
    /// 11 × 17 in.
    Ledger,
}

impl PaperSize {
    /// Class token understood by the paper stylesheet.
    pub fn css_class(self) -> &'static str {
        match self {
            PaperSize::A4 => "A4",
            PaperSize::A3 => "A3",
            PaperSize::A5 => "A5",
            PaperSize::HalfLetter => "half_letter",
            PaperSize::Letter => "letter",
            PaperSize::Legal => "legal",
            PaperSize::JuniorLegal => "junior_legal",
            PaperSize::Ledger => "ledger",
        }
    }

    /// All supported sizes, in stylesheet order.
    pub const ALL: [PaperSize; 8] = [
        PaperSize::A4,
        PaperSize::A3,
        PaperSize::A5,
        PaperSize::HalfLetter,
        PaperSize::Letter,
        PaperSize::Legal,
        PaperSize::JuniorLegal,
        PaperSize::Ledger,
    ];
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

impl FromStr for PaperSize {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaperSize::ALL
            .into_iter()
            .find(|size| size.css_class() == s)
            .ok_or(ReportError::InvalidArgument("Invalid paper size"))
    }
}

/// Sheet rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    /// Portrait: height > width (default).
    #[default]
    Portrait,
    /// Landscape: width > height.
    Landscape,
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rotation::Portrait => "portrait",
            Rotation::Landscape => "landscape",
        })
    }
}

impl FromStr for Rotation {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "portrait" => Ok(Rotation::Portrait),
            "landscape" => Ok(Rotation::Landscape),
            _ => Err(ReportError::InvalidArgument("Invalid rotation")),
        }
    }
}

/// Paddings (mm) the paper stylesheet ships classes for.
pub const PADDINGS_MM: [u32; 4] = [10, 15, 20, 25];

/// Build the `<body>` class token encoding size and rotation.
///
/// Portrait is the stylesheet's implicit default and gets no suffix;
/// landscape appends the literal `landscape` token after a space.
pub fn paper_settings(size: PaperSize, rotation: Rotation) -> String {
    match rotation {
        Rotation::Portrait => size.css_class().to_owned(),
        Rotation::Landscape => format!("{} landscape", size.css_class()),
    }
}
