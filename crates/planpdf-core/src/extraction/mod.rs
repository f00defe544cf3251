pub mod layout;
pub mod pdftotext;

use crate::error::PlanImportError;
use crate::model::PageTables;

#[derive(Debug, Clone, PartialEq)]
pub struct BBox {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl BBox {
    pub fn center_x(&self) -> f32 {
        (self.x_min + self.x_max) / 2.0
    }

    pub fn center_y(&self) -> f32 {
        (self.y_min + self.y_max) / 2.0
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }
}

/// A single word as positioned on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub text: String,
    pub bbox: BBox,
}

/// Positioned words of a single page.
#[derive(Debug, Clone, Default)]
pub struct PageWords {
    pub page_number: usize,
    pub words: Vec<Word>,
}

/// Trait for PDF table decoding backends.
pub trait TableExtractor: Send + Sync {
    /// Decode PDF bytes into the tables found on each page.
    fn extract_tables(&self, pdf_bytes: &[u8]) -> Result<Vec<PageTables>, PlanImportError>;

    /// Name of this decoding backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
