use crate::error::PlanImportError;
use crate::extraction::layout::tables_from_words;
use crate::extraction::{BBox, PageWords, TableExtractor, Word};
use crate::model::PageTables;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

/// Table decoding backend using pdftotext (from poppler-utils).
///
/// Runs `pdftotext -bbox-layout` to get every word with its bounding box,
/// then rebuilds week x weekday tables from word positions.
pub struct PdftotextExtractor {
    binary: PathBuf,
}

impl PdftotextExtractor {
    pub fn new() -> Self {
        Self::with_binary("pdftotext")
    }

    /// Use a specific pdftotext executable instead of the one on `PATH`.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        PdftotextExtractor {
            binary: binary.into(),
        }
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available(&self) -> bool {
        Command::new(&self.binary)
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }

    fn run_bbox_layout(&self, pdf_bytes: &[u8]) -> Result<String, PlanImportError> {
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| PlanImportError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| PlanImportError::Extraction(e.to_string()))?;

        let output = Command::new(&self.binary)
            .arg("-bbox-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    PlanImportError::PdftotextNotFound
                } else {
                    PlanImportError::Extraction(format!("pdftotext -bbox-layout failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(PlanImportError::PdftotextFailed { code, stderr });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TableExtractor for PdftotextExtractor {
    fn extract_tables(&self, pdf_bytes: &[u8]) -> Result<Vec<PageTables>, PlanImportError> {
        let xml = self.run_bbox_layout(pdf_bytes)?;
        let pages = parse_bbox_xml(&xml)?;
        tracing::debug!(pages = pages.len(), "parsed pdftotext bbox output");

        pages
            .iter()
            .map(|page| {
                Ok(PageTables {
                    page_number: page.page_number,
                    tables: tables_from_words(page)?,
                })
            })
            .collect()
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Parse `pdftotext -bbox-layout` XHTML into positioned words per page.
///
/// Pages are numbered in document order starting at 1.
pub fn parse_bbox_xml(xml: &str) -> Result<Vec<PageWords>, PlanImportError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut pages: Vec<PageWords> = Vec::new();
    let mut current_word: Option<(BBox, String)> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"page" => pages.push(PageWords {
                    page_number: pages.len() + 1,
                    words: Vec::new(),
                }),
                b"word" => current_word = Some((parse_bbox(&e)?, String::new())),
                _ => {}
            },
            // A self-closing page has no words but still counts as a page.
            Ok(Event::Empty(e)) if e.local_name().as_ref() == b"page" => {
                pages.push(PageWords {
                    page_number: pages.len() + 1,
                    words: Vec::new(),
                });
            }
            Ok(Event::Text(t)) => {
                if let Some((_, text)) = current_word.as_mut() {
                    let unescaped = t.unescape().map_err(|e| {
                        PlanImportError::Extraction(format!("bad text in bbox output: {e}"))
                    })?;
                    text.push_str(&unescaped);
                }
            }
            Ok(Event::End(e)) if e.local_name().as_ref() == b"word" => {
                if let Some((bbox, text)) = current_word.take() {
                    let text = text.trim();
                    if text.is_empty() {
                        continue;
                    }
                    let page = pages.last_mut().ok_or_else(|| {
                        PlanImportError::Extraction("word outside of a page element".into())
                    })?;
                    page.words.push(Word {
                        text: text.to_string(),
                        bbox,
                    });
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(PlanImportError::Extraction(format!(
                    "malformed bbox output at position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
    }

    Ok(pages)
}

fn parse_bbox(tag: &BytesStart<'_>) -> Result<BBox, PlanImportError> {
    Ok(BBox {
        x_min: parse_attr_f32(tag, "xMin")?,
        y_min: parse_attr_f32(tag, "yMin")?,
        x_max: parse_attr_f32(tag, "xMax")?,
        y_max: parse_attr_f32(tag, "yMax")?,
    })
}

fn parse_attr_f32(tag: &BytesStart<'_>, name: &str) -> Result<f32, PlanImportError> {
    let attr = tag
        .try_get_attribute(name)
        .map_err(|e| PlanImportError::Extraction(format!("bad attribute '{name}': {e}")))?
        .ok_or_else(|| PlanImportError::Extraction(format!("word is missing '{name}'")))?;
    let value = attr
        .unescape_value()
        .map_err(|e| PlanImportError::Extraction(format!("bad attribute '{name}': {e}")))?;
    value.trim().parse::<f32>().map_err(|e| {
        PlanImportError::Extraction(format!("invalid number '{value}' for '{name}': {e}"))
    })
}
