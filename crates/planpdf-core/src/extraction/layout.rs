use crate::error::PlanImportError;
use crate::extraction::{BBox, PageWords, Word};
use crate::model::{RawTable, Weekday};

/// Rebuild week x weekday tables from positioned words.
///
/// A table starts at a line naming at least two weekdays. Columns are laid
/// out from the header cells, and each following line is bucketed into those
/// columns by horizontal position. Lines carrying text in the first column
/// anchor the rows, and every other line joins the row of its week token, so
/// multi-line cells come back joined with newlines. See [`TableBuilder::finish`]
/// for how lines are matched to tokens.
pub fn tables_from_words(page: &PageWords) -> Result<Vec<RawTable>, PlanImportError> {
    validate_words(page)?;

    let mut tables = Vec::new();
    let mut current: Option<TableBuilder> = None;

    for line in group_lines(&page.words) {
        if is_header_line(&line) {
            if let Some(done) = current.take() {
                tables.push(done.finish());
            }
            current = Some(TableBuilder::from_header(&line));
            continue;
        }

        let Some(builder) = current.as_mut() else {
            continue;
        };

        // A wide vertical gap means the table is over (footer, notes, ...).
        if line.bbox.y_min - builder.last_bottom > TABLE_END_GAP_LINES * line.height() {
            if let Some(done) = current.take() {
                tables.push(done.finish());
            }
            continue;
        }

        builder.push_line(&line);
    }

    if let Some(done) = current.take() {
        tables.push(done.finish());
    }

    tracing::debug!(
        page = page.page_number,
        tables = tables.len(),
        "reconstructed tables from word layout"
    );
    Ok(tables)
}

const MIN_HEADER_DAYS: usize = 2;
const TABLE_END_GAP_LINES: f32 = 3.0;

/// Words sharing a baseline, left to right.
#[derive(Debug)]
struct VisualLine<'a> {
    words: Vec<&'a Word>,
    bbox: BBox,
}

impl VisualLine<'_> {
    fn height(&self) -> f32 {
        self.bbox.height().max(1.0)
    }
}

fn validate_words(page: &PageWords) -> Result<(), PlanImportError> {
    for word in &page.words {
        let b = &word.bbox;
        let finite = [b.x_min, b.y_min, b.x_max, b.y_max]
            .iter()
            .all(|v| v.is_finite());
        if !finite || b.x_max < b.x_min || b.y_max < b.y_min {
            return Err(PlanImportError::Layout {
                page: page.page_number,
                reason: format!("invalid bounding box for word '{}'", word.text),
            });
        }
    }
    Ok(())
}

fn group_lines(words: &[Word]) -> Vec<VisualLine<'_>> {
    let mut sorted: Vec<&Word> = words.iter().collect();
    sorted.sort_by(|a, b| {
        a.bbox
            .y_min
            .total_cmp(&b.bbox.y_min)
            .then(a.bbox.x_min.total_cmp(&b.bbox.x_min))
    });

    let mut lines: Vec<VisualLine> = Vec::new();
    for word in sorted {
        let cy = word.bbox.center_y();
        match lines.last_mut() {
            Some(line) if cy >= line.bbox.y_min && cy <= line.bbox.y_max => {
                line.bbox.x_min = line.bbox.x_min.min(word.bbox.x_min);
                line.bbox.x_max = line.bbox.x_max.max(word.bbox.x_max);
                line.bbox.y_max = line.bbox.y_max.max(word.bbox.y_max);
                line.words.push(word);
            }
            _ => lines.push(VisualLine {
                words: vec![word],
                bbox: word.bbox.clone(),
            }),
        }
    }

    for line in &mut lines {
        line.words
            .sort_by(|a, b| a.bbox.x_min.total_cmp(&b.bbox.x_min));
    }
    lines
}

fn is_header_line(line: &VisualLine) -> bool {
    line.words
        .iter()
        .filter(|w| Weekday::from_header(&w.text).is_some())
        .count()
        >= MIN_HEADER_DAYS
}

#[derive(Debug)]
struct HeaderCell {
    text: String,
    x_min: f32,
    x_max: f32,
}

/// Merge header words closer than one line height into a single cell
/// ("Week of"), never merging across a weekday name.
fn header_cells(line: &VisualLine) -> Vec<HeaderCell> {
    let mut cells: Vec<HeaderCell> = Vec::new();
    let gap_limit = line.height();

    for word in &line.words {
        let is_day = Weekday::from_header(&word.text).is_some();
        match cells.last_mut() {
            Some(cell)
                if !is_day
                    && Weekday::from_header(&cell.text).is_none()
                    && word.bbox.x_min - cell.x_max < gap_limit =>
            {
                cell.text.push(' ');
                cell.text.push_str(&word.text);
                cell.x_max = word.bbox.x_max;
            }
            _ => cells.push(HeaderCell {
                text: word.text.clone(),
                x_min: word.bbox.x_min,
                x_max: word.bbox.x_max,
            }),
        }
    }
    cells
}

/// One table line with its words bucketed into columns.
#[derive(Debug)]
struct BucketedLine {
    center_y: f32,
    cells: Vec<Option<String>>,
}

impl BucketedLine {
    fn has_week_token(&self) -> bool {
        self.cells.first().is_some_and(|c| c.is_some())
    }
}

#[derive(Debug)]
struct TableBuilder {
    header: Vec<Option<String>>,
    /// Right edge of every column but the last, ascending.
    bounds: Vec<f32>,
    lines: Vec<BucketedLine>,
    last_bottom: f32,
}

impl TableBuilder {
    fn from_header(line: &VisualLine) -> Self {
        let cells = header_cells(line);
        let mut header = Vec::with_capacity(cells.len() + 1);
        let mut bounds = Vec::with_capacity(cells.len());

        // Week tokens need a column of their own even when it has no label.
        if let Some(first) = cells.first() {
            if Weekday::from_header(&first.text).is_some() {
                header.push(None);
                bounds.push(first.x_min);
            }
        }

        for (i, cell) in cells.iter().enumerate() {
            header.push(Some(cell.text.clone()));
            if let Some(next) = cells.get(i + 1) {
                bounds.push((cell.x_max + next.x_min) / 2.0);
            }
        }

        TableBuilder {
            header,
            bounds,
            lines: Vec::new(),
            last_bottom: line.bbox.y_max,
        }
    }

    fn column_of(&self, word: &Word) -> usize {
        let cx = word.bbox.center_x();
        self.bounds.iter().take_while(|b| cx >= **b).count()
    }

    fn push_line(&mut self, line: &VisualLine) {
        let mut columns: Vec<Vec<&str>> = vec![Vec::new(); self.header.len()];
        for word in &line.words {
            let idx = self.column_of(word);
            columns[idx].push(&word.text);
        }
        self.last_bottom = line.bbox.y_max;

        let cells = columns
            .iter()
            .map(|ws| (!ws.is_empty()).then(|| ws.join(" ")))
            .collect();
        self.lines.push(BucketedLine {
            center_y: line.bbox.center_y(),
            cells,
        });
    }

    /// Group the collected lines into one row per week token.
    ///
    /// When the first token sits on the first line, tokens are top-aligned
    /// and a row runs from its token down to the next one. Otherwise tokens
    /// are centered in their rows and each line goes to the nearest token,
    /// split at the midpoint between consecutive tokens (ties go up). Lines
    /// in a table without any token are dropped.
    fn finish(self) -> RawTable {
        let anchors: Vec<usize> = self
            .lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.has_week_token())
            .map(|(i, _)| i)
            .collect();
        let centered = anchors.first().is_some_and(|&first| first > 0);
        let midpoints: Vec<f32> = anchors
            .windows(2)
            .map(|w| (self.lines[w[0]].center_y + self.lines[w[1]].center_y) / 2.0)
            .collect();

        let mut rows: Vec<Vec<Option<String>>> =
            vec![vec![None; self.header.len()]; anchors.len()];
        for (i, line) in self.lines.into_iter().enumerate() {
            let row_idx = if centered {
                midpoints.iter().take_while(|m| line.center_y > **m).count()
            } else {
                anchors.iter().take_while(|a| **a <= i).count().saturating_sub(1)
            };
            let Some(row) = rows.get_mut(row_idx) else {
                continue;
            };
            for (cell, text) in row.iter_mut().zip(line.cells) {
                if let Some(text) = text {
                    *cell = Some(match cell.take() {
                        Some(existing) => format!("{existing}\n{text}"),
                        None => text,
                    });
                }
            }
        }

        let mut table = Vec::with_capacity(rows.len() + 1);
        table.push(self.header);
        table.extend(rows);
        table
    }
}
