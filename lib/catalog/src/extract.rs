//! Extraction of candidate records from the catalog page's HTML table
//!
//! Each table row becomes a [`RawCandidate`]. Extraction only tokenizes
//! cells; it does not validate them. Numeric cells are handed over as
//! trimmed text, and the two toggle columns are mapped from their textual
//! markers to 0/1.

use crate::error::{CatalogError, Result};
use camsim_core::{Field, RawCandidate, RawSettings};
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;
use tracing::debug;

const ROW_SELECTOR: &str = "div.mw-parser-output table.sortable tbody tr";
const CELL_SELECTOR: &str = "td";
const PLAYER_SELECTOR: &str = "b a";

/// How a table cell becomes a raw field value
#[derive(Debug, Clone, Copy)]
enum Cell {
    /// Text to be parsed as a number by the schema
    Number,
    /// 0 when the text equals the marker, 1 otherwise
    Toggle { off: &'static str },
}

/// Column index, field and cell kind, in table order
const COLUMNS: [(usize, Field, Cell); 9] = [
    (2, Field::CameraShake, Cell::Toggle { off: "No" }),
    (3, Field::Fov, Cell::Number),
    (4, Field::Height, Cell::Number),
    (5, Field::Angle, Cell::Number),
    (6, Field::Distance, Cell::Number),
    (7, Field::Stiffness, Cell::Number),
    (8, Field::SwivelSpeed, Cell::Number),
    (9, Field::TransitionSpeed, Cell::Number),
    (10, Field::BallCamera, Cell::Toggle { off: "Toggle" }),
];

fn selector(source: &'static str) -> Result<Selector> {
    Selector::parse(source).map_err(|e| CatalogError::Selector {
        selector: source,
        message: e.to_string(),
    })
}

fn cell_text(cell: &ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Extract candidate records from the page HTML, in table order
///
/// Header rows (no `td` cells) and rows without a player link are skipped.
/// A cell missing from a short row leaves its field absent.
pub fn extract_candidates(html: &str) -> Result<Vec<RawCandidate>> {
    let rows = selector(ROW_SELECTOR)?;
    let cells = selector(CELL_SELECTOR)?;
    let player = selector(PLAYER_SELECTOR)?;

    let document = Html::parse_fragment(html);
    let mut candidates = Vec::new();

    for row in document.select(&rows) {
        let row_cells: Vec<ElementRef<'_>> = row.select(&cells).collect();
        if row_cells.is_empty() {
            continue;
        }

        let id = row_cells[0]
            .select(&player)
            .next()
            .map(|link| cell_text(&link))
            .filter(|name| !name.is_empty());
        let Some(id) = id else {
            debug!(cells = row_cells.len(), "skipping row without a player name");
            continue;
        };

        let mut settings = RawSettings::new();
        for (column, field, kind) in COLUMNS {
            let Some(cell) = row_cells.get(column) else {
                continue;
            };
            let text = cell_text(cell);
            let value = match kind {
                Cell::Number => Value::String(text),
                Cell::Toggle { off } => Value::from(if text == off { 0 } else { 1 }),
            };
            settings.insert(field.name().to_string(), value);
        }

        candidates.push(RawCandidate::new(id, settings));
    }

    Ok(candidates)
}
