//! Table Model
//!
//! Front-end agnostic description of a rendered collection: static columns plus
//! one row of styled cells per item. The web UI maps it to Bootstrap markup; the
//! CLI prints it as padded text.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::collection::Collection;

/// Colour role of badges and accents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Column header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    /// Share of the table width, in percent
    pub width: u8,
    pub align: Align,
}

impl Column {
    pub const fn left(title: &'static str, width: u8) -> Self {
        Self { title, width, align: Align::Left }
    }

    pub const fn center(title: &'static str, width: u8) -> Self {
        Self { title, width, align: Align::Center }
    }
}

/// How a cell's text is decorated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Plain,
    Strong,
    Muted,
    /// Emphasised number in the success colour
    Score,
    Badge(Tone),
    /// Larger badge used for leaderboard ranks
    Rank(Tone),
    /// Text is an address, rendered as a `mailto:` link
    Mailto,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub style: CellStyle,
}

impl Cell {
    pub fn new(text: impl Into<String>, style: CellStyle) -> Self {
        Self { text: text.into(), style }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Stable key for keyed rendering
    pub key: String,
    /// Rendered with the light row background
    pub highlighted: bool,
    pub cells: Vec<Cell>,
}

/// A collection projected for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub collection: Collection,
    pub columns: &'static [Column],
    pub rows: Vec<Row>,
}

/// An entity that knows how to project itself into table cells.
///
/// Items are deserialized leniently: anything that does not fit the entity shape
/// falls back to `Default`, so every item still produces a row.
pub trait TableRow: DeserializeOwned + Default {
    const COLUMNS: &'static [Column];

    /// Display cells, one per column. `index` is the 0-based list position.
    fn cells(&self, index: usize) -> Vec<Cell>;

    /// Identity used as the row key, if the item has one
    fn id(&self) -> Option<String>;

    fn highlighted(&self, index: usize) -> bool {
        index % 2 == 1
    }
}

impl Table {
    /// Project normalized items through entity `T`, preserving order
    pub fn build<T: TableRow>(collection: Collection, items: &[Value]) -> Self {
        let rows = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                // Arrays would otherwise fill fields by position
                let entity = if item.is_object() {
                    T::deserialize(item).unwrap_or_default()
                } else {
                    T::default()
                };
                Row {
                    key: entity.id().unwrap_or_else(|| index.to_string()),
                    highlighted: entity.highlighted(index),
                    cells: entity.cells(index),
                }
            })
            .collect();

        Self {
            collection,
            columns: T::COLUMNS,
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell texts of one row, in column order
    pub fn row_texts(&self, index: usize) -> Vec<&str> {
        self.rows
            .get(index)
            .map(|row| row.cells.iter().map(|c| c.text.as_str()).collect())
            .unwrap_or_default()
    }
}
