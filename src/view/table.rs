//! Pin table view model
//!
//! The table is rebuilt from scratch after every store change. Each row
//! carries everything a toolkit needs to render it, including whether its
//! controls are currently usable.

use crate::model::{Mode, PinStore};

/// One table row
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Position of the pin in the store
    pub index: usize,
    /// Editable label text
    pub label: String,
    /// Horizontal canvas position
    pub x: f32,
    /// Vertical canvas position
    pub y: f32,
    /// Whether "up" would move the pin
    pub can_move_up: bool,
    /// Whether "down" would move the pin
    pub can_move_down: bool,
    /// Whether label, reorder and delete controls accept input
    pub editable: bool,
}

/// Full snapshot of the pin table
#[derive(Debug, Clone, Default)]
pub struct TableView {
    rows: Vec<TableRow>,
    generation: u64,
}

impl TableView {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild every row from the store
    pub fn rebuild(&mut self, store: &PinStore, mode: Mode) {
        let last = store.last_index();
        let editable = mode.allows_edits();

        self.rows = store
            .pins()
            .iter()
            .enumerate()
            .map(|(index, pin)| TableRow {
                index,
                label: pin.label.clone(),
                x: pin.x(),
                y: pin.y(),
                can_move_up: index > 0,
                can_move_down: Some(index) != last,
                editable,
            })
            .collect();
        self.generation += 1;
    }

    /// Current rows in store order
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Number of rebuilds so far
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
