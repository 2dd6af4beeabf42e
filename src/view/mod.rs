//! Toolkit-independent view models for the pin table and the label prompt

pub mod modal;
pub mod table;

pub use modal::{LabelModal, ModalKey};
pub use table::{TableRow, TableView};
