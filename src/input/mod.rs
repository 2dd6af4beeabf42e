//! Pointer input handling

pub mod pointer;

pub use pointer::{OffsetChain, PointerEvent};
