//! Pin data model
//!
//! `Pin` values live in an ordered `PinStore`; `Mode` tracks whether the
//! application is idle, recording or playing.

pub mod mode;
pub mod pin;
pub mod store;

pub use mode::Mode;
pub use pin::{Pin, Point};
pub use store::PinStore;
