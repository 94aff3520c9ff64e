//! Quick-action suggestions derived from conversation topics.

pub mod generator;
pub mod model;

pub use generator::generate;
pub use model::{QuickAction, QuickActionKind};
