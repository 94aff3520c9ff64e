//! Proactive engagement: the conversion popup trigger.

pub mod model;
pub mod repository;
pub mod scheduler;

pub use model::EngagementState;
pub use repository::EngagementRepository;
pub use scheduler::{ConversionTrigger, HIGH_INTENT_PATHS, TriggerPlan};
