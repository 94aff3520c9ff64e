//! Session domain: identity, transcript messages, widget mode, and the
//! persistence trait the orchestrator is given.

pub mod message;
pub mod model;
pub mod name_extract;
pub mod repository;
pub mod widget_mode;

pub use message::{ChatMessage, MessageLink, MessageSender};
pub use model::SessionIdentity;
pub use name_extract::extract_name;
pub use repository::IdentityRepository;
pub use widget_mode::WidgetMode;
