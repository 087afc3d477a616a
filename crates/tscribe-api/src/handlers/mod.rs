//! Request handlers.

pub mod analyze;
pub mod extract;
pub mod extractors;
pub mod health;
pub mod models;
pub mod ui;

pub use analyze::analyze_transcript;
pub use extract::extract_transcript;
pub use extractors::list_extractors;
pub use health::health;
pub use models::list_models;
pub use ui::index;
