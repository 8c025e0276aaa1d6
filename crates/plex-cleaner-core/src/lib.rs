pub mod audit;
pub mod catalog;
pub mod config;
pub mod confirm;
pub mod engine;
pub mod error;
pub mod media;
pub mod plex;
pub mod score;

pub use audit::AuditLog;
pub use catalog::{DeletionTransport, MediaCatalog, MediaKind};
pub use config::{AppConfig, ScoringConfig};
pub use engine::{CleanEngine, CleanResult};
pub use error::Error;
