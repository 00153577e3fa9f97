//! Application layer for pollstream
//!
//! This crate contains the draft controller, use cases, the draft repository
//! and port definitions. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod repository;
pub mod use_cases;

// Re-export commonly used types
pub use config::BuilderConfig;
pub use ports::{
    renderer::{DraftRenderer, NoRender, Notice},
    storage::{DraftStorage, StorageError},
};
pub use repository::DraftRepository;
pub use use_cases::bootstrap_template::{BootstrapOutcome, BootstrapTemplateUseCase};
pub use use_cases::draft_controller::DraftController;
pub use use_cases::load_draft::{DraftOrigin, LoadDraftOutput, LoadDraftUseCase};
