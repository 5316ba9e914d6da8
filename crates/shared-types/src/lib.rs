pub mod error;
pub mod feature_flags;
pub mod config;

// Role-gated navigation
pub mod role;
pub mod page;
pub mod navigation;
pub mod session;
pub mod task;

// Immigration domain fixtures
pub mod application;
pub mod appointment;
pub mod dashboard;
pub mod document;
pub mod officer;
pub mod passport;
pub mod settings;

pub use error::*;
pub use feature_flags::*;
pub use config::*;

pub use role::*;
pub use page::*;
pub use navigation::*;
pub use session::*;
pub use task::*;

// Fixture modules are not glob re-exported: several of them share helper
// names (`fixtures`, `page_subtitle`). Use `shared_types::document::*` etc.
