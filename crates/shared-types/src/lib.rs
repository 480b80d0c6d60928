pub mod config;
pub mod error;
pub mod requests;
pub mod role;

// Role-scoped navigation
pub mod navigation;

// Portal page data (sample data sets, no persistence)
pub mod analytics;
pub mod dashboard;
pub mod inspection;
pub mod registration;

pub use config::*;
pub use error::*;
pub use requests::*;
pub use role::*;

pub use navigation::{
    active_entry, header_title, is_active, resolve, resolve_tag, IconRef,
    NavigationEntry, DEFAULT_TITLE,
};

pub use analytics::*;
pub use dashboard::*;
pub use inspection::*;
pub use registration::*;
