pub mod core;
pub mod error;
pub mod logger;
pub mod server;
pub mod types;

pub use crate::core::data::{get_project, get_projects, validate};
pub use error::{CatalogError, FolioError, Result};
pub use types::Project;
