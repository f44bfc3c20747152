pub mod catalog;
pub mod config;
pub mod dedup;
pub mod error;
pub mod slug;
pub mod types;

pub use config::parse_site_toml;
pub use dedup::unique_locations;
pub use error::{Error, Result};
pub use slug::slugify;
pub use types::*;
