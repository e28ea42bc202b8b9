//! Role and resource catalogs
//! Loaded once at startup from CSV files and read-only afterwards.

pub mod resources;
pub mod roles;

pub use resources::{Resource, ResourceCatalog};
pub use roles::{Role, RoleCatalog};
