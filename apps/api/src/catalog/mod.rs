// Role Catalog: the fixed table of job roles a resume is scored against.
// Built once at start-up, validated, then shared read-only behind an Arc.

pub mod builtin;
pub mod profile;

pub use builtin::builtin_catalog;
pub use profile::{CatalogError, RoleCatalog, RoleProfile};
