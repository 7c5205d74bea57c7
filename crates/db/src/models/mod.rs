//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches
//!
//! JSON field names are camelCase.

pub mod activity;
pub mod batch;
pub mod booking;
pub mod facility_issue;
pub mod lecturer;
pub mod module_overview;
pub mod room;
pub mod setting;
pub mod subject;
