//! SeaORM entity definitions for the site registry schema.
//!
//! Country and group type are stored as text and parsed into typed enums at the
//! repository boundary of the server crate.

pub mod group;
pub mod group_group;
pub mod prelude;
pub mod site;
pub mod site_group;
