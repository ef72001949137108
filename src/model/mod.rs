//! Transport DTOs shared by the HTTP layer and its tests.

pub mod api;
pub mod group;
pub mod site;
