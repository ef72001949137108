//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Text columns holding enum values
//! are parsed into their typed counterparts here, so the service layer never sees
//! raw stored strings.

pub mod group;
pub mod site;

use sea_orm::DbErr;
use std::str::FromStr;

use crate::model::api::UnknownVariant;

/// Parses a stored text column into its typed enum.
///
/// A value outside the known set means the row was written outside this
/// application and is reported as a database error.
pub(crate) fn parse_stored<T>(value: &str) -> Result<T, DbErr>
where
    T: FromStr<Err = UnknownVariant>,
{
    value
        .parse::<T>()
        .map_err(|e| DbErr::Custom(format!("Failed to parse stored value: {}", e)))
}
