//! Shared helper utilities for factory methods.
//!
//! Provides unique naming for generated rows and shortcuts for inserting the
//! `site_group` and `group_group` association rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Links a site to a group by inserting a `site_group` row.
///
/// # Arguments
/// - `db` - Database connection
/// - `site_id` - ID of an existing site
/// - `group_id` - ID of an existing group
///
/// # Returns
/// - `Ok(entity::site_group::Model)` - Created association row
/// - `Err(DbErr)` - Database error during insert
pub async fn link_site_group(
    db: &DatabaseConnection,
    site_id: i32,
    group_id: i32,
) -> Result<entity::site_group::Model, DbErr> {
    entity::site_group::ActiveModel {
        site_id: ActiveValue::Set(site_id),
        group_id: ActiveValue::Set(group_id),
    }
    .insert(db)
    .await
}

/// Makes `child_group_id` a child of `parent_group_id` by inserting a `group_group` row.
///
/// # Arguments
/// - `db` - Database connection
/// - `parent_group_id` - ID of the parent group
/// - `child_group_id` - ID of the child group
///
/// # Returns
/// - `Ok(entity::group_group::Model)` - Created edge row
/// - `Err(DbErr)` - Database error during insert
pub async fn link_child_group(
    db: &DatabaseConnection,
    parent_group_id: i32,
    child_group_id: i32,
) -> Result<entity::group_group::Model, DbErr> {
    entity::group_group::ActiveModel {
        parent_group_id: ActiveValue::Set(parent_group_id),
        child_group_id: ActiveValue::Set(child_group_id),
    }
    .insert(db)
    .await
}
