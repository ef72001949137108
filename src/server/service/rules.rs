//! Business rules guarding site and group mutations.
//!
//! Every rule is a pure check over values the caller has already loaded, and every
//! violation is an `AppError::BadRequest`. Services evaluate the rules before writing
//! anything, so a rejected request leaves the store untouched.

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

use crate::{
    model::{group::GroupType, site::Country},
    server::{error::AppError, model::site::SiteGroup},
};

pub fn french_date_taken_message(date: NaiveDate) -> String {
    format!("A French site already exists for date {}", date.format("%Y-%m-%d"))
}

/// At most one French site per installation date.
///
/// `conflict_exists` is whether another French site is already stored on `date`.
pub fn ensure_unique_french_date(
    country: Country,
    date: NaiveDate,
    conflict_exists: bool,
) -> Result<(), AppError> {
    if country == Country::FR && conflict_exists {
        return Err(AppError::BadRequest(french_date_taken_message(date)));
    }

    Ok(())
}

/// Italian sites are installed on Saturday or Sunday only.
pub fn ensure_italian_weekend(country: Country, date: NaiveDate) -> Result<(), AppError> {
    if country == Country::IT && !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        return Err(AppError::BadRequest(
            "Italian sites must be installed on weekends.".to_string(),
        ));
    }

    Ok(())
}

/// Every requested group exists and none is a `group3`.
///
/// IDs are checked in request order, so the first offending ID decides the message.
pub fn ensure_linkable_groups(requested: &[i32], loaded: &[SiteGroup]) -> Result<(), AppError> {
    for id in requested {
        let Some(group) = loaded.iter().find(|g| g.id == *id) else {
            return Err(AppError::BadRequest(format!("Group {} not found.", id)));
        };

        if group.group_type == GroupType::Group3 {
            return Err(AppError::BadRequest(
                "Cannot link site to group3.".to_string(),
            ));
        }
    }

    Ok(())
}

/// A group already linked to sites cannot become a `group3`.
pub fn ensure_retype_allowed(new_type: GroupType, has_sites: bool) -> Result<(), AppError> {
    if new_type == GroupType::Group3 && has_sites {
        return Err(AppError::BadRequest(
            "Cannot change type to group3 while sites are linked.".to_string(),
        ));
    }

    Ok(())
}

/// Every requested child ID was found.
pub fn ensure_all_children_found(requested: usize, found: u64) -> Result<(), AppError> {
    if requested as u64 != found {
        return Err(AppError::BadRequest(
            "Some child groups not found.".to_string(),
        ));
    }

    Ok(())
}

/// No requested child is the parent itself or one of its ancestors.
pub fn ensure_no_cycle(
    parent_id: i32,
    child_ids: &[i32],
    ancestors: &HashSet<i32>,
) -> Result<(), AppError> {
    if let Some(id) = child_ids
        .iter()
        .find(|id| **id == parent_id || ancestors.contains(id))
    {
        return Err(AppError::BadRequest(format!(
            "Adding child group {} would create a cycle.",
            id
        )));
    }

    Ok(())
}
