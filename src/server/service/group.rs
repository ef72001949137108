use sea_orm::DatabaseConnection;
use std::collections::HashSet;

use crate::server::{
    data::group::GroupRepository,
    error::AppError,
    model::group::{
        CreateGroupParams, Group, GroupListParams, GroupSortField, UpdateGroupParams,
    },
    service::rules,
};

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists groups with optional type filter and column ordering
    pub async fn list(&self, params: GroupListParams) -> Result<Vec<Group>, AppError> {
        tracing::info!(
            "Fetching groups with filters - type: {:?}, sort_by: {:?}, order: {:?}",
            params.group_type,
            params.sort_by,
            params.order
        );

        let sort = match params.sort_by.as_deref().filter(|name| !name.is_empty()) {
            Some(name) => {
                let field = GroupSortField::parse(name)
                    .ok_or_else(|| AppError::BadRequest(format!("Invalid sort field: {}", name)))?;
                Some((field, params.order))
            }
            None => None,
        };

        let repo = GroupRepository::new(self.db);

        Ok(repo.list(params.group_type, sort).await?)
    }

    /// Gets a group by ID, failing with `NotFound` when absent
    pub async fn get_by_id(&self, id: i32) -> Result<Group, AppError> {
        tracing::info!("Fetching group with ID: {}", id);

        let repo = GroupRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Group not found".to_string()))
    }

    /// Creates a group with no sites or children
    ///
    /// # Returns
    /// - `Ok(Group)` - Newly created group
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateGroupParams) -> Result<Group, AppError> {
        tracing::info!(
            "Creating group '{}' of type {}",
            params.name,
            params.group_type
        );

        let repo = GroupRepository::new(self.db);

        let group = repo.create(params).await?;

        tracing::info!("Group created with ID: {}", group.id);

        Ok(group)
    }

    /// Applies a partial update to a group's name and type
    ///
    /// # Returns
    /// - `Ok(Group)` - Updated group with relations resolved
    /// - `Err(AppError::NotFound)` - Group does not exist
    /// - `Err(AppError::BadRequest)` - Retyping a group with linked sites to `group3`
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, params: UpdateGroupParams) -> Result<Group, AppError> {
        tracing::info!("Updating group {} with data: {:?}", params.id, params);

        let repo = GroupRepository::new(self.db);

        let current = repo
            .get_by_id(params.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Group not found".to_string()))?;

        let name = params.name.unwrap_or(current.name);
        let group_type = params.group_type.unwrap_or(current.group_type);

        rules::ensure_retype_allowed(group_type, !current.sites.is_empty())?;

        Ok(repo.update(current.id, name, group_type).await?)
    }

    /// Deletes a group with its site links and hierarchy edges
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        tracing::info!("Deleting group with ID: {}", id);

        let repo = GroupRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Group not found".to_string()));
        }

        repo.delete(id).await?;

        tracing::info!("Group {} deleted", id);

        Ok(())
    }

    /// Makes each requested group a child of `id`
    ///
    /// Either all requested IDs are added or none: every ID must exist and none may be
    /// the parent or one of its ancestors. Repeated IDs are collapsed before the lookup
    /// and children already present are skipped.
    ///
    /// # Returns
    /// - `Ok(Group)` - Parent with updated relations
    /// - `Err(AppError::NotFound)` - Parent does not exist
    /// - `Err(AppError::BadRequest)` - Unknown child ID or the edge would close a cycle
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add_child_groups(&self, id: i32, child_ids: Vec<i32>) -> Result<Group, AppError> {
        tracing::info!("Adding child groups {:?} to group {}", child_ids, id);

        let repo = GroupRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Group not found".to_string()));
        }

        let requested = distinct(&child_ids);

        let found = repo.count_existing(&requested).await?;
        rules::ensure_all_children_found(requested.len(), found)?;

        let ancestors = repo.ancestors_of(id).await?;
        rules::ensure_no_cycle(id, &requested, &ancestors)?;

        let added = repo.add_children(id, &requested).await?;
        tracing::debug!("Added {} new child edges to group {}", added, id);

        self.get_by_id(id).await
    }

    /// Detaches the named children from `id`; IDs that are not children are ignored
    pub async fn remove_child_groups(
        &self,
        id: i32,
        child_ids: Vec<i32>,
    ) -> Result<Group, AppError> {
        tracing::info!("Removing child groups {:?} from group {}", child_ids, id);

        let repo = GroupRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Group not found".to_string()));
        }

        let removed = repo.remove_children(id, &distinct(&child_ids)).await?;
        tracing::debug!("Removed {} child edges from group {}", removed, id);

        self.get_by_id(id).await
    }
}

fn distinct(ids: &[i32]) -> Vec<i32> {
    let mut seen = HashSet::new();
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}
