use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::{HashMap, HashSet};

use crate::{
    model::{api::SortOrder, group::GroupType},
    server::model::{
        group::{CreateGroupParams, Group, GroupSortField},
        site::SiteGroup,
    },
};

pub struct GroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists groups, optionally filtered by type and ordered by one column,
    /// with sites and hierarchy edges resolved
    pub async fn list(
        &self,
        group_type: Option<GroupType>,
        sort: Option<(GroupSortField, SortOrder)>,
    ) -> Result<Vec<Group>, DbErr> {
        let mut query = entity::prelude::Group::find();

        if let Some(group_type) = group_type {
            query = query.filter(entity::group::Column::GroupType.eq(group_type.as_str()));
        }

        if let Some((field, order)) = sort {
            query = match order {
                SortOrder::Asc => query.order_by_asc(field.column()),
                SortOrder::Desc => query.order_by_desc(field.column()),
            };
        }

        let groups = query.all(self.db).await?;

        self.with_relations(groups).await
    }

    /// Gets a group by ID with sites and hierarchy edges resolved
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Group>, DbErr> {
        let Some(group) = entity::prelude::Group::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.with_relations(vec![group]).await?.pop())
    }

    /// Gets the groups matching `ids` as site summaries; missing IDs are simply absent
    pub async fn get_summaries_by_ids(&self, ids: &[i32]) -> Result<Vec<SiteGroup>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Group::find()
            .filter(entity::group::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::group::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(SiteGroup::from_entity)
            .collect()
    }

    /// Counts how many of `ids` exist as groups
    pub async fn count_existing(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::Group::find()
            .filter(entity::group::Column::Id.is_in(ids.to_vec()))
            .count(self.db)
            .await
    }

    /// Creates a group and returns it with (empty) relations
    pub async fn create(&self, params: CreateGroupParams) -> Result<Group, DbErr> {
        let group = entity::group::ActiveModel {
            name: ActiveValue::Set(params.name),
            group_type: ActiveValue::Set(params.group_type.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(group.id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Group with id {} not found after creation",
            group.id
        )))
    }

    /// Overwrites a group's name and type
    pub async fn update(&self, id: i32, name: String, group_type: GroupType) -> Result<Group, DbErr> {
        let group = entity::prelude::Group::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Group with id {} not found", id)))?;

        let mut active_model: entity::group::ActiveModel = group.into();
        active_model.name = ActiveValue::Set(name);
        active_model.group_type = ActiveValue::Set(group_type.as_str().to_string());

        active_model.update(self.db).await?;

        self.get_by_id(id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Group with id {} not found after update",
            id
        )))
    }

    /// Deletes a group with its site links and hierarchy edges; linked sites and
    /// related groups are kept
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::SiteGroup::delete_many()
            .filter(entity::site_group::Column::GroupId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::GroupGroup::delete_many()
            .filter(
                Condition::any()
                    .add(entity::group_group::Column::ParentGroupId.eq(id))
                    .add(entity::group_group::Column::ChildGroupId.eq(id)),
            )
            .exec(&txn)
            .await?;

        entity::prelude::Group::delete_by_id(id).exec(&txn).await?;

        txn.commit().await
    }

    /// Adds parent → child edges for each ID not already a child; returns how many were added
    pub async fn add_children(&self, parent_id: i32, child_ids: &[i32]) -> Result<usize, DbErr> {
        let txn = self.db.begin().await?;

        let mut existing: HashSet<i32> = entity::prelude::GroupGroup::find()
            .filter(entity::group_group::Column::ParentGroupId.eq(parent_id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|edge| edge.child_group_id)
            .collect();

        let mut added = 0;
        for &child_id in child_ids {
            if !existing.insert(child_id) {
                continue;
            }

            entity::group_group::ActiveModel {
                parent_group_id: ActiveValue::Set(parent_id),
                child_group_id: ActiveValue::Set(child_id),
            }
            .insert(&txn)
            .await?;
            added += 1;
        }

        txn.commit().await?;

        Ok(added)
    }

    /// Removes the parent → child edges for `child_ids`; IDs that are not children are ignored
    pub async fn remove_children(&self, parent_id: i32, child_ids: &[i32]) -> Result<u64, DbErr> {
        if child_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::GroupGroup::delete_many()
            .filter(entity::group_group::Column::ParentGroupId.eq(parent_id))
            .filter(entity::group_group::Column::ChildGroupId.is_in(child_ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Collects every transitive ancestor of the group, walking parent edges upwards
    /// one level per query
    pub async fn ancestors_of(&self, id: i32) -> Result<HashSet<i32>, DbErr> {
        let mut ancestors = HashSet::new();
        let mut frontier = vec![id];

        while !frontier.is_empty() {
            let parents = entity::prelude::GroupGroup::find()
                .filter(entity::group_group::Column::ChildGroupId.is_in(frontier))
                .all(self.db)
                .await?;

            frontier = parents
                .into_iter()
                .map(|edge| edge.parent_group_id)
                .filter(|parent| ancestors.insert(*parent))
                .collect();
        }

        Ok(ancestors)
    }

    /// Resolves sites, children and parents of each group in three batched queries
    async fn with_relations(&self, groups: Vec<entity::group::Model>) -> Result<Vec<Group>, DbErr> {
        let group_ids: Vec<i32> = groups.iter().map(|g| g.id).collect();
        if group_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut sites_by_group: HashMap<i32, Vec<i32>> = HashMap::new();
        for link in entity::prelude::SiteGroup::find()
            .filter(entity::site_group::Column::GroupId.is_in(group_ids.clone()))
            .all(self.db)
            .await?
        {
            sites_by_group
                .entry(link.group_id)
                .or_default()
                .push(link.site_id);
        }

        let mut children_by_group: HashMap<i32, Vec<i32>> = HashMap::new();
        for edge in entity::prelude::GroupGroup::find()
            .filter(entity::group_group::Column::ParentGroupId.is_in(group_ids.clone()))
            .all(self.db)
            .await?
        {
            children_by_group
                .entry(edge.parent_group_id)
                .or_default()
                .push(edge.child_group_id);
        }

        let mut parents_by_group: HashMap<i32, Vec<i32>> = HashMap::new();
        for edge in entity::prelude::GroupGroup::find()
            .filter(entity::group_group::Column::ChildGroupId.is_in(group_ids))
            .all(self.db)
            .await?
        {
            parents_by_group
                .entry(edge.child_group_id)
                .or_default()
                .push(edge.parent_group_id);
        }

        groups
            .into_iter()
            .map(|group| {
                let id = group.id;
                Group::from_entity(
                    group,
                    sites_by_group.remove(&id).unwrap_or_default(),
                    children_by_group.remove(&id).unwrap_or_default(),
                    parents_by_group.remove(&id).unwrap_or_default(),
                )
            })
            .collect()
    }
}
