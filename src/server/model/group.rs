//! Group domain models and parameters.

use sea_orm::DbErr;

use crate::{
    model::{
        api::SortOrder,
        group::{CreateGroupDto, GroupDto, GroupType, UpdateGroupDto},
    },
    server::model::parse_stored,
};

/// Group with its site links and direct hierarchy edges resolved.
///
/// All ID lists are sorted ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: i32,
    pub name: String,
    pub group_type: GroupType,
    pub sites: Vec<i32>,
    pub child_groups: Vec<i32>,
    pub parent_groups: Vec<i32>,
}

impl Group {
    /// Converts a group entity and its association IDs into a domain model.
    ///
    /// # Returns
    /// - `Ok(Group)` - Converted domain model
    /// - `Err(DbErr::Custom)` - Stored group type is not a known value
    pub fn from_entity(
        entity: entity::group::Model,
        mut sites: Vec<i32>,
        mut child_groups: Vec<i32>,
        mut parent_groups: Vec<i32>,
    ) -> Result<Self, DbErr> {
        sites.sort_unstable();
        child_groups.sort_unstable();
        parent_groups.sort_unstable();

        Ok(Self {
            group_type: parse_stored(&entity.group_type)?,
            id: entity.id,
            name: entity.name,
            sites,
            child_groups,
            parent_groups,
        })
    }

    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            id: self.id,
            name: self.name,
            group_type: self.group_type,
            sites: self.sites,
            child_groups: self.child_groups,
            parent_groups: self.parent_groups,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGroupParams {
    pub name: String,
    pub group_type: GroupType,
}

impl CreateGroupParams {
    pub fn from_dto(dto: CreateGroupDto) -> Self {
        Self {
            name: dto.name,
            group_type: dto.group_type,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateGroupParams {
    pub id: i32,
    pub name: Option<String>,
    pub group_type: Option<GroupType>,
}

impl UpdateGroupParams {
    pub fn from_dto(id: i32, dto: UpdateGroupDto) -> Self {
        Self {
            id,
            name: dto.name,
            group_type: dto.group_type,
        }
    }
}

/// Columns a group list may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSortField {
    Id,
    Name,
    Type,
}

impl GroupSortField {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "type" => Some(Self::Type),
            _ => None,
        }
    }

    pub fn column(self) -> entity::group::Column {
        use entity::group::Column;

        match self {
            Self::Id => Column::Id,
            Self::Name => Column::Name,
            Self::Type => Column::GroupType,
        }
    }
}

/// Filter and ordering for listing groups.
#[derive(Debug, Clone, Default)]
pub struct GroupListParams {
    pub group_type: Option<GroupType>,
    /// Raw column name; validated by the service.
    pub sort_by: Option<String>,
    pub order: SortOrder,
}
