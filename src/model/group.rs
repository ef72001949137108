use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

use crate::model::api::UnknownVariant;

/// Organizational tag of a group. Sites may never be linked to `group3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GroupType {
    Group1,
    Group2,
    Group3,
}

impl GroupType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Group1 => "group1",
            Self::Group2 => "group2",
            Self::Group3 => "group3",
        }
    }
}

impl fmt::Display for GroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "group1" => Ok(Self::Group1),
            "group2" => Ok(Self::Group2),
            "group3" => Ok(Self::Group3),
            other => Err(UnknownVariant {
                kind: "group type",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GroupDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub group_type: GroupType,
    /// IDs of linked sites.
    pub sites: Vec<i32>,
    /// IDs of direct child groups.
    pub child_groups: Vec<i32>,
    /// IDs of direct parent groups.
    pub parent_groups: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateGroupDto {
    pub name: String,
    #[serde(rename = "type")]
    pub group_type: GroupType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateGroupDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub group_type: Option<GroupType>,
}
