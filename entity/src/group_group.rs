//! Directed parent → child edges between groups.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "group_group")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub parent_group_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub child_group_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::group::Entity",
        from = "Column::ParentGroupId",
        to = "super::group::Column::Id",
        on_delete = "Cascade"
    )]
    Parent,
    #[sea_orm(
        belongs_to = "super::group::Entity",
        from = "Column::ChildGroupId",
        to = "super::group::Column::Id",
        on_delete = "Cascade"
    )]
    Child,
}

impl ActiveModelBehavior for ActiveModel {}
