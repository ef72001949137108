use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "groups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// One of `group1`, `group2` or `group3`.
    #[sea_orm(column_name = "type")]
    pub group_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::site_group::Entity")]
    SiteGroup,
}

impl Related<super::site_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SiteGroup.def()
    }
}

impl Related<super::site::Entity> for Entity {
    fn to() -> RelationDef {
        super::site_group::Relation::Site.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::site_group::Relation::Group.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
