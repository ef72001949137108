use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sites")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// ISO country code, e.g. `FR` or `IT`.
    pub country: String,
    pub installation_date: Date,
    pub max_power_megawatt: f64,
    pub min_power_megawatt: f64,
    pub useful_energy_at_1_megawatt: Option<f64>,
    pub efficiency: Option<f64>,
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

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        super::site_group::Relation::Group.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::site_group::Relation::Site.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
