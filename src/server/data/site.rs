use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::{HashMap, HashSet};

use crate::{
    model::{api::SortOrder, site::Country},
    server::model::site::{CreateSiteParams, Site, SiteSortField, SiteValues},
};

pub struct SiteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SiteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists sites, optionally filtered by country and ordered by one column,
    /// with their groups resolved
    pub async fn list(
        &self,
        country: Option<Country>,
        sort: Option<(SiteSortField, SortOrder)>,
    ) -> Result<Vec<Site>, DbErr> {
        let mut query = entity::prelude::Site::find();

        if let Some(country) = country {
            query = query.filter(entity::site::Column::Country.eq(country.as_str()));
        }

        if let Some((field, order)) = sort {
            query = match order {
                SortOrder::Asc => query.order_by_asc(field.column()),
                SortOrder::Desc => query.order_by_desc(field.column()),
            };
        }

        let sites = query.all(self.db).await?;

        self.with_groups(sites).await
    }

    /// Gets a site by ID with its groups resolved
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Site>, DbErr> {
        let Some(site) = entity::prelude::Site::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.with_groups(vec![site]).await?.pop())
    }

    /// Checks whether a French site is already installed on `date`, ignoring `excluding_id`
    pub async fn french_site_exists_on(
        &self,
        date: NaiveDate,
        excluding_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Site::find()
            .filter(entity::site::Column::Country.eq(Country::FR.as_str()))
            .filter(entity::site::Column::InstallationDate.eq(date));

        if let Some(id) = excluding_id {
            query = query.filter(entity::site::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Creates a site and its group links in one transaction and returns it with groups
    pub async fn create(&self, params: CreateSiteParams) -> Result<Site, DbErr> {
        let txn = self.db.begin().await?;

        let site = active_model(params.values).insert(&txn).await?;

        for group_id in unique_in_order(&params.group_ids) {
            entity::site_group::ActiveModel {
                site_id: ActiveValue::Set(site.id),
                group_id: ActiveValue::Set(group_id),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        self.get_by_id(site.id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Site with id {} not found after creation",
            site.id
        )))
    }

    /// Overwrites a site's columns and, when `group_ids` is given, replaces its group links
    pub async fn update(
        &self,
        id: i32,
        values: SiteValues,
        group_ids: Option<Vec<i32>>,
    ) -> Result<Site, DbErr> {
        let txn = self.db.begin().await?;

        let site = entity::prelude::Site::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Site with id {} not found", id)))?;

        let mut active_model: entity::site::ActiveModel = site.into();
        active_model.name = ActiveValue::Set(values.name);
        active_model.country = ActiveValue::Set(values.country.as_str().to_string());
        active_model.installation_date = ActiveValue::Set(values.installation_date);
        active_model.max_power_megawatt = ActiveValue::Set(values.max_power_megawatt);
        active_model.min_power_megawatt = ActiveValue::Set(values.min_power_megawatt);
        active_model.useful_energy_at_1_megawatt =
            ActiveValue::Set(values.useful_energy_at_1_megawatt);
        active_model.efficiency = ActiveValue::Set(values.efficiency);

        active_model.update(&txn).await?;

        if let Some(group_ids) = group_ids {
            entity::prelude::SiteGroup::delete_many()
                .filter(entity::site_group::Column::SiteId.eq(id))
                .exec(&txn)
                .await?;

            for group_id in unique_in_order(&group_ids) {
                entity::site_group::ActiveModel {
                    site_id: ActiveValue::Set(id),
                    group_id: ActiveValue::Set(group_id),
                }
                .insert(&txn)
                .await?;
            }
        }

        txn.commit().await?;

        self.get_by_id(id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Site with id {} not found after update",
            id
        )))
    }

    /// Deletes a site and its group links; the groups themselves are kept
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::SiteGroup::delete_many()
            .filter(entity::site_group::Column::SiteId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Site::delete_by_id(id).exec(&txn).await?;

        txn.commit().await
    }

    /// Resolves the groups of each site with one query per association level
    async fn with_groups(&self, sites: Vec<entity::site::Model>) -> Result<Vec<Site>, DbErr> {
        let site_ids: Vec<i32> = sites.iter().map(|s| s.id).collect();
        if site_ids.is_empty() {
            return Ok(Vec::new());
        }

        let links = entity::prelude::SiteGroup::find()
            .filter(entity::site_group::Column::SiteId.is_in(site_ids))
            .all(self.db)
            .await?;

        let group_ids: Vec<i32> = links
            .iter()
            .map(|l| l.group_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let groups_map: HashMap<i32, entity::group::Model> = if !group_ids.is_empty() {
            entity::prelude::Group::find()
                .filter(entity::group::Column::Id.is_in(group_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|g| (g.id, g))
                .collect()
        } else {
            HashMap::new()
        };

        let mut groups_by_site: HashMap<i32, Vec<entity::group::Model>> = HashMap::new();
        for link in links {
            if let Some(group) = groups_map.get(&link.group_id) {
                groups_by_site
                    .entry(link.site_id)
                    .or_default()
                    .push(group.clone());
            }
        }

        sites
            .into_iter()
            .map(|site| {
                let groups = groups_by_site.remove(&site.id).unwrap_or_default();
                Site::from_entity(site, groups)
            })
            .collect()
    }
}

fn active_model(values: SiteValues) -> entity::site::ActiveModel {
    entity::site::ActiveModel {
        name: ActiveValue::Set(values.name),
        country: ActiveValue::Set(values.country.as_str().to_string()),
        installation_date: ActiveValue::Set(values.installation_date),
        max_power_megawatt: ActiveValue::Set(values.max_power_megawatt),
        min_power_megawatt: ActiveValue::Set(values.min_power_megawatt),
        useful_energy_at_1_megawatt: ActiveValue::Set(values.useful_energy_at_1_megawatt),
        efficiency: ActiveValue::Set(values.efficiency),
        ..Default::default()
    }
}

/// Drops repeated IDs while keeping first-seen order.
fn unique_in_order(ids: &[i32]) -> Vec<i32> {
    let mut seen = HashSet::new();
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}
