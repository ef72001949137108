use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::{
    model::site::Country,
    server::{
        data::{group::GroupRepository, site::SiteRepository},
        error::AppError,
        model::site::{CreateSiteParams, Site, SiteListParams, SiteSortField, UpdateSiteParams},
        service::rules,
    },
};

pub struct SiteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SiteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists sites with optional country filter and column ordering
    ///
    /// # Returns
    /// - `Ok(Vec<Site>)` - Matching sites with groups resolved
    /// - `Err(AppError::BadRequest)` - `sort_by` does not name a site column
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list(&self, params: SiteListParams) -> Result<Vec<Site>, AppError> {
        tracing::info!(
            "Fetching sites with filters - country: {:?}, sort_by: {:?}, order: {:?}",
            params.country,
            params.sort_by,
            params.order
        );

        let sort = match params.sort_by.as_deref().filter(|name| !name.is_empty()) {
            Some(name) => {
                let field = SiteSortField::parse(name)
                    .ok_or_else(|| AppError::BadRequest(format!("Invalid sort field: {}", name)))?;
                Some((field, params.order))
            }
            None => None,
        };

        let repo = SiteRepository::new(self.db);

        Ok(repo.list(params.country, sort).await?)
    }

    /// Gets a site by ID, failing with `NotFound` when absent
    pub async fn get_by_id(&self, id: i32) -> Result<Site, AppError> {
        tracing::info!("Fetching site with ID: {}", id);

        let repo = SiteRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Site not found".to_string()))
    }

    /// Creates a site after checking the installation-date and group rules
    ///
    /// # Returns
    /// - `Ok(Site)` - Created site with groups resolved
    /// - `Err(AppError::BadRequest)` - A business rule rejected the site
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateSiteParams) -> Result<Site, AppError> {
        tracing::info!(
            "Creating site '{}' ({}, {}) with groups {:?}",
            params.values.name,
            params.values.country,
            params.values.installation_date,
            params.group_ids
        );

        let repo = SiteRepository::new(self.db);
        let country = params.values.country;
        let date = params.values.installation_date;

        self.check_installation_date(&repo, country, date, None)
            .await?;
        self.check_linkable_groups(&params.group_ids).await?;

        let site = repo
            .create(params)
            .await
            .map_err(|e| french_date_conflict(e, date))?;

        tracing::info!("Site created with ID: {}", site.id);

        Ok(site)
    }

    /// Applies a partial update, re-checking the rules touched by the change set
    ///
    /// Installation-date rules run against the merged country and date whenever either
    /// is supplied. A supplied `group_ids` replaces the links after the group rule passes.
    ///
    /// # Returns
    /// - `Ok(Site)` - Updated site with groups resolved
    /// - `Err(AppError::NotFound)` - Site does not exist
    /// - `Err(AppError::BadRequest)` - A business rule rejected the change
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, params: UpdateSiteParams) -> Result<Site, AppError> {
        tracing::info!("Updating site {} with data: {:?}", params.id, params);

        let repo = SiteRepository::new(self.db);

        let current = repo
            .get_by_id(params.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Site not found".to_string()))?;

        let merged = params.merge(current.values());

        if params.changes_country_or_date() {
            self.check_installation_date(
                &repo,
                merged.country,
                merged.installation_date,
                Some(current.id),
            )
            .await?;
        }

        if let Some(group_ids) = &params.group_ids {
            self.check_linkable_groups(group_ids).await?;
        }

        let date = merged.installation_date;

        repo.update(current.id, merged, params.group_ids)
            .await
            .map_err(|e| french_date_conflict(e, date))
    }

    /// Deletes a site; its group links are removed but the groups remain
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        tracing::info!("Deleting site with ID: {}", id);

        let repo = SiteRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Site not found".to_string()));
        }

        repo.delete(id).await?;

        tracing::info!("Site {} deleted", id);

        Ok(())
    }

    async fn check_installation_date(
        &self,
        repo: &SiteRepository<'_>,
        country: Country,
        date: NaiveDate,
        excluding_id: Option<i32>,
    ) -> Result<(), AppError> {
        let conflict_exists = match country {
            Country::FR => repo.french_site_exists_on(date, excluding_id).await?,
            _ => false,
        };

        rules::ensure_unique_french_date(country, date, conflict_exists)?;
        rules::ensure_italian_weekend(country, date)
    }

    async fn check_linkable_groups(&self, group_ids: &[i32]) -> Result<(), AppError> {
        if group_ids.is_empty() {
            return Ok(());
        }

        let groups = GroupRepository::new(self.db)
            .get_summaries_by_ids(group_ids)
            .await?;

        rules::ensure_linkable_groups(group_ids, &groups)
    }
}

/// Maps a unique-index violation on the French installation date to the rule's
/// client error; a concurrent insert can pass the pre-check and still hit the index.
pub(crate) fn french_date_conflict(err: DbErr, date: NaiveDate) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::BadRequest(rules::french_date_taken_message(date))
        }
        _ => AppError::DbErr(err),
    }
}
