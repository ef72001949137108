//! Site factory for creating test site entities.
//!
//! Defaults to a German site so that generated rows never trip the French or
//! Italian installation-date rules unless a test opts in.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test sites with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::site::SiteFactory;
///
/// let site = SiteFactory::new(&db)
///     .country("IT")
///     .installation_date(NaiveDate::from_ymd_opt(2025, 7, 26).unwrap())
///     .build()
///     .await?;
/// ```
pub struct SiteFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    country: String,
    installation_date: NaiveDate,
    max_power_megawatt: f64,
    min_power_megawatt: f64,
    useful_energy_at_1_megawatt: Option<f64>,
    efficiency: Option<f64>,
}

impl<'a> SiteFactory<'a> {
    /// Creates a new SiteFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Site {id}"` where id is auto-incremented
    /// - country: `"DE"`
    /// - installation_date: 2025-07-01
    /// - max/min power: 10.5 / 2.0 MW, no useful energy or efficiency
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Site {}", id),
            country: "DE".to_string(),
            installation_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap_or_default(),
            max_power_megawatt: 10.5,
            min_power_megawatt: 2.0,
            useful_energy_at_1_megawatt: None,
            efficiency: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the stored country code (`FR`, `DE`, `ES` or `IT`).
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn installation_date(mut self, installation_date: NaiveDate) -> Self {
        self.installation_date = installation_date;
        self
    }

    pub fn power(mut self, min_power_megawatt: f64, max_power_megawatt: f64) -> Self {
        self.min_power_megawatt = min_power_megawatt;
        self.max_power_megawatt = max_power_megawatt;
        self
    }

    pub fn efficiency(mut self, efficiency: f64) -> Self {
        self.efficiency = Some(efficiency);
        self
    }

    /// Builds and inserts the site entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::site::Model)` - Created site entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::site::Model, DbErr> {
        entity::site::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            country: ActiveValue::Set(self.country),
            installation_date: ActiveValue::Set(self.installation_date),
            max_power_megawatt: ActiveValue::Set(self.max_power_megawatt),
            min_power_megawatt: ActiveValue::Set(self.min_power_megawatt),
            useful_energy_at_1_megawatt: ActiveValue::Set(self.useful_energy_at_1_megawatt),
            efficiency: ActiveValue::Set(self.efficiency),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a German site with default values.
///
/// Shorthand for `SiteFactory::new(db).build().await`.
pub async fn create_site(db: &DatabaseConnection) -> Result<entity::site::Model, DbErr> {
    SiteFactory::new(db).build().await
}
