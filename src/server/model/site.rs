//! Site domain models and parameters.
//!
//! Provides the `Site` domain model with its resolved groups, the `SiteValues` column
//! set written on create and update, and parameter types for each site operation.

use chrono::NaiveDate;
use sea_orm::DbErr;

use crate::{
    model::{
        api::SortOrder,
        group::GroupType,
        site::{Country, CreateSiteDto, SiteDto, SiteGroupDto, UpdateSiteDto},
    },
    server::model::parse_stored,
};

/// Group summary attached to a site.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteGroup {
    pub id: i32,
    pub name: String,
    pub group_type: GroupType,
}

impl SiteGroup {
    /// Converts a group entity into the summary shown on sites.
    ///
    /// # Returns
    /// - `Ok(SiteGroup)` - Converted summary
    /// - `Err(DbErr::Custom)` - Stored group type is not a known value
    pub fn from_entity(entity: entity::group::Model) -> Result<Self, DbErr> {
        Ok(Self {
            group_type: parse_stored(&entity.group_type)?,
            id: entity.id,
            name: entity.name,
        })
    }

    pub fn into_dto(self) -> SiteGroupDto {
        SiteGroupDto {
            id: self.id,
            name: self.name,
            group_type: self.group_type,
        }
    }
}

/// Writable columns of a site.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteValues {
    pub name: String,
    pub country: Country,
    pub installation_date: NaiveDate,
    pub max_power_megawatt: f64,
    pub min_power_megawatt: f64,
    pub useful_energy_at_1_megawatt: Option<f64>,
    pub efficiency: Option<f64>,
}

/// Site with its groups resolved, ordered by group ID.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub id: i32,
    pub name: String,
    pub country: Country,
    pub installation_date: NaiveDate,
    pub max_power_megawatt: f64,
    pub min_power_megawatt: f64,
    pub useful_energy_at_1_megawatt: Option<f64>,
    pub efficiency: Option<f64>,
    pub groups: Vec<SiteGroup>,
}

impl Site {
    /// Converts a site entity and its linked group entities into a domain model.
    ///
    /// # Arguments
    /// - `entity` - The site row
    /// - `groups` - Group rows linked through `site_group`
    ///
    /// # Returns
    /// - `Ok(Site)` - Converted domain model
    /// - `Err(DbErr::Custom)` - Stored country or group type is not a known value
    pub fn from_entity(
        entity: entity::site::Model,
        groups: Vec<entity::group::Model>,
    ) -> Result<Self, DbErr> {
        let mut groups = groups
            .into_iter()
            .map(SiteGroup::from_entity)
            .collect::<Result<Vec<_>, _>>()?;
        groups.sort_by_key(|g| g.id);

        Ok(Self {
            id: entity.id,
            name: entity.name,
            country: parse_stored(&entity.country)?,
            installation_date: entity.installation_date,
            max_power_megawatt: entity.max_power_megawatt,
            min_power_megawatt: entity.min_power_megawatt,
            useful_energy_at_1_megawatt: entity.useful_energy_at_1_megawatt,
            efficiency: entity.efficiency,
            groups,
        })
    }

    /// Current writable columns of this site.
    pub fn values(&self) -> SiteValues {
        SiteValues {
            name: self.name.clone(),
            country: self.country,
            installation_date: self.installation_date,
            max_power_megawatt: self.max_power_megawatt,
            min_power_megawatt: self.min_power_megawatt,
            useful_energy_at_1_megawatt: self.useful_energy_at_1_megawatt,
            efficiency: self.efficiency,
        }
    }

    pub fn into_dto(self) -> SiteDto {
        SiteDto {
            id: self.id,
            name: self.name,
            country: self.country,
            installation_date: self.installation_date,
            max_power_megawatt: self.max_power_megawatt,
            min_power_megawatt: self.min_power_megawatt,
            useful_energy_at_1_megawatt: self.useful_energy_at_1_megawatt,
            efficiency: self.efficiency,
            groups: self.groups.into_iter().map(SiteGroup::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSiteParams {
    pub values: SiteValues,
    /// Groups to link, in request order.
    pub group_ids: Vec<i32>,
}

impl CreateSiteParams {
    pub fn from_dto(dto: CreateSiteDto) -> Self {
        Self {
            values: SiteValues {
                name: dto.name,
                country: dto.country,
                installation_date: dto.installation_date,
                max_power_megawatt: dto.max_power_megawatt,
                min_power_megawatt: dto.min_power_megawatt,
                useful_energy_at_1_megawatt: dto.useful_energy_at_1_megawatt,
                efficiency: dto.efficiency,
            },
            group_ids: dto.group_ids,
        }
    }
}

/// Partial change set for a site. `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateSiteParams {
    pub id: i32,
    pub name: Option<String>,
    pub country: Option<Country>,
    pub installation_date: Option<NaiveDate>,
    pub max_power_megawatt: Option<f64>,
    pub min_power_megawatt: Option<f64>,
    pub useful_energy_at_1_megawatt: Option<Option<f64>>,
    pub efficiency: Option<Option<f64>>,
    /// Replacement group set; `None` keeps the current links.
    pub group_ids: Option<Vec<i32>>,
}

impl UpdateSiteParams {
    pub fn from_dto(id: i32, dto: UpdateSiteDto) -> Self {
        Self {
            id,
            name: dto.name,
            country: dto.country,
            installation_date: dto.installation_date,
            max_power_megawatt: dto.max_power_megawatt,
            min_power_megawatt: dto.min_power_megawatt,
            useful_energy_at_1_megawatt: dto.useful_energy_at_1_megawatt,
            efficiency: dto.efficiency,
            group_ids: dto.group_ids,
        }
    }

    /// Whether the installation-date rules must be re-evaluated.
    pub fn changes_country_or_date(&self) -> bool {
        self.country.is_some() || self.installation_date.is_some()
    }

    /// Overlays the supplied fields onto `current`.
    pub fn merge(&self, current: SiteValues) -> SiteValues {
        SiteValues {
            name: self.name.clone().unwrap_or(current.name),
            country: self.country.unwrap_or(current.country),
            installation_date: self.installation_date.unwrap_or(current.installation_date),
            max_power_megawatt: self
                .max_power_megawatt
                .unwrap_or(current.max_power_megawatt),
            min_power_megawatt: self
                .min_power_megawatt
                .unwrap_or(current.min_power_megawatt),
            useful_energy_at_1_megawatt: self
                .useful_energy_at_1_megawatt
                .unwrap_or(current.useful_energy_at_1_megawatt),
            efficiency: self.efficiency.unwrap_or(current.efficiency),
        }
    }
}

/// Columns a site list may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteSortField {
    Id,
    Name,
    Country,
    InstallationDate,
    MaxPowerMegawatt,
    MinPowerMegawatt,
    UsefulEnergyAt1Megawatt,
    Efficiency,
}

impl SiteSortField {
    /// Resolves a column name as used in the API, e.g. `installation_date`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "country" => Some(Self::Country),
            "installation_date" => Some(Self::InstallationDate),
            "max_power_megawatt" => Some(Self::MaxPowerMegawatt),
            "min_power_megawatt" => Some(Self::MinPowerMegawatt),
            "useful_energy_at_1_megawatt" => Some(Self::UsefulEnergyAt1Megawatt),
            "efficiency" => Some(Self::Efficiency),
            _ => None,
        }
    }

    pub fn column(self) -> entity::site::Column {
        use entity::site::Column;

        match self {
            Self::Id => Column::Id,
            Self::Name => Column::Name,
            Self::Country => Column::Country,
            Self::InstallationDate => Column::InstallationDate,
            Self::MaxPowerMegawatt => Column::MaxPowerMegawatt,
            Self::MinPowerMegawatt => Column::MinPowerMegawatt,
            Self::UsefulEnergyAt1Megawatt => Column::UsefulEnergyAt1Megawatt,
            Self::Efficiency => Column::Efficiency,
        }
    }
}

/// Filter and ordering for listing sites.
#[derive(Debug, Clone, Default)]
pub struct SiteListParams {
    pub country: Option<Country>,
    /// Raw column name; validated by the service.
    pub sort_by: Option<String>,
    pub order: SortOrder,
}
