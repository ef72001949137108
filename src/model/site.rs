use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

use crate::model::{
    api::{deserialize_some, UnknownVariant},
    group::GroupType,
};

/// Country a site is installed in.
///
/// Only `FR` and `IT` carry installation-date rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Country {
    FR,
    DE,
    ES,
    IT,
}

impl Country {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FR => "FR",
            Self::DE => "DE",
            Self::ES => "ES",
            Self::IT => "IT",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Country {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FR" => Ok(Self::FR),
            "DE" => Ok(Self::DE),
            "ES" => Ok(Self::ES),
            "IT" => Ok(Self::IT),
            other => Err(UnknownVariant {
                kind: "country",
                value: other.to_string(),
            }),
        }
    }
}

/// Group summary embedded in a site response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SiteGroupDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub group_type: GroupType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SiteDto {
    pub id: i32,
    pub name: String,
    pub country: Country,
    #[schema(value_type = String, format = Date, example = "2025-07-20")]
    pub installation_date: NaiveDate,
    pub max_power_megawatt: f64,
    pub min_power_megawatt: f64,
    pub useful_energy_at_1_megawatt: Option<f64>,
    pub efficiency: Option<f64>,
    pub groups: Vec<SiteGroupDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateSiteDto {
    pub name: String,
    pub country: Country,
    #[schema(value_type = String, format = Date, example = "2025-07-20")]
    pub installation_date: NaiveDate,
    pub max_power_megawatt: f64,
    pub min_power_megawatt: f64,
    #[serde(default)]
    pub useful_energy_at_1_megawatt: Option<f64>,
    #[serde(default)]
    pub efficiency: Option<f64>,
    #[serde(default)]
    pub group_ids: Vec<i32>,
}

/// Partial site update; absent fields keep their stored value.
///
/// The nullable fields accept an explicit `null` to clear the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateSiteDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<Country>,
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date)]
    pub installation_date: Option<NaiveDate>,
    #[serde(default)]
    pub max_power_megawatt: Option<f64>,
    #[serde(default)]
    pub min_power_megawatt: Option<f64>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<f64>)]
    pub useful_energy_at_1_megawatt: Option<Option<f64>>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<f64>)]
    pub efficiency: Option<Option<f64>>,
    /// Replaces the site's groups when present.
    #[serde(default)]
    pub group_ids: Option<Vec<i32>>,
}
