use crate::{
    model::{api::SortOrder, group::GroupType, site::Country},
    server::{
        data::site::SiteRepository,
        model::site::{CreateSiteParams, SiteSortField, SiteValues},
    },
};
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod list;
mod update;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn site_values(name: &str, country: Country, installation_date: NaiveDate) -> SiteValues {
    SiteValues {
        name: name.to_string(),
        country,
        installation_date,
        max_power_megawatt: 10.5,
        min_power_megawatt: 2.0,
        useful_energy_at_1_megawatt: Some(0.85),
        efficiency: Some(90.5),
    }
}
