use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, context::TestContext};

use crate::{
    model::site::Country,
    server::{
        error::AppError,
        model::site::{CreateSiteParams, SiteValues},
    },
};


async fn setup() -> TestContext {
    TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn create_params(country: Country, installation_date: NaiveDate, group_ids: Vec<i32>) -> CreateSiteParams {
    CreateSiteParams {
        values: SiteValues {
            name: format!("{} site {}", country, installation_date),
            country,
            installation_date,
            max_power_megawatt: 10.5,
            min_power_megawatt: 2.0,
            useful_energy_at_1_megawatt: Some(0.85),
            efficiency: Some(90.5),
        },
        group_ids,
    }
}

/// Unwraps the message of a `BadRequest`, panicking on any other outcome.
fn bad_request<T: std::fmt::Debug>(result: Result<T, AppError>) -> String {
    match result {
        Err(AppError::BadRequest(msg)) => msg,
        other => panic!("expected BadRequest, got {:?}", other),
    }
}
