use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sites::Table)
                    .if_not_exists()
                    .col(pk_auto(Sites::Id))
                    .col(string(Sites::Name))
                    .col(string(Sites::Country))
                    .col(date(Sites::InstallationDate))
                    .col(double(Sites::MaxPowerMegawatt))
                    .col(double(Sites::MinPowerMegawatt))
                    .col(double_null(Sites::UsefulEnergyAt1Megawatt))
                    .col(double_null(Sites::Efficiency))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sites::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Sites {
    Table,
    Id,
    Name,
    Country,
    InstallationDate,
    MaxPowerMegawatt,
    MinPowerMegawatt,
    #[sea_orm(iden = "useful_energy_at_1_megawatt")]
    UsefulEnergyAt1Megawatt,
    Efficiency,
}
