use sea_orm_migration::{prelude::*, schema::*};

use super::m20250723_000001_create_group_table::Groups;
use super::m20250723_000002_create_site_table::Sites;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SiteGroup::Table)
                    .if_not_exists()
                    .col(integer(SiteGroup::SiteId))
                    .col(integer(SiteGroup::GroupId))
                    .primary_key(
                        Index::create()
                            .col(SiteGroup::SiteId)
                            .col(SiteGroup::GroupId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_site_group_site_id")
                            .from(SiteGroup::Table, SiteGroup::SiteId)
                            .to(Sites::Table, Sites::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_site_group_group_id")
                            .from(SiteGroup::Table, SiteGroup::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SiteGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SiteGroup {
    Table,
    SiteId,
    GroupId,
}
