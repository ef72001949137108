use sea_orm_migration::{prelude::*, schema::*};

use super::m20250723_000001_create_group_table::Groups;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GroupGroup::Table)
                    .if_not_exists()
                    .col(integer(GroupGroup::ParentGroupId))
                    .col(integer(GroupGroup::ChildGroupId))
                    .primary_key(
                        Index::create()
                            .col(GroupGroup::ParentGroupId)
                            .col(GroupGroup::ChildGroupId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_group_parent_group_id")
                            .from(GroupGroup::Table, GroupGroup::ParentGroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_group_child_group_id")
                            .from(GroupGroup::Table, GroupGroup::ChildGroupId)
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
            .drop_table(Table::drop().table(GroupGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GroupGroup {
    Table,
    ParentGroupId,
    ChildGroupId,
}
