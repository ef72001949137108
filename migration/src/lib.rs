pub use sea_orm_migration::prelude::*;

mod m20250723_000001_create_group_table;
mod m20250723_000002_create_site_table;
mod m20250723_000003_create_site_group_table;
mod m20250723_000004_create_group_group_table;
mod m20250724_000005_create_french_installation_date_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250723_000001_create_group_table::Migration),
            Box::new(m20250723_000002_create_site_table::Migration),
            Box::new(m20250723_000003_create_site_group_table::Migration),
            Box::new(m20250723_000004_create_group_group_table::Migration),
            Box::new(m20250724_000005_create_french_installation_date_index::Migration),
        ]
    }
}
