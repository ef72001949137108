//! Database repository layer for sites and groups.
//!
//! Repositories use SeaORM entity models internally and return domain models, so the
//! service layer never touches entity or association rows directly. All database
//! queries, inserts, updates and deletes are performed through these repositories.

pub mod group;
pub mod site;
