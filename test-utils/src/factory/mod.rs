//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let group = factory::create_group(&db).await?;
//! let site = factory::site::SiteFactory::new(&db)
//!     .country("FR")
//!     .installation_date(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap())
//!     .build()
//!     .await?;
//! factory::helpers::link_site_group(&db, site.id, group.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `site` - Create site entities
//! - `group` - Create group entities
//! - `helpers` - Association rows and unique naming

pub mod group;
pub mod helpers;
pub mod site;

pub use group::create_group;
pub use helpers::{link_child_group, link_site_group};
pub use site::create_site;
