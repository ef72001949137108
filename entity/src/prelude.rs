pub use super::group::Entity as Group;
pub use super::group_group::Entity as GroupGroup;
pub use super::site::Entity as Site;
pub use super::site_group::Entity as SiteGroup;
