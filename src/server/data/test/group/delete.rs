use super::*;

/// Tests deleting a group in the middle of a hierarchy with a linked site.
///
/// Verifies that site links and edges in both directions are removed while the site
/// and the neighbouring groups remain.
///
/// Expected: Ok with group, links and edges deleted
#[tokio::test]
async fn deletes_group_links_and_edges() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let parent = factory::create_group(db).await?;
    let group = factory::create_group(db).await?;
    let child = factory::create_group(db).await?;
    let site = factory::create_site(db).await?;
    factory::link_child_group(db, parent.id, group.id).await?;
    factory::link_child_group(db, group.id, child.id).await?;
    factory::link_site_group(db, site.id, group.id).await?;

    let repo = GroupRepository::new(db);
    repo.delete(group.id).await?;

    assert!(repo.get_by_id(group.id).await?.is_none());

    let edges = entity::prelude::GroupGroup::find().count(db).await?;
    assert_eq!(edges, 0);

    let links = entity::prelude::SiteGroup::find()
        .filter(entity::site_group::Column::SiteId.eq(site.id))
        .count(db)
        .await?;
    assert_eq!(links, 0);

    let parent = repo.get_by_id(parent.id).await?.unwrap();
    assert!(parent.child_groups.is_empty());
    assert!(repo.get_by_id(child.id).await?.is_some());
    assert!(entity::prelude::Site::find_by_id(site.id).one(db).await?.is_some());

    Ok(())
}
