use super::*;

/// Tests creating a group.
///
/// Expected: Ok with group created and no relations
#[tokio::test]
async fn creates_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let group = repo
        .create(CreateGroupParams {
            name: "Main Group".to_string(),
            group_type: GroupType::Group1,
        })
        .await?;

    assert_eq!(group.name, "Main Group");
    assert_eq!(group.group_type, GroupType::Group1);
    assert!(group.sites.is_empty());
    assert!(group.child_groups.is_empty());
    assert!(group.parent_groups.is_empty());

    let stored = entity::prelude::Group::find_by_id(group.id).one(db).await?;
    assert_eq!(stored.unwrap().group_type, "group1");

    Ok(())
}

/// Tests overwriting a group's name and type.
///
/// Expected: Ok with both columns changed and site links untouched
#[tokio::test]
async fn updates_group_and_keeps_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let site = factory::create_site(db).await?;
    factory::link_site_group(db, site.id, group.id).await?;

    let repo = GroupRepository::new(db);
    let updated = repo
        .update(group.id, "Renamed".to_string(), GroupType::Group2)
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.group_type, GroupType::Group2);
    assert_eq!(updated.sites, vec![site.id]);

    Ok(())
}
