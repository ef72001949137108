use super::*;

/// Tests filtering groups by type.
///
/// Expected: Ok with only `group3` groups
#[tokio::test]
async fn filters_by_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_group(db).await?;
    let restricted = factory::group::GroupFactory::new(db)
        .group_type("group3")
        .build()
        .await?;

    let repo = GroupRepository::new(db);
    let groups = repo.list(Some(GroupType::Group3), None).await?;

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].id, restricted.id);

    Ok(())
}

/// Tests ordering groups by name descending.
///
/// Expected: Ok with names in reverse alphabetical order
#[tokio::test]
async fn orders_by_name_desc() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::group::GroupFactory::new(db)
        .name("Alpha")
        .build()
        .await?;
    factory::group::GroupFactory::new(db)
        .name("Charlie")
        .build()
        .await?;
    factory::group::GroupFactory::new(db)
        .name("Bravo")
        .build()
        .await?;

    let repo = GroupRepository::new(db);
    let groups = repo
        .list(None, Some((GroupSortField::Name, SortOrder::Desc)))
        .await?;

    let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Charlie", "Bravo", "Alpha"]);

    Ok(())
}

/// Tests that listed groups carry their sites and both hierarchy directions.
///
/// Expected: Ok with sites, children and parents resolved per group
#[tokio::test]
async fn resolves_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let parent = factory::create_group(db).await?;
    let child = factory::create_group(db).await?;
    let site = factory::create_site(db).await?;
    factory::link_child_group(db, parent.id, child.id).await?;
    factory::link_site_group(db, site.id, child.id).await?;

    let repo = GroupRepository::new(db);
    let groups = repo
        .list(None, Some((GroupSortField::Id, SortOrder::Asc)))
        .await?;

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].child_groups, vec![child.id]);
    assert!(groups[0].parent_groups.is_empty());
    assert!(groups[0].sites.is_empty());
    assert_eq!(groups[1].parent_groups, vec![parent.id]);
    assert_eq!(groups[1].sites, vec![site.id]);

    Ok(())
}
