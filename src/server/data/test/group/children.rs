use super::*;

/// Tests adding child groups.
///
/// Expected: Ok with one edge per child
#[tokio::test]
async fn adds_children() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let parent = factory::create_group(db).await?;
    let first = factory::create_group(db).await?;
    let second = factory::create_group(db).await?;

    let repo = GroupRepository::new(db);
    let added = repo.add_children(parent.id, &[first.id, second.id]).await?;

    assert_eq!(added, 2);

    let group = repo.get_by_id(parent.id).await?.unwrap();
    assert_eq!(group.child_groups, vec![first.id, second.id]);

    Ok(())
}

/// Tests that adding an existing child does not create a duplicate edge.
///
/// Expected: Ok with only the new child added
#[tokio::test]
async fn skips_existing_children() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let parent = factory::create_group(db).await?;
    let existing = factory::create_group(db).await?;
    let new_child = factory::create_group(db).await?;
    factory::link_child_group(db, parent.id, existing.id).await?;

    let repo = GroupRepository::new(db);
    let added = repo
        .add_children(parent.id, &[existing.id, new_child.id])
        .await?;

    assert_eq!(added, 1);

    let edges = entity::prelude::GroupGroup::find()
        .filter(entity::group_group::Column::ParentGroupId.eq(parent.id))
        .count(db)
        .await?;
    assert_eq!(edges, 2);

    Ok(())
}

/// Tests removing children, including an ID that is not a child.
///
/// Expected: Ok with only the real edge removed
#[tokio::test]
async fn removes_children_and_ignores_non_children() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let parent = factory::create_group(db).await?;
    let child = factory::create_group(db).await?;
    let stranger = factory::create_group(db).await?;
    factory::link_child_group(db, parent.id, child.id).await?;

    let repo = GroupRepository::new(db);
    let removed = repo
        .remove_children(parent.id, &[child.id, stranger.id])
        .await?;

    assert_eq!(removed, 1);

    let group = repo.get_by_id(parent.id).await?.unwrap();
    assert!(group.child_groups.is_empty());

    // Removing the edge keeps the child group itself
    assert!(repo.get_by_id(child.id).await?.is_some());

    Ok(())
}
