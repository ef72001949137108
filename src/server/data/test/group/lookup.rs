use super::*;

/// Tests loading group summaries for a mix of existing and missing IDs.
///
/// Expected: Ok with only the existing groups, ordered by ID
#[tokio::test]
async fn returns_summaries_for_existing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_group(db).await?;
    let second = factory::group::GroupFactory::new(db)
        .group_type("group3")
        .build()
        .await?;

    let repo = GroupRepository::new(db);
    let summaries = repo
        .get_summaries_by_ids(&[second.id, 999, first.id])
        .await?;

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].id, first.id);
    assert_eq!(summaries[1].group_type, GroupType::Group3);

    Ok(())
}

/// Tests counting existing groups.
///
/// Expected: Ok with the number of IDs that exist
#[tokio::test]
async fn counts_existing_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;

    let repo = GroupRepository::new(db);

    assert_eq!(repo.count_existing(&[group.id, 999]).await?, 1);
    assert_eq!(repo.count_existing(&[]).await?, 0);

    Ok(())
}

/// Tests getting a group that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);

    assert!(repo.get_by_id(999).await?.is_none());

    Ok(())
}
