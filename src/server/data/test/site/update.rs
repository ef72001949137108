use super::*;

/// Tests overwriting a site's columns while keeping its group links.
///
/// Verifies that passing `None` for `group_ids` leaves the existing links intact.
///
/// Expected: Ok with columns updated and groups unchanged
#[tokio::test]
async fn updates_columns_and_keeps_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let site = factory::create_site(db).await?;
    let group = factory::create_group(db).await?;
    factory::link_site_group(db, site.id, group.id).await?;

    let mut values = site_values("Renamed", Country::ES, date(2025, 9, 1));
    values.efficiency = None;

    let repo = SiteRepository::new(db);
    let updated = repo.update(site.id, values, None).await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.country, Country::ES);
    assert_eq!(updated.installation_date, date(2025, 9, 1));
    assert_eq!(updated.efficiency, None);
    assert_eq!(updated.groups.len(), 1);
    assert_eq!(updated.groups[0].id, group.id);

    Ok(())
}

/// Tests replacing a site's group links.
///
/// Expected: Ok with only the new groups linked
#[tokio::test]
async fn replaces_group_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let site = factory::create_site(db).await?;
    let old_group = factory::create_group(db).await?;
    let new_group = factory::create_group(db).await?;
    factory::link_site_group(db, site.id, old_group.id).await?;

    let repo = SiteRepository::new(db);
    let updated = repo
        .update(
            site.id,
            site_values("Moved", Country::DE, date(2025, 7, 1)),
            Some(vec![new_group.id]),
        )
        .await?;

    let ids: Vec<i32> = updated.groups.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![new_group.id]);

    // The old group still exists
    let old = entity::prelude::Group::find_by_id(old_group.id).one(db).await?;
    assert!(old.is_some());

    Ok(())
}

/// Tests clearing all group links with an empty replacement set.
///
/// Expected: Ok with no groups
#[tokio::test]
async fn clears_group_links_with_empty_set() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let site = factory::create_site(db).await?;
    let group = factory::create_group(db).await?;
    factory::link_site_group(db, site.id, group.id).await?;

    let repo = SiteRepository::new(db);
    let updated = repo
        .update(
            site.id,
            site_values("Cleared", Country::DE, date(2025, 7, 1)),
            Some(vec![]),
        )
        .await?;

    assert!(updated.groups.is_empty());

    Ok(())
}

/// Tests updating a site that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_site() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SiteRepository::new(db);
    let result = repo
        .update(999, site_values("Ghost", Country::DE, date(2025, 7, 1)), None)
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
