use super::*;

/// Tests filtering sites by country.
///
/// Expected: Ok with only French sites
#[tokio::test]
async fn filters_by_country() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let french = factory::site::SiteFactory::new(db)
        .country("FR")
        .build()
        .await?;
    factory::create_site(db).await?;

    let repo = SiteRepository::new(db);
    let sites = repo.list(Some(Country::FR), None).await?;

    assert_eq!(sites.len(), 1);
    assert_eq!(sites[0].id, french.id);

    Ok(())
}

/// Tests ordering sites by installation date in both directions.
///
/// Expected: Ok with sites ordered ascending then descending
#[tokio::test]
async fn orders_by_installation_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let late = factory::site::SiteFactory::new(db)
        .installation_date(date(2025, 8, 1))
        .build()
        .await?;
    let early = factory::site::SiteFactory::new(db)
        .installation_date(date(2025, 6, 1))
        .build()
        .await?;

    let repo = SiteRepository::new(db);

    let asc = repo
        .list(None, Some((SiteSortField::InstallationDate, SortOrder::Asc)))
        .await?;
    let asc_ids: Vec<i32> = asc.iter().map(|s| s.id).collect();
    assert_eq!(asc_ids, vec![early.id, late.id]);

    let desc = repo
        .list(None, Some((SiteSortField::InstallationDate, SortOrder::Desc)))
        .await?;
    let desc_ids: Vec<i32> = desc.iter().map(|s| s.id).collect();
    assert_eq!(desc_ids, vec![late.id, early.id]);

    Ok(())
}

/// Tests that each listed site carries only its own groups.
///
/// Expected: Ok with groups resolved per site
#[tokio::test]
async fn resolves_groups_per_site() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let linked = factory::create_site(db).await?;
    let unlinked = factory::create_site(db).await?;
    let group = factory::create_group(db).await?;
    factory::link_site_group(db, linked.id, group.id).await?;

    let repo = SiteRepository::new(db);
    let sites = repo
        .list(None, Some((SiteSortField::Id, SortOrder::Asc)))
        .await?;

    assert_eq!(sites.len(), 2);
    assert_eq!(sites[0].id, linked.id);
    assert_eq!(sites[0].groups.len(), 1);
    assert_eq!(sites[0].groups[0].id, group.id);
    assert_eq!(sites[1].id, unlinked.id);
    assert!(sites[1].groups.is_empty());

    Ok(())
}

/// Tests listing when no sites exist.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SiteRepository::new(db);
    let sites = repo.list(None, None).await?;

    assert!(sites.is_empty());

    Ok(())
}
