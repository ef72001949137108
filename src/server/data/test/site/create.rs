use super::*;

/// Tests creating a site without any groups.
///
/// Verifies that every column is persisted and the returned site carries an
/// empty group list.
///
/// Expected: Ok with site created
#[tokio::test]
async fn creates_site_without_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SiteRepository::new(db);
    let site = repo
        .create(CreateSiteParams {
            values: site_values("Solar Plant A", Country::DE, date(2025, 7, 1)),
            group_ids: vec![],
        })
        .await?;

    assert_eq!(site.name, "Solar Plant A");
    assert_eq!(site.country, Country::DE);
    assert_eq!(site.installation_date, date(2025, 7, 1));
    assert_eq!(site.useful_energy_at_1_megawatt, Some(0.85));
    assert!(site.groups.is_empty());

    let stored = entity::prelude::Site::find_by_id(site.id).one(db).await?;
    assert!(stored.is_some());
    assert_eq!(stored.unwrap().country, "DE");

    Ok(())
}

/// Tests creating a site linked to several groups.
///
/// Verifies that a link row is written per group and the returned groups are
/// ordered by ID regardless of request order.
///
/// Expected: Ok with groups resolved in ID order
#[tokio::test]
async fn creates_site_with_group_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_group(db).await?;
    let second = factory::group::GroupFactory::new(db)
        .group_type("group2")
        .build()
        .await?;

    let repo = SiteRepository::new(db);
    let site = repo
        .create(CreateSiteParams {
            values: site_values("Linked", Country::ES, date(2025, 7, 2)),
            group_ids: vec![second.id, first.id],
        })
        .await?;

    let ids: Vec<i32> = site.groups.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(site.groups[1].group_type, GroupType::Group2);

    let links = entity::prelude::SiteGroup::find()
        .filter(entity::site_group::Column::SiteId.eq(site.id))
        .count(db)
        .await?;
    assert_eq!(links, 2);

    Ok(())
}

/// Tests that a group repeated in the request is linked once.
///
/// Expected: Ok with a single link row
#[tokio::test]
async fn links_repeated_group_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;

    let repo = SiteRepository::new(db);
    let site = repo
        .create(CreateSiteParams {
            values: site_values("Repeated", Country::DE, date(2025, 7, 3)),
            group_ids: vec![group.id, group.id],
        })
        .await?;

    assert_eq!(site.groups.len(), 1);

    let links = entity::prelude::SiteGroup::find().count(db).await?;
    assert_eq!(links, 1);

    Ok(())
}
