use super::*;
use std::collections::HashSet;

/// Tests collecting transitive ancestors through a chain and a diamond.
///
/// Hierarchy: root → a, root → b, a → leaf, b → leaf.
///
/// Expected: Ok with {a, b, root} for leaf
#[tokio::test]
async fn collects_transitive_ancestors() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let root = factory::create_group(db).await?;
    let a = factory::create_group(db).await?;
    let b = factory::create_group(db).await?;
    let leaf = factory::create_group(db).await?;
    factory::link_child_group(db, root.id, a.id).await?;
    factory::link_child_group(db, root.id, b.id).await?;
    factory::link_child_group(db, a.id, leaf.id).await?;
    factory::link_child_group(db, b.id, leaf.id).await?;

    let repo = GroupRepository::new(db);
    let ancestors = repo.ancestors_of(leaf.id).await?;

    assert_eq!(ancestors, HashSet::from([root.id, a.id, b.id]));
    assert!(repo.ancestors_of(root.id).await?.is_empty());

    Ok(())
}
