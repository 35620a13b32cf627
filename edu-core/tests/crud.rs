mod common;

use common::{block, class, lecture, lesson, setup_db};
use edu_core::ResourceService;
use edu_error::web::WebError;
use edu_models::{
    domain::prelude::{
        BlockPageParams, ClassPageParams, NewBlock, NewClass, NewNews, NewsPageParams, QueryOptions,
        UpdateBlock, UpdateLesson,
    },
    entities::prelude::{Block, Class, News},
};
use sea_orm::{EntityTrait, PaginatorTrait};

#[tokio::test]
async fn class_with_missing_block_is_rejected_and_not_stored() {
    let db = setup_db().await;

    let err = ResourceService::<Class>::create(
        NewClass {
            title: "Orphan".into(),
            block_id: "missing".into(),
            age: 6,
            order: 1,
        },
        &db,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, WebError::NotFound(ref msg) if msg == "Block not found"));
    assert_eq!(Class::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn lesson_update_merges_only_given_fields() {
    let db = setup_db().await;
    let b = block(&db, "Primary", 1).await;
    let c = class(&db, &b.id, "Grade 1", 6, 1).await;
    let l = lecture(&db, &c.id, "Numbers", 1).await;
    let before = lesson(&db, &l.id, "Counting", 1).await;

    let after = ResourceService::<edu_models::entities::prelude::Lesson>::update(
        &before.id,
        UpdateLesson {
            title: Some("X".into()),
            ..Default::default()
        },
        &db,
    )
    .await
    .unwrap();

    assert_eq!(after.title, "X");
    assert_eq!(after.url, before.url);
    assert_eq!(after.order, before.order);
    assert_eq!(after.description, before.description);
    assert_eq!(after.rating, before.rating);
    assert!((4.0..=5.0).contains(&after.rating));
}

#[tokio::test]
async fn empty_patch_and_missing_record() {
    let db = setup_db().await;
    let b = block(&db, "Primary", 1).await;

    let err = ResourceService::<Block>::update(&b.id, UpdateBlock::default(), &db)
        .await
        .unwrap_err();
    assert!(matches!(err, WebError::BadRequest(_)));

    let err = ResourceService::<Block>::update(
        "missing",
        UpdateBlock {
            order: Some(2),
            ..Default::default()
        },
        &db,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, WebError::NotFound(ref msg) if msg == "Block not found"));

    assert!(ResourceService::<Block>::get("missing", &db)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn block_order_must_be_unique() {
    let db = setup_db().await;
    block(&db, "Primary", 1).await;
    let second = block(&db, "Secondary", 2).await;

    let err = ResourceService::<Block>::create(
        NewBlock {
            title: "Duplicate".into(),
            order: 1,
        },
        &db,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, WebError::BadRequest(ref msg) if msg == "Duplicate entry"));
    assert_eq!(Block::find().count(&db).await.unwrap(), 2);

    let err = ResourceService::<Block>::update(
        &second.id,
        UpdateBlock {
            order: Some(1),
            ..Default::default()
        },
        &db,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, WebError::BadRequest(_)));
    let stored = ResourceService::<Block>::fetch(&second.id, &db).await.unwrap();
    assert_eq!(stored.order, 2);
}

#[tokio::test]
async fn deleting_a_block_leaves_its_classes() {
    let db = setup_db().await;
    let b = block(&db, "Primary", 1).await;
    class(&db, &b.id, "Grade 1", 6, 1).await;

    let snapshot = ResourceService::<Block>::delete(&b.id, &db).await.unwrap();
    assert_eq!(snapshot.id, b.id);
    assert_eq!(snapshot.title, "Primary");

    assert!(ResourceService::<Block>::get(&b.id, &db).await.unwrap().is_none());
    assert_eq!(Class::find().count(&db).await.unwrap(), 1);

    let err = ResourceService::<Block>::delete(&b.id, &db).await.unwrap_err();
    assert!(matches!(err, WebError::NotFound(_)));
}

#[tokio::test]
async fn listing_paginates_sorts_and_filters() {
    let db = setup_db().await;
    for order in 1..=5 {
        block(&db, &format!("Block {order}"), order).await;
    }

    let page = ResourceService::<Block>::list(
        &BlockPageParams {
            title: None,
            options: QueryOptions::new(Some("order:desc"), Some(2), Some(2)),
        },
        &db,
    )
    .await
    .unwrap();
    assert_eq!(page.total_results, 5);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.page, 2);
    assert_eq!(page.limit, 2);
    let orders: Vec<_> = page.results.iter().map(|b| b.order).collect();
    assert_eq!(orders, vec![3, 2]);

    let defaults = ResourceService::<Block>::list(&BlockPageParams::default(), &db)
        .await
        .unwrap();
    assert_eq!(defaults.limit, 10);
    assert_eq!(defaults.page, 1);
    assert_eq!(defaults.results.len(), 5);

    let filtered = ResourceService::<Block>::list(
        &BlockPageParams {
            title: Some("Block 4".into()),
            ..Default::default()
        },
        &db,
    )
    .await
    .unwrap();
    assert_eq!(filtered.total_results, 1);
    assert_eq!(filtered.results[0].order, 4);

    let by_block = ResourceService::<Class>::list(
        &ClassPageParams {
            block_id: Some("nothing-here".into()),
            ..Default::default()
        },
        &db,
    )
    .await
    .unwrap();
    assert_eq!(by_block.total_results, 0);
    assert_eq!(by_block.total_pages, 0);
}

#[tokio::test]
async fn news_has_no_parent_requirement() {
    let db = setup_db().await;
    let news = ResourceService::<News>::create(
        NewNews {
            title: "Opening".into(),
            thumbnail: "open.png".into(),
            content: "School starts on Monday".into(),
        },
        &db,
    )
    .await
    .unwrap();
    assert!(!news.id.is_empty());
    assert!(news.created_at.is_some());

    let page = ResourceService::<News>::list(&NewsPageParams::default(), &db)
        .await
        .unwrap();
    assert_eq!(page.total_results, 1);
}
