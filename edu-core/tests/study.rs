mod common;

use common::{admin, block, class, lecture, lesson, setup_db, user};
use edu_core::StudyService;
use edu_error::web::WebError;

#[tokio::test]
async fn levels_are_filtered_by_age_and_ordered() {
    let db = setup_db().await;
    let primary = block(&db, "Primary", 2).await;
    let kinder = block(&db, "Kindergarten", 1).await;
    let grade2 = class(&db, &primary.id, "Grade 2", 7, 2).await;
    let grade1 = class(&db, &primary.id, "Grade 1", 6, 1).await;
    let grade5 = class(&db, &primary.id, "Grade 5", 10, 5).await;
    lecture(&db, &grade1.id, "Shapes", 2).await;
    lecture(&db, &grade1.id, "Numbers", 1).await;
    lecture(&db, &grade5.id, "Fractions", 1).await;

    let child = user(&db, "0922222222", Some(7)).await;
    let tree = StudyService::levels(&child.id, &db).await.unwrap();

    let blocks: Vec<_> = tree.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(blocks, vec![kinder.id.as_str(), primary.id.as_str()]);
    assert!(tree[0].classes.is_empty());

    let classes: Vec<_> = tree[1].classes.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(classes, vec![grade1.id.as_str(), grade2.id.as_str()]);
    let lectures: Vec<_> = tree[1].classes[0]
        .lectures
        .iter()
        .map(|l| l.title.as_str())
        .collect();
    assert_eq!(lectures, vec!["Numbers", "Shapes"]);

    let admin = admin(&db).await;
    let tree = StudyService::levels(&admin.id, &db).await.unwrap();
    assert_eq!(tree[1].classes.len(), 3);
    assert_eq!(tree[1].classes[2].lectures[0].title, "Fractions");
}

#[tokio::test]
async fn user_without_age_only_sees_age_zero() {
    let db = setup_db().await;
    let b = block(&db, "Open", 1).await;
    class(&db, &b.id, "Everyone", 0, 1).await;
    class(&db, &b.id, "Older", 5, 2).await;

    let anon = user(&db, "0933333333", None).await;
    let tree = StudyService::levels(&anon.id, &db).await.unwrap();
    assert_eq!(tree[0].classes.len(), 1);
    assert_eq!(tree[0].classes[0].title, "Everyone");
}

#[tokio::test]
async fn empty_catalogue_and_unknown_requester() {
    let db = setup_db().await;
    let admin = admin(&db).await;
    assert!(StudyService::levels(&admin.id, &db).await.unwrap().is_empty());

    let err = StudyService::levels("ghost", &db).await.unwrap_err();
    assert!(matches!(err, WebError::NotFound(ref msg) if msg == "User not found"));
}

#[tokio::test]
async fn lessons_of_a_lecture_are_ordered() {
    let db = setup_db().await;
    let b = block(&db, "Primary", 1).await;
    let c = class(&db, &b.id, "Grade 1", 6, 1).await;
    let l = lecture(&db, &c.id, "Numbers", 1).await;
    lesson(&db, &l.id, "third", 3).await;
    lesson(&db, &l.id, "first", 1).await;
    lesson(&db, &l.id, "second", 2).await;

    let titles: Vec<_> = StudyService::lessons(&l.id, &db)
        .await
        .unwrap()
        .into_iter()
        .map(|lesson| lesson.title)
        .collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
    assert!(StudyService::lessons("none", &db).await.unwrap().is_empty());
}
