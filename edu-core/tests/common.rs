#![allow(dead_code)]

use edu_core::{AccountService, ResourceService};
use edu_models::{
    domain::prelude::{NewBlock, NewClass, NewLecture, NewLesson, NewUser},
    entities::prelude::{
        Block, BlockModel, Class, ClassModel, Lecture, LectureModel, Lesson, LessonModel,
        UserModel,
    },
    settings::{Db, Inner, Settings, Sqlite},
    DbManager,
};
use edu_storage::EduDbManager;
use sea_orm::DatabaseConnection;
use std::sync::Once;
use tracing::Level;

static INIT_TRACING: Once = Once::new();

pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(false)
            .without_time()
            .try_init();
    });
}

pub fn memory_settings() -> Settings {
    Inner {
        db: Db {
            sqlite: Sqlite::memory(),
        },
        ..Default::default()
    }
    .into()
}

/// Fresh migrated in-memory database with the default admin seeded.
pub async fn setup_db() -> DatabaseConnection {
    init_tracing();
    EduDbManager::init(&memory_settings())
        .await
        .expect("database should initialize")
        .get_connection()
        .expect("connection should be available")
}

pub async fn admin(db: &DatabaseConnection) -> UserModel {
    let settings = memory_settings();
    AccountService::authenticate(&settings.admin.phone, &settings.admin.password, db)
        .await
        .expect("seeded admin should log in")
}

pub async fn user(db: &DatabaseConnection, phone: &str, age: Option<i32>) -> UserModel {
    AccountService::create_user(
        NewUser {
            phone: phone.into(),
            password: "secret123".into(),
            name: Some(format!("user {phone}")),
            age,
            ..Default::default()
        },
        db,
    )
    .await
    .expect("user should be created")
}

pub async fn block(db: &DatabaseConnection, title: &str, order: i32) -> BlockModel {
    ResourceService::<Block>::create(
        NewBlock {
            title: title.into(),
            order,
        },
        db,
    )
    .await
    .expect("block should be created")
}

pub async fn class(
    db: &DatabaseConnection,
    block_id: &str,
    title: &str,
    age: i32,
    order: i32,
) -> ClassModel {
    ResourceService::<Class>::create(
        NewClass {
            title: title.into(),
            block_id: block_id.into(),
            age,
            order,
        },
        db,
    )
    .await
    .expect("class should be created")
}

pub async fn lecture(db: &DatabaseConnection, class_id: &str, title: &str, order: i32) -> LectureModel {
    ResourceService::<Lecture>::create(
        NewLecture {
            title: title.into(),
            thumbnail: format!("{title}.png"),
            class_id: class_id.into(),
            order,
            description: None,
        },
        db,
    )
    .await
    .expect("lecture should be created")
}

pub async fn lesson(db: &DatabaseConnection, lecture_id: &str, title: &str, order: i32) -> LessonModel {
    ResourceService::<Lesson>::create(
        NewLesson {
            title: title.into(),
            url: format!("https://video.example/{title}"),
            lecture_id: lecture_id.into(),
            order,
            description: Some("about".into()),
        },
        db,
    )
    .await
    .expect("lesson should be created")
}
