use edu_error::StorageResult;
use edu_models::{
    domain::prelude::{PageResult, QueryOptions},
    entities::prelude::{
        Block, Class, Exercise, ExerciseHistory, Lecture, Lesson, News, QuestionExam, Resource,
        User, UserRequest,
    },
    enums::common::EntityKind,
};
use sea_orm::{
    ActiveModelTrait, Condition, ConnectionTrait, EntityTrait, IntoActiveModel, PaginatorTrait,
    PrimaryKeyTrait, QueryFilter, QueryOrder,
};
use serde::Serialize;
use std::marker::PhantomData;
use tracing::instrument;

/// Plain row access shared by every [`Resource`].
pub struct ResourceRepository<E>(PhantomData<E>);

impl<E> ResourceRepository<E>
where
    E: Resource,
    E::Model: IntoActiveModel<E::ActiveModel> + Serialize + Send + Sync + 'static,
    E::ActiveModel: Send + 'static,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<String>,
{
    pub async fn create<C>(record: E::ActiveModel, db: &C) -> StorageResult<E::Model>
    where
        C: ConnectionTrait,
    {
        Ok(record.insert(db).await?)
    }

    pub async fn update<C>(record: E::ActiveModel, db: &C) -> StorageResult<E::Model>
    where
        C: ConnectionTrait,
    {
        Ok(record.update(db).await?)
    }

    pub async fn find_by_id<C>(id: &str, db: &C) -> StorageResult<Option<E::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(E::find_by_id(id.to_string()).one(db).await?)
    }

    /// Returns the number of removed rows.
    pub async fn delete_by_id<C>(id: &str, db: &C) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(E::delete_by_id(id.to_string())
            .exec(db)
            .await?
            .rows_affected)
    }

    #[instrument(name = "resource-page", skip_all, fields(kind = %E::KIND))]
    pub async fn page<C>(
        condition: Condition,
        options: &QueryOptions,
        db: &C,
    ) -> StorageResult<PageResult<E::Model>>
    where
        C: ConnectionTrait,
    {
        let mut query = E::find().filter(condition);
        for (column, order) in options.sort_orders::<E>() {
            query = query.order_by(column, order);
        }

        let (page, limit) = (options.page(), options.limit());
        let total = query.clone().count(db).await?;
        let records = query.paginate(db, limit).fetch_page(page - 1).await?;

        Ok(PageResult::new(records, page, limit, total))
    }
}

/// Whether a row of `kind` with this id exists.
pub async fn exists<C>(kind: EntityKind, id: &str, db: &C) -> StorageResult<bool>
where
    C: ConnectionTrait,
{
    let id = id.to_string();
    let found = match kind {
        EntityKind::Block => Block::find_by_id(id).count(db).await?,
        EntityKind::Class => Class::find_by_id(id).count(db).await?,
        EntityKind::Lecture => Lecture::find_by_id(id).count(db).await?,
        EntityKind::Lesson => Lesson::find_by_id(id).count(db).await?,
        EntityKind::QuestionExam => QuestionExam::find_by_id(id).count(db).await?,
        EntityKind::Exercise => Exercise::find_by_id(id).count(db).await?,
        EntityKind::ExerciseHistory => ExerciseHistory::find_by_id(id).count(db).await?,
        EntityKind::News => News::find_by_id(id).count(db).await?,
        EntityKind::User => User::find_by_id(id).count(db).await?,
        EntityKind::UserRequest => UserRequest::find_by_id(id).count(db).await?,
    };
    Ok(found > 0)
}
