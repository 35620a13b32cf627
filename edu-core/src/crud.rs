use edu_error::{web::WebError, WebResult};
use edu_models::{
    domain::prelude::{MergePatch, NewRecord, PageResult, ResourceFilter},
    entities::prelude::Resource,
};
use edu_repository::{exists, ResourceRepository};
use sea_orm::{ConnectionTrait, IntoActiveModel, PrimaryKeyTrait};
use serde::Serialize;
use std::marker::PhantomData;
use tracing::{info, instrument};

pub const EMPTY_PATCH: &str = "Update body must contain at least one field";

/// Create, read, update, delete and list for any [`Resource`].
pub struct ResourceService<E>(PhantomData<E>);

impl<E> ResourceService<E>
where
    E: Resource,
    E::Model: IntoActiveModel<E::ActiveModel> + Serialize + Send + Sync + 'static,
    E::ActiveModel: Send + 'static,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<String>,
{
    /// Persists `new` once its declared parent resolves.
    #[instrument(name = "resource-create", skip_all, fields(kind = %E::KIND))]
    pub async fn create<N, C>(new: N, db: &C) -> WebResult<E::Model>
    where
        N: NewRecord<E>,
        C: ConnectionTrait,
    {
        if let Some((parent, parent_id)) = new.parent() {
            if !exists(parent, parent_id, db).await? {
                return Err(WebError::NotFound(parent.not_found()));
            }
        }
        let model = ResourceRepository::<E>::create(new.into_record(), db).await?;
        info!("{} created", E::KIND);
        Ok(model)
    }

    pub async fn get<C>(id: &str, db: &C) -> WebResult<Option<E::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(ResourceRepository::<E>::find_by_id(id, db).await?)
    }

    /// Like [`Self::get`] but a missing record is `NotFound`.
    pub async fn fetch<C>(id: &str, db: &C) -> WebResult<E::Model>
    where
        C: ConnectionTrait,
    {
        Self::get(id, db)
            .await?
            .ok_or_else(|| WebError::NotFound(E::KIND.not_found()))
    }

    #[instrument(name = "resource-update", skip(patch, db), fields(kind = %E::KIND))]
    pub async fn update<P, C>(id: &str, patch: P, db: &C) -> WebResult<E::Model>
    where
        P: MergePatch<E>,
        C: ConnectionTrait,
    {
        if patch.is_empty() {
            return Err(WebError::BadRequest(EMPTY_PATCH.into()));
        }
        let mut record = Self::fetch(id, db).await?.into_active_model();
        patch.merge_into(&mut record);
        let model = ResourceRepository::<E>::update(record, db).await?;
        info!("{} updated", E::KIND);
        Ok(model)
    }

    /// Removes the record and hands back what was stored. Children are left in place.
    #[instrument(name = "resource-delete", skip(db), fields(kind = %E::KIND))]
    pub async fn delete<C>(id: &str, db: &C) -> WebResult<E::Model>
    where
        C: ConnectionTrait,
    {
        let snapshot = Self::fetch(id, db).await?;
        ResourceRepository::<E>::delete_by_id(id, db).await?;
        info!("{} deleted", E::KIND);
        Ok(snapshot)
    }

    pub async fn list<F, C>(filter: &F, db: &C) -> WebResult<PageResult<E::Model>>
    where
        F: ResourceFilter<E>,
        C: ConnectionTrait,
    {
        Ok(ResourceRepository::<E>::page(filter.condition(), filter.options(), db).await?)
    }
}
