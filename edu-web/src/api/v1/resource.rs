//! Handlers shared by every plain CRUD resource.
//!
//! Each route module instantiates these with its entity and payload types,
//! e.g. `resource::create::<News, NewNews>`.

use actix_web::web::Data;
use actix_web_validator::{Json, Path, Query};
use edu_core::ResourceService;
use edu_error::WebResult;
use edu_models::{
    domain::prelude::{MergePatch, NewRecord, PageResult, PathId, ResourceFilter},
    entities::prelude::Resource,
    web::WebResponse,
};
use sea_orm::{IntoActiveModel, PrimaryKeyTrait};
use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

use crate::AppState;

pub(super) async fn create<E, N>(
    state: Data<AppState>,
    body: Json<N>,
) -> WebResult<WebResponse<E::Model>>
where
    E: Resource,
    E::Model: IntoActiveModel<E::ActiveModel> + Serialize + Send + Sync + 'static,
    E::ActiveModel: Send + 'static,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<String>,
    N: NewRecord<E> + DeserializeOwned + Validate + 'static,
{
    let model = ResourceService::<E>::create(body.into_inner(), &state.db).await?;
    Ok(WebResponse::created(model))
}

pub(super) async fn page<E, F>(
    state: Data<AppState>,
    params: Query<F>,
) -> WebResult<WebResponse<PageResult<E::Model>>>
where
    E: Resource,
    E::Model: IntoActiveModel<E::ActiveModel> + Serialize + Send + Sync + 'static,
    E::ActiveModel: Send + 'static,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<String>,
    F: ResourceFilter<E> + DeserializeOwned + Validate + 'static,
{
    let page = ResourceService::<E>::list(&params.into_inner(), &state.db).await?;
    Ok(WebResponse::ok(page))
}

pub(super) async fn get<E>(
    state: Data<AppState>,
    path: Path<PathId>,
) -> WebResult<WebResponse<E::Model>>
where
    E: Resource,
    E::Model: IntoActiveModel<E::ActiveModel> + Serialize + Send + Sync + 'static,
    E::ActiveModel: Send + 'static,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<String>,
{
    let model = ResourceService::<E>::fetch(&path.id, &state.db).await?;
    Ok(WebResponse::ok(model))
}

pub(super) async fn update<E, P>(
    state: Data<AppState>,
    path: Path<PathId>,
    body: Json<P>,
) -> WebResult<WebResponse<E::Model>>
where
    E: Resource,
    E::Model: IntoActiveModel<E::ActiveModel> + Serialize + Send + Sync + 'static,
    E::ActiveModel: Send + 'static,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<String>,
    P: MergePatch<E> + DeserializeOwned + Validate + 'static,
{
    let model = ResourceService::<E>::update(&path.id, body.into_inner(), &state.db).await?;
    Ok(WebResponse::ok(model))
}

pub(super) async fn delete<E>(
    state: Data<AppState>,
    path: Path<PathId>,
) -> WebResult<WebResponse<()>>
where
    E: Resource,
    E::Model: IntoActiveModel<E::ActiveModel> + Serialize + Send + Sync + 'static,
    E::ActiveModel: Send + 'static,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<String>,
{
    ResourceService::<E>::delete(&path.id, &state.db).await?;
    Ok(WebResponse::no_content())
}
