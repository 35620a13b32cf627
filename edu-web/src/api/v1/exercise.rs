//! Exercise management and scoring API endpoints

use crate::{
    middleware::RequestContext,
    rbac::{Capability, PermRegistry},
    AppState,
};
use actix_web::{
    http::Method,
    web::{self, Data},
};
use actix_web_validator::{Json, Path, Query};
use edu_core::ExerciseService;
use edu_error::{rbac::RBACError, WebResult};
use edu_models::{
    domain::prelude::{
        AnswerSheet, ExerciseDetail, ExercisePageParams, NewExercise, PageResult, PathId,
        ScoreResult, UpdateExercise,
    },
    web::WebResponse,
};
use tracing::{info, instrument};

pub(super) const ROUTER_PREFIX: &str = "/exercise";

/// Configure exercise routes
///
/// # Routes
/// - POST ``: Create an exercise with its questions
/// - GET ``: Paginated exercises, optionally filtered by `lessonId`
/// - GET `/info/{id}`: One exercise with its questions
/// - PATCH `/info/{id}`: Update an exercise, replacing its questions
/// - DELETE `/info/{id}`: Delete an exercise
/// - PATCH `/calculate/{id}`: Score an answer sheet
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create))
        .route("", web::get().to(page))
        .route("/info/{id}", web::get().to(get_by_id))
        .route("/info/{id}", web::patch().to(update))
        .route("/info/{id}", web::delete().to(delete))
        .route("/calculate/{id}", web::patch().to(calculate));
}

#[inline]
#[instrument(name = "init-exercise-rbac", skip(router_prefix, registry))]
pub(crate) fn init_rbac_rules(
    router_prefix: &str,
    registry: &mut PermRegistry,
) -> WebResult<(), RBACError> {
    info!("Initializing exercise module RBAC rules...");
    let base = format!("{router_prefix}{ROUTER_PREFIX}");

    registry.register(Method::POST, base.clone(), Capability::ManageAdmin)?;
    registry.register(Method::GET, base.clone(), Capability::Authenticated)?;
    registry.register(Method::GET, format!("{base}/info/{{id}}"), Capability::Authenticated)?;
    registry.register(Method::PATCH, format!("{base}/info/{{id}}"), Capability::ManageAdmin)?;
    registry.register(Method::DELETE, format!("{base}/info/{{id}}"), Capability::ManageAdmin)?;
    registry.register(Method::PATCH, format!("{base}/calculate/{{id}}"), Capability::Authenticated)?;

    info!("Exercise module RBAC rules initialized successfully");
    Ok(())
}

/// Create an exercise
///
/// # Endpoint
/// `POST /v1/exercise`
///
/// # Errors
/// - Not Found (404): the referenced lesson does not exist
async fn create(
    state: Data<AppState>,
    body: Json<NewExercise>,
) -> WebResult<WebResponse<ExerciseDetail>> {
    let detail = ExerciseService::create(body.into_inner(), &state.db).await?;
    Ok(WebResponse::created(detail))
}

async fn page(
    state: Data<AppState>,
    params: Query<ExercisePageParams>,
) -> WebResult<WebResponse<PageResult<ExerciseDetail>>> {
    let page = ExerciseService::list(&params.into_inner(), &state.db).await?;
    Ok(WebResponse::ok(page))
}

async fn get_by_id(
    state: Data<AppState>,
    path: Path<PathId>,
) -> WebResult<WebResponse<ExerciseDetail>> {
    let detail = ExerciseService::get(&path.id, &state.db).await?;
    Ok(WebResponse::ok(detail))
}

async fn update(
    state: Data<AppState>,
    path: Path<PathId>,
    body: Json<UpdateExercise>,
) -> WebResult<WebResponse<ExerciseDetail>> {
    let detail = ExerciseService::update(&path.id, body.into_inner(), &state.db).await?;
    Ok(WebResponse::ok(detail))
}

async fn delete(state: Data<AppState>, path: Path<PathId>) -> WebResult<WebResponse<()>> {
    ExerciseService::delete(&path.id, &state.db).await?;
    Ok(WebResponse::no_content())
}

/// Score an answer sheet
///
/// # Endpoint
/// `PATCH /v1/exercise/calculate/{id}`
///
/// # Description
/// The body is a JSON array of `{questionId, answer}`. Every attempt is
/// recorded in the caller's exercise history.
async fn calculate(
    state: Data<AppState>,
    ctx: RequestContext,
    path: Path<PathId>,
    body: Json<AnswerSheet>,
) -> WebResult<WebResponse<ScoreResult>> {
    let claims = ctx.claims()?;
    let result =
        ExerciseService::calculate(&path.id, &claims.user_id, &body.answers, &state.db).await?;
    Ok(WebResponse::ok(result))
}
