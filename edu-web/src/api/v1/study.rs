//! Learning catalogue: blocks, classes, lectures and lessons.

use super::resource;
use crate::{
    middleware::RequestContext,
    rbac::{Capability, PermRegistry},
    AppState,
};
use actix_web::{
    http::Method,
    web::{self, Data},
};
use actix_web_validator::Path;
use edu_core::StudyService;
use edu_error::{rbac::RBACError, WebResult};
use edu_models::{
    domain::prelude::{
        BlockNode, BlockPageParams, ClassPageParams, LecturePageParams, LessonPageParams,
        NewBlock, NewClass, NewLecture, NewLesson, PathId, UpdateBlock, UpdateClass,
        UpdateLecture, UpdateLesson,
    },
    entities::prelude::{Block, Class, Lecture, Lesson, LessonModel},
    web::WebResponse,
};
use tracing::{info, instrument};

pub(super) const ROUTER_PREFIX: &str = "/study";

const KINDS: [&str; 4] = ["/block", "/class", "/lecture", "/lesson"];

/// Configure study routes
///
/// # Routes
/// - GET `/levels`: block, class and lecture tree visible to the caller
/// - GET `/lecture/{id}`: lessons of one lecture
/// - GET|POST `/{kind}` and PATCH|DELETE `/{kind}/{id}` for every kind
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/levels", web::get().to(levels))
        .route("/block", web::get().to(resource::page::<Block, BlockPageParams>))
        .route("/block", web::post().to(resource::create::<Block, NewBlock>))
        .route("/block/{id}", web::patch().to(resource::update::<Block, UpdateBlock>))
        .route("/block/{id}", web::delete().to(resource::delete::<Block>))
        .route("/class", web::get().to(resource::page::<Class, ClassPageParams>))
        .route("/class", web::post().to(resource::create::<Class, NewClass>))
        .route("/class/{id}", web::patch().to(resource::update::<Class, UpdateClass>))
        .route("/class/{id}", web::delete().to(resource::delete::<Class>))
        .route("/lecture", web::get().to(resource::page::<Lecture, LecturePageParams>))
        .route("/lecture", web::post().to(resource::create::<Lecture, NewLecture>))
        .route("/lecture/{id}", web::get().to(lecture_lessons))
        .route("/lecture/{id}", web::patch().to(resource::update::<Lecture, UpdateLecture>))
        .route("/lecture/{id}", web::delete().to(resource::delete::<Lecture>))
        .route("/lesson", web::get().to(resource::page::<Lesson, LessonPageParams>))
        .route("/lesson", web::post().to(resource::create::<Lesson, NewLesson>))
        .route("/lesson/{id}", web::patch().to(resource::update::<Lesson, UpdateLesson>))
        .route("/lesson/{id}", web::delete().to(resource::delete::<Lesson>));
}

#[inline]
#[instrument(name = "init-study-rbac", skip(router_prefix, registry))]
pub(crate) fn init_rbac_rules(
    router_prefix: &str,
    registry: &mut PermRegistry,
) -> WebResult<(), RBACError> {
    info!("Initializing study module RBAC rules...");
    let base = format!("{router_prefix}{ROUTER_PREFIX}");

    registry.register(Method::GET, format!("{base}/levels"), Capability::Authenticated)?;
    registry.register(Method::GET, format!("{base}/lecture/{{id}}"), Capability::Authenticated)?;

    for kind in KINDS {
        registry.register(Method::GET, format!("{base}{kind}"), Capability::Authenticated)?;
        registry.register(Method::POST, format!("{base}{kind}"), Capability::ManageAdmin)?;
        registry.register(Method::PATCH, format!("{base}{kind}/{{id}}"), Capability::ManageAdmin)?;
        registry.register(Method::DELETE, format!("{base}{kind}/{{id}}"), Capability::ManageAdmin)?;
    }

    info!("Study module RBAC rules initialized successfully");
    Ok(())
}

/// Study levels of the caller
///
/// # Endpoint
/// `GET /v1/study/levels`
///
/// # Description
/// Every block with the classes the caller's age admits and their lectures,
/// each level ordered by its `order` field. Administrators see every class.
async fn levels(
    state: Data<AppState>,
    ctx: RequestContext,
) -> WebResult<WebResponse<Vec<BlockNode>>> {
    let claims = ctx.claims()?;
    let tree = StudyService::levels(&claims.user_id, &state.db).await?;
    Ok(WebResponse::ok(tree))
}

/// Lessons of a lecture, ordered by `order`
async fn lecture_lessons(
    state: Data<AppState>,
    path: Path<PathId>,
) -> WebResult<WebResponse<Vec<LessonModel>>> {
    let lessons = StudyService::lessons(&path.id, &state.db).await?;
    Ok(WebResponse::ok(lessons))
}
