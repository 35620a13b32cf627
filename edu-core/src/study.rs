use crate::crud::ResourceService;
use edu_error::WebResult;
use edu_models::{
    domain::prelude::{BlockNode, ClassNode, LectureNode, Viewer},
    entities::prelude::{BlockModel, ClassModel, LectureModel, LessonModel, User},
};
use edu_repository::StudyRepository;
use edu_utils::tree::{group_by_parent, sort_nodes};
use sea_orm::ConnectionTrait;
use tracing::{debug, instrument};

/// Builds the block → class → lecture tree seen by `viewer`.
///
/// Every level is ordered by `order`. Classes the viewer may not see are
/// dropped together with their lectures, and children whose parent is not in
/// the input are ignored.
pub fn assemble(
    mut blocks: Vec<BlockModel>,
    classes: Vec<ClassModel>,
    lectures: Vec<LectureModel>,
    viewer: Viewer,
) -> Vec<BlockNode> {
    sort_nodes(&mut blocks);
    let mut classes_by_block = group_by_parent(
        classes
            .into_iter()
            .filter(|class| viewer.can_see(class.age))
            .collect(),
    );
    let mut lectures_by_class = group_by_parent(lectures);

    blocks
        .into_iter()
        .map(|block| {
            let classes = classes_by_block.remove(&block.id).unwrap_or_default();
            let mut node = BlockNode::from(block);
            node.classes = classes
                .into_iter()
                .map(|class| {
                    let lectures = lectures_by_class.remove(&class.id).unwrap_or_default();
                    let mut node = ClassNode::from(class);
                    node.lectures = lectures.into_iter().map(LectureNode::from).collect();
                    node
                })
                .collect();
            node
        })
        .collect()
}

pub struct StudyService;

impl StudyService {
    /// Study levels visible to the requester.
    #[instrument(name = "study-levels", skip(db))]
    pub async fn levels<C>(requester_id: &str, db: &C) -> WebResult<Vec<BlockNode>>
    where
        C: ConnectionTrait,
    {
        let requester = ResourceService::<User>::fetch(requester_id, db).await?;
        let viewer = Viewer::from(&requester);

        let blocks = StudyRepository::find_blocks(db).await?;
        let block_ids = blocks.iter().map(|b| b.id.clone()).collect();
        // hidden classes are dropped here so their lectures are never loaded
        let classes: Vec<ClassModel> = StudyRepository::find_classes_of_blocks(block_ids, db)
            .await?
            .into_iter()
            .filter(|class| viewer.can_see(class.age))
            .collect();
        let class_ids = classes.iter().map(|c| c.id.clone()).collect();
        let lectures = StudyRepository::find_lectures_of_classes(class_ids, db).await?;

        debug!(
            blocks = blocks.len(),
            classes = classes.len(),
            lectures = lectures.len(),
            "assembling study levels"
        );
        Ok(assemble(blocks, classes, lectures, viewer))
    }

    /// Lessons of one lecture in display order.
    pub async fn lessons<C>(lecture_id: &str, db: &C) -> WebResult<Vec<LessonModel>>
    where
        C: ConnectionTrait,
    {
        Ok(StudyRepository::find_lessons_of_lecture(lecture_id, db).await?)
    }
}
