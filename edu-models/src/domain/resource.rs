use super::common::QueryOptions;
use crate::enums::common::EntityKind;
use sea_orm::{Condition, EntityTrait};

/// A creation payload for entity `E`.
pub trait NewRecord<E: EntityTrait> {
    /// Soft reference that must resolve before the record may be created.
    fn parent(&self) -> Option<(EntityKind, &str)> {
        None
    }

    fn into_record(self) -> E::ActiveModel;
}

/// A partial update for entity `E`. Absent fields keep their stored value.
pub trait MergePatch<E: EntityTrait> {
    fn is_empty(&self) -> bool;

    fn merge_into(self, record: &mut E::ActiveModel);
}

/// Typed listing filter for entity `E`.
pub trait ResourceFilter<E: EntityTrait> {
    fn condition(&self) -> Condition;

    fn options(&self) -> &QueryOptions;
}
