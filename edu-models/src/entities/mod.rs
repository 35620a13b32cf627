pub mod block;
pub mod class;
pub mod exercise;
pub mod exercise_history;
pub mod lecture;
pub mod lesson;
pub mod news;
pub mod prelude;
pub mod question_exam;
pub mod user;
pub mod user_request;

use crate::enums::common::EntityKind;
use edu_macros::IntoActiveValue;
use sea_orm::{EntityTrait, FromJsonQueryResult};
use serde::{Deserialize, Serialize};

/// JSON array of strings stored in a single column.
#[derive(
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    IntoActiveValue,
    FromJsonQueryResult,
)]
pub struct StringList(pub Vec<String>);

impl From<Vec<String>> for StringList {
    fn from(values: Vec<String>) -> Self {
        StringList(values)
    }
}

impl StringList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// An entity reachable through the generic CRUD surface.
pub trait Resource: EntityTrait {
    const KIND: EntityKind;

    /// Maps a client-facing sort key (camelCase) onto a column.
    fn sort_column(field: &str) -> Option<Self::Column>;

    /// Column used when the caller gives no usable sort key.
    fn default_sort() -> Self::Column;
}
