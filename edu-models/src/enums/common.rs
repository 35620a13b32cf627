use edu_macros::IntoActiveValue;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Account role stored on users and carried in access tokens.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    IntoActiveValue,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    #[sea_orm(string_value = "user")]
    User,
    #[sea_orm(string_value = "admin")]
    Admin,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Every persisted record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Block,
    Class,
    Lecture,
    Lesson,
    QuestionExam,
    Exercise,
    ExerciseHistory,
    News,
    User,
    UserRequest,
}

impl EntityKind {
    /// Message used when a record of this kind cannot be found.
    pub fn not_found(&self) -> String {
        format!("{self} not found")
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Block => "Block",
            EntityKind::Class => "Class",
            EntityKind::Lecture => "Lecture",
            EntityKind::Lesson => "Lesson",
            EntityKind::QuestionExam => "Question",
            EntityKind::Exercise => "Exercise",
            EntityKind::ExerciseHistory => "Exercise history",
            EntityKind::News => "News",
            EntityKind::User => "User",
            EntityKind::UserRequest => "User request",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"user\"").unwrap(),
            Role::User
        );
    }

    #[test]
    fn not_found_message_names_the_kind() {
        assert_eq!(EntityKind::Lesson.not_found(), "Lesson not found");
        assert_eq!(EntityKind::UserRequest.not_found(), "User request not found");
    }
}
