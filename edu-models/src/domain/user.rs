use super::{
    common::QueryOptions,
    resource::{MergePatch, NewRecord, ResourceFilter},
};
use crate::{
    entities::prelude::{
        User, UserActiveModel, UserColumn, UserRequest, UserRequestActiveModel,
        UserRequestColumn,
    },
    enums::common::Role,
};
use sea_orm::{ColumnTrait, Condition, Set};
use serde::Deserialize;
use validator::{Validate, ValidationError};

pub const PASSWORD_MIN_LEN: usize = 8;

/// At least eight characters with at least one letter and one digit.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let long_enough = password.chars().count() >= PASSWORD_MIN_LEN;
    let has_letter = password.chars().any(|c| c.is_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if long_enough && has_letter && has_digit {
        Ok(())
    } else {
        let mut err = ValidationError::new("password");
        err.message = Some(
            "password must be at least 8 characters and contain at least one letter and one number"
                .into(),
        );
        Err(err)
    }
}

/// Account details supplied by an administrator.
///
/// The role is never taken from the payload; new accounts are always `user`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[validate(length(min = 8, max = 15, message = "phone must be 8 to 15 characters"))]
    pub phone: String,
    #[validate(custom(function = "validate_password"))]
    pub password: String,
    pub name: Option<String>,
    #[validate(email(message = "email is invalid"))]
    pub email: Option<String>,
    pub birth: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "class")]
    pub class_name: Option<String>,
    pub district: Option<String>,
    pub commune: Option<String>,
    pub province: Option<String>,
    pub gender: Option<String>,
    #[validate(range(min = 0, max = 150, message = "age is out of range"))]
    pub age: Option<i32>,
}

impl NewUser {
    /// Builds the row with an already hashed password.
    pub fn into_record(self, password_hash: String) -> UserActiveModel {
        UserActiveModel {
            phone: Set(self.phone),
            password: Set(password_hash),
            role: Set(Role::User),
            name: Set(self.name),
            email: Set(self.email),
            birth: Set(self.birth),
            address: Set(self.address),
            class_name: Set(self.class_name),
            district: Set(self.district),
            commune: Set(self.commune),
            province: Set(self.province),
            gender: Set(self.gender),
            age: Set(self.age),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[validate(length(min = 8, max = 15, message = "phone must be 8 to 15 characters"))]
    pub phone: Option<String>,
    pub role: Option<Role>,
    pub name: Option<String>,
    #[validate(email(message = "email is invalid"))]
    pub email: Option<String>,
    pub birth: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "class")]
    pub class_name: Option<String>,
    pub district: Option<String>,
    pub commune: Option<String>,
    pub province: Option<String>,
    pub gender: Option<String>,
    #[validate(range(min = 0, max = 150, message = "age is out of range"))]
    pub age: Option<i32>,
}

impl MergePatch<User> for UpdateUser {
    fn is_empty(&self) -> bool {
        self.phone.is_none()
            && self.role.is_none()
            && self.name.is_none()
            && self.email.is_none()
            && self.birth.is_none()
            && self.address.is_none()
            && self.class_name.is_none()
            && self.district.is_none()
            && self.commune.is_none()
            && self.province.is_none()
            && self.gender.is_none()
            && self.age.is_none()
    }

    fn merge_into(self, record: &mut UserActiveModel) {
        if let Some(phone) = self.phone {
            record.phone = Set(phone);
        }
        if let Some(role) = self.role {
            record.role = Set(role);
        }
        if self.name.is_some() {
            record.name = Set(self.name);
        }
        if self.email.is_some() {
            record.email = Set(self.email);
        }
        if self.birth.is_some() {
            record.birth = Set(self.birth);
        }
        if self.address.is_some() {
            record.address = Set(self.address);
        }
        if self.class_name.is_some() {
            record.class_name = Set(self.class_name);
        }
        if self.district.is_some() {
            record.district = Set(self.district);
        }
        if self.commune.is_some() {
            record.commune = Set(self.commune);
        }
        if self.province.is_some() {
            record.province = Set(self.province);
        }
        if self.gender.is_some() {
            record.gender = Set(self.gender);
        }
        if self.age.is_some() {
            record.age = Set(self.age);
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserPageParams {
    pub name: Option<String>,
    pub role: Option<Role>,
    #[serde(flatten)]
    #[validate(nested)]
    pub options: QueryOptions,
}

impl ResourceFilter<User> for UserPageParams {
    fn condition(&self) -> Condition {
        Condition::all()
            .add_option(self.name.as_ref().map(|n| UserColumn::Name.eq(n.as_str())))
            .add_option(self.role.map(|r| UserColumn::Role.eq(r)))
    }

    fn options(&self) -> &QueryOptions {
        &self.options
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePassword {
    /// Required unless the caller is an administrator.
    pub old_password: Option<String>,
    #[validate(custom(function = "validate_password"))]
    pub new_password: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewUserRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 8, max = 15, message = "phone must be 8 to 15 characters"))]
    pub phone: String,
    pub birth: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "class")]
    pub class_name: Option<String>,
    pub support_desc: Option<String>,
}

impl NewRecord<UserRequest> for NewUserRequest {
    fn into_record(self) -> UserRequestActiveModel {
        UserRequestActiveModel {
            name: Set(self.name),
            phone: Set(self.phone),
            birth: Set(self.birth),
            address: Set(self.address),
            class_name: Set(self.class_name),
            support_desc: Set(self.support_desc),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRequestPageParams {
    pub name: Option<String>,
    pub phone: Option<String>,
    #[serde(flatten)]
    #[validate(nested)]
    pub options: QueryOptions,
}

impl ResourceFilter<UserRequest> for UserRequestPageParams {
    fn condition(&self) -> Condition {
        Condition::all()
            .add_option(self.name.as_ref().map(|n| UserRequestColumn::Name.eq(n.as_str())))
            .add_option(self.phone.as_ref().map(|p| UserRequestColumn::Phone.eq(p.as_str())))
    }

    fn options(&self) -> &QueryOptions {
        &self.options
    }
}

/// Turns a pending request into an account.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AcceptRequest {
    #[validate(length(min = 1, message = "requestId is required"))]
    pub request_id: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub user: NewUser,
}
