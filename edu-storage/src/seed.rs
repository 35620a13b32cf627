use edu_models::{
    entities::prelude::{User, UserActiveModel, UserColumn},
    enums::common::Role,
    settings::Admin,
};
use edu_utils::hash::bcrypt_hash;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, Set};
use tracing::{info, instrument, warn};

/// Creates the configured administrator when the user table holds no admin yet.
#[instrument(name = "seed-admin", skip_all)]
pub(crate) async fn ensure_admin<C: ConnectionTrait>(db: &C, admin: &Admin) -> Result<(), DbErr> {
    let existing = User::find()
        .filter(UserColumn::Role.eq(Role::Admin))
        .one(db)
        .await?;
    if existing.is_some() {
        return Ok(());
    }

    let phone_taken = User::find()
        .filter(UserColumn::Phone.eq(admin.phone.as_str()))
        .one(db)
        .await?
        .is_some();
    if phone_taken {
        warn!(phone = %admin.phone, "Administrator phone belongs to another user, skipping seed");
        return Ok(());
    }

    let password = bcrypt_hash(&admin.password).map_err(|e| DbErr::Custom(e.to_string()))?;
    UserActiveModel {
        phone: Set(admin.phone.clone()),
        password: Set(password),
        role: Set(Role::Admin),
        name: Set(Some(admin.name.clone())),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!(phone = %admin.phone, "Administrator account created");
    Ok(())
}
