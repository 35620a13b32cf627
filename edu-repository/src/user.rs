use edu_error::StorageResult;
use edu_models::entities::prelude::{User, UserColumn, UserModel};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryTrait};

pub struct UserRepository;

impl UserRepository {
    pub async fn find_by_phone<C>(phone: &str, db: &C) -> StorageResult<Option<UserModel>>
    where
        C: ConnectionTrait,
    {
        Ok(User::find()
            .filter(UserColumn::Phone.eq(phone))
            .one(db)
            .await?)
    }

    /// Whether `phone` belongs to a user other than `exclude_id`.
    pub async fn phone_taken<C>(phone: &str, exclude_id: Option<&str>, db: &C) -> StorageResult<bool>
    where
        C: ConnectionTrait,
    {
        let count = User::find()
            .filter(UserColumn::Phone.eq(phone))
            .apply_if(exclude_id, |q, id| q.filter(UserColumn::Id.ne(id)))
            .count(db)
            .await?;
        Ok(count > 0)
    }
}
