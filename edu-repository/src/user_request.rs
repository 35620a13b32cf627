use edu_error::StorageResult;
use edu_models::entities::prelude::{UserRequest, UserRequestColumn};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

pub struct UserRequestRepository;

impl UserRequestRepository {
    /// Removes every pending request filed under `phone`.
    pub async fn delete_by_phone<C>(phone: &str, db: &C) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(UserRequest::delete_many()
            .filter(UserRequestColumn::Phone.eq(phone))
            .exec(db)
            .await?
            .rows_affected)
    }
}
