use crate::crud::ResourceService;
use edu_error::{web::WebError, WebResult};
use edu_models::{
    domain::prelude::{
        AcceptRequest, ChangePassword, Claims, LoginRequest, LoginResponse, MergePatch, NewUser,
        NewUserRequest, PageResult, UpdateUser, UserPageParams, UserRequestPageParams,
    },
    entities::prelude::{User, UserModel, UserRequest, UserRequestModel},
    settings::Jwt,
};
use edu_repository::{ResourceRepository, UserRepository, UserRequestRepository};
use edu_utils::{
    hash::{bcrypt_check, bcrypt_hash},
    jwt::encode_jwt,
};
use sea_orm::{ActiveModelTrait, ConnectionTrait, IntoActiveModel, Set, TransactionTrait};
use tracing::{info, instrument, warn};

pub const PHONE_TAKEN: &str = "Phone already taken";
pub const PASSWORD_RESET_FAILED: &str = "Password reset failed";
pub const BAD_CREDENTIALS: &str = "Incorrect phone or password";

fn hash_password(password: &str) -> WebResult<String> {
    bcrypt_hash(password).map_err(|e| WebError::InternalError(format!("Password hashing failed: {e}")))
}

pub struct AccountService;

impl AccountService {
    /// Creates a `user` account. The payload never chooses the role.
    #[instrument(name = "account-create-user", skip_all, fields(phone = %new.phone))]
    pub async fn create_user<C>(new: NewUser, db: &C) -> WebResult<UserModel>
    where
        C: ConnectionTrait,
    {
        if UserRepository::phone_taken(&new.phone, None, db).await? {
            return Err(WebError::BadRequest(PHONE_TAKEN.into()));
        }
        let password = hash_password(&new.password)?;
        let user = ResourceRepository::<User>::create(new.into_record(password), db).await?;
        info!(id = %user.id, "User created");
        Ok(user)
    }

    pub async fn get_user<C>(id: &str, db: &C) -> WebResult<Option<UserModel>>
    where
        C: ConnectionTrait,
    {
        ResourceService::<User>::get(id, db).await
    }

    pub async fn me<C>(id: &str, db: &C) -> WebResult<UserModel>
    where
        C: ConnectionTrait,
    {
        ResourceService::<User>::fetch(id, db).await
    }

    pub async fn list_users<C>(params: &UserPageParams, db: &C) -> WebResult<PageResult<UserModel>>
    where
        C: ConnectionTrait,
    {
        ResourceService::<User>::list(params, db).await
    }

    #[instrument(name = "account-update-user", skip(patch, db))]
    pub async fn update_user<C>(id: &str, patch: UpdateUser, db: &C) -> WebResult<UserModel>
    where
        C: ConnectionTrait,
    {
        if MergePatch::<User>::is_empty(&patch) {
            return Err(WebError::BadRequest(crate::crud::EMPTY_PATCH.into()));
        }
        let current = ResourceService::<User>::fetch(id, db).await?;
        if let Some(phone) = patch.phone.as_deref() {
            if UserRepository::phone_taken(phone, Some(&current.id), db).await? {
                return Err(WebError::BadRequest(PHONE_TAKEN.into()));
            }
        }
        let mut record = current.into_active_model();
        patch.merge_into(&mut record);
        Ok(ResourceRepository::<User>::update(record, db).await?)
    }

    pub async fn delete_user<C>(id: &str, db: &C) -> WebResult<UserModel>
    where
        C: ConnectionTrait,
    {
        ResourceService::<User>::delete(id, db).await
    }

    /// Files an account request. A newer request for the same phone replaces older ones.
    #[instrument(name = "account-request", skip_all, fields(phone = %new.phone))]
    pub async fn request_account<C>(new: NewUserRequest, db: &C) -> WebResult<UserRequestModel>
    where
        C: ConnectionTrait,
    {
        if UserRepository::phone_taken(&new.phone, None, db).await? {
            return Err(WebError::BadRequest(PHONE_TAKEN.into()));
        }
        let replaced = UserRequestRepository::delete_by_phone(&new.phone, db).await?;
        if replaced > 0 {
            info!(replaced, "Earlier requests for this phone dropped");
        }
        ResourceService::<UserRequest>::create(new, db).await
    }

    pub async fn list_requests<C>(
        params: &UserRequestPageParams,
        db: &C,
    ) -> WebResult<PageResult<UserRequestModel>>
    where
        C: ConnectionTrait,
    {
        ResourceService::<UserRequest>::list(params, db).await
    }

    pub async fn delete_request<C>(id: &str, db: &C) -> WebResult<UserRequestModel>
    where
        C: ConnectionTrait,
    {
        ResourceService::<UserRequest>::delete(id, db).await
    }

    /// Creates the account and drops the request in one transaction.
    ///
    /// An unknown `requestId` does not block the account creation.
    #[instrument(name = "account-accept-request", skip_all, fields(request_id = %accept.request_id))]
    pub async fn accept_request<C>(accept: AcceptRequest, db: &C) -> WebResult<UserModel>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let AcceptRequest { request_id, user } = accept;
        if UserRepository::phone_taken(&user.phone, None, db).await? {
            return Err(WebError::BadRequest(PHONE_TAKEN.into()));
        }
        let password = hash_password(&user.password)?;

        let created = db
            .transaction::<_, UserModel, WebError>(|txn| {
                Box::pin(async move {
                    let removed =
                        ResourceRepository::<UserRequest>::delete_by_id(&request_id, txn).await?;
                    if removed == 0 {
                        warn!(request_id = %request_id, "Accepted request no longer exists");
                    }
                    Ok(ResourceRepository::<User>::create(user.into_record(password), txn).await?)
                })
            })
            .await?;

        info!(id = %created.id, "Account request accepted");
        Ok(created)
    }

    /// Sets a new password for `target_id`.
    ///
    /// Administrators may reset anyone without the old password. Other callers
    /// may only change their own and must prove the old one. Every failure looks
    /// the same to the caller.
    #[instrument(name = "account-change-password", skip(caller, change, db), fields(caller = %caller.user_id))]
    pub async fn change_password<C>(
        caller: &Claims,
        target_id: &str,
        change: ChangePassword,
        db: &C,
    ) -> WebResult<()>
    where
        C: ConnectionTrait,
    {
        let failed = || WebError::Unauthorized(PASSWORD_RESET_FAILED.into());

        let user = ResourceRepository::<User>::find_by_id(target_id, db)
            .await
            .map_err(|_| failed())?
            .ok_or_else(failed)?;

        if !caller.is_admin() {
            let own_account = caller.user_id == user.id;
            let old_matches = change
                .old_password
                .as_deref()
                .is_some_and(|old| bcrypt_check(old, &user.password));
            if !(own_account && old_matches) {
                warn!("Password change rejected");
                return Err(failed());
            }
        }

        let password = bcrypt_hash(&change.new_password).map_err(|_| failed())?;
        let mut record = user.into_active_model();
        record.password = Set(password);
        record.update(db).await.map_err(|_| failed())?;
        info!("Password changed");
        Ok(())
    }

    /// Checks a phone and password pair.
    pub async fn authenticate<C>(phone: &str, password: &str, db: &C) -> WebResult<UserModel>
    where
        C: ConnectionTrait,
    {
        match UserRepository::find_by_phone(phone, db).await? {
            Some(user) if bcrypt_check(password, &user.password) => Ok(user),
            _ => Err(WebError::Unauthorized(BAD_CREDENTIALS.into())),
        }
    }

    /// Authenticates and issues an access token.
    #[instrument(name = "account-login", skip_all, fields(phone = %req.phone))]
    pub async fn login<C>(req: LoginRequest, jwt: &Jwt, db: &C) -> WebResult<LoginResponse>
    where
        C: ConnectionTrait,
    {
        let user = Self::authenticate(&req.phone, &req.password, db).await?;
        let claims = Claims::new(jwt.issuer.clone(), user.id.clone(), user.role, jwt.expire);
        let token = encode_jwt(&claims, jwt.secret.as_bytes(), None)
            .map_err(|e| WebError::InternalError(format!("Failed to issue token: {e}")))?;
        info!(id = %user.id, "User logged in");
        Ok(LoginResponse {
            user,
            token,
            expires: claims.exp,
        })
    }
}
