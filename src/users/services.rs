use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    config::{AdminConfig, DEFAULT_ADMIN_PASSWORD},
    users::{
        error::UserResult,
        password::CredentialHasher,
        repo::UserStore,
        repo_types::{NewUser, User, ROLE_ADMIN},
    },
};

/// User lookups plus the default administrator bootstrap.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn CredentialHasher>,
    admin: AdminConfig,
}

impl UserService {
    pub fn new(
        store: Arc<dyn UserStore>,
        hasher: Arc<dyn CredentialHasher>,
        admin: AdminConfig,
    ) -> Self {
        Self {
            store,
            hasher,
            admin,
        }
    }

    #[instrument(skip(self))]
    pub async fn find_by_username(&self, username: &str) -> UserResult<Option<User>> {
        Ok(self.store.find_by_username(username).await?)
    }

    #[instrument(skip(self))]
    pub async fn user_exists(&self, username: &str) -> UserResult<bool> {
        Ok(self.store.exists_by_username(username).await?)
    }

    /// Creates the configured admin account unless one with that username exists.
    /// Returns the new record, or `None` when nothing was created.
    ///
    /// Check and insert are not atomic; a concurrent insert of the same username
    /// surfaces as a store error from `save`.
    #[instrument(skip(self), fields(username = %self.admin.username))]
    pub async fn create_default_admin_user(&self) -> UserResult<Option<User>> {
        if self.user_exists(&self.admin.username).await? {
            debug!("admin user already present");
            return Ok(None);
        }

        let password_hash = self.hasher.hash(&self.admin.password)?;
        let user = self
            .store
            .save(NewUser {
                username: self.admin.username.clone(),
                password_hash,
                role: ROLE_ADMIN.to_string(),
                enabled: true,
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, "admin user created");
        if self.admin.uses_default_password() {
            warn!("admin user created with the built-in default password; set ADMIN_PASSWORD");
        }
        Ok(Some(user))
    }

    /// Whether the stored admin still accepts the built-in default password.
    /// Read-only; `false` when there is no admin row.
    #[instrument(skip(self), fields(username = %self.admin.username))]
    pub async fn admin_has_default_password(&self) -> UserResult<bool> {
        let Some(admin) = self.find_by_username(&self.admin.username).await? else {
            return Ok(false);
        };
        Ok(self.hasher.verify(DEFAULT_ADMIN_PASSWORD, &admin.password_hash)?)
    }
}
