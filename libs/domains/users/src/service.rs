use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, PartialUpdate, RegistrationInput, RequiredField, User};
use crate::repository::UserRepository;

/// Service layer for User business logic
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List every user in creation order
    pub async fn list_all(&self) -> UserResult<Vec<User>> {
        self.repository.find_all().await
    }

    /// Register a new user after validating required fields and email uniqueness
    pub async fn register(&self, input: RegistrationInput) -> UserResult<User> {
        validate_registration(&input)?;

        let new_user = NewUser::from_registration(input);
        if self.user_exists(&new_user.email).await? {
            return Err(UserError::DuplicateEmail(new_user.email));
        }

        self.repository.save_new(new_user).await
    }

    /// Check whether any user is registered with this email
    pub async fn user_exists(&self, email: &str) -> UserResult<bool> {
        Ok(self.repository.find_by_email(email).await?.is_some())
    }

    /// Get a user by ID. A missing user is not an error.
    pub async fn get_user(&self, id: i64) -> UserResult<Option<User>> {
        self.repository.find_by_id(id).await
    }

    /// Delete a user by ID
    pub async fn delete_user_by_id(&self, id: i64) -> UserResult<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(UserError::NotFound(id));
        }

        self.repository.delete_by_id(id).await
    }

    /// Apply a partial update to an existing user.
    ///
    /// Present fields overwrite the stored ones. The merged record is not
    /// validated again and its email is not checked for uniqueness.
    pub async fn update_user(&self, id: i64, patch: PartialUpdate) -> UserResult<User> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        user.apply_update(patch);
        self.repository.save(user).await
    }
}

/// Reports the first missing required field, checking email, name, lastName1 in that order.
fn validate_registration(input: &RegistrationInput) -> UserResult<()> {
    let required = [
        (RequiredField::Email, &input.email),
        (RequiredField::Name, &input.name),
        (RequiredField::LastName1, &input.last_name1),
    ];

    for (field, value) in required {
        if value.as_deref().is_none_or(str::is_empty) {
            tracing::debug!(field = %field, "Registration rejected");
            return Err(UserError::ValidationFailed(field));
        }
    }

    Ok(())
}
