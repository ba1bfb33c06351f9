use sea_orm::{DeriveActiveEnum, EnumIter, entity::prelude::StringLen};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// Roles a user can hold in the parking directory
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    #[sea_orm(string_value = "PROFESSOR")]
    Professor,
    #[sea_orm(string_value = "STUDENT")]
    Student,
    #[sea_orm(string_value = "CONCIERGE")]
    Concierge,
}

/// User entity as held by the record store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned identifier
    pub id: i64,
    /// Email address (unique)
    pub email: String,
    pub name: String,
    /// Primary surname
    pub last_name1: String,
    /// Secondary surname
    pub last_name2: Option<String>,
    pub role: Role,
}

/// A user that has not been persisted yet, so it has no id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub last_name1: String,
    pub last_name2: Option<String>,
    pub role: Role,
}

/// Payload for registering a user.
///
/// Every field is optional on the wire so that a missing field is reported as
/// a validation failure naming that field instead of a decoding error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    pub email: Option<String>,
    pub name: Option<String>,
    pub last_name1: Option<String>,
    pub last_name2: Option<String>,
    pub role: Option<Role>,
}

/// Sparse set of field changes applied by an update.
///
/// Absent fields (or JSON `null`) leave the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartialUpdate {
    pub email: Option<String>,
    pub name: Option<String>,
    pub last_name1: Option<String>,
    pub last_name2: Option<String>,
    pub role: Option<Role>,
}

/// Required registration fields, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RequiredField {
    #[strum(serialize = "email")]
    Email,
    #[strum(serialize = "name")]
    Name,
    #[strum(serialize = "lastName1")]
    LastName1,
}

impl RequiredField {
    /// Client-facing message reported when the field is missing
    pub fn message(&self) -> &'static str {
        match self {
            RequiredField::Email => "El correo es obligatorio",
            RequiredField::Name => "El nombre es obligatorio",
            RequiredField::LastName1 => "El primer apellido es obligatorio",
        }
    }
}

impl NewUser {
    /// Build a record from registration input that already passed validation.
    pub fn from_registration(input: RegistrationInput) -> Self {
        Self {
            email: input.email.unwrap_or_default(),
            name: input.name.unwrap_or_default(),
            last_name1: input.last_name1.unwrap_or_default(),
            last_name2: input.last_name2,
            role: input.role.unwrap_or_default(),
        }
    }
}

impl User {
    /// Attach a store-assigned id to a new user
    pub fn with_id(id: i64, new_user: NewUser) -> Self {
        Self {
            id,
            email: new_user.email,
            name: new_user.name,
            last_name1: new_user.last_name1,
            last_name2: new_user.last_name2,
            role: new_user.role,
        }
    }

    /// Overwrite the fields present in the patch, keeping the rest.
    pub fn apply_update(&mut self, update: PartialUpdate) {
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(last_name1) = update.last_name1 {
            self.last_name1 = last_name1;
        }
        if let Some(last_name2) = update.last_name2 {
            self.last_name2 = Some(last_name2);
        }
        if let Some(role) = update.role {
            self.role = role;
        }
    }
}
