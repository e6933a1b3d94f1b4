//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{User, UserRole};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub user_name: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Credential columns are written by sign-up, never read here
    pub password: String,
    pub salt: String,
    pub country: Option<String>,
    pub about_me: Option<String>,
    pub dob: Option<Date>,
    pub contact_number: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity.
///
/// Fails when the stored role is outside the closed role set.
impl TryFrom<Model> for User {
    type Error = domain::DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(User {
            id: model.id,
            role: model.role.parse::<UserRole>()?,
            first_name: model.first_name,
            last_name: model.last_name,
            user_name: model.user_name,
            email: model.email,
            country: model.country,
            about_me: model.about_me,
            dob: model.dob,
            contact_number: model.contact_number,
        })
    }
}
