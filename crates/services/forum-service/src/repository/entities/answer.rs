//! Answer database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::Answer;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "answers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub content: String,
    pub created_at: DateTimeUtc,
    pub user_id: Uuid,
    pub question_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::question::Entity",
        from = "Column::QuestionId",
        to = "super::question::Column::Id",
        on_delete = "Cascade"
    )]
    Question,
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Answer {
    fn from(model: Model) -> Self {
        Answer {
            id: model.id,
            content: model.content,
            created_at: model.created_at,
            author_id: model.user_id,
            question_id: model.question_id,
        }
    }
}

impl From<Answer> for ActiveModel {
    fn from(answer: Answer) -> Self {
        ActiveModel {
            id: Set(answer.id),
            content: Set(answer.content),
            created_at: Set(answer.created_at),
            user_id: Set(answer.author_id),
            question_id: Set(answer.question_id),
        }
    }
}
