//! Yip entity for SeaORM.
//!
//! Column names follow the persisted `yips` table, which predates this crate.

use sea_orm::{NotSet, Set};
use sea_orm::entity::prelude::*;

use yipper_core::domain::{NewYip, Yip};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "yips")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub yip: String,
    pub hashtag: String,
    pub likes: i64,
    pub date: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Yip.
impl From<Model> for Yip {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            author: model.name,
            body: model.yip,
            hashtag: model.hashtag,
            likes: model.likes,
            created_at: model.date,
        }
    }
}

/// Conversion from a not-yet-stored yip to an ActiveModel; the store assigns the id.
impl From<&NewYip> for ActiveModel {
    fn from(new: &NewYip) -> Self {
        Self {
            id: NotSet,
            name: Set(new.author.clone()),
            yip: Set(new.body.clone()),
            hashtag: Set(new.hashtag.clone()),
            likes: Set(0),
            date: Set(new.created_at.clone()),
        }
    }
}
