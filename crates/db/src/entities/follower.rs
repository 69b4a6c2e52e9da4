//! Follower entity (directed follow edges between users).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One edge of the follow graph. The pair is the primary key, so an edge
/// exists at most once per direction. Self-follow is not prevented here.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Follower")]
pub struct Model {
    /// The user who follows
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_from_id: i32,

    /// The user being followed
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_to_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserFromId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    UserFrom,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserToId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    UserTo,
}

impl ActiveModelBehavior for ActiveModel {}
