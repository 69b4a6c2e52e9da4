//! User entity.

use sea_orm::entity::prelude::*;
use serde::Deserialize;
use serde_json::{Value, json};

/// Stored user record.
///
/// Deliberately not `Serialize`: the only outward shape is [`Model::serialize`].
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize)]
#[sea_orm(table_name = "User")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "String(StringLen::N(30))")]
    pub username: String,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub firstname: String,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub lastname: String,

    /// Unique across all users
    #[sea_orm(column_type = "String(StringLen::N(120))", unique)]
    pub email: String,

    /// Opaque credential, stored as given
    #[sea_orm(column_type = "Text")]
    pub password: String,

    pub is_active: bool,
}

impl Model {
    /// Outward-facing mapping of this user.
    ///
    /// Contains exactly `id`, `email`, `username` and `is_active`. The
    /// password, names and relationships are never included.
    #[must_use]
    pub fn serialize(&self) -> Value {
        json!({
            "id": self.id,
            "email": self.email,
            "username": self.username,
            "is_active": self.is_active,
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Posts,

    #[sea_orm(has_many = "super::comment::Entity")]
    Comments,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Posts.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

/// Users that a user follows, through `Follower.user_from_id`.
#[derive(Debug)]
pub struct Followees;

impl Linked for Followees {
    type FromEntity = Entity;
    type ToEntity = Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::follower::Relation::UserFrom.def().rev(),
            super::follower::Relation::UserTo.def(),
        ]
    }
}

/// Users that follow a user, through `Follower.user_to_id`.
#[derive(Debug)]
pub struct Followers;

impl Linked for Followers {
    type FromEntity = Entity;
    type ToEntity = Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::follower::Relation::UserTo.def().rev(),
            super::follower::Relation::UserFrom.def(),
        ]
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada(password: &str) -> Model {
        Model {
            id: 1,
            username: "ada".to_string(),
            firstname: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            email: "a@x.com".to_string(),
            password: password.to_string(),
            is_active: true,
        }
    }

    #[test]
    fn test_serialize_example() {
        let value = ada("secret").serialize();
        assert_eq!(
            value,
            json!({"id": 1, "email": "a@x.com", "username": "ada", "is_active": true})
        );
    }

    #[test]
    fn test_serialize_has_exactly_public_keys() {
        let value = ada("secret").serialize();
        let object = value.as_object().expect("object");
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["email", "id", "is_active", "username"]);
    }

    #[test]
    fn test_serialize_never_leaks_password() {
        let passwords = [
            "",
            "secret",
            "\"password\": \"x\"",
            "pässwörd 🔑",
            "Ada",
            "a@x.com",
            "\0\n\t",
        ];

        for password in passwords {
            let value = ada(password).serialize();
            let object = value.as_object().expect("object");
            assert!(!object.contains_key("password"));
            assert!(!object.contains_key("firstname"));
            assert!(!object.contains_key("lastname"));
            if !password.is_empty() && password != "a@x.com" {
                assert!(
                    !object.values().any(|v| v.as_str() == Some(password)),
                    "password value leaked for {password:?}"
                );
            }
        }
    }

    #[test]
    fn test_serialize_inactive_user() {
        let mut user = ada("secret");
        user.is_active = false;
        assert_eq!(user.serialize()["is_active"], json!(false));
    }
}
