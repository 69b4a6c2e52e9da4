//! Media entity (attachments of a post).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Kind of an attachment.
///
/// Stored as a short string. Any other stored value fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[sea_orm(string_value = "image")]
    Image,
    #[sea_orm(string_value = "video")]
    Video,
    #[sea_orm(string_value = "audio")]
    Audio,
    #[sea_orm(string_value = "other")]
    Other,
}

impl MediaType {
    /// Stored representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Other => "other",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Media")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub media_type: MediaType,

    /// Locator of the stored file, opaque to this layer
    #[sea_orm(column_type = "Text")]
    pub url: String,

    #[sea_orm(indexed)]
    pub post_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id",
        on_delete = "Cascade"
    )]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Iterable;

    #[test]
    fn test_media_type_round_trips_stored_values() {
        for kind in MediaType::iter() {
            let stored = kind.to_value();
            assert_eq!(stored, kind.as_str());
            assert_eq!(MediaType::try_from_value(&stored).ok(), Some(kind));
        }
    }

    #[test]
    fn test_media_type_rejects_unknown_value() {
        assert!(MediaType::try_from_value(&"gif".to_string()).is_err());
        assert!(MediaType::try_from_value(&"IMAGE".to_string()).is_err());
        assert!(MediaType::try_from_value(&String::new()).is_err());
    }

    #[test]
    fn test_media_type_serde_uses_lowercase() {
        let json = serde_json::to_string(&MediaType::Video).unwrap_or_default();
        assert_eq!(json, "\"video\"");
        assert!(serde_json::from_str::<MediaType>("\"document\"").is_err());
    }
}
