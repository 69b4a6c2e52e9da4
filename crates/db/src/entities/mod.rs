//! Database entities.
//!
//! One module per table. Table and column names are part of the persisted
//! layout and must not change.

pub mod comment;
pub mod follower;
pub mod media;
pub mod post;
pub mod user;

pub use comment::Entity as Comment;
pub use follower::Entity as Follower;
pub use media::Entity as Media;
pub use post::Entity as Post;
pub use user::Entity as User;
