//! Repositories: explicit lookups along foreign-key references.

mod comment;
mod follower;
mod media;
mod post;
mod user;

pub use comment::CommentRepository;
pub use follower::FollowerRepository;
pub use media::MediaRepository;
pub use post::PostRepository;
pub use user::UserRepository;
