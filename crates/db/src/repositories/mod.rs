//! One zero-sized repository per table. Every method takes the pool
//! explicitly and returns a [`DbResult`](crate::DbResult).

mod category_repo;
mod comment_repo;
mod review_repo;
mod user_repo;

pub use category_repo::CategoryRepo;
pub use comment_repo::CommentRepo;
pub use review_repo::ReviewRepo;
pub use user_repo::UserRepo;
