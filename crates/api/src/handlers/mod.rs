pub mod categories;
pub mod comments;
pub mod reviews;
pub mod users;
