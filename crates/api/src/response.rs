//! Response envelope types for API handlers.
//!
//! Each endpoint wraps its payload under a resource-named key
//! (`{ "categories": [...] }`, `{ "review": {...} }`).

use serde::Serialize;
use tabletop_db::models::category::Category;
use tabletop_db::models::comment::Comment;
use tabletop_db::models::review::{Review, ReviewWithCommentCount};
use tabletop_db::models::user::User;

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize)]
pub struct ReviewsResponse {
    pub reviews: Vec<ReviewWithCommentCount>,
}

/// `GET /api/reviews/{review_id}`. The key is plural for compatibility with
/// existing clients.
#[derive(Debug, Serialize)]
pub struct SingleReviewResponse {
    pub reviews: ReviewWithCommentCount,
}

#[derive(Debug, Serialize)]
pub struct UpdatedReviewResponse {
    pub review: Review,
}

#[derive(Debug, Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<Comment>,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub comment: Comment,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}
