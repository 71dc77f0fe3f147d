mod comment_page;
pub use comment_page::CommentPage;

mod comment_unit;
pub use comment_unit::CommentUnit;

mod vote_arrow;
pub use vote_arrow::VoteArrow;
