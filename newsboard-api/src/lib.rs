use async_trait::async_trait;
use chrono::Utc;
use std::fmt;

mod comment;
pub use comment::{AuthUser, Comment, CommentPageData, NewComment, VoteRequest};

mod error;
pub use error::{Error, SubmitCommentResponse, VoteResponse};

mod nav;
pub use nav::Navigation;

pub type Time = chrono::DateTime<Utc>;

/// Maximum length of a comment body, as measured by `comment_length`
pub const MAX_COMMENT_LENGTH: usize = 5000;

/// Length of a comment body the way browsers count it, in UTF-16 code units:
/// characters outside the BMP, like most emoji, count twice.
pub fn comment_length(text: &str) -> usize {
    text.encode_utf16().count()
}

macro_rules! string_id {
    ($name:ident) => {
        #[derive(
            Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> $name {
                $name(id.into())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(CommentId);
string_id!(ItemId);
string_id!(UserId);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    /// Change applied to the vote tally once a vote of this direction went through
    pub fn delta(&self) -> i64 {
        match self {
            VoteDirection::Up => 1,
            VoteDirection::Down => -1,
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            VoteDirection::Up => "upvote",
            VoteDirection::Down => "downvote",
        }
    }
}

/// Remote operations a comment unit needs from the server.
///
/// `Err` is reserved for transport failures: anything the server actually
/// answered is reported through the response flags.
#[async_trait(?Send)]
pub trait CommentApi {
    async fn submit_comment(&self, comment: NewComment) -> anyhow::Result<SubmitCommentResponse>;
    async fn upvote_comment(&self, id: &CommentId, parent_item_id: &ItemId)
        -> anyhow::Result<VoteResponse>;
    async fn downvote_comment(
        &self,
        id: &CommentId,
        parent_item_id: &ItemId,
    ) -> anyhow::Result<VoteResponse>;

    async fn cast_vote(
        &self,
        direction: VoteDirection,
        id: &CommentId,
        parent_item_id: &ItemId,
    ) -> anyhow::Result<VoteResponse> {
        match direction {
            VoteDirection::Up => self.upvote_comment(id, parent_item_id).await,
            VoteDirection::Down => self.downvote_comment(id, parent_item_id).await,
        }
    }
}
