use crate::{CommentId, ItemId, Navigation, Time, UserId};

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub by: UserId,

    /// Root discussion item this comment belongs to
    pub parent_item_id: ItemId,
    #[serde(default)]
    pub parent_item_title: String,

    /// Whether this comment answers the root item directly
    #[serde(default)]
    pub is_parent: bool,
    #[serde(default)]
    pub parent_comment_id: Option<CommentId>,

    /// Pre-rendered HTML, sanitized server-side
    pub text: String,
    pub points: i64,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: Time,

    #[serde(default)]
    pub dead: bool,
    #[serde(default)]
    pub voted_on_by_user: bool,
    #[serde(default)]
    pub unvote_expired: bool,
    #[serde(default)]
    pub edit_and_delete_expired: bool,
    #[serde(default)]
    pub favorited_by_user: bool,
}

impl Comment {
    pub fn parent_link(&self) -> Navigation {
        match (&self.parent_comment_id, self.is_parent) {
            (Some(parent), false) => Navigation::Comment(parent.clone()),
            _ => Navigation::Item(self.parent_item_id.clone()),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub parent_item_id: ItemId,
    pub is_parent: bool,
    pub parent_comment_id: Option<CommentId>,
    pub text: String,
}

impl NewComment {
    pub fn reply_to(parent: &Comment, text: String) -> NewComment {
        NewComment {
            parent_item_id: parent.parent_item_id.clone(),
            is_parent: false,
            parent_comment_id: Some(parent.id.clone()),
            text,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub id: CommentId,
    pub parent_item_id: ItemId,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthUser {
    pub signed_in: bool,
    pub username: Option<UserId>,
    pub show_downvote: bool,
}

/// Everything a page needs to render a single comment unit
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPageData {
    pub comment: Comment,
    #[serde(default)]
    pub auth_user: AuthUser,
}
