use crate::{
    api::{Comment, Navigation},
    Viewer,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VoteControl {
    /// Clickable arrow
    Active,

    /// Inert arrow of the same size, keeps the column aligned
    Placeholder,

    /// Not rendered at all: the author sees the self-marker instead
    Hidden,
}

impl VoteControl {
    fn new(is_author: bool, allowed: bool) -> VoteControl {
        match (is_author, allowed) {
            (true, _) => VoteControl::Hidden,
            (false, true) => VoteControl::Active,
            (false, false) => VoteControl::Placeholder,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, VoteControl::Active)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FavoriteLabel {
    Favorite,
    Unfavorite,
}

impl FavoriteLabel {
    pub fn text(&self) -> &'static str {
        match self {
            FavoriteLabel::Favorite => "favorite",
            FavoriteLabel::Unfavorite => "un-favorite",
        }
    }
}

/// What a comment unit shows to a given viewer.
///
/// Recomputed from scratch on each render, `voted_on_by_user` being the
/// unit's own copy of the flag, which may be ahead of the comment's.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Affordances {
    pub self_marker: bool,
    pub upvote: VoteControl,
    pub downvote: VoteControl,
    pub unvote: bool,
    pub favorite: Option<FavoriteLabel>,
    pub edit: Option<Navigation>,
    pub delete: Option<Navigation>,
    pub dead_marker: bool,

    /// Covers the reply box as well as the reply error messages
    pub reply_box: bool,

    pub parent_link: Navigation,
}

impl Affordances {
    pub fn compute(comment: &Comment, voted_on_by_user: bool, viewer: &Viewer) -> Affordances {
        let is_author = viewer.is(&comment.by);
        let can_vote = !voted_on_by_user && !comment.dead;
        let can_edit = is_author && !comment.edit_and_delete_expired && !comment.dead;
        Affordances {
            self_marker: is_author,
            upvote: VoteControl::new(is_author, can_vote),
            downvote: VoteControl::new(is_author, can_vote && viewer.show_downvote_option),
            unvote: voted_on_by_user && !comment.unvote_expired && !comment.dead,
            favorite: viewer
                .show_favorite_option
                .then(|| match comment.favorited_by_user {
                    true => FavoriteLabel::Unfavorite,
                    false => FavoriteLabel::Favorite,
                }),
            edit: can_edit.then(|| Navigation::EditComment(comment.id.clone())),
            delete: can_edit.then(|| Navigation::DeleteComment {
                id: comment.id.clone(),
                goto: viewer.goto.clone(),
            }),
            dead_marker: comment.dead,
            reply_box: !comment.dead,
            parent_link: comment.parent_link(),
        }
    }
}
