use crate::api::{AuthUser, UserId};

/// Who is looking at the comment, and where they should come back to after logging in
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Viewer {
    pub current_user: Option<UserId>,
    pub signed_in: bool,
    pub show_favorite_option: bool,
    pub show_downvote_option: bool,

    /// Return destination, sent percent-encoded as the `goto` of login redirects
    pub goto: String,
}

impl Viewer {
    pub fn signed_out(goto: impl Into<String>) -> Viewer {
        Viewer {
            goto: goto.into(),
            ..Viewer::default()
        }
    }

    pub fn from_auth_user(auth: &AuthUser, goto: impl Into<String>) -> Viewer {
        Viewer {
            current_user: auth.username.clone(),
            signed_in: auth.signed_in,
            show_favorite_option: false,
            show_downvote_option: auth.show_downvote,
            goto: goto.into(),
        }
    }

    pub fn is(&self, user: &UserId) -> bool {
        self.current_user.as_ref() == Some(user)
    }
}
