use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::{CommentId, ItemId, UserId};

// Same set as javascript's encodeURIComponent
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Pages the comment unit can send the browser to
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Navigation {
    Login { goto: String },
    Comment(CommentId),
    Item(ItemId),
    User(UserId),
    EditComment(CommentId),
    DeleteComment { id: CommentId, goto: String },
}

impl Navigation {
    pub fn login(goto: &str) -> Navigation {
        Navigation::Login {
            goto: goto.to_string(),
        }
    }

    pub fn to_url(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Navigation::Login { goto } => {
                write!(f, "/login?goto={}", utf8_percent_encode(goto, URI_COMPONENT))
            }
            Navigation::Comment(id) => write!(f, "/comment?id={id}"),
            Navigation::Item(id) => write!(f, "/item?id={id}"),
            Navigation::User(id) => write!(f, "/user?id={id}"),
            Navigation::EditComment(id) => write!(f, "/edit-comment?id={id}"),
            Navigation::DeleteComment { id, goto } => write!(
                f,
                "/delete-comment?id={id}&goto={}",
                utf8_percent_encode(goto, URI_COMPONENT)
            ),
        }
    }
}
