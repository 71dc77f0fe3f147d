mod affordances;
pub use affordances::{Affordances, FavoriteLabel, VoteControl};

pub mod format;

mod http;
pub use http::HttpApi;

mod interaction;
pub use interaction::{Completion, Effect, InteractionState, ReplyError, Request, VoteStatusChange};

mod viewer;
pub use viewer::Viewer;

pub mod api {
    pub use newsboard_api::*;
}
