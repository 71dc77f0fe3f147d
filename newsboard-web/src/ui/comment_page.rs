use newsboard_client::{
    api::{CommentId, CommentPageData},
    Viewer, VoteStatusChange,
};
use yew::prelude::*;

use crate::{ui, util};

pub enum CommentPageMsg {
    Loaded(anyhow::Result<CommentPageData>),
    VoteStatusChanged(VoteStatusChange),
}

enum PageState {
    Loading,
    Failed(String),
    Loaded(CommentPageData),
}

/// Permalink page of a single comment, owning the authoritative copy of it
pub struct CommentPage {
    state: PageState,
    goto: String,
}

impl Component for CommentPage {
    type Message = CommentPageMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let state = match util::query_param("id") {
            None => PageState::Failed(String::from("No such comment.")),
            Some(id) => {
                let id = CommentId(id);
                ctx.link().send_future(async move {
                    CommentPageMsg::Loaded(crate::API.fetch_comment_page(&id).await)
                });
                PageState::Loading
            }
        };
        CommentPage {
            state,
            goto: util::current_goto(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CommentPageMsg::Loaded(Ok(data)) => self.state = PageState::Loaded(data),
            CommentPageMsg::Loaded(Err(err)) => {
                tracing::error!(?err, "failed loading comment");
                self.state = PageState::Failed(String::from("An error occurred."));
            }
            CommentPageMsg::VoteStatusChanged(change) => match &mut self.state {
                PageState::Loaded(data) if data.comment.id == change.comment_id => {
                    data.comment.voted_on_by_user = change.voted_on_by_user;
                }
                _ => {
                    tracing::warn!(?change, "vote status change for a comment not on this page");
                    return false;
                }
            },
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &self.state {
            PageState::Loading => html! { <div class="comment-page">{ "Loading..." }</div> },
            PageState::Failed(msg) => html! { <div class="comment-page">{ msg }</div> },
            PageState::Loaded(data) => {
                let mut viewer = Viewer::from_auth_user(&data.auth_user, self.goto.clone());
                viewer.show_favorite_option = data.auth_user.signed_in;
                html! {
                    <div class="comment-page">
                        <ui::CommentUnit
                            comment={ data.comment.clone() }
                            { viewer }
                            on_vote_status_change={
                                ctx.link().callback(CommentPageMsg::VoteStatusChanged)
                            }
                        />
                    </div>
                }
            }
        }
    }
}
