use chrono::Utc;
use newsboard_client::{
    api::{Comment, Navigation, VoteDirection},
    format, Affordances, Completion, Effect, InteractionState, Viewer, VoteStatusChange,
};
use yew::prelude::*;

use crate::{ui, util};

#[derive(Clone, PartialEq, Properties)]
pub struct CommentUnitProps {
    pub comment: Comment,
    pub viewer: Viewer,
    pub on_vote_status_change: Callback<VoteStatusChange>,
}

pub enum CommentUnitMsg {
    ReplyTextChanged(String),
    SubmitReply,
    Vote(VoteDirection),
    Completed(Completion),
}

pub struct CommentUnit {
    state: InteractionState,
}

impl CommentUnit {
    fn run_effects(&self, ctx: &Context<Self>, effects: Vec<Effect>) {
        for e in effects {
            match e {
                Effect::Navigate(nav) => util::navigate(&nav),
                Effect::VoteStatusChanged(change) => {
                    ctx.props().on_vote_status_change.emit(change)
                }
                Effect::Dispatch(req) => ctx.link().send_future(async move {
                    CommentUnitMsg::Completed(req.send(&*crate::API).await)
                }),
            }
        }
    }

    fn reply_box(&self, ctx: &Context<Self>) -> Html {
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            CommentUnitMsg::ReplyTextChanged(input.value())
        });
        html! {<>
            <div class="comment-content-reply-box">
                <textarea value={ self.state.reply_text().to_string() } { oninput } />
            </div>
            <div class="comment-content-reply-btn">
                <input
                    type="submit"
                    value="reply"
                    onclick={ ctx.link().callback(|_| CommentUnitMsg::SubmitReply) }
                />
                { for self.state.is_busy().then(|| html! { <span>{ " loading..." }</span> }) }
            </div>
            { for self.state.error().message().map(|msg| html! {
                <div class="comment-content-reply-error-msg">
                    <span>{ msg }</span>
                </div>
            }) }
        </>}
    }
}

impl Component for CommentUnit {
    type Message = CommentUnitMsg;
    type Properties = CommentUnitProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            state: InteractionState::new(&ctx.props().comment),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let viewer = &ctx.props().viewer;
        let effects = match msg {
            CommentUnitMsg::ReplyTextChanged(t) => {
                self.state.set_reply_text(t);
                Vec::new()
            }
            CommentUnitMsg::SubmitReply => self.state.submit_reply(viewer),
            CommentUnitMsg::Vote(direction) => self.state.request_vote(direction, viewer),
            CommentUnitMsg::Completed(completion) => self.state.complete(completion, viewer),
        };
        self.run_effects(ctx, effects);
        true
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.state.teardown();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let p = ctx.props();
        let a = Affordances::compute(&p.comment, self.state.voted_on_by_user(), &p.viewer);
        let on_vote = ctx.link().callback(CommentUnitMsg::Vote);
        html! {
            <div class="comment-content">
                <table>
                    <tbody>
                        <tr>
                            <td valign="top">
                                { for a.self_marker.then(|| html! {
                                    <div class="comment-content-star">
                                        <span>{ "*" }</span>
                                    </div>
                                }) }
                                <ui::VoteArrow
                                    direction={ VoteDirection::Up }
                                    control={ a.upvote }
                                    on_vote={ on_vote.clone() }
                                />
                                <ui::VoteArrow
                                    direction={ VoteDirection::Down }
                                    control={ a.downvote }
                                    { on_vote }
                                />
                            </td>
                            <td>
                                { details_line(&p.comment, &a, self.state.vote_tally()) }
                                <div class="comment-content-text">
                                    { util::raw_html(&p.comment.text) }
                                </div>
                            </td>
                        </tr>
                    </tbody>
                </table>
                { for a.reply_box.then(|| self.reply_box(ctx)) }
            </div>
        }
    }
}

fn details_line(c: &Comment, a: &Affordances, vote_tally: i64) -> Html {
    let sep = || html! { <span>{ " | " }</span> };
    html! {
        <div class="comment-content-details">
            <span class="comment-content-author">
                <span>
                    { format!(
                        "{} {} by\u{a0}",
                        format::format_points(vote_tally),
                        format::points_label(vote_tally),
                    ) }
                </span>
                <a href={ Navigation::User(c.by.clone()).to_url() }>{ &c.by.0 }</a>
            </span>
            <span class="comment-content-time">
                <a href={ Navigation::Comment(c.id.clone()).to_url() }>
                    { format::created_time_ago(c.created, Utc::now()) }
                </a>
            </span>
            { for a.dead_marker.then(|| html! {
                <span class="comment-content-dead">{ " [dead]" }</span>
            }) }
            { for a.unvote.then(|| html! {<>
                { sep() }
                <span class="comment-content-unvote">{ "un-vote" }</span>
            </>}) }
            { sep() }
            <span class="comment-content-parent">
                <a href={ a.parent_link.to_url() }>{ "parent" }</a>
            </span>
            { for a.favorite.map(|f| html! {<>
                { sep() }
                <span class="comment-content-favorite">{ f.text() }</span>
            </>}) }
            { for a.edit.as_ref().map(|nav| html! {<>
                { sep() }
                <span><a href={ nav.to_url() }>{ "edit" }</a></span>
            </>}) }
            { for a.delete.as_ref().map(|nav| html! {<>
                { sep() }
                <span><a href={ nav.to_url() }>{ "delete" }</a></span>
            </>}) }
            { sep() }
            <span>
                { "on:\u{a0}" }
                <a href={ Navigation::Item(c.parent_item_id.clone()).to_url() }>
                    { format::truncate_item_title(&c.parent_item_title) }
                </a>
            </span>
        </div>
    }
}
