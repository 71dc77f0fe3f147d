use newsboard_client::{api::VoteDirection, VoteControl};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct VoteArrowProps {
    pub direction: VoteDirection,
    pub control: VoteControl,
    pub on_vote: Callback<VoteDirection>,
}

#[function_component(VoteArrow)]
pub fn vote_arrow(p: &VoteArrowProps) -> Html {
    let class = match p.direction {
        VoteDirection::Up => "comment-content-upvote",
        VoteDirection::Down => "comment-content-downvote",
    };
    match p.control {
        VoteControl::Hidden => html! {},
        VoteControl::Placeholder => html! {
            <div class={ classes!(class, "hide") }>
                <span></span>
            </div>
        },
        VoteControl::Active => {
            let direction = p.direction;
            html! {
                <div class={ class } onclick={ p.on_vote.reform(move |_| direction) }>
                    <span></span>
                </div>
            }
        }
    }
}
