use newsboard_client::{
    api::{AuthUser, CommentId, Navigation, VoteDirection, MAX_COMMENT_LENGTH},
    Affordances, Effect, InteractionState, ReplyError, Viewer, VoteControl, VoteStatusChange,
};
use newsboard_mock_server::RecordedRequest;
use tests::*;

fn login_to(id: &str) -> Effect {
    Effect::Navigate(Navigation::login(&goto(id)))
}

fn voted(id: &str) -> Effect {
    Effect::VoteStatusChanged(VoteStatusChange {
        comment_id: CommentId::new(id),
        voted_on_by_user: true,
    })
}

#[tokio::test]
async fn signed_in_upvote() {
    let c = comment("5", 10);
    let server = server_with(&c);
    let api = server.session(Some(VOTER));
    let v = viewer(VOTER, "5");
    let mut state = InteractionState::new(&c);

    let effects = state.request_vote(VoteDirection::Up, &v);
    let out = state.settle(&api, &v, effects).await;

    assert_eq!(out, vec![voted("5")]);
    assert_eq!(state.vote_tally(), 11);
    assert!(state.voted_on_by_user());
    assert!(!state.is_busy());
    assert_eq!(server.comment(&c.id).unwrap().points, 11);
    // the input comment is never written to
    assert!(!c.voted_on_by_user);
}

#[tokio::test]
async fn signed_out_downvote_redirects_to_login() {
    let c = comment("5", 10);
    let server = server_with(&c);
    let api = server.session(None);
    let v = Viewer::from_auth_user(&AuthUser::default(), goto("5"));
    let mut state = InteractionState::new(&c);

    let effects = state.request_vote(VoteDirection::Down, &v);
    let out = state.settle(&api, &v, effects).await;

    assert_eq!(out, vec![login_to("5")]);
    assert_eq!(
        out[0],
        Effect::Navigate(Navigation::Login {
            goto: String::from("comment?id=5")
        })
    );
    if let Effect::Navigate(nav) = &out[0] {
        assert_eq!(nav.to_url(), "/login?goto=comment%3Fid%3D5");
    }
    assert_eq!(state.vote_tally(), 10);
    assert!(!state.voted_on_by_user());
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn empty_reply_sends_nothing() {
    let c = comment("5", 10);
    let server = server_with(&c);
    let api = server.session(Some(VOTER));
    let v = viewer(VOTER, "5");
    let mut state = InteractionState::new(&c);

    state.set_reply_text(String::new());
    let effects = state.submit_reply(&v);
    let out = state.settle(&api, &v, effects).await;

    assert!(out.is_empty());
    assert_eq!(state.error(), ReplyError::TextRequired);
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn over_long_reply_sends_nothing() {
    let c = comment("5", 10);
    let server = server_with(&c);
    let api = server.session(Some(VOTER));
    let v = viewer(VOTER, "5");
    let mut state = InteractionState::new(&c);

    state.set_reply_text("x".repeat(MAX_COMMENT_LENGTH + 1));
    let effects = state.submit_reply(&v);
    let out = state.settle(&api, &v, effects).await;

    assert!(out.is_empty());
    assert_eq!(state.error(), ReplyError::TextTooLong);
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn successful_reply_goes_to_permalink() {
    let c = comment("5", 10);
    let server = server_with(&c);
    let api = server.session(Some(VOTER));
    let v = viewer(VOTER, "5");
    let mut state = InteractionState::new(&c);

    state.set_reply_text(String::from("Agreed, it loads fast."));
    let effects = state.submit_reply(&v);
    let out = state.settle(&api, &v, effects).await;

    assert_eq!(
        out,
        vec![Effect::Navigate(Navigation::Comment(CommentId::new("5")))]
    );
    assert_eq!(state.error(), ReplyError::None);
    assert!(!state.is_busy());
    let replies = server.replies_to(&c.id);
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].text, "Agreed, it loads fast.");
    assert_eq!(replies[0].parent_item_id, c.parent_item_id);
    assert!(!replies[0].is_parent);
}

#[tokio::test]
async fn reply_with_expired_session_redirects() {
    let c = comment("5", 10);
    let server = server_with(&c);
    // the page believed we were signed in, the server disagrees
    let api = server.session(None);
    let v = viewer(VOTER, "5");
    let mut state = InteractionState::new(&c);

    state.set_reply_text(String::from("hello"));
    let effects = state.submit_reply(&v);
    let out = state.settle(&api, &v, effects).await;

    assert_eq!(out, vec![login_to("5")]);
    assert_eq!(state.error(), ReplyError::None);
    assert!(!state.is_busy());
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn vote_with_expired_session_keeps_flag() {
    let c = comment("5", 10);
    let server = server_with(&c);
    let api = server.session(None);
    let v = viewer(VOTER, "5");
    let mut state = InteractionState::new(&c);

    let effects = state.request_vote(VoteDirection::Up, &v);
    let out = state.settle(&api, &v, effects).await;

    assert_eq!(out, vec![voted("5"), login_to("5")]);
    assert_eq!(state.vote_tally(), 10);
    assert!(state.voted_on_by_user());
    assert_eq!(server.comment(&c.id).unwrap().points, 10);
}

#[tokio::test]
async fn network_failures() {
    let c = comment("5", 10);
    let server = server_with(&c);
    let api = server.session(Some(VOTER));
    let v = viewer(VOTER, "5");

    server.fail_next_requests(2);

    let mut replying = InteractionState::new(&c);
    replying.set_reply_text(String::from("hello"));
    let effects = replying.submit_reply(&v);
    assert!(replying.settle(&api, &v, effects).await.is_empty());
    assert_eq!(replying.error(), ReplyError::SubmitFailed);
    assert!(!replying.is_busy());

    let mut voting = InteractionState::new(&c);
    let effects = voting.request_vote(VoteDirection::Down, &v);
    assert_eq!(voting.settle(&api, &v, effects).await, vec![voted("5")]);
    assert_eq!(voting.vote_tally(), 10);
    assert!(!voting.is_busy());

    // a fresh attempt at the reply goes through
    let effects = replying.submit_reply(&v);
    assert_eq!(
        replying.settle(&api, &v, effects).await,
        vec![Effect::Navigate(Navigation::Comment(CommentId::new("5")))]
    );
    assert_eq!(replying.error(), ReplyError::None);
}

#[tokio::test]
async fn one_request_in_flight() {
    let c = comment("5", 10);
    let server = server_with(&c);
    let api = server.session(Some(VOTER));
    let v = viewer(VOTER, "5");
    let mut state = InteractionState::new(&c);

    state.set_reply_text(String::from("first"));
    let first = state.submit_reply(&v);
    assert_eq!(first.len(), 1);
    assert!(state.is_busy());

    // clicks while the reply is pending are dropped
    assert!(state.submit_reply(&v).is_empty());
    assert!(state.request_vote(VoteDirection::Up, &v).is_empty());
    assert!(state.request_vote(VoteDirection::Down, &v).is_empty());

    state.settle(&api, &v, first).await;
    assert_eq!(server.requests().len(), 1);
    assert!(matches!(
        server.requests()[0],
        RecordedRequest::SubmitComment(_)
    ));
    assert!(!state.is_busy());
}

#[tokio::test]
async fn instances_are_independent() {
    let a = comment("5", 10);
    let b = comment("6", 3);
    let server = server_with(&a);
    server.add_comment(b.clone());
    let api = server.session(Some(VOTER));
    let v = viewer(VOTER, "5");

    let mut first = InteractionState::new(&a);
    let mut second = InteractionState::new(&b);
    let pending = first.request_vote(VoteDirection::Up, &v);
    assert!(first.is_busy());

    let effects = second.request_vote(VoteDirection::Down, &v);
    assert_eq!(second.settle(&api, &v, effects).await, vec![voted("6")]);
    assert_eq!(second.vote_tally(), 2);

    first.settle(&api, &v, pending).await;
    assert_eq!(first.vote_tally(), 11);
}

#[tokio::test]
async fn page_reflects_vote_after_reload() {
    let c = comment("5", 10);
    let server = server_with(&c);
    let api = server.session(Some(VOTER));
    let v = viewer(VOTER, "5");
    let mut state = InteractionState::new(&c);

    let effects = state.request_vote(VoteDirection::Up, &v);
    state.settle(&api, &v, effects).await;

    let reloaded = api.page_data(&c.id).unwrap();
    assert!(reloaded.comment.voted_on_by_user);
    let fresh = InteractionState::new(&reloaded.comment);
    let a = Affordances::compute(&reloaded.comment, fresh.voted_on_by_user(), &v);
    assert_eq!(a.upvote, VoteControl::Placeholder);
    assert_eq!(a.downvote, VoteControl::Placeholder);
    assert!(a.unvote);
    assert_eq!(fresh.vote_tally(), 11);
}

#[tokio::test]
async fn dead_comment_shows_nothing_to_act_on() {
    let mut c = comment("5", 10);
    c.dead = true;
    let v = viewer(VOTER, "5");
    let a = Affordances::compute(&c, false, &v);
    assert!(a.dead_marker);
    assert!(!a.reply_box);
    assert_eq!(a.upvote, VoteControl::Placeholder);
    assert_eq!(a.downvote, VoteControl::Placeholder);

    let server = server_with(&c);
    let api = server.session(Some(VOTER));
    let mut state = InteractionState::new(&c);
    state.set_reply_text(String::from("hi"));
    let effects = state.submit_reply(&v);
    assert!(state.settle(&api, &v, effects).await.is_empty());
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn signed_out_dead_comment_still_redirects() {
    let mut c = comment("5", 10);
    c.dead = true;
    let server = server_with(&c);
    let api = server.session(None);
    let v = Viewer::from_auth_user(&AuthUser::default(), goto("5"));
    let mut state = InteractionState::new(&c);

    state.set_reply_text(String::from("hi"));
    let effects = state.submit_reply(&v);
    assert_eq!(state.settle(&api, &v, effects).await, vec![login_to("5")]);
    let effects = state.request_vote(VoteDirection::Up, &v);
    assert_eq!(state.settle(&api, &v, effects).await, vec![login_to("5")]);
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn author_view() {
    let c = comment("5", 1);
    let v = viewer(AUTHOR, "5");
    let a = Affordances::compute(&c, false, &v);
    assert!(a.self_marker);
    assert_eq!(a.upvote, VoteControl::Hidden);
    assert_eq!(a.downvote, VoteControl::Hidden);
    assert_eq!(a.edit, Some(Navigation::EditComment(CommentId::new("5"))));
    assert_eq!(
        a.delete.map(|d| d.to_url()).as_deref(),
        Some("/delete-comment?id=5&goto=comment%3Fid%3D5")
    );

    let server = server_with(&c);
    let api = server.session(Some(AUTHOR));
    let mut state = InteractionState::new(&c);
    let effects = state.request_vote(VoteDirection::Up, &v);
    assert!(state.settle(&api, &v, effects).await.is_empty());
    assert!(server.requests().is_empty());
}
