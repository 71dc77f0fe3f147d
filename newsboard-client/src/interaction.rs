use crate::{
    api::{
        self, comment_length, Comment, CommentApi, CommentId, ItemId, Navigation, NewComment,
        SubmitCommentResponse, VoteDirection, VoteResponse, MAX_COMMENT_LENGTH,
    },
    Viewer,
};

/// Error currently displayed under the reply box
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReplyError {
    None,
    TextRequired,
    TextTooLong,
    SubmitFailed,
}

impl ReplyError {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ReplyError::None => None,
            ReplyError::TextRequired => Some("Text is required."),
            ReplyError::TextTooLong => Some("Text exceeds limit of 5,000 characters."),
            ReplyError::SubmitFailed => Some("An error occurred."),
        }
    }
}

/// Tells the owner of the comment that its copy of `voted_on_by_user` is stale
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteStatusChange {
    pub comment_id: CommentId,
    pub voted_on_by_user: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Request {
    SubmitComment(NewComment),
    Vote {
        direction: VoteDirection,
        comment_id: CommentId,
        parent_item_id: ItemId,
    },
}

impl Request {
    pub async fn send<A: CommentApi + ?Sized>(self, api: &A) -> Completion {
        match self {
            Request::SubmitComment(c) => Completion::Reply(api.submit_comment(c).await),
            Request::Vote {
                direction,
                comment_id,
                parent_item_id,
            } => Completion::Vote(
                direction,
                api.cast_vote(direction, &comment_id, &parent_item_id)
                    .await,
            ),
        }
    }
}

/// Outcome of a `Request`, `Err` meaning the server could not be reached
#[derive(Debug)]
pub enum Completion {
    Reply(anyhow::Result<SubmitCommentResponse>),
    Vote(VoteDirection, anyhow::Result<VoteResponse>),
}

/// Side effects the owner of an `InteractionState` has to carry out
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Effect {
    Navigate(Navigation),
    Dispatch(Request),
    VoteStatusChanged(VoteStatusChange),
}

/// Local state of one comment unit, from mount to teardown.
///
/// At most one request is in flight at any time: attempts made while busy
/// are dropped, not queued.
#[derive(Clone, Debug)]
pub struct InteractionState {
    /// Snapshot taken at mount, never written to
    comment: Comment,

    reply_text: String,
    is_busy: bool,
    vote_tally: i64,
    voted_on_by_user: bool,
    error: ReplyError,
    torn_down: bool,
}

impl InteractionState {
    pub fn new(comment: &Comment) -> InteractionState {
        InteractionState {
            comment: comment.clone(),
            reply_text: String::new(),
            is_busy: false,
            vote_tally: comment.points,
            voted_on_by_user: comment.voted_on_by_user,
            error: ReplyError::None,
            torn_down: false,
        }
    }

    pub fn reply_text(&self) -> &str {
        &self.reply_text
    }

    pub fn is_busy(&self) -> bool {
        self.is_busy
    }

    pub fn vote_tally(&self) -> i64 {
        self.vote_tally
    }

    pub fn voted_on_by_user(&self) -> bool {
        self.voted_on_by_user
    }

    pub fn error(&self) -> ReplyError {
        self.error
    }

    pub fn set_reply_text(&mut self, text: String) {
        self.reply_text = text;
    }

    pub fn submit_reply(&mut self, viewer: &Viewer) -> Vec<Effect> {
        if self.is_busy {
            return Vec::new();
        }
        if !viewer.signed_in {
            return vec![Effect::Navigate(Navigation::login(&viewer.goto))];
        }
        if self.comment.dead {
            return Vec::new();
        }
        if self.reply_text.is_empty() {
            self.error = ReplyError::TextRequired;
            return Vec::new();
        }
        if comment_length(&self.reply_text) > MAX_COMMENT_LENGTH {
            self.error = ReplyError::TextTooLong;
            return Vec::new();
        }
        self.error = ReplyError::None;
        self.is_busy = true;
        tracing::debug!(comment=%self.comment.id, "submitting reply");
        vec![Effect::Dispatch(Request::SubmitComment(NewComment::reply_to(
            &self.comment,
            self.reply_text.clone(),
        )))]
    }

    /// Voted-on flag is flipped as soon as the request leaves, and never flipped back
    pub fn request_vote(&mut self, direction: VoteDirection, viewer: &Viewer) -> Vec<Effect> {
        if self.is_busy {
            return Vec::new();
        }
        if !viewer.signed_in {
            return vec![Effect::Navigate(Navigation::login(&viewer.goto))];
        }
        if !self.can_vote(direction, viewer) {
            return Vec::new();
        }
        self.voted_on_by_user = true;
        self.is_busy = true;
        tracing::debug!(comment=%self.comment.id, ?direction, "casting vote");
        vec![
            Effect::VoteStatusChanged(VoteStatusChange {
                comment_id: self.comment.id.clone(),
                voted_on_by_user: true,
            }),
            Effect::Dispatch(Request::Vote {
                direction,
                comment_id: self.comment.id.clone(),
                parent_item_id: self.comment.parent_item_id.clone(),
            }),
        ]
    }

    fn can_vote(&self, direction: VoteDirection, viewer: &Viewer) -> bool {
        let allowed =
            !viewer.is(&self.comment.by) && !self.voted_on_by_user && !self.comment.dead;
        match direction {
            VoteDirection::Up => allowed,
            VoteDirection::Down => allowed && viewer.show_downvote_option,
        }
    }

    pub fn complete(&mut self, completion: Completion, viewer: &Viewer) -> Vec<Effect> {
        if self.torn_down {
            tracing::debug!(comment=%self.comment.id, "ignoring completion after teardown");
            return Vec::new();
        }
        self.is_busy = false;
        match completion {
            Completion::Reply(resp) => self.complete_reply(resp, viewer),
            Completion::Vote(direction, resp) => self.complete_vote(direction, resp, viewer),
        }
    }

    fn complete_reply(
        &mut self,
        resp: anyhow::Result<SubmitCommentResponse>,
        viewer: &Viewer,
    ) -> Vec<Effect> {
        let res = match resp {
            Ok(resp) => resp.into_result(),
            Err(err) => {
                tracing::warn!(comment=%self.comment.id, ?err, "failed submitting reply");
                Err(api::Error::SubmitFailed)
            }
        };
        self.error = match res {
            Ok(()) => {
                return vec![Effect::Navigate(Navigation::Comment(
                    self.comment.id.clone(),
                ))]
            }
            Err(api::Error::AuthRequired) => {
                return vec![Effect::Navigate(Navigation::login(&viewer.goto))]
            }
            Err(api::Error::TextRequired) => ReplyError::TextRequired,
            Err(api::Error::TextTooLong) => ReplyError::TextTooLong,
            Err(api::Error::SubmitFailed) => ReplyError::SubmitFailed,
        };
        Vec::new()
    }

    fn complete_vote(
        &mut self,
        direction: VoteDirection,
        resp: anyhow::Result<VoteResponse>,
        viewer: &Viewer,
    ) -> Vec<Effect> {
        match resp.map(VoteResponse::into_result) {
            Ok(Ok(())) => {
                self.vote_tally = self.vote_tally.saturating_add(direction.delta());
                Vec::new()
            }
            Ok(Err(_)) => vec![Effect::Navigate(Navigation::login(&viewer.goto))],
            Err(err) => {
                tracing::warn!(comment=%self.comment.id, ?direction, ?err, "vote was not delivered");
                Vec::new()
            }
        }
    }

    /// Completions arriving after this are dropped without touching the state
    pub fn teardown(&mut self) {
        self.torn_down = true;
    }

    /// Carries out every `Dispatch` in `effects` against `api`, in order, and
    /// returns the effects meant for the outside world.
    pub async fn settle<A: CommentApi + ?Sized>(
        &mut self,
        api: &A,
        viewer: &Viewer,
        effects: Vec<Effect>,
    ) -> Vec<Effect> {
        let mut pending = std::collections::VecDeque::from(effects);
        let mut res = Vec::new();
        while let Some(e) = pending.pop_front() {
            match e {
                Effect::Dispatch(req) => {
                    let completion = req.send(api).await;
                    pending.extend(self.complete(completion, viewer));
                }
                e => res.push(e),
            }
        }
        res
    }
}
