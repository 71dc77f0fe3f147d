use std::{
    collections::{BTreeMap, HashSet},
    sync::Arc,
};

use anyhow::anyhow;
use async_trait::async_trait;
use newsboard_client::api::{
    comment_length, Comment, CommentApi, CommentId, CommentPageData, AuthUser, Error, ItemId, NewComment,
    SubmitCommentResponse, UserId, VoteDirection, VoteResponse, MAX_COMMENT_LENGTH,
};
use parking_lot::Mutex;

/// In-memory stand-in for the site's comment endpoints, shared by all its sessions
#[derive(Clone, Default)]
pub struct MockServer(Arc<Mutex<MockDb>>);

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RecordedRequest {
    SubmitComment(NewComment),
    Vote(VoteDirection, CommentId),
}

#[derive(Debug, Default)]
struct MockDb {
    comments: BTreeMap<CommentId, Comment>,
    votes: HashSet<(UserId, CommentId)>,
    requests: Vec<RecordedRequest>,
    failures_pending: usize,
    next_id: usize,
}

impl MockDb {
    /// Returns true if this request should fail as if the network was down
    fn record(&mut self, r: RecordedRequest) -> bool {
        self.requests.push(r);
        match self.failures_pending {
            0 => false,
            _ => {
                self.failures_pending -= 1;
                true
            }
        }
    }

    fn add_comment(&mut self, user: &UserId, c: NewComment) -> Result<CommentId, Error> {
        if c.text.is_empty() {
            return Err(Error::TextRequired);
        }
        if comment_length(&c.text) > MAX_COMMENT_LENGTH {
            return Err(Error::TextTooLong);
        }
        let parent = match &c.parent_comment_id {
            None => None,
            Some(p) => Some(self.comments.get(p).ok_or(Error::SubmitFailed)?),
        };
        let parent_item_title = match parent {
            Some(p) if p.parent_item_id == c.parent_item_id => p.parent_item_title.clone(),
            Some(_) => return Err(Error::SubmitFailed),
            None => String::new(),
        };
        self.next_id += 1;
        let id = CommentId(format!("mock-{}", self.next_id));
        self.comments.insert(
            id.clone(),
            Comment {
                id: id.clone(),
                by: user.clone(),
                parent_item_id: c.parent_item_id,
                parent_item_title,
                is_parent: c.is_parent,
                parent_comment_id: c.parent_comment_id,
                text: c.text,
                points: 1,
                created: chrono::Utc::now(),
                dead: false,
                voted_on_by_user: false,
                unvote_expired: false,
                edit_and_delete_expired: false,
                favorited_by_user: false,
            },
        );
        Ok(id)
    }

    fn vote(
        &mut self,
        user: &UserId,
        direction: VoteDirection,
        id: &CommentId,
        parent_item_id: &ItemId,
    ) -> Result<(), Error> {
        let c = self.comments.get_mut(id).ok_or(Error::SubmitFailed)?;
        if c.parent_item_id != *parent_item_id || c.by == *user || c.dead {
            return Err(Error::SubmitFailed);
        }
        if !self.votes.insert((user.clone(), id.clone())) {
            return Err(Error::SubmitFailed);
        }
        c.points = c.points.saturating_add(direction.delta());
        Ok(())
    }
}

impl MockServer {
    pub fn new() -> MockServer {
        MockServer::default()
    }

    pub fn add_comment(&self, c: Comment) {
        self.0.lock().comments.insert(c.id.clone(), c);
    }

    /// Server-side view of a comment, `voted_on_by_user` being always false
    pub fn comment(&self, id: &CommentId) -> Option<Comment> {
        self.0.lock().comments.get(id).cloned()
    }

    /// Comments whose parent is `id`
    pub fn replies_to(&self, id: &CommentId) -> Vec<Comment> {
        self.0
            .lock()
            .comments
            .values()
            .filter(|c| c.parent_comment_id.as_ref() == Some(id))
            .cloned()
            .collect()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.0.lock().requests.clone()
    }

    /// The next `n` requests are recorded, then fail without an answer
    pub fn fail_next_requests(&self, n: usize) {
        self.0.lock().failures_pending = n;
    }

    /// Act as `user`, or as a signed-out visitor for `None`
    pub fn session(&self, user: Option<&str>) -> MockSession {
        MockSession {
            db: self.0.clone(),
            user: user.map(UserId::new),
        }
    }
}

pub struct MockSession {
    db: Arc<Mutex<MockDb>>,
    user: Option<UserId>,
}

impl MockSession {
    pub fn page_data(&self, id: &CommentId) -> Option<CommentPageData> {
        let db = self.db.lock();
        let mut comment = db.comments.get(id)?.clone();
        if let Some(u) = &self.user {
            comment.voted_on_by_user = db.votes.contains(&(u.clone(), id.clone()));
        }
        Some(CommentPageData {
            comment,
            auth_user: AuthUser {
                signed_in: self.user.is_some(),
                username: self.user.clone(),
                show_downvote: self.user.is_some(),
            },
        })
    }

    fn resolve(&self) -> Result<&UserId, Error> {
        self.user.as_ref().ok_or(Error::AuthRequired)
    }
}

#[async_trait(?Send)]
impl CommentApi for MockSession {
    async fn submit_comment(&self, c: NewComment) -> anyhow::Result<SubmitCommentResponse> {
        let mut db = self.db.lock();
        if db.record(RecordedRequest::SubmitComment(c.clone())) {
            return Err(anyhow!("mock server: connection dropped"));
        }
        let res = self.resolve().and_then(|u| db.add_comment(u, c));
        tracing::debug!(?res, "mock server: comment submission");
        Ok(SubmitCommentResponse::from_result(res.map(|_| ())))
    }

    async fn upvote_comment(
        &self,
        id: &CommentId,
        parent_item_id: &ItemId,
    ) -> anyhow::Result<VoteResponse> {
        self.vote(VoteDirection::Up, id, parent_item_id)
    }

    async fn downvote_comment(
        &self,
        id: &CommentId,
        parent_item_id: &ItemId,
    ) -> anyhow::Result<VoteResponse> {
        self.vote(VoteDirection::Down, id, parent_item_id)
    }
}

impl MockSession {
    fn vote(
        &self,
        direction: VoteDirection,
        id: &CommentId,
        parent_item_id: &ItemId,
    ) -> anyhow::Result<VoteResponse> {
        let mut db = self.db.lock();
        if db.record(RecordedRequest::Vote(direction, id.clone())) {
            return Err(anyhow!("mock server: connection dropped"));
        }
        let res = self
            .resolve()
            .and_then(|u| db.vote(u, direction, id, parent_item_id));
        tracing::debug!(?res, ?direction, "mock server: vote");
        Ok(VoteResponse::from_result(res))
    }
}
