use chrono::TimeZone;
use newsboard_client::{
    api::{Comment, CommentId, ItemId, UserId},
    Viewer,
};
use newsboard_mock_server::MockServer;

pub const AUTHOR: &str = "bob";
pub const VOTER: &str = "alice";

pub fn comment(id: &str, points: i64) -> Comment {
    Comment {
        id: CommentId::new(id),
        by: UserId::new(AUTHOR),
        parent_item_id: ItemId::new("1"),
        parent_item_title: String::from("Show: a news aggregator written over a weekend"),
        is_parent: true,
        parent_comment_id: None,
        text: String::from("<p>Nice work.</p>"),
        points,
        created: chrono::Utc.timestamp_opt(1_600_000_000, 0).unwrap(),
        dead: false,
        voted_on_by_user: false,
        unvote_expired: false,
        edit_and_delete_expired: false,
        favorited_by_user: false,
    }
}

pub fn goto(id: &str) -> String {
    format!("comment?id={id}")
}

/// Viewer `name` on the permalink page of comment `id`
pub fn viewer(name: &str, id: &str) -> Viewer {
    Viewer {
        current_user: Some(UserId::new(name)),
        signed_in: true,
        show_favorite_option: true,
        show_downvote_option: true,
        goto: goto(id),
    }
}

pub fn server_with(c: &Comment) -> MockServer {
    let s = MockServer::new();
    s.add_comment(c.clone());
    s
}
