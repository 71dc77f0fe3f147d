use anyhow::Context;
use newsboard_client::{
    api::{Comment, CommentId, VoteDirection},
    format, Affordances, Effect, HttpApi, InteractionState, Viewer,
};

#[derive(structopt::StructOpt)]
struct Opt {
    #[structopt(short, long)]
    host: String,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(structopt::StructOpt)]
enum Command {
    /// Print a comment and the actions available on it
    Show {
        /// Comment id
        id: String,
    },

    /// Upvote a comment
    Upvote { id: String },

    /// Downvote a comment
    Downvote { id: String },

    /// Reply to a comment
    Reply {
        /// Id of the comment to reply to
        id: String,

        /// Reply body
        text: String,
    },
}

fn token() -> Option<String> {
    std::env::var("NEWSBOARD_TOKEN").ok()
}

fn print_comment(c: &Comment, a: &Affordances, vote_tally: i64) {
    println!(
        "{}{} {} by {} {}{}",
        if a.self_marker { "* " } else { "" },
        format::format_points(vote_tally),
        format::points_label(vote_tally),
        c.by,
        format::created_time_ago(c.created, chrono::Utc::now()),
        if a.dead_marker { " [dead]" } else { "" },
    );
    println!("  parent: {}", a.parent_link);
    println!("  on: {}", format::truncate_item_title(&c.parent_item_title));
    println!("  upvote: {:?}, downvote: {:?}", a.upvote, a.downvote);
    if a.unvote {
        println!("  un-vote available");
    }
    if let Some(edit) = &a.edit {
        println!("  edit: {edit}");
    }
    if let Some(delete) = &a.delete {
        println!("  delete: {delete}");
    }
    println!();
    println!("{}", c.text);
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let opt = <Opt as structopt::StructOpt>::from_args();

    let api = HttpApi::new(opt.host).with_token(token());
    let id = match &opt.cmd {
        Command::Show { id }
        | Command::Upvote { id }
        | Command::Downvote { id }
        | Command::Reply { id, .. } => CommentId(id.clone()),
    };
    let data = api
        .fetch_comment_page(&id)
        .await
        .context("loading comment")?;
    let viewer = Viewer::from_auth_user(&data.auth_user, format!("comment?id={id}"));
    let mut state = InteractionState::new(&data.comment);

    let effects = match opt.cmd {
        Command::Show { .. } => Vec::new(),
        Command::Upvote { .. } => state.request_vote(VoteDirection::Up, &viewer),
        Command::Downvote { .. } => state.request_vote(VoteDirection::Down, &viewer),
        Command::Reply { text, .. } => {
            state.set_reply_text(text);
            state.submit_reply(&viewer)
        }
    };
    for e in state.settle(&api, &viewer, effects).await {
        match e {
            Effect::Navigate(nav) => println!("-> {nav}"),
            Effect::VoteStatusChanged(change) => {
                tracing::info!(comment=%change.comment_id, "marked as voted")
            }
            Effect::Dispatch(_) => unreachable!("settle returned a dispatch"),
        }
    }
    if let Some(msg) = state.error().message() {
        println!("error: {msg}");
    }

    let a = Affordances::compute(&data.comment, state.voted_on_by_user(), &viewer);
    print_comment(&data.comment, &a, state.vote_tally());
    Ok(())
}
