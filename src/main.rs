use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use chirper::config::{Config, SourceKind};
use chirper::logging::init_tracing;
use chirper::selectors::{
    select_all_users, select_current_user, select_post_by_id, select_posts_error,
    select_user_by_id, select_user_name, PostsByRecency,
};
use chirper::source::{HttpSource, InMemorySource, RemoteSource};
use chirper::task::TaskOutcome;
use chirper::{NewPost, Post, ReactionKind, Snapshot, Store};

#[derive(Parser)]
#[command(name = "chirper", version, about = "Browse and post to the Chirper feed")]
struct Cli {
    /// Config file (default: ~/.config/chirper/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use the built-in in-memory API instead of the configured source
    #[arg(long, global = true)]
    memory: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List known users
    Users,
    /// Show the feed, newest first
    Posts {
        #[arg(long = "as")]
        user: String,
    },
    /// Create a post
    Add {
        #[arg(long = "as")]
        user: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    /// React to a post
    React {
        #[arg(long = "as")]
        user: String,
        #[arg(long)]
        post: String,
        /// One of thumbsUp, tada, heart, rocket, eyes
        #[arg(long)]
        reaction: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let source: Arc<dyn RemoteSource> =
        if cli.memory || config.session.source == SourceKind::Memory {
            Arc::new(InMemorySource::seeded())
        } else {
            Arc::new(HttpSource::new(&config.api).context("Failed to build HTTP client")?)
        };
    let store = Store::new(source);

    if let TaskOutcome::Rejected(err) = store.fetch_users().await {
        bail!("Failed to load users: {err}");
    }

    match cli.command {
        Command::Users => {
            for user in select_all_users(&store.snapshot()) {
                println!("{:>4}  {}", user.id, user.name);
            }
        }
        Command::Posts { user } => {
            login(&store, &user)?;
            load_feed(&store).await?;
            let snapshot = store.snapshot();
            for post in PostsByRecency::new().select(&snapshot).iter() {
                print_post(&snapshot, post);
            }
        }
        Command::Add {
            user,
            title,
            content,
        } => {
            login(&store, &user)?;
            let post = store.create_post(NewPost::new(title, content, user)).await?;
            print_post(&store.snapshot(), &post);
        }
        Command::React {
            user,
            post,
            reaction,
        } => {
            login(&store, &user)?;
            load_feed(&store).await?;
            store.add_reaction_named(&post, &reaction)?;
            let snapshot = store.snapshot();
            let Some(found) = select_post_by_id(&snapshot, &post) else {
                bail!("Post not found: {post}");
            };
            print_post(&snapshot, found);
        }
    }

    Ok(())
}

/// Log in after checking the roster knows `user`.
fn login(store: &Store, user: &str) -> Result<()> {
    if select_user_by_id(&store.snapshot(), user).is_none() {
        bail!("Unknown user '{user}'");
    }
    store.login(user)?;
    if let Some(current) = select_current_user(&store.snapshot()) {
        tracing::info!(user = %current.name, "Logged in");
    }
    Ok(())
}

async fn load_feed(store: &Store) -> Result<()> {
    store.fetch_posts().await;
    if let Some(error) = select_posts_error(&store.snapshot()) {
        bail!("Failed to load posts: {error}");
    }
    Ok(())
}

fn print_post(snapshot: &Snapshot, post: &Post) {
    println!("[{}] {}", post.id, post.title);
    println!(
        "  by {} at {}",
        select_user_name(snapshot, &post.user),
        post.date.to_rfc3339()
    );
    println!("  {}", post.content);
    let reactions: Vec<String> = ReactionKind::ALL
        .into_iter()
        .map(|kind| format!("{} {}", kind.emoji(), post.reactions.get(kind)))
        .collect();
    println!("  {}", reactions.join("  "));
    println!();
}
