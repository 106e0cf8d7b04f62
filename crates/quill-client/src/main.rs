//! The `quill` binary: a terminal blog-management client.
//!
//! Every subcommand corresponds to a route; the session guard resolves the
//! route against the persisted session before the view runs. A redirect is
//! reported on stdout and the target view renders instead.

use anyhow::Context;
use clap::{Parser, Subcommand};

use quill_client::commands::favourites::{ClearOutcome, ToggleOutcome};
use quill_client::commands::{analytics, auth, favourites, posts};
use quill_client::config::ClientConfig;
use quill_client::router::{self, Route, RouteDecision};
use quill_client::state::AppState;
use quill_client::ClientError;
use quill_shared::{LoginForm, PostId, RegisterForm};

#[derive(Parser)]
#[command(name = "quill", version, about = "Manage your blog from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Register the local account (overwrites any existing one)
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
    /// Log in against the registered account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log out and clear the session
    Logout,
    /// Show the post feed with stats
    Dashboard {
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show one post in full
    Post { id: String },
    /// Publish a new post
    CreatePost {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        description: String,
        #[arg(long, default_value = "")]
        image: String,
    },
    /// Edit an existing post (unset fields keep their value)
    EditPost {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },
    /// Delete a post
    DeletePost {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Toggle a post in the favourites ledger
    Favourite { id: String },
    /// List favourited posts
    Favourites {
        /// Empty the ledger instead of listing
        #[arg(long)]
        clear: bool,
        /// Confirm clearing
        #[arg(long)]
        yes: bool,
    },
    /// Posts-per-author chart and table
    Analytics {
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Navigate to a view by route path (e.g. `/post/3`)
    Open { path: String },
}

fn route_for(command: &Option<Command>) -> Route {
    match command {
        None => Route::Root,
        Some(Command::Register { .. }) => Route::Register,
        Some(Command::Login { .. }) => Route::Login,
        Some(Command::Logout) => Route::Dashboard,
        Some(Command::Dashboard { .. }) => Route::Dashboard,
        Some(Command::Post { id }) => Route::PostDetails(PostId::from(id.as_str())),
        Some(Command::CreatePost { .. }) => Route::CreatePost,
        Some(Command::EditPost { id, .. }) => Route::EditPost(PostId::from(id.as_str())),
        Some(Command::DeletePost { .. }) => Route::Dashboard,
        Some(Command::Favourite { .. }) | Some(Command::Favourites { .. }) => Route::Favourites,
        Some(Command::Analytics { .. }) => Route::Analytics,
        Some(Command::Open { path }) => Route::parse(path),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    quill_client::init_tracing();

    let cli = Cli::parse();
    let config = ClientConfig::from_env();
    let mut state = AppState::init(&config).context("failed to open local storage")?;

    let route = route_for(&cli.command);
    match router::resolve(&route, state.session_present()) {
        RouteDecision::Render => run_command(&mut state, cli.command).await?,
        RouteDecision::RedirectToLogin => {
            println!("You are not logged in. Run `quill login --email ... --password ...`");
        }
        RouteDecision::RedirectToDashboard => {
            // Already logged in: login/register (and the root route) land
            // on the dashboard.
            if !matches!(route, Route::Root) {
                println!("Already logged in.");
            }
            render_dashboard(&state, 1).await?;
        }
    }

    Ok(())
}

async fn render_dashboard(state: &AppState, page: usize) -> Result<(), ClientError> {
    let view = posts::dashboard(state, page).await?;
    posts::render_dashboard(&view, state.display_name());
    Ok(())
}

async fn run_command(state: &mut AppState, command: Option<Command>) -> anyhow::Result<()> {
    let Some(command) = command else {
        // unreachable in practice: the root route always redirects
        return Ok(());
    };

    match command {
        Command::Register {
            username,
            email,
            phone,
            password,
            confirm_password,
        } => {
            let form = RegisterForm {
                username,
                email,
                phone,
                password,
                confirm_password,
            };
            match auth::register(state, form) {
                Ok(()) => println!("Registered. Log in with `quill login`."),
                Err(ClientError::Validation(errors)) => println!("{errors}"),
                Err(e) => return Err(e.into()),
            }
        }

        Command::Login { email, password } => {
            match auth::login(state, LoginForm { email, password }) {
                Ok(name) => {
                    println!("Welcome, {name}!");
                    render_dashboard(state, 1).await?;
                }
                Err(e @ (ClientError::Validation(_) | ClientError::InvalidCredentials)) => {
                    println!("{e}");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Command::Logout => {
            auth::logout(state)?;
            println!("Logged out.");
        }

        Command::Dashboard { page } => render_dashboard(state, page).await?,

        Command::Post { id } => {
            let id = PostId::from(id.as_str());
            match posts::show(state, &id).await {
                Ok(post) => posts::render_post(&post),
                Err(e) => posts::render_not_found(&e),
            }
        }

        Command::CreatePost {
            title,
            author,
            description,
            image,
        } => {
            let post = posts::create(state, title, author, description, image).await?;
            println!("Post published: [{}] {}", post.id, post.title);
            render_dashboard(state, 1).await?;
        }

        Command::EditPost {
            id,
            title,
            author,
            description,
            image,
        } => {
            let id = PostId::from(id.as_str());
            let patch = posts::PostPatch {
                title,
                author,
                description,
                image,
            };
            match posts::edit(state, &id, patch).await {
                Ok(post) => {
                    println!("Post updated: [{}] {}", post.id, post.title);
                    render_dashboard(state, 1).await?;
                }
                Err(e) => posts::render_not_found(&e),
            }
        }

        Command::DeletePost { id, yes } => {
            if !yes {
                println!("Pass --yes to confirm deleting post {id}.");
                return Ok(());
            }
            let id = PostId::from(id.as_str());
            match posts::delete(state, &id).await {
                Ok(remaining) => {
                    println!("Post {id} deleted. {} posts remain.", remaining.len());
                }
                Err(e) => posts::render_not_found(&e),
            }
        }

        Command::Favourite { id } => {
            let id = PostId::from(id.as_str());
            match favourites::toggle(state, &id)? {
                ToggleOutcome::Added => println!("Added post {id} to favourites."),
                ToggleOutcome::Removed => println!("Removed post {id} from favourites."),
            }
        }

        Command::Favourites { clear, yes } => {
            if clear {
                match favourites::clear(state, yes)? {
                    ClearOutcome::AlreadyEmpty => println!("No favourites to clear."),
                    ClearOutcome::NeedsConfirmation => {
                        println!("Pass --yes to confirm clearing all favourites.")
                    }
                    ClearOutcome::Cleared => println!("All favourites cleared."),
                }
            } else {
                match favourites::list(state).await {
                    Ok(list) => favourites::render_favourites(&list),
                    Err(e) => println!("Failed to load favourites: {e}"),
                }
            }
        }

        Command::Analytics { page } => {
            let view = analytics::analytics(state, page).await?;
            analytics::render_analytics(&view);
        }

        Command::Open { path } => {
            match Route::parse(&path) {
                // the guard has already passed for this route
                Route::Root | Route::Dashboard => render_dashboard(state, 1).await?,
                Route::Login => println!("Log in with `quill login --email ... --password ...`"),
                Route::Register => {
                    println!("Register with `quill register --username ... --email ...`")
                }
                Route::CreatePost => {
                    println!("Create a post with `quill create-post --title ... --author ...`")
                }
                Route::EditPost(id) => {
                    println!("Edit post {id} with `quill edit-post {id} --title ...`")
                }
                Route::PostDetails(id) => match posts::show(state, &id).await {
                    Ok(post) => posts::render_post(&post),
                    Err(e) => posts::render_not_found(&e),
                },
                Route::Favourites => match favourites::list(state).await {
                    Ok(list) => favourites::render_favourites(&list),
                    Err(e) => println!("Failed to load favourites: {e}"),
                },
                Route::Analytics => {
                    let view = analytics::analytics(state, 1).await?;
                    analytics::render_analytics(&view);
                }
                Route::NotFound(path) => {
                    println!("404 - Page Not Found");
                    println!("No view exists at `{path}`.");
                }
            }
        }
    }

    Ok(())
}
