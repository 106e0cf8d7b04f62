//! Post CRUD views: dashboard feed, post details, create/edit, delete.

use quill_api::ApiError;
use quill_shared::{today_stamp, Post, PostDraft, PostId};

use crate::error::ClientError;
use crate::pagination::paginate;
use crate::state::AppState;

/// Stat cards shown at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_posts: usize,
    /// Posts whose author matches the display name, compared
    /// case-insensitively and trimmed.
    pub your_posts: usize,
    pub community_posts: usize,
}

/// One rendered dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub stats: DashboardStats,
    pub posts: Vec<Post>,
    pub page_number: usize,
    pub total_pages: usize,
    /// Ids currently in the favourites ledger, for marking cards.
    pub favourite_ids: Vec<String>,
}

/// Optional replacements applied over a fetched post before updating it.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

fn stats_for(posts: &[Post], display_name: Option<&str>) -> DashboardStats {
    let total_posts = posts.len();
    let your_posts = match display_name {
        Some(name) => {
            let name = name.trim().to_lowercase();
            posts
                .iter()
                .filter(|p| p.author.trim().to_lowercase() == name)
                .count()
        }
        None => 0,
    };

    DashboardStats {
        total_posts,
        your_posts,
        community_posts: total_posts - your_posts,
    }
}

/// Fetch all posts and assemble one dashboard page. A transport failure is
/// logged and rendered as an empty feed rather than an error.
pub async fn dashboard(state: &AppState, page: usize) -> Result<DashboardView, ClientError> {
    let posts = match state.posts.list().await {
        Ok(posts) => posts,
        Err(e) => {
            tracing::error!(error = %e, "failed to fetch posts");
            Vec::new()
        }
    };

    let stats = stats_for(&posts, state.display_name());
    let favourite_ids = state.favourites()?.ids().to_vec();
    let page = paginate(&posts, page, state.page_size);

    Ok(DashboardView {
        stats,
        page_number: page.number,
        total_pages: page.total_pages,
        posts: page.items.to_vec(),
        favourite_ids,
    })
}

/// Fetch one post for the details view. A missing post surfaces as
/// [`ApiError::NotFound`]; the caller renders a single error line in place
/// of the body.
pub async fn show(state: &AppState, id: &PostId) -> Result<Post, ClientError> {
    Ok(state.posts.get(id).await?)
}

/// Publish a new post stamped with today's date. The caller navigates to
/// the dashboard afterwards.
pub async fn create(
    state: &AppState,
    title: String,
    author: String,
    description: String,
    image: String,
) -> Result<Post, ClientError> {
    let draft = PostDraft {
        title,
        author,
        description,
        image,
        created_at: today_stamp(),
    };
    Ok(state.posts.create(&draft).await?)
}

/// Fetch the current post, overlay the provided fields, and submit the
/// full replacement. The id and original creation date are preserved.
pub async fn edit(state: &AppState, id: &PostId, patch: PostPatch) -> Result<Post, ClientError> {
    let current = state.posts.get(id).await?;

    let draft = PostDraft {
        title: patch.title.unwrap_or(current.title),
        author: patch.author.unwrap_or(current.author),
        description: patch.description.unwrap_or(current.description),
        image: patch.image.unwrap_or(current.image),
        created_at: current.created_at,
    };
    Ok(state.posts.update(id, &draft).await?)
}

/// Delete a post and return the previously fetched list filtered locally,
/// the way the dashboard updates itself without re-fetching.
pub async fn delete(state: &AppState, id: &PostId) -> Result<Vec<Post>, ClientError> {
    let posts = state.posts.list().await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to fetch posts before delete");
        Vec::new()
    });

    state.posts.delete(id).await?;

    Ok(posts.into_iter().filter(|p| p.id != *id).collect())
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub fn render_dashboard(view: &DashboardView, display_name: Option<&str>) {
    match display_name {
        Some(name) => println!("Welcome back, {name}!"),
        None => println!("Welcome to your dashboard!"),
    }
    println!(
        "Total posts: {}   Your stories: {}   Community posts: {}",
        view.stats.total_posts, view.stats.your_posts, view.stats.community_posts
    );
    println!();

    if view.posts.is_empty() {
        println!("No posts on this page.");
    } else {
        for post in &view.posts {
            let marker = if view.favourite_ids.iter().any(|f| f == post.id.as_str()) {
                "*"
            } else {
                " "
            };
            println!(
                "{marker} [{}] {} — {} ({})",
                post.id, post.title, post.author, post.created_at
            );
        }
    }

    println!();
    println!("Page {} of {}", view.page_number, view.total_pages.max(1));
}

pub fn render_post(post: &Post) {
    println!("{}", post.title);
    println!("by {} on {}", post.author, post.created_at);
    if !post.image.is_empty() {
        println!("image: {}", post.image);
    }
    println!();
    println!("{}", post.description);
}

pub fn render_not_found(err: &ClientError) {
    match err {
        ClientError::Api(ApiError::NotFound) => println!("Post not found"),
        other => println!("{other}"),
    }
}
