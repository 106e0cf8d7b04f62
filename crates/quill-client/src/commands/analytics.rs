//! The analytics view: posts-per-author chart plus the posts table.
//!
//! Everything here is derived from the fetched list and recomputed per
//! render; nothing is persisted.

use quill_shared::Post;

use crate::error::ClientError;
use crate::pagination::paginate;
use crate::state::AppState;

/// One rendered analytics page.
#[derive(Debug, Clone)]
pub struct AnalyticsView {
    /// (author, post count) in first-seen order. Authors are compared
    /// exactly, case-sensitively.
    pub by_author: Vec<(String, usize)>,
    pub posts: Vec<Post>,
    pub page_number: usize,
    pub total_pages: usize,
}

/// Count posts per distinct author string, preserving first-seen order so
/// the chart is stable across renders.
pub fn group_by_author(posts: &[Post]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for post in posts {
        match counts.iter_mut().find(|(author, _)| *author == post.author) {
            Some((_, n)) => *n += 1,
            None => counts.push((post.author.clone(), 1)),
        }
    }
    counts
}

/// Fetch all posts and assemble one analytics page. Like the dashboard, a
/// transport failure renders as empty rather than an error.
pub async fn analytics(state: &AppState, page: usize) -> Result<AnalyticsView, ClientError> {
    let posts = match state.posts.list().await {
        Ok(posts) => posts,
        Err(e) => {
            tracing::error!(error = %e, "failed to fetch posts");
            Vec::new()
        }
    };

    let by_author = group_by_author(&posts);
    let page = paginate(&posts, page, state.page_size);

    Ok(AnalyticsView {
        by_author,
        page_number: page.number,
        total_pages: page.total_pages,
        posts: page.items.to_vec(),
    })
}

pub fn render_analytics(view: &AnalyticsView) {
    println!("Posts per author");
    if view.by_author.is_empty() {
        println!("  (no posts)");
    } else {
        let widest = view
            .by_author
            .iter()
            .map(|(author, _)| author.len())
            .max()
            .unwrap_or(0);
        for (author, count) in &view.by_author {
            let bar = "#".repeat(*count);
            println!("  {author:<widest$}  {bar} ({count})");
        }
    }

    println!();
    println!("{:<6} {:<30} {:<20} {}", "ID", "Title", "Author", "Date");
    for post in &view.posts {
        println!(
            "{:<6} {:<30} {:<20} {}",
            post.id.as_str(),
            post.title,
            post.author,
            post.created_at
        );
    }
    println!();
    println!("Page {} of {}", view.page_number, view.total_pages.max(1));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn posts_by(authors: &[&str]) -> Vec<Post> {
        authors
            .iter()
            .enumerate()
            .map(|(i, author)| {
                serde_json::from_value(json!({
                    "id": i + 1,
                    "title": format!("Post {i}"),
                    "author": author,
                    "description": "",
                    "image": "",
                    "createdAt": ""
                }))
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn counts_per_distinct_author() {
        let posts = posts_by(&["Bob", "Bob", "Ana"]);
        let counts = group_by_author(&posts);
        assert_eq!(counts, vec![("Bob".to_string(), 2), ("Ana".to_string(), 1)]);
    }

    #[test]
    fn grouping_is_case_sensitive() {
        let posts = posts_by(&["bob", "Bob"]);
        let counts = group_by_author(&posts);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn empty_input_yields_empty_chart() {
        assert!(group_by_author(&[]).is_empty());
    }
}
