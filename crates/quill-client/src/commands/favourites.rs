//! The favourites view: toggle, list, clear.

use quill_shared::{Post, PostId};

use crate::error::ClientError;
use crate::state::AppState;

/// Outcome of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// Outcome of a clear request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// Nothing to clear; no confirmation asked.
    AlreadyEmpty,
    /// A non-empty ledger needs explicit confirmation first.
    NeedsConfirmation,
    Cleared,
}

/// Flip a post id's membership in the ledger and persist.
pub fn toggle(state: &AppState, id: &PostId) -> Result<ToggleOutcome, ClientError> {
    let mut favs = state.favourites()?;
    let now_member = favs.toggle(id)?;
    Ok(if now_member {
        ToggleOutcome::Added
    } else {
        ToggleOutcome::Removed
    })
}

/// Fetch all posts and keep the favourited ones, in ledger order. Ids that
/// no longer resolve to a post are silently omitted; the ledger is never
/// cleaned up.
pub async fn list(state: &AppState) -> Result<Vec<Post>, ClientError> {
    let posts = state.posts.list().await?;
    let favs = state.favourites()?;

    let favourites = favs
        .ids()
        .iter()
        .filter_map(|fav_id| posts.iter().find(|p| p.id.as_str() == fav_id))
        .cloned()
        .collect();
    Ok(favourites)
}

/// Empty the ledger, guarded by a confirmation step.
pub fn clear(state: &AppState, confirmed: bool) -> Result<ClearOutcome, ClientError> {
    let mut favs = state.favourites()?;
    if favs.is_empty() {
        return Ok(ClearOutcome::AlreadyEmpty);
    }
    if !confirmed {
        return Ok(ClearOutcome::NeedsConfirmation);
    }

    favs.clear()?;
    tracing::info!("cleared favourites");
    Ok(ClearOutcome::Cleared)
}

pub fn render_favourites(posts: &[Post]) {
    if posts.is_empty() {
        println!("No favourites yet.");
        return;
    }

    println!("Favourites ({}):", posts.len());
    for post in posts {
        println!("  [{}] {} — {}", post.id, post.title, post.author);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_store::Storage;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::config::ClientConfig;
    use quill_api::ApiConfig;

    fn offline_state() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open_at(dir.path()).unwrap();
        let state = AppState::with_storage_offline(storage).unwrap();
        (dir, state)
    }

    #[test]
    fn toggle_reports_membership() {
        let (_dir, state) = offline_state();
        let id = PostId::from("5");

        assert_eq!(toggle(&state, &id).unwrap(), ToggleOutcome::Added);
        assert_eq!(toggle(&state, &id).unwrap(), ToggleOutcome::Removed);
        assert!(state.favourites().unwrap().is_empty());
    }

    #[test]
    fn clear_requires_confirmation_only_when_non_empty() {
        let (_dir, state) = offline_state();

        assert_eq!(clear(&state, false).unwrap(), ClearOutcome::AlreadyEmpty);

        toggle(&state, &PostId::from("1")).unwrap();
        assert_eq!(clear(&state, false).unwrap(), ClearOutcome::NeedsConfirmation);
        assert!(!state.favourites().unwrap().is_empty());

        assert_eq!(clear(&state, true).unwrap(), ClearOutcome::Cleared);
        assert!(state.favourites().unwrap().is_empty());
    }

    #[tokio::test]
    async fn stale_ids_are_omitted_not_removed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": 1,
                "title": "Alive",
                "author": "Ana",
                "description": "",
                "image": "",
                "createdAt": ""
            }])))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open_at(dir.path()).unwrap();
        let config = ClientConfig {
            api: ApiConfig::with_base_url(server.uri()),
            page_size: 5,
        };
        let state = AppState::with_storage(storage, &config).unwrap();

        toggle(&state, &PostId::from("99")).unwrap(); // deleted long ago
        toggle(&state, &PostId::from("1")).unwrap();

        let favourites = list(&state).await.unwrap();
        assert_eq!(favourites.len(), 1);
        assert_eq!(favourites[0].title, "Alive");

        // the stale id stays in the ledger
        assert_eq!(state.favourites().unwrap().ids(), ["99", "1"]);
    }
}
