//! The posts repository client.
//!
//! Five operations over the remote `posts` collection: list, get, create
//! (POST), full-replacement update (PUT), and delete. The backend assigns
//! ids on create; request bodies never carry one.

use quill_shared::{Post, PostDraft, PostId};
use reqwest::StatusCode;

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};

/// HTTP client for the posts backend.
#[derive(Debug, Clone)]
pub struct PostsClient {
    http: reqwest::Client,
    base_url: String,
}

impl PostsClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    fn post_url(&self, id: &PostId) -> String {
        format!("{}/posts/{}", self.base_url, id)
    }

    /// Fetch every post in the collection.
    pub async fn list(&self) -> Result<Vec<Post>> {
        let response = self.http.get(self.posts_url()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let posts: Vec<Post> = response.json().await?;
        tracing::debug!(count = posts.len(), "fetched posts");
        Ok(posts)
    }

    /// Fetch a single post by id.
    pub async fn get(&self, id: &PostId) -> Result<Post> {
        let response = self.http.get(self.post_url(id)).send().await?;
        match response.status() {
            status if status.is_success() => Ok(response.json().await?),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            status => Err(ApiError::Status(status)),
        }
    }

    /// Submit a new post. The backend assigns the id and returns the
    /// created record.
    pub async fn create(&self, draft: &PostDraft) -> Result<Post> {
        let response = self
            .http
            .post(self.posts_url())
            .json(draft)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let post: Post = response.json().await?;
        tracing::info!(id = %post.id, title = %post.title, "created post");
        Ok(post)
    }

    /// Fully replace a post's fields.
    pub async fn update(&self, id: &PostId, draft: &PostDraft) -> Result<Post> {
        let response = self
            .http
            .put(self.post_url(id))
            .json(draft)
            .send()
            .await?;
        match response.status() {
            status if status.is_success() => {
                tracing::info!(id = %id, "updated post");
                Ok(response.json().await?)
            }
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            status => Err(ApiError::Status(status)),
        }
    }

    /// Remove a post by id. Callers re-filter their local list instead of
    /// re-fetching.
    pub async fn delete(&self, id: &PostId) -> Result<()> {
        let response = self.http.delete(self.post_url(id)).send().await?;
        match response.status() {
            status if status.is_success() => {
                tracing::info!(id = %id, "deleted post");
                Ok(())
            }
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            status => Err(ApiError::Status(status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> PostsClient {
        PostsClient::new(&ApiConfig::with_base_url(server.uri()))
    }

    fn post_json(id: u64, author: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": format!("Post {id}"),
            "author": author,
            "description": "body",
            "image": "",
            "createdAt": "01/02/2026"
        })
    }

    #[tokio::test]
    async fn list_returns_all_posts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([post_json(1, "Ana"), post_json(2, "Bob")])),
            )
            .mount(&server)
            .await;

        let posts = client_for(&server).await.list().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, PostId::from("1"));
    }

    #[tokio::test]
    async fn get_missing_post_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts/42"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .get(&PostId::from("42"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[tokio::test]
    async fn create_sends_draft_without_id() {
        let server = MockServer::start().await;
        let draft = PostDraft {
            title: "Hello".into(),
            author: "Ana".into(),
            description: "First".into(),
            image: "".into(),
            created_at: "01/02/2026".into(),
        };

        Mock::given(method("POST"))
            .and(path("/posts"))
            .and(body_json(json!({
                "title": "Hello",
                "author": "Ana",
                "description": "First",
                "image": "",
                "createdAt": "01/02/2026"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 11,
                "title": "Hello",
                "author": "Ana",
                "description": "First",
                "image": "",
                "createdAt": "01/02/2026"
            })))
            .mount(&server)
            .await;

        let post = client_for(&server).await.create(&draft).await.unwrap();
        assert_eq!(post.id, PostId::from("11"));
    }

    #[tokio::test]
    async fn update_puts_full_replacement() {
        let server = MockServer::start().await;
        let draft = PostDraft {
            title: "Edited".into(),
            author: "Ana".into(),
            description: "Changed".into(),
            image: "".into(),
            created_at: "01/02/2026".into(),
        };

        Mock::given(method("PUT"))
            .and(path("/posts/3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 3,
                "title": "Edited",
                "author": "Ana",
                "description": "Changed",
                "image": "",
                "createdAt": "01/02/2026"
            })))
            .mount(&server)
            .await;

        let post = client_for(&server)
            .await
            .update(&PostId::from("3"), &draft)
            .await
            .unwrap();
        assert_eq!(post.title, "Edited");
    }

    #[tokio::test]
    async fn delete_succeeds_on_2xx() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/posts/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        client_for(&server)
            .await
            .delete(&PostId::from("7"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn server_error_is_surfaced_as_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server).await.list().await.unwrap_err();
        assert!(matches!(err, ApiError::Status(s) if s.as_u16() == 500));
    }
}
