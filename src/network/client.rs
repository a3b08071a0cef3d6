//! HTTP client wrapper - the two calls the feed makes

use anyhow::Context;

use crate::models::{NewPost, Post};

/// Fetch up to `limit` posts, in the order the server returns them.
pub async fn fetch_posts(
    client: &reqwest::Client,
    base_url: &str,
    limit: usize,
) -> anyhow::Result<Vec<Post>> {
    let url = format!("{}/posts?_limit={}", base_url, limit);
    let resp = client
        .get(&url)
        .send()
        .await
        .context("request failed")?
        .error_for_status()
        .context("server returned an error status")?;

    let posts = resp
        .json::<Vec<Post>>()
        .await
        .context("response body was not a JSON post list")?;
    Ok(posts)
}

/// Create a post. The server assigns the id and echoes the fields back.
pub async fn create_post(
    client: &reqwest::Client,
    base_url: &str,
    new_post: &NewPost,
) -> anyhow::Result<Post> {
    let url = format!("{}/posts", base_url);
    let resp = client
        .post(&url)
        .json(new_post)
        .send()
        .await
        .context("request failed")?
        .error_for_status()
        .context("server returned an error status")?;

    let post = resp
        .json::<Post>()
        .await
        .context("response body was not a JSON post")?;
    Ok(post)
}

/// Create the shared HTTP client
///
/// No timeout is configured: a stuck fetch is resolved by the user pulling
/// refresh again, and overlapping fetches are allowed.
pub fn create_client() -> reqwest::Client {
    reqwest::Client::new()
}
