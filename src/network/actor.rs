//! Network actor - runs HTTP requests in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::NewPost;
use crate::network::client::{create_client, create_post, fetch_posts};

/// Network actor that executes fetch and create commands
///
/// Each command runs on its own task; nothing is cancelled or timed out,
/// and responses are delivered in completion order.
pub struct NetworkActor {
    client: reqwest::Client,
    base_url: String,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(
        response_tx: mpsc::UnboundedSender<NetworkResponse>,
        base_url: impl Into<String>,
    ) -> Self {
        NetworkActor {
            client: create_client(),
            base_url: base_url.into(),
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                // Handle incoming commands
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchPosts { id, kind, limit }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let base_url = self.base_url.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, ?kind, limit, "Fetching post list");
                                let response = match fetch_posts(&client, &base_url, limit).await {
                                    Ok(posts) => {
                                        tracing::info!(id, count = posts.len(), "Fetch completed");
                                        NetworkResponse::PostsFetched { id, kind, posts }
                                    }
                                    Err(error) => {
                                        tracing::error!(id, error = %error, "Fetch failed");
                                        NetworkResponse::FetchFailed { id, kind }
                                    }
                                };
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::CreatePost { id, title, body }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let base_url = self.base_url.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, "Creating post");
                                let new_post = NewPost { title, body };
                                let response = match create_post(&client, &base_url, &new_post).await {
                                    Ok(post) => {
                                        tracing::info!(id, post_id = ?post.id, "Create completed");
                                        NetworkResponse::PostCreated { id, post }
                                    }
                                    Err(error) => {
                                        tracing::error!(id, error = %error, "Create failed");
                                        NetworkResponse::CreateFailed { id }
                                    }
                                };
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::Shutdown) => break,

                        None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}
