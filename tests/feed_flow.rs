//! End-to-end tests: the real app and network actors wired to a local mock
//! of the posts API.
//!
//! # Design
//! Starts an axum server on a random port, spawns the two actors exactly as
//! the binary does, and drives the app through `UiEvent`s while observing
//! the `RenderState` snapshots it emits.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tokio::net::TcpListener;
use tokio::sync::{mpsc, Mutex};

use postline_tui::{
    AppActor, FeedError, NetworkActor, NewPost, Post, RenderState, ScreenPhase, UiEvent,
};

#[derive(Clone)]
struct TestApi {
    posts: Arc<Mutex<Vec<Post>>>,
    fail_create: bool,
}

#[derive(Deserialize)]
struct ListParams {
    #[serde(rename = "_limit")]
    limit: Option<usize>,
}

async fn list_posts(
    State(api): State<TestApi>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Post>> {
    let posts = api.posts.lock().await;
    let limit = params.limit.unwrap_or(posts.len());
    Json(posts.iter().take(limit).cloned().collect())
}

async fn create_post(
    State(api): State<TestApi>,
    Json(input): Json<NewPost>,
) -> Result<(StatusCode, Json<Post>), StatusCode> {
    if api.fail_create {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let created = Post {
        id: Some(101),
        user_id: None,
        title: input.title,
        body: input.body,
    };
    Ok((StatusCode::CREATED, Json(created)))
}

/// Serve the mock API on a random port and return its base URL.
async fn serve(api: TestApi) -> String {
    let router = Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .with_state(api);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Spawn the network and app actors the same way `main` does.
fn start_app(
    base_url: &str,
) -> (
    mpsc::UnboundedSender<UiEvent>,
    mpsc::UnboundedReceiver<RenderState>,
) {
    let (ui_tx, ui_rx) = mpsc::unbounded_channel();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel();
    let (render_tx, render_rx) = mpsc::unbounded_channel();

    tokio::spawn(NetworkActor::new(net_resp_tx, base_url).run(net_cmd_rx));
    tokio::spawn(AppActor::new(net_cmd_tx, render_tx).run(ui_rx, net_resp_rx));

    (ui_tx, render_rx)
}

/// Wait until a render snapshot satisfies the predicate.
async fn wait_for(
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
    mut pred: impl FnMut(&RenderState) -> bool,
) -> RenderState {
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            let state = render_rx.recv().await.expect("render channel closed");
            if pred(&state) {
                return state;
            }
        }
    })
    .await
    .expect("timed out waiting for render state")
}

fn seed_posts(n: u64) -> Vec<Post> {
    (1..=n)
        .map(|i| Post {
            id: Some(i),
            user_id: Some(1),
            title: format!("title {i}"),
            body: format!("body {i}"),
        })
        .collect()
}

fn type_text(ui_tx: &mpsc::UnboundedSender<UiEvent>, text: &str) {
    ui_tx.send(UiEvent::StartEditing).unwrap();
    for c in text.chars() {
        ui_tx.send(UiEvent::CharInput(c)).unwrap();
    }
    ui_tx.send(UiEvent::StopEditing).unwrap();
}

#[tokio::test]
async fn initial_fetch_populates_feed_in_server_order() {
    let api = TestApi {
        posts: Arc::new(Mutex::new(seed_posts(3))),
        fail_create: false,
    };
    let base_url = serve(api).await;
    let (_ui_tx, mut render_rx) = start_app(&base_url);

    let state = wait_for(&mut render_rx, |s| s.phase == ScreenPhase::Ready).await;
    assert_eq!(state.posts.len(), 3);
    let ids: Vec<_> = state.posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
    assert!(!state.refreshing);
}

#[tokio::test]
async fn initial_fetch_requests_seven_posts() {
    let api = TestApi {
        posts: Arc::new(Mutex::new(seed_posts(25))),
        fail_create: false,
    };
    let base_url = serve(api).await;
    let (_ui_tx, mut render_rx) = start_app(&base_url);

    let state = wait_for(&mut render_rx, |s| s.phase == ScreenPhase::Ready).await;
    assert_eq!(state.posts.len(), 7);
}

#[tokio::test]
async fn initial_fetch_failure_shows_fixed_error() {
    // Bind and immediately drop a listener so the port refuses connections.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (_ui_tx, mut render_rx) = start_app(&format!("http://{addr}"));

    let state = wait_for(&mut render_rx, |s| {
        matches!(s.phase, ScreenPhase::Error(_))
    })
    .await;
    assert_eq!(state.phase, ScreenPhase::Error(FeedError::FetchList));
    assert_eq!(
        FeedError::FetchList.message(),
        "Failed to fetch post list"
    );
    assert!(state.posts.is_empty());
}

#[tokio::test]
async fn refresh_requests_twenty_and_replaces_the_list() {
    let api = TestApi {
        posts: Arc::new(Mutex::new(seed_posts(25))),
        fail_create: false,
    };
    let base_url = serve(api.clone()).await;
    let (ui_tx, mut render_rx) = start_app(&base_url);

    let state = wait_for(&mut render_rx, |s| s.phase == ScreenPhase::Ready).await;
    assert_eq!(state.posts.len(), 7);

    // Swap the server data so a merge would be detectable.
    {
        let mut posts = api.posts.lock().await;
        for (i, post) in posts.iter_mut().enumerate() {
            post.id = Some(100 + i as u64);
        }
    }

    ui_tx.send(UiEvent::Refresh).unwrap();
    let state = wait_for(&mut render_rx, |s| s.posts.len() == 20 && !s.refreshing).await;
    assert_eq!(state.phase, ScreenPhase::Ready);
    assert!(state.posts.iter().all(|p| p.id >= Some(100)));
}

#[tokio::test]
async fn compose_flow_prepends_created_post_and_clears_form() {
    let api = TestApi {
        posts: Arc::new(Mutex::new(vec![Post {
            id: Some(1),
            user_id: None,
            title: "A".to_string(),
            body: "X".to_string(),
        }])),
        fail_create: false,
    };
    let base_url = serve(api).await;
    let (ui_tx, mut render_rx) = start_app(&base_url);

    let state = wait_for(&mut render_rx, |s| s.phase == ScreenPhase::Ready).await;
    assert_eq!(state.posts.len(), 1);
    assert_eq!(state.posts[0].title, "A");

    // Focus starts on the title input; type both fields, then submit.
    type_text(&ui_tx, "New");
    ui_tx.send(UiEvent::NextPanel).unwrap();
    type_text(&ui_tx, "Body");
    ui_tx.send(UiEvent::SubmitPost).unwrap();

    let state = wait_for(&mut render_rx, |s| s.posts.len() == 2).await;
    assert_eq!(state.posts[0].title, "New");
    assert_eq!(state.posts[0].body, "Body");
    assert_eq!(state.posts[0].id, Some(101));
    assert_eq!(state.posts[1].title, "A");
    assert_eq!(state.title_input, "");
    assert_eq!(state.body_input, "");
    assert!(!state.posting);
    assert_eq!(state.phase, ScreenPhase::Ready);
}

#[tokio::test]
async fn create_failure_keeps_form_and_reenables_submit() {
    let api = TestApi {
        posts: Arc::new(Mutex::new(seed_posts(2))),
        fail_create: true,
    };
    let base_url = serve(api).await;
    let (ui_tx, mut render_rx) = start_app(&base_url);

    wait_for(&mut render_rx, |s| s.phase == ScreenPhase::Ready).await;

    type_text(&ui_tx, "T");
    ui_tx.send(UiEvent::SubmitPost).unwrap();

    let state = wait_for(&mut render_rx, |s| {
        matches!(s.phase, ScreenPhase::Error(_))
    })
    .await;
    assert_eq!(state.phase, ScreenPhase::Error(FeedError::CreatePost));
    assert_eq!(FeedError::CreatePost.message(), "Failed to add new post");
    assert_eq!(state.posts.len(), 2);
    assert_eq!(state.title_input, "T");
    assert!(!state.posting);
}
