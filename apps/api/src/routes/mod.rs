pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::assistant::handlers as assistant;
use crate::contact::handlers as contact;
use crate::profile::handlers as profile;
use crate::state::AppState;

/// Headroom for multipart framing and JSON wrapping around the image bytes.
const BODY_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.max_upload_bytes;
    // base64 inflates by 4/3
    let max_data_url = max_upload / 3 * 4 + 4;

    Router::new()
        .route("/health", get(health::health_handler))
        // Site content
        .route("/api/v1/profile", get(profile::handle_get_profile))
        .route("/api/v1/experience", get(profile::handle_get_experience))
        .route("/api/v1/education", get(profile::handle_get_education))
        .route("/api/v1/projects", get(profile::handle_list_projects))
        .route("/api/v1/projects/:index", get(profile::handle_get_project))
        // Chat assistant
        .route("/api/v1/chat", post(assistant::handle_chat))
        .route(
            "/api/v1/chat/sessions",
            post(assistant::handle_create_session),
        )
        .route(
            "/api/v1/chat/sessions/:id",
            get(assistant::handle_get_session),
        )
        .route(
            "/api/v1/chat/sessions/:id/messages",
            post(assistant::handle_session_message),
        )
        // Design inspector
        .route(
            "/api/v1/inspect",
            post(assistant::handle_inspect)
                .layer(DefaultBodyLimit::max(max_upload + BODY_OVERHEAD_BYTES)),
        )
        .route(
            "/api/v1/inspect/data-url",
            post(assistant::handle_inspect_data_url)
                .layer(DefaultBodyLimit::max(max_data_url + BODY_OVERHEAD_BYTES)),
        )
        // Stack advisor
        .route("/api/v1/advise", post(assistant::handle_advise))
        // Contact
        .route("/api/v1/contact", post(contact::handle_submit))
        .route("/api/v1/contact/polish", post(contact::handle_polish))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::assistant::lifecycle::RequestState;
    use crate::assistant::prompts::{
        CHAT_ERROR_FALLBACK, CHAT_GREETING, INSPECTOR_ERROR_LAYOUT, POLISH_FAILURE_STATUS,
    };
    use crate::config::Config;
    use crate::llm_client::testing::{FakeAssistant, GatedAssistant, Scripted};
    use crate::profile::data::PROJECTS;

    fn app_with(fake: Arc<FakeAssistant>) -> Router {
        build_router(AppState::new(fake, Config::for_tests()))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response: Response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app_with(Arc::default()), get_req("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_projects_by_index() {
        let app = app_with(Arc::default());

        let (status, body) = send(app.clone(), get_req("/api/v1/projects/0")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], PROJECTS[0].title);

        let past_end = format!("/api/v1/projects/{}", PROJECTS.len());
        let (status, body) = send(app, get_req(&past_end)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_profile_and_education() {
        let app = app_with(Arc::default());

        let (status, body) = send(app.clone(), get_req("/api/v1/profile")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["skills"].as_array().is_some_and(|s| !s.is_empty()));

        let (_, body) = send(app, get_req("/api/v1/education")).await;
        assert!(body["education"].is_array());
        assert!(body["certifications"].is_array());
    }

    #[tokio::test]
    async fn test_stateless_chat_returns_reply_and_links() {
        let fake = Arc::new(FakeAssistant::replying(&[
            "Try SentiCoreX at https://senticore-x.vercel.app/ today.",
        ]));
        let request = post_json(
            "/api/v1/chat",
            json!({
                "history": [{"role": "model", "text": CHAT_GREETING}],
                "message": "Show me a live project"
            }),
        );

        let (status, body) = send(app_with(fake.clone()), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reply"]["role"], "assistant");
        assert_eq!(body["links"], json!(["https://senticore-x.vercel.app/"]));
        assert_eq!(fake.requests()[0].history.len(), 1);
    }

    #[tokio::test]
    async fn test_blank_inputs_are_rejected_without_calls() {
        let fake = Arc::new(FakeAssistant::replying(&["unused"]));
        let app = app_with(fake.clone());

        let cases = [
            ("/api/v1/chat", json!({"message": "   "})),
            ("/api/v1/advise", json!({"idea": ""})),
            ("/api/v1/contact/polish", json!({"message": "\n\t"})),
        ];
        for (uri, body) in cases {
            let (status, _) = send(app.clone(), post_json(uri, body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        }
        assert_eq!(fake.calls(), 0);
    }

    #[tokio::test]
    async fn test_polish_failure_returns_draft() {
        let app = app_with(Arc::new(FakeAssistant::failing()));
        let (status, body) = send(
            app,
            post_json("/api/v1/contact/polish", json!({"message": "pls reply"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "pls reply");
        assert_eq!(body["polished"], false);
        assert_eq!(body["status"], POLISH_FAILURE_STATUS);
    }

    #[tokio::test]
    async fn test_advise_degrades_to_default_record() {
        let app = app_with(Arc::new(FakeAssistant::replying(&["no json here"])));
        let (status, body) = send(
            app,
            post_json("/api/v1/advise", json!({"idea": "chef marketplace"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["frontend"], json!([]));
        assert!(body["reasoning"].as_str().is_some_and(|r| !r.is_empty()));
    }

    #[tokio::test]
    async fn test_contact_submit_validates() {
        let app = app_with(Arc::default());

        let (status, body) = send(
            app.clone(),
            post_json(
                "/api/v1/contact",
                json!({"name": "", "email": "not-an-email", "message": "hi"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "name: required, email: invalid");

        let (status, body) = send(
            app,
            post_json(
                "/api/v1/contact",
                json!({"name": "Ada", "email": "ada@example.com", "message": "hi"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "Thank you for your message!");
    }

    #[tokio::test]
    async fn test_multipart_inspect() {
        let fake = Arc::new(FakeAssistant::replying(&[
            r##"{"colors": ["#000000"], "layout": "Single column", "components": "Hero"}"##,
        ]));
        let boundary = "X-PORTFOLIO-BOUNDARY";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"image\"; filename=\"shot.png\"\r\n\
             Content-Type: image/png\r\n\r\n\
             PNGDATA\r\n\
             --{boundary}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/inspect")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let (status, body) = send(app_with(fake.clone()), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["colors"], json!(["#000000"]));
        assert_eq!(body["layout"], "Single column");
        assert_eq!(fake.calls(), 1);
    }

    #[tokio::test]
    async fn test_data_url_inspect_rejects_non_image_and_degrades_on_failure() {
        let fake = Arc::new(FakeAssistant::failing());
        let app = app_with(fake.clone());

        let (status, _) = send(
            app.clone(),
            post_json(
                "/api/v1/inspect/data-url",
                json!({"image": "data:text/plain;base64,YWJj"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(fake.calls(), 0);

        let (status, body) = send(
            app,
            post_json(
                "/api/v1/inspect/data-url",
                json!({"image": "data:image/png;base64,YWJj"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["layout"], INSPECTOR_ERROR_LAYOUT);
        assert_eq!(body["colors"], json!([]));
    }

    #[tokio::test]
    async fn test_session_rejects_concurrent_submission() {
        let gated = Arc::new(GatedAssistant::default());
        let state = AppState::new(gated.clone(), Config::for_tests());
        let sessions = state.sessions.clone();
        let app = build_router(state);

        let (status, created) = send(app.clone(), post_json("/api/v1/chat/sessions", json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        let id: uuid::Uuid = serde_json::from_value(created["session_id"].clone()).unwrap();
        let uri = format!("/api/v1/chat/sessions/{id}/messages");

        let first = tokio::spawn(send(
            app.clone(),
            post_json(&uri, json!({"message": "first"})),
        ));
        for _ in 0..100 {
            if sessions.snapshot(id).await.unwrap().state == RequestState::Pending {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        let (status, body) = send(app.clone(), post_json(&uri, json!({"message": "second"}))).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "CONFLICT");

        gated.release();
        let (status, body) = first.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reply"]["text"], GatedAssistant::REPLY);
        assert_eq!(body["state"], "succeeded");

        let (_, snapshot) = send(app, get_req(&format!("/api/v1/chat/sessions/{id}"))).await;
        assert_eq!(snapshot["turns"].as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn test_failed_session_accepts_next_message() {
        let fake = Arc::new(FakeAssistant::default());
        fake.push(Scripted::Fail);
        fake.push(Scripted::Reply("Back online.".to_string()));
        let app = app_with(fake.clone());

        let (_, created) = send(app.clone(), post_json("/api/v1/chat/sessions", json!({}))).await;
        let id = created["session_id"].as_str().unwrap().to_string();
        let uri = format!("/api/v1/chat/sessions/{id}/messages");

        let (status, body) = send(app.clone(), post_json(&uri, json!({"message": "first"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reply"]["text"], CHAT_ERROR_FALLBACK);
        assert_eq!(body["state"], "failed");

        let (status, body) = send(app.clone(), post_json(&uri, json!({"message": "again"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reply"]["text"], "Back online.");
        assert_eq!(body["state"], "succeeded");

        let (_, snapshot) = send(app, get_req(&format!("/api/v1/chat/sessions/{id}"))).await;
        assert_eq!(snapshot["turns"].as_array().map(Vec::len), Some(5));
        assert_eq!(fake.calls(), 2);
    }
}
