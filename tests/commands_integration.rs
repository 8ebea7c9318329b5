//! Integration tests for the CLI command handlers.
//!
//! These tests drive `podlink::cli::commands` directly, the way `dispatch`
//! does, with the handlers talking to a wiremock server. They pin down the
//! handler-level contracts: a rejected container creation is a warning and
//! still succeeds, transport failures are errors, and publish/read/update
//! drive the documented request sequences.

use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use podlink::cli::commands::{self, Context};
use podlink::ui::output::Verbosity;

fn ctx(pod_url: String) -> Context {
    Context {
        pod_url,
        verbosity: Verbosity::Quiet,
    }
}

/// A context whose endpoint nothing is listening on.
fn dead_ctx() -> Context {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    ctx(format!("http://127.0.0.1:{}/alice", port))
}

// =============================================================================
// create-container
// =============================================================================

mod create_container {
    use super::*;

    #[tokio::test]
    async fn succeeds_on_201() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/"))
            .and(header("Slug", "measurements/"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        commands::create_container(&ctx(server.uri()), "measurements")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn rejection_is_warned_not_failed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(409).set_body_string("Container already exists"))
            .expect(1)
            .mount(&server)
            .await;

        // The command still exits successfully; the rejection only produces
        // a warning.
        commands::create_container(&ctx(server.uri()), "measurements")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn transport_failure_is_an_error() {
        let result = commands::create_container(&dead_ctx(), "measurements").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn invalid_endpoint_is_an_error() {
        let result = commands::create_container(&ctx("not-a-url".into()), "measurements").await;
        assert!(result.is_err());
    }
}

// =============================================================================
// publish / read / update
// =============================================================================

mod resources {
    use super::*;

    #[tokio::test]
    async fn publish_creates_absent_resource() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/measurements/log.txt"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/measurements/"))
            .and(header("Slug", "log.txt"))
            .and(body_string("a\nb\n"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        commands::publish(
            &ctx(server.uri()),
            "measurements",
            "log.txt",
            vec!["a".into(), "b".into()],
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn read_succeeds_plain_and_json() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/measurements/log.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string("a\nb\n"))
            .expect(2)
            .mount(&server)
            .await;

        commands::read(&ctx(server.uri()), "measurements", "log.txt", false)
            .await
            .unwrap();
        commands::read(&ctx(server.uri()), "measurements", "log.txt", true)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn update_appends_after_existing_content() {
        let server = MockServer::start().await;

        // The update's read and the publish probe both GET the resource.
        Mock::given(method("GET"))
            .and(path("/measurements/log.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string("a\n"))
            .expect(2)
            .mount(&server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/measurements/log.txt"))
            .and(body_string("a\nb\n"))
            .respond_with(ResponseTemplate::new(205))
            .expect(1)
            .mount(&server)
            .await;

        commands::update(
            &ctx(server.uri()),
            "measurements",
            "log.txt",
            vec!["b".into()],
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn update_transport_failure_is_an_error() {
        let result =
            commands::update(&dead_ctx(), "measurements", "log.txt", vec!["b".into()]).await;
        assert!(result.is_err());
    }
}
