//! HTTP-level tests for the component client against a mock server.

use compkit_client::{
    Complexity, ComponentApi, ComponentClient, DocsQuery, ErrorKind, GenerateQuery, HelpQuery,
    RecommendQuery, SearchQuery,
};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> ComponentClient {
    ComponentClient::builder()
        .base_url(format!("{}/api/mcp", server.uri()))
        .build()
        .unwrap()
}

fn button_search() -> SearchQuery {
    SearchQuery {
        query: "button".to_string(),
        category: None,
        limit: 10,
    }
}

#[tokio::test]
async fn test_search_sends_query_and_omits_missing_category() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/mcp/search"))
        .and(query_param("query", "button"))
        .and(query_param("limit", "10"))
        .and(query_param_is_missing("category"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"name": "Button"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let body = client.search(&button_search()).await.unwrap();
    assert_eq!(body["results"][0]["name"], "Button");
}

#[tokio::test]
async fn test_search_with_category() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/mcp/search"))
        .and(query_param("category", "forms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let query = SearchQuery {
        category: Some("forms".to_string()),
        ..button_search()
    };
    client.search(&query).await.unwrap();
}

#[tokio::test]
async fn test_docs_serializes_flags() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/mcp/docs"))
        .and(query_param("component_name", "Modal"))
        .and(query_param("include_examples", "true"))
        .and(query_param("include_props", "true"))
        .and(query_param("include_styling", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Modal"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let body = client
        .docs(&DocsQuery {
            component_name: "Modal".to_string(),
            include_examples: true,
            include_props: true,
            include_styling: false,
        })
        .await
        .unwrap();
    assert_eq!(body, json!({"name": "Modal"}));
}

#[tokio::test]
async fn test_recommend_serializes_complexity() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/mcp/recommend"))
        .and(query_param("use_case", "checkout form"))
        .and(query_param("complexity", "complex"))
        .and(query_param("framework", "react"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"recommendations": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .recommend(&RecommendQuery {
            use_case: "checkout form".to_string(),
            complexity: Complexity::Complex,
            framework: "react".to_string(),
            limit: 5,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_generate_and_help_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/mcp/generate"))
        .and(query_param("description", "login page"))
        .and(query_param("typescript", "true"))
        .and(query_param_is_missing("components"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": "<Login />"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/mcp/help"))
        .and(query_param_is_missing("topic"))
        .and(query_param_is_missing("question"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"help": "..."})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let code = client
        .generate(&GenerateQuery {
            description: "login page".to_string(),
            components: None,
            framework: "react".to_string(),
            typescript: true,
            include_styling: true,
        })
        .await
        .unwrap();
    assert_eq!(code["code"], "<Login />");

    client.help(&HelpQuery::default()).await.unwrap();
}

#[tokio::test]
async fn test_auth_token_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(header("authorization", "Bearer sekrit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ComponentClient::builder()
        .base_url(server.uri())
        .auth_token("sekrit")
        .build()
        .unwrap();
    client.search(&button_search()).await.unwrap();
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/mcp/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.search(&button_search()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn test_error_status_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/mcp/docs"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "unknown component"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .docs(&DocsQuery {
            component_name: "Nope".to_string(),
            include_examples: true,
            include_props: true,
            include_styling: false,
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.is_not_found());
    assert!(err.to_string().contains("unknown component"));
}

#[tokio::test]
async fn test_error_status_without_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.help(&HelpQuery::default()).await.unwrap_err();
    assert!(err.is_server_error());
    assert!(err.to_string().contains("502"));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Bind and drop a server so the port is almost certainly closed.
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };
    let client = ComponentClient::builder().base_url(uri).build().unwrap();
    let err = client.search(&button_search()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(!client.health().is_healthy().await);
}

#[tokio::test]
async fn test_health_check() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/mcp/health"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": "ok", "version": "2.1.0"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let health = client.health().check().await.unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.version.as_deref(), Some("2.1.0"));
    assert!(client.health().is_healthy().await);
}
