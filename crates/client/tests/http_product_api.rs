use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use stockform_client::{ApiConfig, ApiError, ErrorKind, HttpProductApi, ProductApi};
use stockform_core::ProductId;
use stockform_products::Product;
use testresult::TestResult;

#[derive(Debug, Clone, PartialEq)]
struct Recorded {
    method: Method,
    path: String,
    body: Option<Value>,
}

#[derive(Clone, Copy)]
enum Mode {
    Ok,
    Fail,
    Garbage,
}

struct Stub {
    mode: Mode,
    requests: Mutex<Vec<Recorded>>,
}

async fn record(State(stub): State<Arc<Stub>>, method: Method, uri: Uri, body: Bytes) -> Response {
    let body = if body.is_empty() {
        None
    } else {
        serde_json::from_slice(&body).ok()
    };
    stub.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: uri.path().to_string(),
        body,
    });

    match stub.mode {
        Mode::Fail => (
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(json!({"message": "database unavailable"})),
        )
            .into_response(),
        Mode::Garbage => (StatusCode::OK, "<html>not json</html>").into_response(),
        Mode::Ok if method == Method::GET => axum::Json(json!([{
            "_id": "abc123",
            "product_code": "P1",
            "name": "Widget",
            "description": "d",
            "price": "9.99",
            "qty": "3",
            "date_added": "2024-01-01",
            "isDeleted": uri.path().ends_with("/deleted"),
        }]))
        .into_response(),
        Mode::Ok => axum::Json(json!({"message": "ok"})).into_response(),
    }
}

struct TestServer {
    base_url: String,
    stub: Arc<Stub>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(mode: Mode) -> Self {
        let stub = Arc::new(Stub {
            mode,
            requests: Mutex::new(Vec::new()),
        });
        let app = Router::new().fallback(record).with_state(stub.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            stub,
            handle,
        }
    }

    fn api(&self) -> HttpProductApi {
        HttpProductApi::new(ApiConfig::parse(&self.base_url).unwrap()).unwrap()
    }

    fn requests(&self) -> Vec<Recorded> {
        self.stub.requests.lock().unwrap().clone()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn widget() -> Product {
    Product {
        id: None,
        product_code: "P1".to_string(),
        name: "Widget".to_string(),
        description: "d".to_string(),
        price: "9.99".to_string(),
        quantity: "3".to_string(),
        date_added: "2024-01-01".to_string(),
        is_deleted: None,
    }
}

fn id() -> ProductId {
    "abc123".parse().unwrap()
}

#[tokio::test]
async fn list_active_decodes_products() -> TestResult {
    let srv = TestServer::spawn(Mode::Ok).await;

    let products = srv.api().list_active().await?;

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, Some(id()));
    assert_eq!(products[0].summary_line(), "P1 - Widget - $9.99");
    assert_eq!(
        srv.requests(),
        vec![Recorded {
            method: Method::GET,
            path: "/products".to_string(),
            body: None,
        }]
    );

    Ok(())
}

#[tokio::test]
async fn list_removed_hits_deleted_listing() -> TestResult {
    let srv = TestServer::spawn(Mode::Ok).await;

    let products = srv.api().list_removed().await?;

    assert_eq!(products[0].is_deleted, Some(true));
    assert_eq!(srv.requests()[0].path, "/products/deleted");

    Ok(())
}

#[tokio::test]
async fn create_posts_the_literal_draft() -> TestResult {
    let srv = TestServer::spawn(Mode::Ok).await;

    srv.api().create(widget()).await?;

    let requests = srv.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].path, "/products");
    assert_eq!(
        requests[0].body,
        Some(json!({
            "productCode": "P1",
            "name": "Widget",
            "description": "d",
            "price": "9.99",
            "quantity": "3",
            "dateAdded": "2024-01-01",
        }))
    );

    Ok(())
}

#[tokio::test]
async fn update_puts_full_product_to_id_path() -> TestResult {
    let srv = TestServer::spawn(Mode::Ok).await;
    let product = Product {
        id: Some(id()),
        ..widget()
    };

    srv.api().update(id(), product).await?;

    let requests = srv.requests();
    assert_eq!(requests[0].method, Method::PUT);
    assert_eq!(requests[0].path, "/products/abc123");
    assert_eq!(requests[0].body.as_ref().unwrap()["id"], "abc123");
    assert_eq!(requests[0].body.as_ref().unwrap()["name"], "Widget");

    Ok(())
}

#[tokio::test]
async fn lifecycle_calls_use_expected_routes() -> TestResult {
    let srv = TestServer::spawn(Mode::Ok).await;
    let api = srv.api();

    api.soft_delete(id()).await?;
    api.restore(id()).await?;
    api.purge(id()).await?;

    let routes: Vec<(Method, String)> = srv
        .requests()
        .into_iter()
        .map(|r| (r.method, r.path))
        .collect();
    assert_eq!(
        routes,
        vec![
            (Method::DELETE, "/products/abc123".to_string()),
            (Method::PUT, "/products/restore/abc123".to_string()),
            (Method::DELETE, "/products/permanently/abc123".to_string()),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn non_success_status_carries_error_payload() -> TestResult {
    let srv = TestServer::spawn(Mode::Fail).await;

    let err = srv.api().create(widget()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.payload(), Some(&json!({"message": "database unavailable"})));

    let err = srv.api().soft_delete(id()).await.unwrap_err();
    assert_eq!(err.status(), Some(500));

    Ok(())
}

#[tokio::test]
async fn undecodable_list_is_a_parse_error() -> TestResult {
    let srv = TestServer::spawn(Mode::Garbage).await;

    let err = srv.api().list_active().await.unwrap_err();

    assert!(matches!(err, ApiError::Parse(_)));
    assert_eq!(err.kind(), ErrorKind::Parse);

    Ok(())
}

#[tokio::test]
async fn unreachable_api_is_a_network_error() -> TestResult {
    // Bind then drop to get a port nobody listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let api = HttpProductApi::new(ApiConfig::parse(&format!("http://{addr}"))?)?;
    let err = api.list_active().await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(err.kind(), ErrorKind::Transport);

    Ok(())
}
