use actix_web::{web, HttpResponse, ResponseError};
use std::sync::Arc;
use std::time::Instant;

use crate::backends::Backends;
use crate::metrics::Metrics;
use crate::usecase::{CreateOrder, CreateOrderInput, GetOrder, GetOrderInput, ListOrders};

use super::errors::ApiError;

// ============================================================================
// Order HTTP Handlers
// ============================================================================
//
//   POST /orders            → CreateOrder (201)
//   GET  /orders/{orderId}  → GetOrder    (200)
//   GET  /orders            → ListOrders  (200)
//
// Handlers only decode input, call a workflow and encode the result. Error
// status codes come from `ApiError`.
//
// ============================================================================

pub struct OrderHandlers {
    create_order: CreateOrder,
    get_order: GetOrder,
    list_orders: ListOrders,
}

impl OrderHandlers {
    pub fn new(backends: &Backends) -> Self {
        Self {
            create_order: CreateOrder::new(backends.dispatch.clone()),
            get_order: GetOrder::new(backends.store.clone()),
            list_orders: ListOrders::new(backends.store.clone()),
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/orders")
            .route(web::post().to(create_order))
            .route(web::get().to(list_orders)),
    )
    .service(web::resource("/orders/{orderId}").route(web::get().to(get_order)));
}

fn observe(
    metrics: &Metrics,
    route: &str,
    started: Instant,
    result: &Result<HttpResponse, ApiError>,
) {
    let status = match result {
        Ok(response) => response.status(),
        Err(e) => e.status_code(),
    };

    let elapsed = started.elapsed();
    metrics.record_request(route, status.as_u16(), elapsed.as_secs_f64());

    match result {
        Ok(_) => tracing::info!(
            route = route,
            status = status.as_u16(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Handled request"
        ),
        Err(ApiError::Order(e)) if e.is_backend_failure() => tracing::error!(
            route = route,
            status = status.as_u16(),
            error = %e,
            "Backend failure while handling request"
        ),
        Err(e) => tracing::warn!(
            route = route,
            status = status.as_u16(),
            error = %e,
            "Request rejected"
        ),
    }
}

fn parse_order_number(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::InvalidOrderId(raw.to_string()))
}

async fn create_order(
    handlers: web::Data<OrderHandlers>,
    metrics: web::Data<Arc<Metrics>>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let started = Instant::now();
    let result = handle_create_order(&handlers, &metrics, &body).await;
    observe(&metrics, "POST /orders", started, &result);
    result
}

async fn handle_create_order(
    handlers: &OrderHandlers,
    metrics: &Metrics,
    body: &[u8],
) -> Result<HttpResponse, ApiError> {
    let input: CreateOrderInput =
        serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    let outcome = handlers.create_order.execute(input).await;
    metrics.record_dispatch(outcome.is_ok());

    let output = outcome?;
    tracing::info!(order_number = output.order_number, "Order created");
    Ok(HttpResponse::Created().json(output))
}

async fn get_order(
    handlers: web::Data<OrderHandlers>,
    metrics: web::Data<Arc<Metrics>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let started = Instant::now();
    let result = handle_get_order(&handlers, &path).await;
    observe(&metrics, "GET /orders/{orderId}", started, &result);
    result
}

async fn handle_get_order(handlers: &OrderHandlers, raw_id: &str) -> Result<HttpResponse, ApiError> {
    let order_number = parse_order_number(raw_id)?;
    let output = handlers
        .get_order
        .execute(GetOrderInput { order_number })
        .await?;
    Ok(HttpResponse::Ok().json(output))
}

async fn list_orders(
    handlers: web::Data<OrderHandlers>,
    metrics: web::Data<Arc<Metrics>>,
) -> Result<HttpResponse, ApiError> {
    let started = Instant::now();
    let result = handlers
        .list_orders
        .execute()
        .await
        .map(|orders| HttpResponse::Ok().json(orders))
        .map_err(ApiError::from);
    observe(&metrics, "GET /orders", started, &result);
    result
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::domain::order::{Order, OrderStore};
    use crate::store::InMemoryOrderStore;
    use crate::testing::{FailingDispatch, RecordingDispatch};
    use crate::usecase::{CreateOrderOutput, GetOrderOutput};

    async fn backends_with(dispatch: Arc<dyn crate::domain::order::OrderDispatch>) -> Backends {
        let store = InMemoryOrderStore::new();
        store
            .save(&Order::new("", 123, "Complete").with_paid(true))
            .await
            .unwrap();

        Backends {
            store: Arc::new(store),
            dispatch,
        }
    }

    macro_rules! app {
        ($backends:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(OrderHandlers::new(&$backends)))
                    .app_data(web::Data::new(Arc::new(Metrics::new().unwrap())))
                    .configure(configure)
                    .configure(crate::metrics::configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_list_orders() {
        let backends = backends_with(Arc::new(RecordingDispatch::default())).await;
        let app = app!(backends);

        let req = test::TestRequest::get().uri("/orders").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let orders: Vec<Order> = test::read_body_json(resp).await;
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].order_number, 123);
    }

    #[actix_web::test]
    async fn test_create_order() {
        let dispatch = Arc::new(RecordingDispatch::default());
        let backends = backends_with(dispatch.clone()).await;
        let app = app!(backends);

        let req = test::TestRequest::post()
            .uri("/orders")
            .set_json(serde_json::json!({"Data": "23/06/2025", "OrderId": 456, "Status": "New"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let output: CreateOrderOutput = test::read_body_json(resp).await;
        assert_eq!(output.order_number, 456);
        assert_eq!(output.payload, "23/06/2025");
        assert_eq!(output.status, "New");

        assert_eq!(dispatch.sent().len(), 1);
        // creation goes to the dispatch channel only
        assert!(backends.store.get_by_order_number(456).await.unwrap_err().is_not_found());
    }

    #[actix_web::test]
    async fn test_create_order_invalid_body() {
        let backends = backends_with(Arc::new(RecordingDispatch::default())).await;
        let app = app!(backends);

        let req = test::TestRequest::post()
            .uri("/orders")
            .set_payload("invalid json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_create_order_with_partial_body() {
        let dispatch = Arc::new(RecordingDispatch::default());
        let backends = backends_with(dispatch.clone()).await;
        let app = app!(backends);

        let req = test::TestRequest::post()
            .uri("/orders")
            .set_json(serde_json::json!({"Data": "x", "OrderId": 7}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let output: CreateOrderOutput = test::read_body_json(resp).await;
        assert_eq!(output.order_number, 7);
        assert_eq!(output.payload, "x");
        assert_eq!(output.status, "");
        assert_eq!(dispatch.sent().len(), 1);
    }

    #[actix_web::test]
    async fn test_create_order_dispatch_failure() {
        let backends = backends_with(Arc::new(FailingDispatch)).await;
        let app = app!(backends);

        let req = test::TestRequest::post()
            .uri("/orders")
            .set_json(serde_json::json!({"Data": "x", "OrderId": 1, "Status": "New"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_get_order() {
        let backends = backends_with(Arc::new(RecordingDispatch::default())).await;
        let app = app!(backends);

        let req = test::TestRequest::get().uri("/orders/123").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let output: GetOrderOutput = test::read_body_json(resp).await;
        assert_eq!(output.order_number, 123);
        assert_eq!(output.status, "Complete");
        assert!(output.paid);
    }

    #[actix_web::test]
    async fn test_get_missing_order_is_404() {
        let backends = backends_with(Arc::new(RecordingDispatch::default())).await;
        let app = app!(backends);

        let req = test::TestRequest::get().uri("/orders/999").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "order not found: 999");
    }

    #[actix_web::test]
    async fn test_get_order_with_non_numeric_id() {
        let backends = backends_with(Arc::new(RecordingDispatch::default())).await;
        let app = app!(backends);

        let req = test::TestRequest::get().uri("/orders/abc").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_get_order_with_padded_id() {
        let backends = backends_with(Arc::new(RecordingDispatch::default())).await;
        let app = app!(backends);

        let req = test::TestRequest::get().uri("/orders/%20123").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_requests_show_up_in_metrics() {
        let backends = backends_with(Arc::new(RecordingDispatch::default())).await;
        let app = app!(backends);

        let req = test::TestRequest::get().uri("/orders/999").to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/orders").to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/orders")
            .set_json(serde_json::json!({"Data": "x", "OrderId": 1, "Status": "New"}))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/metrics").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("http_requests_total"));
        assert!(text.contains("status=\"404\""));
        // create and list share a path but not a label
        assert!(text.contains("route=\"GET /orders/{orderId}\",status=\"404\""));
        assert!(text.contains("route=\"GET /orders\",status=\"200\""));
        assert!(text.contains("route=\"POST /orders\",status=\"201\""));
    }

    #[::core::prelude::v1::test]
    fn test_parse_order_number() {
        assert_eq!(parse_order_number("123").unwrap(), 123);
        assert!(matches!(
            parse_order_number(" 123"),
            Err(ApiError::InvalidOrderId(_))
        ));
        assert!(matches!(
            parse_order_number("12x"),
            Err(ApiError::InvalidOrderId(_))
        ));
    }
}
