use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::content_store::SharedContentStore;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    store: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Pings the content store
#[get("/ready")]
pub async fn readiness(store: web::Data<SharedContentStore>) -> impl Responder {
    match store.ping().await {
        Ok(()) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            store: "ok",
        }),
        Err(e) => {
            tracing::warn!(error = %e, "Content store is not ready");
            HttpResponse::ServiceUnavailable().json(ReadinessResponse {
                status: "unhealthy",
                store: "unhealthy",
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content_store::{ContentStore, ContentStoreError, ContentStoreMemory, StorePath};
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{Map, Value};
    use std::sync::Arc;

    struct DownStore;

    #[async_trait]
    impl ContentStore for DownStore {
        async fn get(&self, _: &StorePath) -> Result<Option<Value>, ContentStoreError> {
            unimplemented!()
        }
        async fn set(&self, _: &StorePath, _: Value) -> Result<(), ContentStoreError> {
            unimplemented!()
        }
        async fn update(&self, _: &StorePath, _: Map<String, Value>) -> Result<(), ContentStoreError> {
            unimplemented!()
        }
        async fn push(&self, _: &StorePath, _: Value) -> Result<String, ContentStoreError> {
            unimplemented!()
        }
        async fn remove(&self, _: &StorePath) -> Result<bool, ContentStoreError> {
            unimplemented!()
        }
        async fn ping(&self) -> Result<(), ContentStoreError> {
            Err(ContentStoreError::DatabaseError("connection refused".to_string()))
        }
    }

    #[actix_web::test]
    async fn test_health_is_always_ok() {
        let app = test::init_service(App::new().service(health)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_ready_when_store_answers() {
        let store: SharedContentStore = Arc::new(ContentStoreMemory::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .service(readiness),
        )
        .await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["store"], "ok");
    }

    #[actix_web::test]
    async fn test_not_ready_when_store_is_down() {
        let store: SharedContentStore = Arc::new(DownStore);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .service(readiness),
        )
        .await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
