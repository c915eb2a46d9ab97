#[cfg(test)]
mod additional_coverage_tests {
    use crate::models::status::StatusCheck;
    use crate::routes;
    use crate::service::StatusService;
    use crate::store::MockStatusStore;
    use actix_web::{App, test, web::Data};
    use mongodb::bson::Document;
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    // Full route table, as mounted by routes::configure, over a stateful
    // mock store.
    async fn full_app() -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    > {
        let stored: Arc<Mutex<Vec<Document>>> = Arc::new(Mutex::new(Vec::new()));

        let mut store = MockStatusStore::new();
        let write_side = Arc::clone(&stored);
        store.expect_insert().returning(move |document| {
            write_side.lock().unwrap().push(document);
            Ok(())
        });
        let read_side = Arc::clone(&stored);
        store
            .expect_list_all()
            .returning(move |_| Ok(read_side.lock().unwrap().clone()));

        test::init_service(
            App::new()
                .app_data(Data::new(StatusService::new(Arc::new(store))))
                .configure(routes::configure),
        )
        .await
    }

    #[actix_web::test]
    async fn test_route_table_wiring() {
        unsafe {
            std::env::set_var("MONGO_URL", "mongodb://localhost:27017");
            std::env::set_var("DB_NAME", "anotequest");
        }

        let app = full_app().await;

        // Landing page and health check live outside the /api prefix.
        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert!(resp.status().is_success());

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert!(resp.status().is_success());

        // The greeting and the status pair live under it.
        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/api/").to_request()).await;
        assert!(resp.status().is_success());

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/status")
                .set_json(json!({ "client_name": "alice" }))
                .to_request(),
        )
        .await;
        assert!(resp.status().is_success());

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/status").to_request(),
        )
        .await;
        assert!(resp.status().is_success());

        // The health check is not duplicated under the prefix.
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 404);
    }

    #[actix_web::test]
    async fn test_many_creates_yield_distinct_ids() {
        let app = full_app().await;
        let mut seen = std::collections::HashSet::new();

        for i in 0..25 {
            let req = test::TestRequest::post()
                .uri("/api/status")
                .set_json(json!({ "client_name": format!("client-{i}") }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert!(resp.status().is_success());

            let check: StatusCheck =
                serde_json::from_slice(&test::read_body(resp).await).unwrap();
            assert!(seen.insert(check.id), "ids must be pairwise distinct");
        }

        let req = test::TestRequest::get().uri("/api/status").to_request();
        let resp = test::call_service(&app, req).await;
        let listed: Vec<StatusCheck> =
            serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert_eq!(listed.len(), 25);
    }

    #[::core::prelude::v1::test]
    fn test_wire_round_trip() {
        let check = StatusCheck::new("alice");

        let wire = serde_json::to_string(&check).unwrap();
        let restored: StatusCheck = serde_json::from_str(&wire).unwrap();

        assert_eq!(restored, check);
        assert!(Uuid::parse_str(&restored.id).is_ok());
    }
}
