//! # Property HTTP Handlers
//!
//! 매물 등록/검색 엔드포인트를 처리하는 핸들러입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/properties` | 매물 등록 | 200 OK |
//! | `GET` | `/api/properties` | 매물 검색 | 200 OK |
//!
//! ## 에러 응답
//!
//! - 필드 검증 실패: 422, `details`에 필드별 메시지
//! - JSON/쿼리 형식 오류: 400
//! - 저장소 오류: 500

use actix_web::{HttpResponse, get, post, web};
use serde_json::{Map, Value};

use crate::core::errors::AppError;
use crate::domain::dto::properties::request::{CreatePropertyRequest, SearchPropertiesQuery};
use crate::services::properties::PropertyService;

/// 매물 등록
///
/// 본문은 JSON 객체여야 하며, 모든 필드 에러를 한 번에 모아 422로 반환합니다.
/// 검증에 실패하면 아무것도 저장되지 않습니다.
///
/// ```json
/// {
///   "title": "2-bed apt",
///   "region": "Plovdiv",
///   "size_sqm": 65,
///   "currency": "EUR",
///   "price_value": 50000
/// }
/// ```
#[post("")]
pub async fn create_property(
    service: web::Data<PropertyService>,
    payload: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, AppError> {
    let property = CreatePropertyRequest::from_payload(payload.into_inner())?;

    let response = service.create_property(property).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 매물 검색
///
/// ```text
/// GET /api/properties?q=Sofia&region=Plovdiv&min_price=10000&price_currency=BGN&limit=20
/// ```
#[get("")]
pub async fn search_properties(
    service: web::Data<PropertyService>,
    query: web::Query<SearchPropertiesQuery>,
) -> Result<HttpResponse, AppError> {
    let search = query.into_inner().into_search()?;

    let response = service.search_properties(search).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::http::header::ContentType;
    use actix_web::{App, test, web};
    use serde_json::json;

    use crate::config::DatabaseConfig;
    use crate::repositories::properties::MemoryPropertyRepository;
    use crate::routes::configure_all_routes;
    use crate::services::diagnostics::DiagnosticsService;
    use crate::services::properties::PropertyService;

    macro_rules! app {
        ($store:expr) => {{
            let store = $store.clone();
            test::init_service(
                App::new()
                    .app_data(web::Data::new(PropertyService::new(store.clone())))
                    .app_data(web::Data::new(DiagnosticsService::new(
                        store,
                        DatabaseConfig::from_values(None, None),
                    )))
                    .configure(configure_all_routes),
            )
            .await
        }};
    }

    fn memory_store() -> Arc<MemoryPropertyRepository> {
        Arc::new(MemoryPropertyRepository::new("bulghousing_test"))
    }

    fn plovdiv_apartment() -> serde_json::Value {
        json!({
            "title": "2-bed apt",
            "region": "Plovdiv",
            "size_sqm": 65,
            "currency": "EUR",
            "price_value": 50000
        })
    }

    #[actix_web::test]
    async fn test_create_and_find_plovdiv_listing() {
        let store = memory_store();
        let app = app!(store);

        let req = test::TestRequest::post()
            .uri("/api/properties")
            .set_json(plovdiv_apartment())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        let id = body["id"].as_str().unwrap().to_string();
        let stored = store.get(&id).unwrap().unwrap();
        assert_eq!(stored.price_eur, 50000.0);
        assert_eq!(stored.price_bgn, 97791.5);

        let req = test::TestRequest::get()
            .uri("/api/properties?region=Plovdiv")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["results"][0]["title"], "2-bed apt");
        assert_eq!(body["results"][0]["price_bgn"], 97791.5);

        let req = test::TestRequest::get()
            .uri("/api/properties?region=Varna")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["total"], 0);
    }

    #[actix_web::test]
    async fn test_missing_field_is_rejected_without_storing() {
        let store = memory_store();
        let app = app!(store);

        let mut payload = plovdiv_apartment();
        payload.as_object_mut().unwrap().remove("size_sqm");

        let req = test::TestRequest::post()
            .uri("/api/properties")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["details"]["size_sqm"].is_array());
        assert_eq!(store.len().unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_unknown_region_is_rejected() {
        let store = memory_store();
        let app = app!(store);

        let mut payload = plovdiv_apartment();
        payload["region"] = json!("Atlantis");

        let req = test::TestRequest::post()
            .uri("/api/properties")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(store.len().unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_collects_every_field_error() {
        let store = memory_store();
        let app = app!(store);

        let payload = json!({
            "title": "",
            "region": "Plovdiv",
            "size_sqm": -5,
            "currency": "USD",
            "price_value": 0
        });

        let req = test::TestRequest::post()
            .uri("/api/properties")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: serde_json::Value = test::read_body_json(resp).await;
        let details = body["details"].as_object().unwrap();
        for field in ["title", "size_sqm", "currency", "price_value"] {
            assert!(details.contains_key(field), "missing error for {}", field);
        }
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = app!(memory_store());

        let req = test::TestRequest::post()
            .uri("/api/properties")
            .insert_header(ContentType::json())
            .set_payload("{\"title\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_search_without_parameters_hides_identity() {
        let store = memory_store();
        let app = app!(store);

        for i in 0..60 {
            let mut payload = plovdiv_apartment();
            payload["title"] = json!(format!("Listing {}", i));
            let req = test::TestRequest::post()
                .uri("/api/properties")
                .set_json(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }

        let req = test::TestRequest::get().uri("/api/properties").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 50);
        assert_eq!(body["total"], 50);
        assert_eq!(results[0]["title"], "Listing 0");
        for result in results {
            assert!(result.get("_id").is_none());
            assert!(result.get("id").is_none());
        }
    }

    #[actix_web::test]
    async fn test_bgn_price_range_is_inclusive() {
        let store = memory_store();
        let app = app!(store);

        for (title, currency, price) in [
            ("Low", "BGN", 90000.0),
            ("Mid", "EUR", 50000.0),
            ("High", "BGN", 100000.0),
            ("Above", "BGN", 100000.01),
        ] {
            let mut payload = plovdiv_apartment();
            payload["title"] = json!(title);
            payload["currency"] = json!(currency);
            payload["price_value"] = json!(price);
            let req = test::TestRequest::post()
                .uri("/api/properties")
                .set_json(payload)
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get()
            .uri("/api/properties?price_currency=BGN&min_price=90000&max_price=100000")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let titles: Vec<&str> = body["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["Low", "Mid", "High"]);
    }

    #[actix_web::test]
    async fn test_keyword_search_is_case_insensitive() {
        let store = memory_store();
        let app = app!(store);

        let listings = [
            json!({"title": "Flat in SOFIA center", "region": "Sofia City", "size_sqm": 50, "price_value": 90000}),
            json!({"title": "House", "region": "Sofia Province", "size_sqm": 120, "price_value": 150000, "address": "near sofia ring road"}),
            json!({"title": "Villa", "region": "Varna", "size_sqm": 200, "price_value": 400000, "description": "Sea view"}),
            json!({"title": "Cottage", "region": "Pernik", "size_sqm": 80, "price_value": 60000, "description": "Quiet street, 30 km from Sofia"}),
        ];
        for payload in listings {
            let req = test::TestRequest::post()
                .uri("/api/properties")
                .set_json(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }

        let req = test::TestRequest::get()
            .uri("/api/properties?q=Sofia")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let titles: Vec<&str> = body["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["Flat in SOFIA center", "House", "Cottage"]);
        assert_eq!(body["total"], 3);
    }

    #[actix_web::test]
    async fn test_unconvertible_price_is_rejected_without_storing() {
        let store = memory_store();
        let app = app!(store);

        for price in [json!(0.001), json!(1e308)] {
            let mut payload = plovdiv_apartment();
            payload["price_value"] = price.clone();

            let req = test::TestRequest::post()
                .uri("/api/properties")
                .set_json(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "price {}", price);

            let body: serde_json::Value = test::read_body_json(resp).await;
            assert!(body["details"]["price_value"].is_array());
        }

        assert_eq!(store.len().unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_limit_out_of_range_is_rejected() {
        let app = app!(memory_store());

        for uri in ["/api/properties?limit=0", "/api/properties?limit=201"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "{}", uri);
        }

        let req = test::TestRequest::get()
            .uri("/api/properties?limit=200")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_unparseable_query_is_bad_request() {
        let app = app!(memory_store());

        let req = test::TestRequest::get()
            .uri("/api/properties?limit=abc")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_nan_price_bound_is_rejected() {
        let app = app!(memory_store());

        let req = test::TestRequest::get()
            .uri("/api/properties?min_price=NaN")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["details"]["min_price"].is_array());
    }

    #[actix_web::test]
    async fn test_unknown_query_region_is_rejected() {
        let app = app!(memory_store());

        let req = test::TestRequest::get()
            .uri("/api/properties?region=Atlantis")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
