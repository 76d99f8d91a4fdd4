//! HTTP handler functions for the crime dashboard API.

use actix_web::{HttpResponse, web};
use crime_dash_analytics::aggregate;
use crime_dash_crime_models::legend;
use crime_dash_query::input::FilterInput;
use crime_dash_query::{filter_records, station_options};
use crime_dash_query_models::FilterState;
use crime_dash_server_models::{ApiAnalysis, ApiHealth, ApiIncident, ApiLegendEntry};

use crate::AppState;

/// `GET /api/health`
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        records: state.dataset.records.len(),
    })
}

/// `GET /api/categories`
///
/// Returns the legend: displayable categories and their colors.
pub async fn categories() -> HttpResponse {
    let entries: Vec<ApiLegendEntry> = legend().into_iter().map(ApiLegendEntry::from).collect();
    HttpResponse::Ok().json(entries)
}

/// `GET /api/stations`
///
/// Lists the distinct stations present in the dataset.
pub async fn stations(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(station_options(&state.dataset.records))
}

/// `GET /api/incidents`
///
/// Returns the filtered incidents with their marker styles.
pub async fn incidents(
    state: web::Data<AppState>,
    params: web::Query<FilterInput>,
) -> HttpResponse {
    let filter = match parse_filter(&params) {
        Ok(filter) => filter,
        Err(response) => return response,
    };

    let incidents: Vec<ApiIncident> = filter_records(&state.dataset.records, &filter)
        .iter()
        .filter_map(ApiIncident::from_record)
        .collect();

    HttpResponse::Ok().json(incidents)
}

/// `GET /api/analysis`
///
/// Returns the category, trend, and age charts plus the summary table for
/// the filtered incidents.
pub async fn analysis(
    state: web::Data<AppState>,
    params: web::Query<FilterInput>,
) -> HttpResponse {
    let filter = match parse_filter(&params) {
        Ok(filter) => filter,
        Err(response) => return response,
    };

    let filtered = filter_records(&state.dataset.records, &filter);
    let views = aggregate(&filtered);

    HttpResponse::Ok().json(ApiAnalysis::from(&views))
}

fn parse_filter(params: &FilterInput) -> Result<FilterState, HttpResponse> {
    FilterState::try_from(params).map_err(|e| {
        log::warn!("Rejected filter: {e}");
        HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string()
        }))
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test};
    use crime_dash_source::build_dataset;
    use crime_dash_source::stations::StationTable;

    use super::*;
    use crate::configure;

    const SAMPLE: &str = "\
date,crime_type,police_station,latitude,longitude,age,cncp_details,crime_descriptions
2020-05-01,Petty,Sheshadripuram,0,0,10,,
2021-07-01,Heinous,Kengeri,12.9,77.5,30,family informed,
2019-03-03,Serious,Nowhere,0,0,44,,
";

    fn state() -> web::Data<AppState> {
        let dataset = build_dataset("sample", SAMPLE, &StationTable::embedded()).unwrap();
        web::Data::from(Arc::new(AppState { dataset }))
    }

    #[actix_web::test]
    async fn health_reports_record_count() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["healthy"], true);
        assert_eq!(body["records"], 2);
    }

    #[actix_web::test]
    async fn categories_follow_display_order() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;
        let req = test::TestRequest::get().uri("/api/categories").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body[0]["name"], "petty");
        assert_eq!(body[4]["color"], "green");
    }

    #[actix_web::test]
    async fn stations_come_from_valid_records() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;
        let req = test::TestRequest::get().uri("/api/stations").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, serde_json::json!(["Sheshadripuram", "Kengeri"]));
    }

    #[actix_web::test]
    async fn incidents_carry_styles_and_respect_filters() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

        let req = test::TestRequest::get().uri("/api/incidents").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.as_array().map(Vec::len), Some(2));
        assert_eq!(body[0]["latitude"], 12.9913);
        assert_eq!(body[0]["style"]["stroke"], "yellow");
        assert_eq!(body[1]["cncpDetails"], "family informed");

        let req = test::TestRequest::get()
            .uri("/api/incidents?minAge=20")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.as_array().map(Vec::len), Some(1));
        assert_eq!(body[0]["category"], "heinous");
    }

    #[actix_web::test]
    async fn analysis_returns_chart_shapes() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;
        let req = test::TestRequest::get().uri("/api/analysis").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["total"], 2);
        assert_eq!(
            body["categories"]["labels"],
            serde_json::json!(["petty", "heinous"])
        );
        assert_eq!(body["trend"]["labels"], serde_json::json!(["2020", "2021"]));
        assert_eq!(
            body["ages"]["labels"],
            serde_json::json!(["10-14", "30-34"])
        );
        assert_eq!(body["summary"][0]["percentage"], "50.0%");
    }

    #[actix_web::test]
    async fn ccl_filter_yields_empty_analysis() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;
        let req = test::TestRequest::get()
            .uri("/api/analysis?category=ccl")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["total"], 0);
        assert_eq!(body["categories"]["labels"], serde_json::json!([]));
        assert_eq!(body["summary"], serde_json::json!([]));
    }

    #[actix_web::test]
    async fn invalid_filter_is_a_bad_request() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;
        let req = test::TestRequest::get()
            .uri("/api/analysis?startDate=yesterday")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
