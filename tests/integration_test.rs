//! End-to-end tests: CSV on disk → normalized records → aggregated table →
//! rendered figure, plus the HTTP surface over the same fixture.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::NaiveDate;
use limelight::aggregate::EngagementTable;
use limelight::api::AppState;
use limelight::chart::{render, Figure};
use limelight::config::ApiConfig;
use limelight::dataset::DatasetLoader;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;
use tower::util::ServiceExt;

const FIXTURE: &str = "\
author,content,date_time,id,language,name,number_of_likes,number_of_shares
TaylorSwift13,a,01/02/2023 10:00,1,en,TaylorSwift13,100,10
taylorswift13,b,01/02/2023 18:00,2,en,taylorswift13,200,20
cristiano,c,01/02/2023,3,en,Cristiano,500,50
cristiano,d,02/02/2023,4,en,cristiano,700,70
jtimberlake,e,2023-02-02T08:30:00,5,en,jtimberlake,40,4
";

fn write_fixture() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(FIXTURE.as_bytes()).unwrap();
    file
}

fn load_table() -> EngagementTable {
    let file = write_fixture();
    let records = DatasetLoader::new().load(file.path()).unwrap();
    EngagementTable::from_records(records)
}

#[test]
fn test_full_pipeline_from_disk() {
    let table = load_table();

    // 5 rows collapse to 4 groups: taylorswift13 and cristiano each have a
    // two-tweet day
    assert_eq!(table.len(), 4);
    assert_eq!(
        table.handles(),
        &["cristiano", "jtimberlake", "taylorswift13"]
    );

    let feb1 = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap();
    let swift = table
        .rows()
        .iter()
        .find(|r| r.handle == "taylorswift13" && r.date == feb1)
        .unwrap();
    assert_eq!(swift.mean_likes, 150);
    assert_eq!(swift.mean_shares, 15);
}

#[test]
fn test_render_full_selection_round_trip() {
    let table = load_table();
    let all: Vec<String> = table.handles().to_vec();

    let figure = render(&table, &all);
    assert_eq!(figure.series.len(), 3);
    assert_eq!(figure.point_count(), table.len());
}

#[test]
fn test_figure_serde_round_trip() {
    let table = load_table();
    let figure = render(&table, &["cristiano".to_string()]);

    let json = serde_json::to_string(&figure).unwrap();
    let back: Figure = serde_json::from_str(&json).unwrap();
    assert_eq!(figure, back);

    // The cristiano series is chronological with both days present
    assert_eq!(back.series[0].points.len(), 2);
    assert!(back.series[0].points[0].date < back.series[0].points[1].date);
}

#[tokio::test]
async fn test_api_serves_fixture_dataset() {
    let table = Arc::new(load_table());
    let app = limelight::build_router(AppState::new(table, ApiConfig::default()));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/handles")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        json["handles"],
        serde_json::json!(["cristiano", "jtimberlake", "taylorswift13"])
    );
    // All three defaults exist in this fixture
    assert_eq!(
        json["default_selection"],
        serde_json::json!(["taylorswift13", "cristiano", "jtimberlake"])
    );

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/chart")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    r#"{"selected": ["cristiano", "jtimberlake"]}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let figure: Figure = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(figure.series.len(), 2);
    assert_eq!(figure.series[0].label, "cristiano");
    assert_eq!(figure.series[1].label, "jtimberlake");
    assert!(figure.log_y);
}

#[test]
fn test_missing_dataset_is_startup_fatal() {
    let result = DatasetLoader::new().load("no/such/file.csv".as_ref());
    assert!(result.is_err());
}
