/// Endpoint tests driving the router directly, without a listening socket.

#[cfg(test)]
mod api_tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use goalfolio_server::main_lib::{build_router, AppState};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(Arc::new(AppState::new()))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = match body {
            Some(value) => Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn car_goal() -> Value {
        json!({
            "name": "Car",
            "targetAmount": 200000,
            "targetDate": "2027-01-01",
            "investmentStartDate": "2024-01-01"
        })
    }

    #[tokio::test]
    async fn goal_crud_round_trip() {
        let app = app();

        let (status, created) = send(&app, "POST", "/api/goals", Some(car_goal())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["name"], "Car");
        assert_eq!(created["termType"], "MEDIUM_TERM");
        let id = created["id"].as_str().unwrap().to_string();

        let (status, goals) = send(&app, "GET", "/api/goals", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(goals.as_array().unwrap().len(), 1);

        let (status, _) = send(&app, "DELETE", &format!("/api/goals/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, goals) = send(&app, "GET", "/api/goals", None).await;
        assert!(goals.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_goal_is_rejected_with_a_reason() {
        let app = app();
        let mut goal = car_goal();
        goal["targetAmount"] = json!(0);

        let (status, body) = send(&app, "POST", "/api/goals", Some(goal)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("target amount must be positive"));

        let (_, goals) = send(&app, "GET", "/api/goals", None).await;
        assert!(goals.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn deleting_an_unknown_goal_is_not_found() {
        let app = app();
        let (status, _) = send(&app, "DELETE", "/api/goals/missing", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn allocation_submission_is_all_or_nothing() {
        let app = app();

        let short = json!([
            {"investmentName": "Gold", "expectedReturnPercentage": 8, "investmentPercentage": 50},
            {"investmentName": "Stocks", "expectedReturnPercentage": 12, "investmentPercentage": 40}
        ]);
        let (status, body) = send(&app, "PUT", "/api/allocations/LONG_TERM", Some(short)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("allocation must sum to 100"));

        let full = json!([
            {"investmentName": "Gold", "expectedReturnPercentage": 8, "investmentPercentage": 60},
            {"investmentName": "Stocks", "expectedReturnPercentage": 12, "investmentPercentage": 40}
        ]);
        let (status, _) = send(&app, "PUT", "/api/allocations/LONG_TERM", Some(full)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, allocations) = send(&app, "GET", "/api/allocations", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(allocations["longTerm"].as_array().unwrap().len(), 2);
        assert_eq!(allocations["longTerm"][0]["investmentName"], "Gold");
        assert!(allocations["shortTerm"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn suggestions_reflect_goals_and_allocations() {
        let app = app();

        send(&app, "POST", "/api/goals", Some(car_goal())).await;
        let allocation = json!([
            {"investmentName": "Gold", "expectedReturnPercentage": 8, "investmentPercentage": 60},
            {"investmentName": "Stocks", "expectedReturnPercentage": 8, "investmentPercentage": 40}
        ]);
        send(&app, "PUT", "/api/allocations/MEDIUM_TERM", Some(allocation)).await;

        let (status, suggestions) = send(
            &app,
            "GET",
            "/api/suggestions?year=2024&termType=MEDIUM_TERM",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(suggestions[0]["goalName"], "Car");
        let gold = suggestions[0]["investmentSuggestions"][0]["amount"].as_f64().unwrap();
        assert!((gold - 36964.02).abs() < 0.01);

        let (status, totals) = send(
            &app,
            "GET",
            "/api/suggestions/by-instrument?year=2024&termType=MEDIUM_TERM",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!((totals["Gold"].as_f64().unwrap() - 36964.02).abs() < 0.01);
    }

    #[tokio::test]
    async fn progress_reports_all_three_buckets() {
        let app = app();
        send(&app, "POST", "/api/goals", Some(car_goal())).await;

        let request = json!({
            "year": 2025,
            "actuals": {"MEDIUM_TERM": 61606.70}
        });
        let (status, progress) = send(&app, "POST", "/api/progress", Some(request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(progress.as_array().unwrap().len(), 3);

        let medium = progress
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["termType"] == "MEDIUM_TERM")
            .unwrap();
        assert_eq!(medium["goalNames"][0], "Car");
        assert!(medium["progressPercent"].as_f64().unwrap() > 0.0);
    }

    #[tokio::test]
    async fn action_dispatch_applies_named_transitions() {
        let app = app();

        let action = json!({
            "type": "addGoal",
            "payload": car_goal()
        });
        let (status, _) = send(&app, "POST", "/api/actions", Some(action)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, summary) = send(&app, "GET", "/api/goals/summary", None).await;
        let medium = summary
            .as_array()
            .unwrap()
            .iter()
            .find(|s| s["termType"] == "MEDIUM_TERM")
            .unwrap();
        assert_eq!(medium["numberOfGoals"], 1);
    }

    #[tokio::test]
    async fn instrument_catalog_is_served() {
        let app = app();
        let (status, catalog) = send(&app, "GET", "/api/instruments", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(catalog
            .as_array()
            .unwrap()
            .iter()
            .any(|info| info["instrument"] == "Gold"));
    }
}
