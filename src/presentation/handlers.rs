// HTTP request handlers
use crate::domain::panel::{Panel, PanelQuery};
use crate::domain::raw::RawQueryResult;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformRequest {
    #[serde(default)]
    pub raw_data: serde_json::Value,
    pub panel: Panel,
    #[serde(default)]
    pub query: PanelQuery,
    /// Per-request variable overrides
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Configured dashboard variables
pub async fn list_variables(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let compress = accepts_brotli(&headers);
    match json_response(StatusCode::OK, state.panel_service.variables(), compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Convert a raw backend result into panel data
pub async fn transform_panel(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(request): Json<TransformRequest>,
) -> Response {
    let compress = accepts_brotli(&headers);

    let raw = match RawQueryResult::from_json(request.raw_data) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!("Rejecting raw data for query {}: {}", request.query.id, e);
            let body = ErrorBody {
                error: e.to_string(),
            };
            return match json_response(StatusCode::BAD_REQUEST, &body, compress).await {
                Ok(response) => response,
                Err(status) => status.into_response(),
            };
        }
    };

    let data = state.panel_service.transform(
        raw.as_ref(),
        &request.panel,
        &request.query,
        &request.variables,
    );

    match json_response(StatusCode::OK, &data, compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::panel_service::PanelService;
    use crate::infrastructure::config::VariableSet;
    use serde_json::json;

    fn state() -> Arc<AppState> {
        let vars: VariableSet = [("env".to_string(), "prod".to_string())].into_iter().collect();
        Arc::new(AppState {
            panel_service: PanelService::new(vars),
        })
    }

    fn request(value: serde_json::Value) -> Json<TransformRequest> {
        Json(serde_json::from_value(value).unwrap())
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn matrix() -> serde_json::Value {
        json!({
            "resultType": "matrix",
            "result": [{
                "metric": {"instance": "host1", "job": "node"},
                "values": [[0, "1"], [15, "5"], [30, "3"]]
            }]
        })
    }

    #[tokio::test]
    async fn test_transform_graph() {
        let req = request(json!({
            "rawData": matrix(),
            "panel": {"type": "graph"},
            "query": {"id": "A", "legend": "${env}-{{instance}}"}
        }));

        let response = transform_panel(HeaderMap::new(), State(state()), req).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body[0]["name"], "prod-host1");
        assert_eq!(body[0]["length"], 3);
        assert_eq!(body[0]["value"]["values"], json!([1.0, 5.0, 3.0]));
    }

    #[tokio::test]
    async fn test_transform_stat_with_override() {
        let req = request(json!({
            "rawData": matrix(),
            "panel": {"type": "stat", "plugins": {"stat": {"value": {"calc": "sum"}}}},
            "query": {"id": "A", "legend": "${env}"},
            "variables": {"env": "dev"}
        }));

        let body = body_json(transform_panel(HeaderMap::new(), State(state()), req).await).await;
        assert_eq!(body["value"], 9.0);
        assert_eq!(body["series"][0]["name"], "dev");
    }

    #[tokio::test]
    async fn test_transform_table() {
        let req = request(json!({
            "rawData": {
                "resultType": "matrix",
                "result": [{"metric": {}, "values": [[0, "1.23456789"]]}]
            },
            "panel": {"type": "table"}
        }));

        let body = body_json(transform_panel(HeaderMap::new(), State(state()), req).await).await;
        assert_eq!(body[0]["name"], "{}");
        assert_eq!(body[0]["rows"][0], json!({"Time": 0.0, "Value": 1.23457}));
        assert_eq!(body[0]["columns"][1], json!({"header": "Value", "canFilter": true}));
    }

    #[tokio::test]
    async fn test_transform_keeps_invalid_apart_from_non_finite() {
        let raw_data = json!({
            "resultType": "matrix",
            "result": [{"metric": {}, "values": [[0, "NaN"], [1, "bogus"], [2, "+Inf"]]}]
        });
        let expected = json!(["NaN", {"invalid": true}, "+Inf"]);

        let req = request(json!({"rawData": raw_data.clone(), "panel": {"type": "graph"}}));
        let body = body_json(transform_panel(HeaderMap::new(), State(state()), req).await).await;
        assert_eq!(body[0]["value"]["values"], expected);

        let req = request(json!({"rawData": raw_data.clone(), "panel": {"type": "table"}}));
        let body = body_json(transform_panel(HeaderMap::new(), State(state()), req).await).await;
        let values: Vec<_> = body[0]["rows"]
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["Value"].clone())
            .collect();
        assert_eq!(serde_json::Value::Array(values), expected);

        let req = request(json!({
            "rawData": raw_data,
            "panel": {"type": "stat", "plugins": {"stat": {"value": {"calc": "sum"}}}}
        }));
        let body = body_json(transform_panel(HeaderMap::new(), State(state()), req).await).await;
        assert_eq!(body["value"], "NaN");
    }

    #[tokio::test]
    async fn test_transform_empty_data_is_null() {
        let req = request(json!({"rawData": {}, "panel": {"type": "graph"}}));
        let response = transform_panel(HeaderMap::new(), State(state()), req).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::Value::Null);
    }

    #[tokio::test]
    async fn test_transform_rejects_malformed_data() {
        let req = request(json!({"rawData": {"result": []}, "panel": {"type": "graph"}}));
        let response = transform_panel(HeaderMap::new(), State(state()), req).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_list_variables() {
        let body = body_json(list_variables(HeaderMap::new(), State(state())).await).await;
        assert_eq!(body, json!({"variables": {"env": "prod"}}));
    }
}
