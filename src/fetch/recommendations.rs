use reqwest::{Client, Url};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::AppError;
use crate::fetch::FetchResult;
use crate::wizard::AnswerRecord;

/// One suggested product as returned by the recommendation endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub brand: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub key_ingredients: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price_category: Option<String>,
    #[serde(default)]
    pub average_rating: Option<f64>,
}

impl Recommendation {
    pub fn ingredients_line(&self) -> String {
        self.key_ingredients.join(", ")
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number for id, got {other}"
        ))),
    }
}

/// Posts the answer record to the recommendation endpoint.
#[derive(Debug, Clone)]
pub struct RecommendationClient {
    client: Client,
    endpoint: Url,
}

impl RecommendationClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Issue exactly one request. Transport errors, non-success statuses and
    /// undecodable bodies all collapse into `AppError::SubmissionFailed`.
    pub async fn fetch(&self, answers: &AnswerRecord) -> FetchResult<Vec<Recommendation>> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(answers)
            .send()
            .await
            .map_err(|err| AppError::submission(format!("request error: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::submission(format!(
                "endpoint responded with status {status}"
            )));
        }

        response
            .json::<Vec<Recommendation>>()
            .await
            .map_err(|err| AppError::submission(format!("invalid response body: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    async fn serve(router: Router) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("mock server");
        });
        Url::parse(&format!("http://{addr}/api/recommendations")).expect("url")
    }

    #[test]
    fn decodes_numeric_and_string_ids() {
        let items: Vec<Recommendation> = serde_json::from_value(json!([
            {"id": 7, "name": "Gel", "brand": "CeraVe", "description": "d", "keyIngredients": ["niacinamide"]},
            {"id": "p-2", "name": "Serum", "brand": "The Ordinary", "description": "d", "keyIngredients": []}
        ]))
        .expect("decode");
        assert_eq!(items[0].id, "7");
        assert_eq!(items[1].id, "p-2");
    }

    #[test]
    fn keeps_optional_product_attributes() {
        let item: Recommendation = serde_json::from_value(json!({
            "id": 1,
            "name": "Cream",
            "brand": "La Roche-Posay",
            "description": "Barrier cream",
            "keyIngredients": ["ceramides", "glycerin"],
            "priceCategory": "mid-range",
            "averageRating": 4.5,
            "ingredients": "water, glycerin"
        }))
        .expect("decode");
        assert_eq!(item.price_category.as_deref(), Some("mid-range"));
        assert_eq!(item.average_rating, Some(4.5));
        assert_eq!(item.category, None);
        assert_eq!(item.ingredients_line(), "ceramides, glycerin");
    }

    #[tokio::test]
    async fn posts_answer_record_as_json() {
        let seen = Arc::new(Mutex::new(None::<Value>));
        let captured = Arc::clone(&seen);
        let router = Router::new().route(
            "/api/recommendations",
            post(move |Json(body): Json<Value>| {
                let captured = Arc::clone(&captured);
                async move {
                    *captured.lock().unwrap() = Some(body);
                    Json(json!([]))
                }
            }),
        );
        let client = RecommendationClient::new(serve(router).await);

        let mut answers = AnswerRecord::default();
        answers.age = "41".to_string();
        let result = client.fetch(&answers).await.expect("fetch succeeds");
        assert!(result.is_empty());

        let body = seen.lock().unwrap().clone().expect("body captured");
        assert_eq!(body["age"], "41");
        assert_eq!(body["preferredBrands"], json!([]));
    }

    #[tokio::test]
    async fn non_success_status_is_submission_failure() {
        let router = Router::new().route(
            "/api/recommendations",
            post(|| async { (StatusCode::BAD_REQUEST, "missing fields") }),
        );
        let client = RecommendationClient::new(serve(router).await);

        let err = client
            .fetch(&AnswerRecord::default())
            .await
            .expect_err("400 must fail");
        assert!(
            matches!(err, AppError::SubmissionFailed(_)),
            "unexpected error: {err}"
        );
    }

    #[tokio::test]
    async fn malformed_body_is_submission_failure() {
        let router = Router::new().route(
            "/api/recommendations",
            post(|| async { Json(json!({"error": "not a list"})) }),
        );
        let client = RecommendationClient::new(serve(router).await);

        let err = client
            .fetch(&AnswerRecord::default())
            .await
            .expect_err("object body must fail");
        assert!(err.to_string().contains("invalid response body"));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_submission_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let url = Url::parse(&format!("http://{addr}/api/recommendations")).expect("url");
        let err = RecommendationClient::new(url)
            .fetch(&AnswerRecord::default())
            .await
            .expect_err("closed port must fail");
        assert!(matches!(err, AppError::SubmissionFailed(_)));
    }
}
