//! Blocking client for the assessment backend: accounts, person search and PII extraction.
//! Requests are sent once; retrying is left to the caller.

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::pii::AssessmentResult;
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub uid: Option<String>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// One candidate page returned by a person search, used to pick pages for extraction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebpageMetadata {
    pub url: String,
    pub domain: String,
    pub title: String,
    pub h1: String,
    pub h2_summary: String,
    pub description: String,
    pub site_name: String,
    pub keywords: String,
    pub snippet: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub old_password: String,
    pub new_password: String,
}

#[derive(Deserialize)]
struct AccountResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    user: Option<Value>,
}

#[derive(Deserialize)]
struct MessageResponse {
    #[serde(default)]
    message: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    webpages: Vec<WebpageMetadata>,
}

/// Pull the server's explanation out of an error body (`message` or `error`), else the raw text.
fn server_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .or_else(|| v.get("error"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

fn rejection(status: u16, body: &str) -> ApiError {
    let message = server_message(body);
    if status == 404 {
        ApiError::NoRelevantData(message)
    } else {
        ApiError::Rejected { status, message }
    }
}

/// Extraction answers 200 with only a `message` when none of the pages mention the person.
fn parse_extract(body: &str) -> Result<AssessmentResult, ApiError> {
    let value: Value = serde_json::from_str(body)?;
    if value.get("risk_level").is_none() {
        if let Some(msg) = value.get("message").and_then(Value::as_str) {
            return Err(ApiError::NoRelevantData(msg.to_string()));
        }
    }
    Ok(serde_json::from_value(value)?)
}

fn parse_account(body: &str) -> Result<UserProfile, ApiError> {
    let resp: AccountResponse = serde_json::from_str(body)?;
    match resp.user {
        Some(user) if user.as_object().is_some_and(|o| !o.is_empty()) => {
            Ok(serde_json::from_value(user)?)
        }
        _ => Err(ApiError::Rejected {
            status: 200,
            message: resp.message.unwrap_or_else(|| "no user in response".to_string()),
        }),
    }
}

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        if !config.enabled {
            return Err(ApiError::Disabled);
        }
        let endpoint = config.endpoint.as_deref().ok_or(ApiError::Disabled)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn send_text(&self, req: RequestBuilder) -> Result<String, ApiError> {
        let res = req.send()?;
        let status = res.status();
        let body = res.text()?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "api request rejected");
            return Err(rejection(status.as_u16(), &body));
        }
        Ok(body)
    }

    fn send_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let body = self.send_text(req)?;
        Ok(serde_json::from_str(&body)?)
    }

    pub fn login(&self, email: &str, password: &str) -> Result<UserProfile, ApiError> {
        let req = self
            .client
            .post(self.url("/users/login"))
            .json(&json!({ "email": email, "password": password }));
        let user = parse_account(&self.send_text(req)?)?;
        info!(email = %user.email, "logged in");
        Ok(user)
    }

    pub fn signup(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserProfile, ApiError> {
        let req = self.client.post(self.url("/users/signup")).json(&json!({
            "firstName": first_name,
            "lastName": last_name,
            "email": email,
            "password": password,
        }));
        let user = parse_account(&self.send_text(req)?)?;
        info!(email = %user.email, "account created");
        Ok(user)
    }

    pub fn logout(&self) -> Result<(), ApiError> {
        self.send_text(self.client.get(self.url("/users/logout")))?;
        Ok(())
    }

    pub fn user_details(&self, email: &str) -> Result<UserProfile, ApiError> {
        let req = self
            .client
            .get(self.url("/users/details"))
            .query(&[("email", email)]);
        parse_account(&self.send_text(req)?)
    }

    pub fn update_user(&self, update: &ProfileUpdate) -> Result<String, ApiError> {
        let req = self.client.patch(self.url("/users/update-user")).json(update);
        let resp: MessageResponse = self.send_json(req)?;
        Ok(resp.message)
    }

    pub fn forgot_password(&self, email: &str) -> Result<String, ApiError> {
        let req = self
            .client
            .post(self.url("/users/forgot-password"))
            .json(&json!({ "email": email }));
        let resp: MessageResponse = self.send_json(req)?;
        Ok(resp.message)
    }

    /// Candidate pages for a person's name.
    pub fn search(&self, name: &str) -> Result<Vec<WebpageMetadata>, ApiError> {
        let req = self
            .client
            .get(self.url("/risksearch/"))
            .query(&[("searchName", name)]);
        let resp: SearchResponse = self.send_json(req)?;
        info!(name, pages = resp.webpages.len(), "search complete");
        Ok(resp.webpages)
    }

    /// Scrape the selected pages and return the extracted PII with the backend's risk score.
    pub fn extract(&self, name: &str, urls: &[String]) -> Result<AssessmentResult, ApiError> {
        let req = self
            .client
            .post(self.url("/risksearch/extract"))
            .json(&json!({ "searchName": name, "selectedUrls": urls }));
        let result = parse_extract(&self.send_text(req)?)?;
        info!(
            name,
            score = result.risk_score,
            level = %result.risk_level,
            "extraction complete"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_without_endpoint() {
        let mut config = ApiConfig::default();
        assert!(matches!(ApiClient::new(&config), Err(ApiError::Disabled)));
        config.enabled = true;
        assert!(matches!(ApiClient::new(&config), Err(ApiError::Disabled)));
    }

    #[test]
    fn trims_trailing_slash() {
        let config = ApiConfig {
            enabled: true,
            endpoint: Some("http://localhost:5757/".to_string()),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5757");
        assert_eq!(client.url("/users/login"), "http://localhost:5757/users/login");
    }

    #[test]
    fn rejection_uses_server_message() {
        match rejection(400, r#"{"message": "User already exists!"}"#) {
            ApiError::Rejected { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "User already exists!");
            }
            other => panic!("unexpected {other:?}"),
        }
        match rejection(500, r#"{"error": "boom"}"#) {
            ApiError::Rejected { message, .. } => assert_eq!(message, "boom"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            rejection(404, r#"{"message": "No relevant web results found"}"#),
            ApiError::NoRelevantData(_)
        ));
        match rejection(502, "Bad Gateway\n") {
            ApiError::Rejected { message, .. } => assert_eq!(message, "Bad Gateway"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn extract_message_only_is_no_data() {
        let err = parse_extract(r#"{"message": "No relevant data found about this person."}"#)
            .unwrap_err();
        assert!(matches!(err, ApiError::NoRelevantData(_)));
    }

    #[test]
    fn extract_decodes_assessment() {
        let r = parse_extract(r#"{"Name": ["Jane"], "SSN": [], "risk_score": 1.0, "risk_level": "Very Low"}"#)
            .unwrap();
        assert_eq!(r.risk_level, "Very Low");
        assert_eq!(r.fields.len(), 2);
    }

    #[test]
    fn account_requires_user() {
        let user = parse_account(
            r#"{"message": "Logged in", "user": {"uid": "u1", "email": "j@x.com", "firstName": "Jane", "lastName": "Roe"}}"#,
        )
        .unwrap();
        assert_eq!(user.first_name, "Jane");
        assert_eq!(user.uid.as_deref(), Some("u1"));

        let err = parse_account(r#"{"message": "Failed to login", "user": {}}"#).unwrap_err();
        match err {
            ApiError::Rejected { message, .. } => assert_eq!(message, "Failed to login"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
