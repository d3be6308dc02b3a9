use api_types::{
    account::AccountListResponse,
    category::CategoryListResponse,
    transaction::{
        TransactionCreated, TransactionList, TransactionListResponse, TransactionNew,
        TransactionUpdate,
    },
};
use reqwest::{RequestBuilder, Response, Url};
use serde::{Deserialize, de::DeserializeOwned};
use thiserror::Error;
use uuid::Uuid;

use crate::error::{AppError, Result};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("not found")]
    NotFound,
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("server error: {0}")]
    Server(String),
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
}

impl ClientError {
    /// Text shown to the user in a notification.
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized | Self::Forbidden => "Invalid or expired API token.".to_string(),
            Self::NotFound => "Not found on the server.".to_string(),
            Self::Conflict(message) => format!("Conflict: {message}"),
            Self::Validation(message) => format!("Rejected by the server: {message}"),
            Self::Server(message) => format!("Server error: {message}"),
            Self::Transport(err) => format!("Server unreachable: {err}"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

fn error_for_status(status: u16, body: String) -> ClientError {
    match status {
        401 => ClientError::Unauthorized,
        403 => ClientError::Forbidden,
        404 => ClientError::NotFound,
        409 => ClientError::Conflict(body),
        422 => ClientError::Validation(body),
        _ => ClientError::Server(body),
    }
}

#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    token: String,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|err| AppError::BaseUrl(format!("{base_url}: {err}")))?;
        Ok(Self {
            base_url,
            token: token.to_string(),
            http: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub async fn accounts_list(&self) -> std::result::Result<AccountListResponse, ClientError> {
        let endpoint = self.endpoint("accounts")?;
        let res = self.send(self.http.get(endpoint)).await?;
        decode(res).await
    }

    pub async fn categories_list(&self) -> std::result::Result<CategoryListResponse, ClientError> {
        let endpoint = self.endpoint("categories")?;
        let res = self.send(self.http.get(endpoint)).await?;
        decode(res).await
    }

    pub async fn transactions_list(
        &self,
        payload: &TransactionList,
    ) -> std::result::Result<TransactionListResponse, ClientError> {
        let endpoint = self.endpoint("transactions/list")?;
        let res = self.send(self.http.post(endpoint).json(payload)).await?;
        decode(res).await
    }

    pub async fn transaction_create(
        &self,
        payload: &TransactionNew,
    ) -> std::result::Result<TransactionCreated, ClientError> {
        let endpoint = self.endpoint("transactions")?;
        let res = self.send(self.http.post(endpoint).json(payload)).await?;
        decode(res).await
    }

    pub async fn transaction_update(
        &self,
        id: Uuid,
        payload: &TransactionUpdate,
    ) -> std::result::Result<(), ClientError> {
        let endpoint = self.endpoint(&format!("transactions/{id}"))?;
        self.send(self.http.put(endpoint).json(payload)).await?;
        Ok(())
    }

    pub async fn transaction_delete(&self, id: Uuid) -> std::result::Result<(), ClientError> {
        let endpoint = self.endpoint(&format!("transactions/{id}"))?;
        self.send(self.http.delete(endpoint)).await?;
        Ok(())
    }

    fn endpoint(&self, path: &str) -> std::result::Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::Server(format!("invalid base_url: {err}")))
    }

    /// Sends the request and turns non-2xx answers into a [`ClientError`].
    async fn send(&self, request: RequestBuilder) -> std::result::Result<Response, ClientError> {
        let res = request
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        if res.status().is_success() {
            return Ok(res);
        }

        let status = res.status();
        let body = res
            .json::<ErrorResponse>()
            .await
            .map(|err| err.error)
            .unwrap_or_else(|_| "unknown error".to_string());
        tracing::warn!(status = status.as_u16(), "request failed: {body}");

        Err(error_for_status(status.as_u16(), body))
    }
}

async fn decode<T: DeserializeOwned>(res: Response) -> std::result::Result<T, ClientError> {
    res.json::<T>().await.map_err(ClientError::Transport)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_statuses_map_to_dedicated_variants() {
        assert!(matches!(
            error_for_status(401, String::new()),
            ClientError::Unauthorized
        ));
        assert!(matches!(
            error_for_status(403, String::new()),
            ClientError::Forbidden
        ));
        assert!(matches!(
            error_for_status(404, String::new()),
            ClientError::NotFound
        ));
    }

    #[test]
    fn body_is_kept_for_conflict_and_validation() {
        let err = error_for_status(422, "amount must be > 0".to_string());
        assert!(matches!(&err, ClientError::Validation(msg) if msg == "amount must be > 0"));
        assert_eq!(err.user_message(), "Rejected by the server: amount must be > 0");

        let err = error_for_status(409, "duplicate".to_string());
        assert!(matches!(err, ClientError::Conflict(_)));
    }

    #[test]
    fn unknown_status_is_server_error() {
        let err = error_for_status(502, "bad gateway".to_string());
        assert_eq!(err.user_message(), "Server error: bad gateway");
    }

    #[test]
    fn errors_display_for_logs() {
        assert_eq!(
            error_for_status(409, "duplicate".to_string()).to_string(),
            "conflict: duplicate"
        );
        assert_eq!(error_for_status(401, String::new()).to_string(), "unauthorized");
    }

    #[test]
    fn endpoints_join_relative_to_base() {
        let client = Client::new("http://localhost:8080/api/", "t").unwrap();
        let url = client.endpoint("transactions/list").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/transactions/list");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(Client::new("not a url", "t").is_err());
    }
}
