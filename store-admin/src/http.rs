//! HTTP client for the store backend

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::{Arc, RwLock};
use store_shared::client::ErrorDetail;
use store_shared::models::FileUpload;

/// HTTP client holding the admin session
///
/// Clones share the session token: a 401/403 seen by one clone logs out
/// all of them.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(config.token.clone())),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set the authentication token
    pub fn with_token(self, token: impl Into<String>) -> Self {
        self.set_token(Some(token.into()));
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<String> {
        match self.token.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub(crate) fn set_token(&self, token: Option<String>) {
        match self.token.write() {
            Ok(mut guard) => *guard = token,
            Err(poisoned) => *poisoned.into_inner() = token,
        }
    }

    /// Drop the session token
    pub fn clear_token(&self) {
        self.set_token(None);
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attach the bearer token; requests without a session never leave
    fn authorized(&self, request: RequestBuilder) -> ClientResult<RequestBuilder> {
        let token = self
            .token()
            .ok_or_else(|| ClientError::Unauthorized("Not authenticated".to_string()))?;
        Ok(request.bearer_auth(token))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = self.authorized(request)?.send().await?;
        self.handle_response(response).await
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.client.get(self.url(path))).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    /// Make a POST request with query parameters and no body
    pub async fn post_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        self.send(self.client.post(self.url(path)).query(query)).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.client.put(self.url(path)).json(body)).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.client.delete(self.url(path))).await
    }

    /// Send a multipart form (tenant create/update, uploads)
    pub async fn multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: Form,
    ) -> ClientResult<T> {
        self.send(self.client.request(method, self.url(path)).multipart(form))
            .await
    }

    /// Send a multipart form with query parameters
    pub async fn multipart_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &Q,
        form: Form,
    ) -> ClientResult<T> {
        let request = self
            .client
            .request(method, self.url(path))
            .query(query)
            .multipart(form);
        self.send(request).await
    }

    /// GET a plain-text body
    pub async fn get_text(&self, path: &str) -> ClientResult<String> {
        let request = self.authorized(self.client.get(self.url(path)))?;
        let response = self.check_status(request.send().await?).await?;
        Ok(response.text().await?)
    }

    /// POST a url-encoded form without a session (login)
    pub async fn post_form_public<T: DeserializeOwned, F: Serialize + ?Sized>(
        &self,
        path: &str,
        form: &F,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).form(form).send().await?;
        self.handle_response(response).await
    }

    /// Map a non-success status to its error, using the `{"detail"}` body
    async fn check_status(&self, response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            let detail = serde_json::from_str::<ErrorDetail>(&text)
                .map(|e| e.message())
                .unwrap_or(text);
            tracing::debug!(status = status.as_u16(), %detail, "Request failed");

            return match status {
                StatusCode::UNAUTHORIZED => {
                    self.clear_token();
                    Err(ClientError::Unauthorized(detail))
                }
                StatusCode::FORBIDDEN => {
                    self.clear_token();
                    Err(ClientError::Forbidden(detail))
                }
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(detail)),
                StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                    Err(ClientError::Validation(detail))
                }
                _ => Err(ClientError::Api {
                    status: status.as_u16(),
                    detail,
                }),
            };
        }
        Ok(response)
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let response = self.check_status(response).await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return serde_json::from_str("null").map_err(|_| {
                ClientError::InvalidResponse(format!("Empty body from {status}"))
            });
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Build a multipart form from text fields and file parts
pub fn multipart_form(
    fields: Vec<(&'static str, String)>,
    files: Vec<(&'static str, &FileUpload)>,
) -> ClientResult<Form> {
    let mut form = Form::new();
    for (name, value) in fields {
        form = form.text(name, value);
    }
    for (name, file) in files {
        let mut part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
        if let Some(mime) = &file.mime {
            part = part.mime_str(mime)?;
        }
        form = form.part(name, part);
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        let client = HttpClient::new(&ClientConfig::new("http://loja.local/")).unwrap();
        assert_eq!(client.url("tenants/"), "http://loja.local/tenants/");
        assert_eq!(client.url("/promocoes/a"), "http://loja.local/promocoes/a");
    }

    #[test]
    fn test_clones_share_token() {
        let client = HttpClient::new(&ClientConfig::new("http://loja.local")).unwrap();
        let other = client.clone().with_token("t1");
        assert_eq!(client.token().as_deref(), Some("t1"));

        client.clear_token();
        assert!(!other.is_authenticated());
    }

    #[tokio::test]
    async fn test_request_without_session_is_refused() {
        let client = HttpClient::new(&ClientConfig::new("http://127.0.0.1:9")).unwrap();
        let result: ClientResult<serde_json::Value> = client.get("tenants/").await;
        assert!(matches!(result, Err(ClientError::Unauthorized(_))));
    }
}
