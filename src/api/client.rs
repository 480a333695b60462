//! HTTP client for the tutoring platform backend.
//!
//! Every request goes through [`ApiClient::execute`], which attaches the
//! request id and bearer token, logs the exchange, and turns the response into
//! either a JSON value or an [`AppError`]. Envelope unwrapping happens in
//! `tutordesk_core::envelope` on the way out.

use std::sync::Arc;
use std::time::Instant;

use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, multipart::Form};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, info, warn};
use tutordesk_config::ApiConfig;
use tutordesk_core::{AppError, Page, decode, decode_list};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Cloneable handle to the backend. Clones share one connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    config: Arc<ApiConfig>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::internal(e).context("building HTTP client"))?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET /{path}` with `filters` as the query string, decoded as a list.
    pub async fn list<T, F>(&self, path: &str, filters: &F) -> Result<Page<T>, AppError>
    where
        T: DeserializeOwned,
        F: Serialize + ?Sized,
    {
        let value = self
            .execute(Method::GET, path, |req| req.query(filters))
            .await?;
        decode_list(value).map_err(|e| e.context(format!("decoding list from /{}", path)))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let value = self.execute(Method::GET, path, |req| req).await?;
        decode(value).map_err(|e| e.context(format!("decoding record from /{}", path)))
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let value = self
            .execute(Method::POST, path, |req| req.json(body))
            .await?;
        decode(value).map_err(|e| e.context(format!("decoding response from POST /{}", path)))
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let value = self
            .execute(Method::PUT, path, |req| req.json(body))
            .await?;
        decode(value).map_err(|e| e.context(format!("decoding response from PUT /{}", path)))
    }

    /// `DELETE /{path}`. Any success status counts, whatever the body.
    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        self.execute(Method::DELETE, path, |req| req).await?;
        Ok(())
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, AppError> {
        let value = self
            .execute(Method::POST, path, |req| req.multipart(form))
            .await?;
        decode(value).map_err(|e| e.context(format!("decoding upload response from /{}", path)))
    }

    /// Number of records matching `filters`, from the reported total or the
    /// length of the returned page.
    pub async fn count<F>(&self, path: &str, filters: &F) -> Result<u64, AppError>
    where
        F: Serialize + ?Sized,
    {
        let page: Page<Value> = self.list(path, filters).await?;
        Ok(page.total_or_len())
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<Value, AppError> {
        let start = Instant::now();
        let request_id = Uuid::new_v4().to_string();
        let url = self.config.url(path);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(REQUEST_ID_HEADER, header_value(&request_id)?);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        debug!(
            request_id = %request_id,
            method = %method,
            path = %path,
            "Sending request"
        );

        let response = build(request).send().await.map_err(|e| {
            error!(
                request_id = %request_id,
                method = %method,
                path = %path,
                error = %e,
                "Request failed before a response"
            );
            transport_error(e).context(format!("{} {}", method, url))
        })?;

        let status = response.status();
        let latency = start.elapsed();

        match status.as_u16() {
            200..=299 => {
                info!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    status = %status.as_u16(),
                    latency_ms = %latency.as_millis(),
                    "Request completed"
                );
            }
            400..=499 => {
                warn!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    status = %status.as_u16(),
                    latency_ms = %latency.as_millis(),
                    "Client error"
                );
            }
            _ => {
                error!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    status = %status.as_u16(),
                    latency_ms = %latency.as_millis(),
                    "Server error"
                );
            }
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| transport_error(e).context(format!("reading body of {} {}", method, url)))?;

        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            match serde_json::from_slice::<Value>(&bytes) {
                Ok(value) => value,
                // Deletes are judged by status alone.
                Err(_) if method == Method::DELETE => Value::Null,
                Err(e) if status.is_success() => {
                    return Err(AppError::decode(e)
                        .context(format!("{} {} returned a non-JSON body", method, url)));
                }
                Err(_) => Value::Null,
            }
        };

        if !status.is_success() {
            return Err(AppError::http(status.as_u16(), &body)
                .context(format!("{} {} (request {})", method, url, request_id)));
        }

        Ok(body)
    }
}

fn header_value(value: &str) -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(value).map_err(AppError::internal)
}

/// Connection and timeout failures become network errors; anything else that
/// fails before a status arrives is internal.
fn transport_error(err: reqwest::Error) -> AppError {
    if err.is_connect() || err.is_timeout() || err.is_request() {
        AppError::network(err)
    } else if err.is_decode() || err.is_body() {
        AppError::decode(err)
    } else {
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tutordesk_core::ErrorKind;
    use tutordesk_core::errors::NETWORK_MESSAGE;

    #[tokio::test]
    async fn test_unreachable_backend_maps_to_network_error() {
        // Port 9 (discard) is closed on test machines.
        let config = ApiConfig {
            connect_timeout: Duration::from_millis(500),
            timeout: Duration::from_secs(2),
            ..ApiConfig::default().with_base_url("http://127.0.0.1:9/api")
        };
        let client = ApiClient::new(config).unwrap();

        let err = client.get::<Value>("teachers/1").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Network);
        assert_eq!(err.user_message(), NETWORK_MESSAGE);
        assert_eq!(err.status, None);
    }

    #[test]
    fn test_request_id_header_name() {
        assert_eq!(REQUEST_ID_HEADER.as_str(), "x-request-id");
        assert!(header_value(&Uuid::new_v4().to_string()).is_ok());
    }
}
