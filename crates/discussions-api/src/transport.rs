//! HTTP transport abstraction and the default reqwest-backed session.

use crate::config::ClientConfig;
use crate::error::{ConfigError, Result};
use reqwest::Method;
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use tracing::{debug, instrument};

/// A fully resolved request handed to a [`Transport`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            body: Some(body),
        }
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self {
            method: Method::DELETE,
            url: url.into(),
            body: None,
        }
    }
}

/// Something that can put an [`ApiRequest`] on the wire.
///
/// Implementations own authentication and connection handling. Responses are
/// returned as the transport produced them; resource clients never inspect
/// status codes.
pub trait Transport {
    type Response;
    type Error;

    fn send(&self, request: ApiRequest) -> std::result::Result<Self::Response, Self::Error>;
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    type Response = T::Response;
    type Error = T::Error;

    fn send(&self, request: ApiRequest) -> std::result::Result<Self::Response, Self::Error> {
        (**self).send(request)
    }
}

/// Blocking session over `reqwest`, carrying auth and default headers.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Build a session from client configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .default_headers(default_headers(config)?)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self { http })
    }

    /// Wrap an already configured client.
    pub fn from_client(http: Client) -> Self {
        Self { http }
    }
}

impl Transport for ReqwestTransport {
    type Response = Response;
    type Error = reqwest::Error;

    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    fn send(&self, request: ApiRequest) -> std::result::Result<Response, reqwest::Error> {
        debug!("{} {}", request.method, request.url);
        let mut builder = self.http.request(request.method, &request.url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let response = builder.send()?;
        debug!(status = response.status().as_u16(), "response received");
        Ok(response)
    }
}

fn default_headers(config: &ClientConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let agent = HeaderValue::from_str(&config.user_agent)
        .map_err(|_| ConfigError::InvalidHeader { header: "User-Agent" })?;
    headers.insert(USER_AGENT, agent);

    if let Some(token) = config.api_token.as_deref() {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| ConfigError::InvalidHeader {
                header: "Authorization",
            })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_constructors_set_method_and_body() {
        let post = ApiRequest::post("http://h/channels/", json!({"name": "a"}));
        assert_eq!(post.method, Method::POST);
        assert_eq!(post.body, Some(json!({"name": "a"})));

        let delete = ApiRequest::delete("http://h/x/");
        assert_eq!(delete.method, Method::DELETE);
        assert!(delete.body.is_none());

        assert_eq!(ApiRequest::get("http://h/").method, Method::GET);
    }

    #[test]
    fn default_headers_include_bearer_token() {
        let config = ClientConfig::default().api_token("secret-token");
        let headers = default_headers(&config).expect("headers");
        assert_eq!(
            headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()),
            Some("Bearer secret-token")
        );
        assert!(headers.get(AUTHORIZATION).is_some_and(HeaderValue::is_sensitive));
        assert_eq!(
            headers.get(ACCEPT).and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }

    #[test]
    fn default_headers_without_token_skip_authorization() {
        let headers = default_headers(&ClientConfig::default()).expect("headers");
        assert!(headers.get(AUTHORIZATION).is_none());
        assert!(headers.get(USER_AGENT).is_some());
    }

    #[test]
    fn token_with_newline_is_rejected() {
        let config = ClientConfig::default().api_token("bad\ntoken");
        let err = default_headers(&config).expect_err("newline is not a valid header byte");
        assert!(matches!(
            err,
            ConfigError::InvalidHeader {
                header: "Authorization"
            }
        ));
    }

    #[test]
    fn session_builds_from_default_config() {
        let _ = ReqwestTransport::new(&ClientConfig::default()).expect("session");
    }
}
