//! Client for the channels resource.

use super::params::ChannelParams;
use super::schema::ChannelSchema;
use crate::base::BaseApi;
use crate::error::ApiError;
use crate::transport::{ApiRequest, Transport};
use serde_json::json;
use tracing::{debug, instrument, warn};

/// Creates channels and manages their contributors.
#[derive(Debug, Clone)]
pub struct ChannelsApi<T> {
    base: BaseApi<T>,
    schema: ChannelSchema,
}

type ApiResult<T> = Result<<T as Transport>::Response, ApiError<<T as Transport>::Error>>;

impl<T: Transport> ChannelsApi<T> {
    /// Bind a channels client to `transport` using the default channel schema.
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self::with_schema(transport, base_url, ChannelSchema::default())
    }

    pub fn with_schema(transport: T, base_url: impl Into<String>, schema: ChannelSchema) -> Self {
        Self {
            base: BaseApi::new(transport, base_url),
            schema,
        }
    }

    pub fn schema(&self) -> &ChannelSchema {
        &self.schema
    }

    pub fn base(&self) -> &BaseApi<T> {
        &self.base
    }

    /// Create a new channel.
    ///
    /// Parameters are validated against the schema first; nothing is sent if
    /// they are rejected.
    #[instrument(skip(self, params), fields(attributes = params.len()))]
    pub fn create(&self, params: ChannelParams) -> ApiResult<T> {
        if let Err(err) = params.validate(&self.schema) {
            warn!(error = %err, "rejected channel parameters");
            return Err(err.into());
        }

        let url = self.base.resolve("/channels/");
        debug!("POST {}", url);
        self.send(ApiRequest::post(url, params.into_value()))
    }

    /// Add a contributor to a channel.
    #[instrument(skip(self))]
    pub fn add_contributor(&self, channel_name: &str, username: &str) -> ApiResult<T> {
        let url = self.base.resolve(&format!(
            "/channels/{}/contributors/",
            urlencoding::encode(channel_name)
        ));
        debug!("POST {}", url);
        self.send(ApiRequest::post(url, json!({ "contributor_name": username })))
    }

    /// Remove a contributor from a channel.
    #[instrument(skip(self))]
    pub fn remove_contributor(&self, channel_name: &str, username: &str) -> ApiResult<T> {
        let url = self.base.resolve(&format!(
            "/channels/{}/contributors/{}/",
            urlencoding::encode(channel_name),
            urlencoding::encode(username)
        ));
        debug!("DELETE {}", url);
        self.send(ApiRequest::delete(url))
    }

    fn send(&self, request: ApiRequest) -> ApiResult<T> {
        self.base
            .transport()
            .send(request)
            .map_err(ApiError::Transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channels::ChannelType;
    use crate::error::{ValidationError, ValidationErrorKind};
    use reqwest::Method;
    use std::cell::RefCell;

    const BASE: &str = "http://discuss.test/api/v0";

    /// Records every request and answers with a sequence number.
    #[derive(Default)]
    struct RecordingTransport {
        requests: RefCell<Vec<ApiRequest>>,
    }

    impl Transport for RecordingTransport {
        type Response = usize;
        type Error = std::io::Error;

        fn send(&self, request: ApiRequest) -> Result<usize, std::io::Error> {
            let mut requests = self.requests.borrow_mut();
            requests.push(request);
            Ok(requests.len())
        }
    }

    struct FailingTransport;

    impl Transport for FailingTransport {
        type Response = ();
        type Error = std::io::Error;

        fn send(&self, _request: ApiRequest) -> Result<(), std::io::Error> {
            Err(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))
        }
    }

    fn client() -> ChannelsApi<RecordingTransport> {
        ChannelsApi::new(RecordingTransport::default(), BASE)
    }

    fn sent(api: &ChannelsApi<RecordingTransport>) -> Vec<ApiRequest> {
        api.base().transport().requests.borrow().clone()
    }

    #[test]
    fn create_posts_params_as_body() {
        let api = client();
        let params = ChannelParams::new()
            .with("name", "general")
            .with("title", "General")
            .channel_type(ChannelType::Public);

        let response = api.create(params.clone()).expect("create");

        assert_eq!(response, 1);
        let requests = sent(&api);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].url, format!("{BASE}/channels/"));
        assert_eq!(requests[0].body, Some(params.into_value()));
    }

    #[test]
    fn create_with_empty_params_sends_nothing() {
        let api = client();
        let err = api.create(ChannelParams::new()).expect_err("empty");
        assert_eq!(err.as_validation(), Some(&ValidationError::EmptyAttributes));
        assert!(sent(&api).is_empty());
    }

    #[test]
    fn create_with_unsupported_key_sends_nothing() {
        let api = client();
        let params = ChannelParams::new()
            .with("name", "general")
            .with("moderators", "alice")
            .channel_type(ChannelType::Public);
        let err = api.create(params).expect_err("unsupported");
        assert_eq!(
            err.as_validation(),
            Some(&ValidationError::UnsupportedAttribute {
                key: "moderators".to_string()
            })
        );
        assert!(sent(&api).is_empty());
    }

    #[test]
    fn create_with_bad_or_missing_channel_type_sends_nothing() {
        let api = client();
        for params in [
            ChannelParams::new().with("name", "general"),
            ChannelParams::new()
                .with("name", "general")
                .with("channel_type", "hidden"),
        ] {
            let err = api.create(params).expect_err("invalid type");
            assert_eq!(
                err.as_validation().map(ValidationError::kind),
                Some(ValidationErrorKind::InvalidChannelType)
            );
        }
        assert!(sent(&api).is_empty());
    }

    #[test]
    fn add_contributor_encodes_channel_name_only() {
        let api = client();
        api.add_contributor("general discussion", "alice smith")
            .expect("add");

        let requests = sent(&api);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(
            requests[0].url,
            format!("{BASE}/channels/general%20discussion/contributors/")
        );
        assert_eq!(
            requests[0].body,
            Some(json!({ "contributor_name": "alice smith" }))
        );
    }

    #[test]
    fn add_contributor_escapes_slashes_and_unicode() {
        let api = client();
        api.add_contributor("a/b", "bob").expect("add");
        api.add_contributor("café", "bob").expect("add");

        let requests = sent(&api);
        assert_eq!(requests[0].url, format!("{BASE}/channels/a%2Fb/contributors/"));
        assert_eq!(
            requests[1].url,
            format!("{BASE}/channels/caf%C3%A9/contributors/")
        );
    }

    #[test]
    fn remove_contributor_encodes_both_segments() {
        let api = client();
        api.remove_contributor("team/x", "bob").expect("remove");
        api.remove_contributor("general", "jane doe").expect("remove");

        let requests = sent(&api);
        assert_eq!(requests[0].method, Method::DELETE);
        assert_eq!(
            requests[0].url,
            format!("{BASE}/channels/team%2Fx/contributors/bob/")
        );
        assert!(requests[0].body.is_none());
        assert_eq!(
            requests[1].url,
            format!("{BASE}/channels/general/contributors/jane%20doe/")
        );
    }

    #[test]
    fn transport_errors_are_passed_through() {
        let api = ChannelsApi::new(FailingTransport, BASE);
        let err = api
            .remove_contributor("general", "bob")
            .expect_err("transport failure");
        match err {
            ApiError::Transport(io) => {
                assert_eq!(io.kind(), std::io::ErrorKind::ConnectionRefused)
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }
}
