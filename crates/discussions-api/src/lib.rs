//! Rust client for the Open Discussions REST API.
//!
//! Currently covers the channels resource:
//!
//! - `channels().create(params)` - `POST /channels/`
//! - `channels().add_contributor(channel, user)` - `POST /channels/{channel}/contributors/`
//! - `channels().remove_contributor(channel, user)` - `DELETE /channels/{channel}/contributors/{user}/`
//!
//! Channel parameters are checked against a [`ChannelSchema`] before anything
//! is sent. Responses come back exactly as the transport returned them.
//!
//! # Example
//!
//! ```no_run
//! use discussions_api::{ChannelParams, ChannelType, ClientConfig, OpenDiscussionsApi};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let api = OpenDiscussionsApi::new(
//!     ClientConfig::with_base_url("https://discussions.example.org/api/v0").api_token("token"),
//! )?;
//! let response = api.channels().create(
//!     ChannelParams::new()
//!         .with("name", "general")
//!         .with("title", "General")
//!         .channel_type(ChannelType::Public),
//! )?;
//! println!("{}", response.status());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod base;
pub mod channels;
pub mod config;
pub mod error;
pub mod transport;

pub use api::OpenDiscussionsApi;
pub use base::BaseApi;
pub use channels::{CHANNEL_TYPE_KEY, ChannelParams, ChannelSchema, ChannelType, ChannelsApi};
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError, Result, ValidationError, ValidationErrorKind};
pub use transport::{ApiRequest, ReqwestTransport, Transport};
