//! Channels resource: creation and contributor management.

mod client;
mod params;
mod schema;

pub use client::ChannelsApi;
pub use params::ChannelParams;
pub use schema::{CHANNEL_TYPE_KEY, ChannelSchema, ChannelType};
