//! The closed sets channel creation is validated against.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Attribute that selects a channel's visibility.
pub const CHANNEL_TYPE_KEY: &str = "channel_type";

const DEFAULT_ATTRIBUTES: &[&str] = &[
    "name",
    "title",
    "description",
    "public_description",
    CHANNEL_TYPE_KEY,
    "allowed_post_types",
    "membership_is_managed",
];

/// Visibility/access mode of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelType {
    Public,
    Private,
    Restricted,
}

impl ChannelType {
    pub const ALL: [ChannelType; 3] = [
        ChannelType::Public,
        ChannelType::Private,
        ChannelType::Restricted,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChannelType::Public => "public",
            ChannelType::Private => "private",
            ChannelType::Restricted => "restricted",
        }
    }
}

impl std::fmt::Display for ChannelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recognized channel attributes and accepted `channel_type` values.
///
/// Owned by configuration; deserializable so an application can ship its own
/// sets without touching validation code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSchema {
    pub attributes: BTreeSet<String>,
    pub channel_types: BTreeSet<String>,
}

impl Default for ChannelSchema {
    fn default() -> Self {
        Self {
            attributes: DEFAULT_ATTRIBUTES.iter().map(|a| a.to_string()).collect(),
            channel_types: ChannelType::ALL
                .iter()
                .map(|t| t.as_str().to_string())
                .collect(),
        }
    }
}

impl ChannelSchema {
    pub fn new<A, T>(attributes: A, channel_types: T) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            attributes: attributes.into_iter().map(Into::into).collect(),
            channel_types: channel_types.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_attribute(&self, key: &str) -> bool {
        self.attributes.contains(key)
    }

    pub fn is_channel_type(&self, value: &str) -> bool {
        self.channel_types.contains(value)
    }
}
