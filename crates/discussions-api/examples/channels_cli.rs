//! Example: drive the channels API from the command line.
//!
//! Usage:
//!   OPEN_DISCUSSIONS_BASE_URL=https://discussions.example.org/api/v0 \
//!   OPEN_DISCUSSIONS_API_TOKEN=... \
//!   cargo run -p discussions-api --example channels_cli -- create name=general title=General channel_type=public
//!
//!   cargo run -p discussions-api --example channels_cli -- add general alice
//!   cargo run -p discussions-api --example channels_cli -- remove general alice
//!
//! Set RUST_LOG=discussions_api=debug to see each request.

use discussions_api::{ChannelParams, OpenDiscussionsApi};
use tracing_subscriber::EnvFilter;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn usage() -> BoxError {
    "usage: channels_cli create key=value... | add <channel> <user> | remove <channel> <user>".into()
}

fn parse_params(args: &[String]) -> Result<ChannelParams, BoxError> {
    let mut params = ChannelParams::new();
    for arg in args {
        let (key, value) = arg
            .split_once('=')
            .ok_or_else(|| format!("expected key=value, got '{arg}'"))?;
        params.insert(key, value);
    }
    Ok(params)
}

fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let api = OpenDiscussionsApi::from_env()?;
    let channels = api.channels();

    let response = match args.first().map(String::as_str) {
        Some("create") => channels.create(parse_params(&args[1..])?)?,
        Some("add") if args.len() == 3 => channels.add_contributor(&args[1], &args[2])?,
        Some("remove") if args.len() == 3 => channels.remove_contributor(&args[1], &args[2])?,
        _ => return Err(usage()),
    };

    let status = response.status();
    let body = response.text()?;
    println!("{status}");
    if !body.is_empty() {
        println!("{body}");
    }
    Ok(())
}
