/// Prints what a single record decodes to.
///
/// Run with: cargo run --example decode_flags -- <flags> [path] [event id]
///
/// Flags may be given in decimal or as `0x`-prefixed hexadecimal.
use fsevent_dispatch::{decode, RawRecord, StreamFlags};
use std::path::Path;

fn parse_flags(arg: &str) -> Option<u32> {
    match arg.strip_prefix("0x") {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => arg.parse().ok(),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace")).init();

    let flags = std::env::args()
        .nth(1)
        .as_deref()
        .and_then(parse_flags)
        .expect("Argument 1 needs to be a flag mask");
    let path = std::env::args().nth(2).unwrap_or_default();
    let event_id = std::env::args()
        .nth(3)
        .and_then(|id| id.parse().ok())
        .unwrap_or(0);

    log::info!("{:?}", StreamFlags::from_raw(flags));

    let record = RawRecord::new(Path::new(&path), event_id, flags);
    for result in decode(&record) {
        match result {
            Ok(notification) => log::info!("{notification}"),
            Err(error) => log::error!("{error}"),
        }
    }
}
