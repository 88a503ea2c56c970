/// Replays a recorded batch of raw records.
///
/// Every input line holds one record: an event id, a flag mask in hexadecimal and a path,
/// separated by whitespace. Lines starting with `#` are skipped.
///
/// Run with: cargo run --example replay -- <file>
use fsevent_dispatch::{Callbacks, Dispatcher, EventId};
use std::{fs, path::PathBuf};

fn parse_line(line: &str) -> Option<(EventId, u32, PathBuf)> {
    let mut parts = line.splitn(3, char::is_whitespace);
    let id = parts.next()?.parse().ok()?;
    let flags = parts.next()?;
    let flags = u32::from_str_radix(flags.trim_start_matches("0x"), 16).ok()?;
    let path = parts.next().unwrap_or_default().trim();
    Some((id, flags, PathBuf::from(path)))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let file = std::env::args()
        .nth(1)
        .expect("Argument 1 needs to be a file");
    let input = fs::read_to_string(&file).expect("readable file");

    let mut paths = Vec::new();
    let mut ids = Vec::new();
    let mut flags = Vec::new();
    for line in input.lines().filter(|l| !l.trim().is_empty() && !l.starts_with('#')) {
        match parse_line(line) {
            Some((id, mask, path)) => {
                ids.push(id);
                flags.push(mask);
                paths.push(path);
            }
            None => log::warn!("skipping unparsable line {line:?}"),
        }
    }

    let mut rescans = Vec::new();
    let mut changed = 0usize;
    let mut callbacks = Callbacks::new()
        .on_must_scan_sub_directories(|path, reason, _, _| {
            rescans.push(path.to_path_buf());
            log::warn!("rescan of {} needed ({reason})", path.display());
        })
        .on_item_created(|item| log::info!("+ {} ({})", item.path.display(), item.kind))
        .on_item_removed(|item| log::info!("- {} ({})", item.path.display(), item.kind))
        .on_item_renamed(|item| log::info!("~ {} ({})", item.path.display(), item.kind))
        .on_item_data_modified(|_| changed += 1)
        .on_root_changed(|path, _| log::warn!("watched root {} changed", path.display()))
        .on_malformed_record(|error| log::error!("{error}"));

    let mut dispatcher = Dispatcher::default();
    match dispatcher.dispatch_batch(&paths, &ids, &flags, &mut callbacks) {
        Ok(summary) => {
            drop(callbacks);
            log::info!("{summary:?}");
            log::info!("{changed} data modifications, {} rescans", rescans.len());
        }
        Err(error) => log::error!("Error: {error:?}"),
    }
}
