/// Example demonstrating NotificationMask for filtering notifications.
///
/// Decoding always produces every notification a record describes; the mask selects which of
/// them reach the handler.
///
/// Run with: cargo run --example notification_filtering -- [all|items|rescans]
use fsevent_dispatch::{
    notification::NotificationMask, Config, Dispatcher, Notification, RawRecord, Result,
    StreamFlags,
};
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mode = std::env::args().nth(1).unwrap_or_default();
    let mask = match mode.as_str() {
        "items" => {
            log::info!("Mode: per-item notifications only");
            NotificationMask::ALL_ITEM
        }
        "rescans" => {
            log::info!("Mode: rescans and root changes only");
            NotificationMask::MUST_SCAN_SUBDIRS | NotificationMask::ROOT_CHANGED
        }
        _ => {
            log::info!("Mode: ALL (default, receives all notifications)");
            log::info!("  Use 'items' or 'rescans' as 1st arg for other modes");
            NotificationMask::ALL
        }
    };

    let records = [
        RawRecord::new(Path::new("/w"), 0, StreamFlags::ROOT_CHANGED.bits()),
        RawRecord::new(
            Path::new("/w/a.txt"),
            100,
            (StreamFlags::ITEM_CREATED | StreamFlags::ITEM_MODIFIED | StreamFlags::IS_FILE).bits(),
        ),
        RawRecord::new(
            Path::new("/w/sub"),
            101,
            (StreamFlags::MUST_SCAN_SUBDIRS | StreamFlags::KERNEL_DROPPED).bits(),
        ),
        RawRecord::new(Path::new("/w/other"), 102, 0),
    ];

    let mut handler = |res: Result<Notification>| match res {
        Ok(notification) => log::info!("Notification: {notification}"),
        Err(error) => log::error!("Error: {error}"),
    };

    let mut dispatcher = Dispatcher::new(Config::default().with_notification_kinds(mask));
    let summary = dispatcher.dispatch(records, &mut handler);
    log::info!(
        "{} delivered, {} filtered out",
        summary.delivered,
        summary.filtered
    );
}
