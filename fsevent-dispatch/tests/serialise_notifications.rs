#![cfg(feature = "serde")]

use fsevent_dispatch::{decode, Notification, RawRecord, StreamFlags};
use serde_json::json;
use std::path::Path;

use pretty_assertions::assert_eq;

#[test]
fn decoded_notifications_serialize() {
    let flags = StreamFlags::MUST_SCAN_SUBDIRS
        | StreamFlags::USER_DROPPED
        | StreamFlags::ITEM_RENAMED
        | StreamFlags::IS_SYMLINK
        | StreamFlags::OWN_EVENT;
    let record = RawRecord::new(Path::new("/w/link"), 31, flags.bits());
    let notifications: Vec<Notification> = decode(&record)
        .into_iter()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(
        serde_json::to_value(&notifications).unwrap(),
        json!([
            {
                "type": "must-scan-sub-directories",
                "path": "/w/link",
                "reason": "user-dropped",
                "event_id": 31,
                "own_event": true
            },
            {
                "type": "item-renamed",
                "path": "/w/link",
                "kind": "symlink",
                "event_id": 31,
                "own_event": true
            }
        ])
    );
}

#[test]
fn notifications_round_trip_through_json() {
    let notification = Notification::VolumeUnmounted {
        path: "/Volumes/Backup".into(),
        event_id: 9,
        own_event: false,
    };
    let json = serde_json::to_string(&notification).unwrap();
    assert_eq!(
        serde_json::from_str::<Notification>(&json).unwrap(),
        notification
    );
}
