//! Batch dispatching

use crate::{decode, records, Config, NotificationHandler, RawRecord, Result, StreamFlags};
use fsevent_types::notification::EventId;
use std::path::Path;

/// Counters describing what happened during one dispatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DispatchSummary {
    /// Records processed.
    pub records: usize,

    /// Notifications handed to the handler.
    pub delivered: usize,

    /// Notifications decoded but withheld by [`Config::with_notification_kinds`].
    pub filtered: usize,

    /// Records whose path was missing or empty where one was required.
    pub malformed: usize,

    /// Records whose identifier was lower than one seen before.
    ///
    /// See [`Config::with_event_id_check`].
    pub out_of_order_ids: usize,
}

/// Decodes batches of raw records and routes the resulting notifications to a handler.
///
/// The only state kept between batches is the highest event identifier seen, which is used for
/// diagnostics and never affects delivery.
#[derive(Clone, Debug, Default)]
pub struct Dispatcher {
    config: Config,
    last_event_id: Option<EventId>,
}

impl Dispatcher {
    /// Creates a new dispatcher.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            last_event_id: None,
        }
    }

    /// Returns the configuration of this dispatcher.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Returns the highest event identifier seen since creation, the last reset or the last
    /// ids-wrapped signal.
    pub fn last_event_id(&self) -> Option<EventId> {
        self.last_event_id
    }

    /// Forgets the event identifiers seen so far.
    pub fn reset(&mut self) {
        self.last_event_id = None;
    }

    /// Dispatches a batch of records, in order.
    ///
    /// Every record is decoded and each resulting notification is passed to
    /// [`NotificationHandler::handle_notification`]. A malformed record is passed to
    /// [`NotificationHandler::malformed_record`] and processing goes on with the next record;
    /// nothing in a batch can abort it.
    ///
    /// The handler is only borrowed for the duration of the call.
    pub fn dispatch<'r, I, H>(&mut self, records: I, handler: &mut H) -> DispatchSummary
    where
        I: IntoIterator<Item = RawRecord<'r>>,
        H: NotificationHandler + ?Sized,
    {
        let mask = self.config.notification_kinds();
        let mut summary = DispatchSummary::default();

        for record in records {
            summary.records += 1;
            self.check_event_id(&record, &mut summary);

            for result in decode(&record) {
                match result {
                    Ok(notification) => {
                        if !mask.matches(&notification) {
                            summary.filtered += 1;
                            continue;
                        }
                        summary.delivered += 1;
                        handler.handle_notification(notification);
                    }
                    Err(error) => {
                        log::warn!("{error}, skipping the rest of the record");
                        summary.malformed += 1;
                        handler.malformed_record(&error);
                    }
                }
            }
        }

        log::trace!("dispatched batch: {summary:?}");
        summary
    }

    /// Dispatches one delivery given as the three parallel sequences of the service callback.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::BatchLengthMismatch`](crate::ErrorKind::BatchLengthMismatch) without
    /// dispatching anything if the sequences are not all the same length.
    pub fn dispatch_batch<P, H>(
        &mut self,
        paths: &[P],
        ids: &[EventId],
        flags: &[u32],
        handler: &mut H,
    ) -> Result<DispatchSummary>
    where
        P: AsRef<Path>,
        H: NotificationHandler + ?Sized,
    {
        let records = records(paths, ids, flags)?;
        Ok(self.dispatch(records, handler))
    }

    fn check_event_id(&mut self, record: &RawRecord<'_>, summary: &mut DispatchSummary) {
        if !self.config.event_id_check() {
            return;
        }

        let id = record.event_id;
        if record.stream_flags().contains(StreamFlags::IDS_WRAPPED) {
            self.last_event_id = (id != 0).then_some(id);
            return;
        }
        // Sentinel, e.g. on root changes.
        if id == 0 {
            return;
        }

        match self.last_event_id {
            Some(last) if id < last => {
                log::warn!("event id {id} received after event id {last}");
                summary.out_of_order_ids += 1;
            }
            _ => self.last_event_id = Some(id),
        }
    }
}

/// Dispatches a batch of records with the default configuration.
///
/// See [`Dispatcher::dispatch`].
pub fn dispatch<'r, I, H>(records: I, handler: &mut H) -> DispatchSummary
where
    I: IntoIterator<Item = RawRecord<'r>>,
    H: NotificationHandler + ?Sized,
{
    Dispatcher::default().dispatch(records, handler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, ErrorKind};
    use fsevent_types::notification::{ItemEvent, Notification, NotificationKind, NotificationMask};

    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct Recorder {
        notifications: Vec<Notification>,
        errors: Vec<Error>,
    }

    impl NotificationHandler for Recorder {
        fn handle_notification(&mut self, notification: Notification) {
            self.notifications.push(notification);
        }

        fn malformed_record(&mut self, error: &Error) {
            self.errors.push(error.clone());
        }
    }

    fn created(path: &str, id: EventId) -> RawRecord<'_> {
        RawRecord::new(Path::new(path), id, StreamFlags::ITEM_CREATED.bits())
    }

    #[test]
    fn delivers_in_record_order() {
        let mut recorder = Recorder::default();
        let summary = dispatch(
            [created("/a", 1), created("/b", 2), created("/c", 3)],
            &mut recorder,
        );
        let paths: Vec<_> = recorder
            .notifications
            .iter()
            .filter_map(|n| n.path())
            .collect();
        assert_eq!(paths, [Path::new("/a"), Path::new("/b"), Path::new("/c")]);
        assert_eq!(
            summary,
            DispatchSummary {
                records: 3,
                delivered: 3,
                ..Default::default()
            }
        );
    }

    #[test]
    fn malformed_record_does_not_abort_the_batch() {
        let mut recorder = Recorder::default();
        let removed_dir = (StreamFlags::ITEM_REMOVED | StreamFlags::IS_DIR).bits();
        let summary = dispatch(
            [
                RawRecord::new(Path::new(""), 7, removed_dir),
                created("/next", 8),
            ],
            &mut recorder,
        );
        assert_eq!(summary.malformed, 1);
        assert_eq!(summary.delivered, 1);
        assert_eq!(
            recorder.errors[0].kind,
            ErrorKind::MalformedRecord(NotificationKind::ItemRemoved)
        );
        assert_eq!(recorder.notifications[0].path(), Some(Path::new("/next")));
    }

    #[test]
    fn mask_withholds_notifications() {
        let mut dispatcher =
            Dispatcher::new(Config::default().with_notification_kinds(NotificationMask::ITEM_REMOVED));
        let mut recorder = Recorder::default();
        let flags = (StreamFlags::ITEM_CREATED | StreamFlags::ITEM_REMOVED).bits();
        let summary = dispatcher.dispatch([RawRecord::new(Path::new("/x"), 1, flags)], &mut recorder);
        assert_eq!(summary.filtered, 1);
        assert_eq!(summary.delivered, 1);
        assert_eq!(
            recorder.notifications,
            [Notification::ItemRemoved(ItemEvent::new(
                "/x",
                Default::default(),
                1,
                false
            ))]
        );
    }

    #[test]
    fn mask_does_not_hide_malformed_records() {
        let mut dispatcher =
            Dispatcher::new(Config::default().with_notification_kinds(NotificationMask::empty()));
        let mut recorder = Recorder::default();
        dispatcher.dispatch([RawRecord::without_path(1, 0)], &mut recorder);
        assert_eq!(recorder.errors.len(), 1);
        assert!(recorder.notifications.is_empty());
    }

    #[test]
    fn decreasing_ids_are_counted_across_batches() {
        let mut dispatcher = Dispatcher::default();
        let mut recorder = Recorder::default();

        let first = dispatcher.dispatch([created("/a", 10), created("/b", 20)], &mut recorder);
        assert_eq!(first.out_of_order_ids, 0);
        assert_eq!(dispatcher.last_event_id(), Some(20));

        let second = dispatcher.dispatch([created("/c", 15), created("/d", 21)], &mut recorder);
        assert_eq!(second.out_of_order_ids, 1);
        // Delivery is unaffected.
        assert_eq!(second.delivered, 2);
        assert_eq!(dispatcher.last_event_id(), Some(21));
    }

    #[test]
    fn sentinel_ids_are_not_checked() {
        let mut dispatcher = Dispatcher::default();
        let mut recorder = Recorder::default();
        let root = RawRecord::new(Path::new("/w"), 0, StreamFlags::ROOT_CHANGED.bits());
        let summary = dispatcher.dispatch([created("/a", 10), root], &mut recorder);
        assert_eq!(summary.out_of_order_ids, 0);
        assert_eq!(dispatcher.last_event_id(), Some(10));
    }

    #[test]
    fn ids_wrapped_starts_over() {
        let mut dispatcher = Dispatcher::default();
        let mut recorder = Recorder::default();
        let wrapped = RawRecord::without_path(1, StreamFlags::IDS_WRAPPED.bits());
        let summary = dispatcher.dispatch(
            [created("/a", u64::MAX - 1), wrapped, created("/b", 2)],
            &mut recorder,
        );
        assert_eq!(summary.out_of_order_ids, 0);
        assert_eq!(dispatcher.last_event_id(), Some(2));
    }

    #[test]
    fn event_id_check_can_be_disabled() {
        let mut dispatcher = Dispatcher::new(Config::default().with_event_id_check(false));
        let mut recorder = Recorder::default();
        let summary = dispatcher.dispatch([created("/a", 10), created("/b", 5)], &mut recorder);
        assert_eq!(summary.out_of_order_ids, 0);
        assert_eq!(dispatcher.last_event_id(), None);
    }

    #[test]
    fn reset_forgets_ids() {
        let mut dispatcher = Dispatcher::default();
        let mut recorder = Recorder::default();
        dispatcher.dispatch([created("/a", 10)], &mut recorder);
        dispatcher.reset();
        assert_eq!(dispatcher.last_event_id(), None);
    }

    #[test]
    fn dispatch_batch_rejects_mismatched_lengths() {
        let mut dispatcher = Dispatcher::default();
        let mut recorder = Recorder::default();
        let err = dispatcher
            .dispatch_batch(&["/a", "/b"], &[1, 2], &[0], &mut recorder)
            .unwrap_err();
        assert_eq!(err, Error::batch_length_mismatch(2, 2, 1));
        assert!(recorder.notifications.is_empty());
    }

    #[test]
    fn dispatch_batch_zips_parallel_sequences() {
        let mut dispatcher = Dispatcher::default();
        let mut recorder = Recorder::default();
        let summary = dispatcher
            .dispatch_batch(
                &["/w", "/w/f"],
                &[0, 5],
                &[
                    StreamFlags::ROOT_CHANGED.bits(),
                    (StreamFlags::ITEM_MODIFIED | StreamFlags::IS_FILE).bits(),
                ],
                &mut recorder,
            )
            .unwrap();
        assert_eq!(summary.records, 2);
        let kinds: Vec<_> = recorder.notifications.iter().map(|n| n.kind()).collect();
        assert_eq!(
            kinds,
            [NotificationKind::RootChanged, NotificationKind::ItemDataModified]
        );
    }
}
