//! Configuration types

use fsevent_types::notification::NotificationMask;

/// Dispatcher configuration
///
/// ```rust
/// # use fsevent_dispatch::Config;
/// # use fsevent_dispatch::notification::NotificationMask;
/// let config = Config::default()
///     .with_notification_kinds(NotificationMask::ALL_ITEM)
///     .with_event_id_check(false);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Config {
    /// See [Config::with_notification_kinds]
    notification_kinds: NotificationMask,

    /// See [Config::with_event_id_check]
    event_id_check: bool,
}

impl Config {
    /// Filter which notification kinds are delivered.
    ///
    /// Records are always fully decoded; notifications outside of the mask are counted in the
    /// dispatch summary and never reach the handler. Malformed record diagnostics are not
    /// subject to the mask.
    ///
    /// The default is [`NotificationMask::ALL`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsevent_dispatch::Config;
    /// use fsevent_dispatch::notification::NotificationMask;
    ///
    /// // Only rescans and removals
    /// let config = Config::default().with_notification_kinds(
    ///     NotificationMask::MUST_SCAN_SUBDIRS | NotificationMask::ITEM_REMOVED,
    /// );
    /// ```
    pub fn with_notification_kinds(mut self, notification_kinds: NotificationMask) -> Self {
        self.notification_kinds = notification_kinds;
        self
    }

    /// Returns current setting
    pub fn notification_kinds(&self) -> NotificationMask {
        self.notification_kinds
    }

    /// Whether to check that event identifiers never decrease across records and batches.
    ///
    /// This is a diagnostic only: a decreasing identifier is logged and counted, and delivery is
    /// unaffected. The `0` sentinel is never checked, and an ids-wrapped signal starts over.
    ///
    /// On by default.
    pub fn with_event_id_check(mut self, event_id_check: bool) -> Self {
        self.event_id_check = event_id_check;
        self
    }

    /// Returns current setting
    pub fn event_id_check(&self) -> bool {
        self.event_id_check
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notification_kinds: NotificationMask::ALL,
            event_id_check: true,
        }
    }
}
