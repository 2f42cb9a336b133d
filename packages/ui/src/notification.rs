//! # Notification banner and cancellable timers
//!
//! Each screen has one banner slot. Showing a banner replaces whatever was
//! there and arms a fresh hide timer; the [`Ticket`] returned by
//! [`Notifier::show`] is what the delayed hide must present. A ticket from an
//! older banner no longer matches, so a stale timer can't hide a newer
//! message.
//!
//! [`TimerSlot`] is the same mechanism on its own, used for the post-login
//! redirect.

/// Banner flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub message: String,
    pub kind: BannerKind,
}

impl Banner {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: BannerKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: BannerKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == BannerKind::Error
    }
}

/// Proof that a delayed action was armed by the latest trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// A single pending delayed action. Arming or cancelling invalidates every
/// ticket handed out before.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimerSlot {
    generation: u64,
}

impl TimerSlot {
    pub fn arm(&mut self) -> Ticket {
        self.generation += 1;
        Ticket(self.generation)
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    pub fn is_live(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Consume `ticket`: true if it was live, after which the slot is idle.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        let live = self.is_live(ticket);
        if live {
            self.cancel();
        }
        live
    }
}

/// The banner slot of one screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notifier {
    current: Option<Banner>,
    timer: TimerSlot,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current banner; the returned ticket hides this one only.
    pub fn show(&mut self, banner: Banner) -> Ticket {
        self.current = Some(banner);
        self.timer.arm()
    }

    /// Hide the banner if `ticket` belongs to it. Returns whether it hid.
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        if self.timer.fire(ticket) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
        self.timer.cancel();
    }

    pub fn current(&self) -> Option<&Banner> {
        self.current.as_ref()
    }
}
