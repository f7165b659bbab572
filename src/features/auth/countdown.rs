//! Resend window for the OTP screen. The page drives [`Countdown::tick`] from a
//! one-second interval; the type itself holds no timer so it stays testable.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub const fn new(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    pub const fn remaining(self) -> u32 {
        self.remaining
    }

    pub const fn is_running(self) -> bool {
        self.remaining > 0
    }

    /// One second elapsed. Saturates at zero.
    #[must_use]
    pub const fn tick(self) -> Self {
        Self {
            remaining: self.remaining.saturating_sub(1),
        }
    }

    /// `Resending in M:SSs`.
    pub fn label(self) -> String {
        let minutes = self.remaining / 60;
        let seconds = self.remaining % 60;
        format!("Resending in {minutes}:{seconds:02}s")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResendState {
    Waiting(Countdown),
    Sending,
    Ready,
}

impl ResendState {
    pub fn new(countdown: Countdown, sending: bool) -> Self {
        if sending {
            ResendState::Sending
        } else if countdown.is_running() {
            ResendState::Waiting(countdown)
        } else {
            ResendState::Ready
        }
    }

    pub fn can_resend(self) -> bool {
        matches!(self, ResendState::Ready)
    }

    pub fn label(self) -> String {
        match self {
            ResendState::Sending => "Sending...".to_string(),
            ResendState::Waiting(countdown) => countdown.label(),
            ResendState::Ready => "Resend".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Countdown, ResendState};

    #[test]
    fn tick_counts_down_and_saturates() {
        let countdown = Countdown::new(2);
        assert!(countdown.is_running());

        let countdown = countdown.tick();
        assert_eq!(countdown.remaining(), 1);

        let countdown = countdown.tick().tick();
        assert_eq!(countdown.remaining(), 0);
        assert!(!countdown.is_running());
    }

    #[test]
    fn label_pads_seconds() {
        assert_eq!(Countdown::new(120).label(), "Resending in 2:00s");
        assert_eq!(Countdown::new(65).label(), "Resending in 1:05s");
        assert_eq!(Countdown::new(9).label(), "Resending in 0:09s");
    }

    #[test]
    fn resend_state_prefers_sending_then_countdown() {
        let running = Countdown::new(30);
        assert_eq!(ResendState::new(running, true), ResendState::Sending);
        assert_eq!(
            ResendState::new(running, false),
            ResendState::Waiting(running)
        );
        assert_eq!(
            ResendState::new(Countdown::default(), false),
            ResendState::Ready
        );
    }

    #[test]
    fn only_ready_state_allows_resend() {
        assert!(ResendState::Ready.can_resend());
        assert!(!ResendState::Sending.can_resend());
        assert!(!ResendState::Waiting(Countdown::new(1)).can_resend());
        assert_eq!(ResendState::Ready.label(), "Resend");
        assert_eq!(ResendState::Sending.label(), "Sending...");
        assert_eq!(
            ResendState::Waiting(Countdown::new(61)).label(),
            "Resending in 1:01s"
        );
    }
}
