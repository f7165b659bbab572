//! Auth feature module covering sign-in, OTP step-up, signup, and password
//! recovery. It keeps request shapes, validation, and persisted session data
//! out of the view code. Payloads carry passwords and one-time codes, so
//! nothing in here may log them.
//!
//! Flow Overview: Sign-in stores a provisional token and remembers the
//! credentials for resend; the OTP exchange replaces the token with the full
//! session and forgets the credentials. Password recovery is a two-step email
//! round trip that never touches the stored session.

pub(crate) mod client;
pub(crate) mod countdown;
#[cfg(target_arch = "wasm32")]
mod guards;
pub(crate) mod messages;
pub(crate) mod session;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod types;
pub(crate) mod validation;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::{RedirectIfSignedIn, RequireSession};
