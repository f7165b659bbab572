mod alert;
mod back_link;
mod button;
mod field;
mod modal;
mod password_checklist;
mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use back_link::BackLink;
pub(crate) use button::Button;
pub(crate) use field::{PasswordField, TextField};
pub(crate) use modal::EmailSentModal;
pub(crate) use password_checklist::PasswordChecklist;
pub(crate) use spinner::Spinner;
