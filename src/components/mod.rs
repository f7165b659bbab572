//! Shared UI components exported for routes.

pub(crate) mod layout;
pub(crate) mod ui;

pub(crate) use layout::AuthLayout;
pub(crate) use ui::{
    Alert, AlertKind, BackLink, Button, EmailSentModal, PasswordChecklist, PasswordField,
    TextField,
};
