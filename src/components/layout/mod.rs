//! Layout components shared across routes.

mod auth_layout;
mod side_illustration;

pub(crate) use auth_layout::AuthLayout;
pub(crate) use side_illustration::SideIllustration;
