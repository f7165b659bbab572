//! Feature areas behind the routes. Auth is the only one: wire types, the API
//! client, form rules and everything persisted between screens.

pub(crate) mod auth;
