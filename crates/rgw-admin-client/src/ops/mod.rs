//! Admin operations, grouped by resource.
//!
//! Each operation validates its arguments through the model builders, then
//! goes through [`RgwAdminClient::call`](crate::RgwAdminClient::call).

mod account;
mod bucket;
mod info;
mod quota;
mod usage;
mod user;
