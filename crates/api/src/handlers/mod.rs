//! Request handlers.

pub mod integrations;
pub mod link_page;
