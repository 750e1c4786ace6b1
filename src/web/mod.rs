//! HTML and JSON handlers for the site server.

pub mod handlers;
