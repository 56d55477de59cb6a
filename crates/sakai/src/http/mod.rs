//! HTTP transport for the Sakai direct API.

mod client;
mod endpoints;

pub(crate) use client::HttpClient;
pub(crate) use endpoints::*;
