//! Unary JSON-over-HTTP transport for the record service.
//!
//! Each procedure is `POST <method path>` with the request message as the body.
//! Failures come back as a non-2xx response carrying a [`Status`](crate::wire::Status).

mod client;
mod server;

pub use client::{RecruitmentClient, RpcError};
pub use server::{router, serve};
