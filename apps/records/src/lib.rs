//! Record service for the recruitment backend.
//!
//! Persists resumes and vacancies in SQLite and exposes CRUD over a unary
//! JSON-over-HTTP RPC surface. The gateway crate consumes the [`wire`]
//! messages and the [`rpc::RecruitmentClient`] from here.

pub mod config;
pub mod errors;
pub mod rpc;
pub mod service;
pub mod storage;
pub mod wire;

pub use errors::StorageError;
pub use service::RecruitmentService;
pub use storage::{RecordStore, Storage};
