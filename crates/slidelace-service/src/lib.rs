//! JSON-shaped service contract for the sliding-tile engine.
//!
//! This crate is the boundary an HTTP (or any other transport) shell
//! mounts: serde-serializable request/response types for the three
//! operations — [`solve`](api::solve), [`generate`](api::generate), and
//! [`check`](api::check) — plus the input validation the core itself does
//! not perform. Transport, routing, and CORS stay in the shell.
//!
//! Field names on the wire match the original public API of the service
//! (`spaceComplexity`, `timeComplexity`, `isSolvable`).
//!
//! # Examples
//!
//! ```
//! use slidelace_service::{api, dto::SolveRequest};
//!
//! let response = api::solve(&SolveRequest {
//!     n: 3,
//!     state: vec![1, 2, 3, 4, 5, 6, 7, 0, 8],
//! })?;
//! assert!(response.success);
//! assert_eq!(response.stats.steps, 1);
//! # Ok::<(), slidelace_service::api::ServiceError>(())
//! ```

pub mod api;
pub mod dto;

pub use self::{
    api::ServiceError,
    dto::{
        CheckRequest, CheckResponse, GenerateRequest, GenerateResponse, SolveRequest,
        SolveResponse, SolveStats,
    },
};
