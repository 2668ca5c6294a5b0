//! orderdesk composition root and presentation layer
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ router (clap)  ──►  controllers          │
//! │                      │  ApiResponse<T>   │
//! ├──────────────────────┼───────────────────┤
//! │ factory ──► use cases (application)      │
//! │    │                                     │
//! │    └──► in-memory repositories + seed    │
//! └──────────────────────────────────────────┘
//! ```
//!
//! The factory builds the repositories, loads the seed under the configured
//! policy and hands out controllers. Controllers turn use-case results into
//! the `{ success, data?, error? }` envelope.

pub mod controllers;
pub mod error;
pub mod factory;
pub mod logging;
pub mod output;
pub mod response;
pub mod router;
pub mod seed;

pub use controllers::{OrderController, UserController};
pub use error::{CliError, CliResult};
pub use factory::{ApplicationFactory, LoadOutcome, SeedReport};
pub use response::ApiResponse;
pub use seed::SeedData;
