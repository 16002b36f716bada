//! # Quote Plugin API
//!
//! Transport endpoint of the quote plugin.
//!
//! ```text
//!   Core ──HTTP──▶ /health ─▶ {"status":"ok"}
//!   Core ──HTTP──▶ /run ────▶ Dispatcher ─▶ CapabilityRegistry ─▶ Capability
//!                    ▲                                               │
//!                    └──────────── InvocationResult (JSON) ◀─────────┘
//! ```
//!
//! Wrong methods get `405` with an empty body. Dispatch faults (malformed
//! input, panics) are converted here, once, into a `500` carrying a failure
//! envelope.

pub mod error;
pub mod http;
pub mod server;
pub mod state;

pub use error::InterfaceError;
pub use http::handlers::HealthResponse;
pub use http::routes::create_router;
pub use server::{shutdown_signal, InterfaceConfig, InterfaceServer};
pub use state::AppState;
