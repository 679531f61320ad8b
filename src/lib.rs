//! # openresult
//!
//! Explicit success-or-failure outcomes paired with chainable error values.
//!
//! ## Design Philosophy
//!
//! - **Outcome**: Say whether an operation succeeded, without a payload
//! - **ValueOutcome**: Say whether it succeeded, carrying a typed payload
//! - **Error**: Describe why it failed — message, code, captured fault, cause chain
//! - **No control-flow surprises**: Expected failures travel as return values,
//!   never as panics
//!
//! ## Usage
//!
//! ```rust
//! use openresult::{Error, Outcome, ValueOutcome};
//!
//! fn load_page(id: &str) -> ValueOutcome<String> {
//!     if id.is_empty() {
//!         return ValueOutcome::failure(
//!             Error::new("page id must not be empty").with_code("EMPTY_ID"),
//!         );
//!     }
//!     ValueOutcome::success(format!("contents of {id}"))
//! }
//!
//! let outcome = load_page("intro");
//! if let Some(page) = outcome.value() {
//!     assert!(page.contains("intro"));
//! }
//! ```
//!
//! ## Principles
//!
//! - Every value is immutable after construction; inspection never mutates
//! - A failure always carries an `Error`; a success never does — the factories
//!   make the inconsistent states unrepresentable
//! - Underlying native faults are captured with `anyhow` rather than leaking
//!   raw error types
//! - Equality is structural; repeated factory calls allocate independently

mod error;
mod outcome;
mod value;

pub use error::Error;
pub use outcome::Outcome;
pub use value::ValueOutcome;
