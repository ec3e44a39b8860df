#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Named field validators with canonicalization.
//!
//! Each [`FieldKind`] owns one [`FieldValidator`] in the process-wide
//! [`Registry`]: a pattern that decides whether a raw string has the right
//! shape, and an optional normalizer that turns an accepted string into its
//! canonical form.

pub mod error;
pub mod form;
pub mod kind;
mod normalize;
pub mod registry;
pub mod validator;

pub use error::{Error, Result};
pub use form::{FieldViolation, FormReport, FormValidator, ViolationReason};
pub use kind::FieldKind;
pub use registry::Registry;
pub use validator::{FieldValidator, Normalizer, validate_and_normalize};
