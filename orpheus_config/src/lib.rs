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

pub mod profile_store;
pub mod schema;

pub use profile_store::FileProfileStore;
pub use schema::{API_KEY_ENV, Config, CreatedFiles, LoggingConfig, ProfileConfig, ProviderConfig};
