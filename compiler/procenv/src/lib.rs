//! procenv: validate a process environment against a declaration file.
//!
//! A declaration file augments the global `NodeJS.ProcessEnv` interface:
//!
//! ```text
//! declare global {
//!   namespace NodeJS {
//!     interface ProcessEnv {
//!       DEV_PORT?: string
//!       TZ: string
//!     }
//!   }
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! text
//!     │
//!     ▼
//! procenv_lexer::tokenize ──► Vec<Token>
//!     │
//!     ▼
//! procenv_parse::build_tree ──► Block
//!     │
//!     ▼
//! procenv_interp::interpret ──► FactSet
//!     │
//!     ▼
//! validate(facts, env, contract) ──► Validation | ValidationError
//! ```
//!
//! Each stage is pure and runs once per file. Checking several files runs
//! one independent pipeline per file.

use std::sync::Once;

pub mod commands;
pub mod contract;
pub mod env;
pub mod error;
pub mod pipeline;
pub mod validate;

pub use contract::{Contract, SchemaField};
pub use env::{EnvSnapshot, EnvSource};
pub use error::CheckError;
pub use pipeline::{
    check_declaration_file, check_declaration_file_with, check_source, extract_facts,
};
pub use procenv_ir::FactSet;
pub use validate::{validate, Advisory, Validation, ValidationError};

static TRACING_INIT: Once = Once::new();

/// Initialize the tracing subscriber from `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call more than once;
/// only the first call has any effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
