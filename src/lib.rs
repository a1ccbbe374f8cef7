//! Claimlens: insurance-claim document understanding and adjudication.
//!
//! A claim arrives as a bag of page images. The pipeline classifies each
//! page (prescription, bill, lab report), groups consecutive pages into
//! logical documents, extracts structured fields from the document text,
//! and runs the deterministic rule engine to produce a validation report
//! for the human adjudicator.

pub mod config;
pub mod models;
pub mod pipeline;
pub mod registry;
pub mod rules;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for binaries and integration harnesses.
///
/// Honors `RUST_LOG` when set; otherwise falls back to the crate default
/// (`info` globally, `debug` for this crate).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
}
