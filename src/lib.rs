//! EasyPay Extract - Worker Record Snapshot Tool
//!
//! This crate drives a real browser (CDP via ChromiumOxide) against the
//! EasyPay HR/payroll application and scrapes a worker-detail screen —
//! ~90 named form fields and 3 data grids — into a timestamped JSON
//! snapshot file.
//!
//! Login is a manual step: the operator types credentials into the
//! application's own form and navigates to the worker record. The
//! automation waits at a session gate until a marker element confirms the
//! screen is ready, then extracts.
//!
//! # Architecture
//!
//! ```text
//! Operator ──(manual login)──▶ Browser (CDP)
//!                                  │
//!                             Session Gate
//!                                  │
//!                                  ▼
//!                           Orchestrator ──▶ ExtractionPlan
//!                            │        │       (fields + grids)
//!                            ▼        ▼
//!                      Field Reader  Grid Reader
//!                            │        │
//!                            └───┬────┘
//!                                ▼
//!                       Snapshot ──▶ output/worker-data-<ts>.json
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use easypay_extract::browser::BrowserController;
//! use easypay_extract::extraction::WorkerExtractor;
//! use easypay_extract::gate::SessionGate;
//! use easypay_extract::page::CdpPage;
//! use easypay_extract::plan::ExtractionPlan;
//! use easypay_extract::snapshot::SnapshotWriter;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let controller = BrowserController::new().await?;
//!     let page = CdpPage::new(controller.navigate("http://pceasy/").await?);
//!
//!     // Operator logs in and opens the worker record by hand
//!     SessionGate::await_ready(&page, "#edtNom", 300_000).await?;
//!
//!     let snapshot = WorkerExtractor::extract(&page, &ExtractionPlan::worker_full()).await;
//!     let path = SnapshotWriter::write(&snapshot, "output".as_ref())?;
//!
//!     println!("Snapshot written to {}", path.display());
//!     controller.close().await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod browser;
pub mod error;
pub mod extraction;
pub mod gate;
pub mod page;
pub mod plan;
pub mod snapshot;
pub mod testing;

// Re-exports for convenience
pub use browser::BrowserController;
pub use error::{Error, Result};
pub use extraction::{FieldReader, GridReader, WorkerExtractor};
pub use gate::SessionGate;
pub use page::{CdpPage, PageSurface};
pub use plan::{ExtractionPlan, FieldSpec, GridSpec};
pub use snapshot::{GridRow, Snapshot, SnapshotWriter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
