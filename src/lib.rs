//! Personally identifying information censoring for plain-text files.
//!
//! Person names are found by a local recognizer; dates, addresses and
//! phone numbers by a remote entity-analysis service (Google Cloud Natural
//! Language). Every literal occurrence of each detected span is overwritten
//! with full-block characters of the same length.
//!
//! # Architecture
//!
//! - [`selection`]: glob expansion of input patterns
//! - [`extraction`]: local recognizer and remote analyzer behind traits
//! - [`redaction`]: four-digit filtering and block substitution
//! - [`batch`]: per-file driver with failure isolation
//! - [`report`]: count report
//! - [`config`]: remote-service credentials and endpoint
//! - [`error`]: error taxonomy
//!
//! # Quick Start
//!
//! ```no_run
//! use censoror::config::{Credentials, ServiceConfig};
//! use censoror::{GoogleLanguageClient, HeuristicPersonRecognizer, RedactionService};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServiceConfig::default()
//!     .with_credentials(Some(Credentials::ApiKey("my-key".into())));
//! let service = RedactionService::with_block_strategy(
//!     Box::new(HeuristicPersonRecognizer::new()),
//!     Box::new(GoogleLanguageClient::new(&config)?),
//! );
//!
//! let outcome = service.censor_text("Contact Jane Doe at 123-456-7890.")?;
//! println!("{}", outcome.text);
//! # Ok(())
//! # }
//! ```
//!
//! # Redaction
//!
//! ```
//! use censoror::redaction::replace_with_blocks;
//!
//! let text = replace_with_blocks("Smith met John Smith in 1999", &["John Smith", "Smith", "1999"]);
//! assert_eq!(text, "█████ met ██████████ in 1999");
//! ```

pub mod batch;
pub mod config;
pub mod domain;
pub mod error;
pub mod extraction;
pub mod redaction;
pub mod report;
pub mod selection;

pub use batch::{BatchProcessor, BatchSummary, CensoredFile, FailedFile};
pub use domain::{CensorCounts, EntityCategory, EntityMatch};
pub use error::{CensorError, CensorResult};
pub use extraction::{
    EncodingType, EntityAnalyzer, EntityExtractor, EntityRecognizer, Extraction,
    GoogleLanguageClient, HeuristicPersonRecognizer, RecognizedSpan,
};
pub use redaction::{
    BlockRedactionStrategy, CensorOutcome, RedactionService, RedactionStrategy,
};
pub use report::StatsDestination;
pub use selection::{output_path_for, select_files};
