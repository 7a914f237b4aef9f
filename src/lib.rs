#![forbid(unsafe_code)]

//! @acp:module "sitebrief Library"
//! @acp:summary "Website design brief generation with a rule-based fallback"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # sitebrief
//!
//! Turns a handful of free-text answers about a website (theme, audience,
//! colors, keywords, ...) into a detailed design brief for an AI coding
//! assistant.
//!
//! ## Features
//!
//! - **Remote generation**: Asks an OpenAI-compatible endpoint for the brief
//! - **Deterministic fallback**: Keyword rule tables fill a fixed template
//!   whenever the endpoint is unavailable or fails
//! - **Persisted form**: Last inputs and result survive between runs
//!
//! ## Example
//!
//! ```rust
//! use sitebrief::{Generator, Source, UserRequirements};
//!
//! let requirements = UserRequirements {
//!     theme: "絵本のサイト".into(),
//!     keywords: "ファンタジー".into(),
//!     ..Default::default()
//! };
//!
//! let generation = Generator::offline().generate(&requirements)?;
//! assert_eq!(generation.source, Source::Fallback);
//! assert!(generation.text.contains("ゆめのえほんのもり"));
//! # Ok::<(), sitebrief::BriefError>(())
//! ```

pub mod classify;
pub mod commands;
pub mod compose;
pub mod config;
pub mod error;
pub mod generate;
pub mod remote;
pub mod requirements;
pub mod store;

// Re-exports
pub use classify::{classify, Classification};
pub use compose::{compose, GeneratedDocument, OutputFormat};
pub use config::Config;
pub use error::{BriefError, RemoteError, Result};
pub use generate::{Generation, Generator, RemoteMode, Source};
pub use remote::{CompletionBackend, OpenAiClient};
pub use requirements::UserRequirements;
pub use store::FormStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
