//! @acp:module "Generator"
//! @acp:summary "Validate, try remote generation, fall back to the composer"
//! @acp:domain cli
//! @acp:layer service
//!
//! A request runs to completion before the caller regains control. Remote
//! failures never escape: they become a [`Generation::notice`] and the
//! composer's document is used instead.

use serde::{Deserialize, Serialize};

use crate::compose::{compose, GeneratedDocument, OutputFormat};
use crate::error::{RemoteError, Result};
use crate::remote::{generate_remote, CompletionBackend};
use crate::requirements::UserRequirements;

/// Where the brief text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Remote,
    Fallback,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Remote => write!(f, "remote"),
            Source::Fallback => write!(f, "fallback"),
        }
    }
}

/// How the generator treats the remote endpoint
pub enum RemoteMode {
    /// Fallback only, silently (offline or disabled in config)
    Disabled,
    /// Remote was wanted but cannot be attempted; fallback with a notice
    Unavailable(RemoteError),
    /// Try this backend first
    Backend(Box<dyn CompletionBackend>),
}

/// @acp:summary "Outcome of one generation request"
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Generation {
    pub source: Source,
    /// Brief as Markdown text
    pub text: String,
    /// Structured document, present for fallback output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<GeneratedDocument>,
    /// Remote failure recovered by the fallback
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "notice_text")]
    pub notice: Option<RemoteError>,
}

fn notice_text<S: serde::Serializer>(
    notice: &Option<RemoteError>,
    s: S,
) -> std::result::Result<S::Ok, S::Error> {
    match notice {
        Some(err) => s.serialize_some(&err.to_string()),
        None => s.serialize_none(),
    }
}

impl Generation {
    fn fallback(document: GeneratedDocument, notice: Option<RemoteError>) -> Self {
        Self {
            source: Source::Fallback,
            text: document.to_markdown(),
            document: Some(document),
            notice,
        }
    }

    /// Render for display in the requested format
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Markdown => Ok(self.text.clone()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

/// @acp:summary "Generation pipeline"
pub struct Generator {
    remote: RemoteMode,
}

impl Generator {
    pub fn new(remote: RemoteMode) -> Self {
        Self { remote }
    }

    /// Fallback-only generator
    pub fn offline() -> Self {
        Self::new(RemoteMode::Disabled)
    }

    pub fn with_backend(backend: impl CompletionBackend + 'static) -> Self {
        Self::new(RemoteMode::Backend(Box::new(backend)))
    }

    /// @acp:summary "Produce a brief; only validation and unexpected errors are returned"
    pub fn generate(&self, requirements: &UserRequirements) -> Result<Generation> {
        requirements.validate()?;

        let notice = match &self.remote {
            RemoteMode::Disabled => None,
            RemoteMode::Unavailable(reason) => Some(reason.clone()),
            RemoteMode::Backend(backend) => match generate_remote(backend.as_ref(), requirements) {
                Ok(text) => {
                    tracing::info!("brief generated remotely");
                    return Ok(Generation {
                        source: Source::Remote,
                        text,
                        document: None,
                        notice: None,
                    });
                }
                Err(err) => {
                    tracing::warn!("remote generation failed, using fallback: {}", err);
                    Some(err)
                }
            },
        };

        tracing::info!("brief generated by fallback composer");
        Ok(Generation::fallback(compose(requirements), notice))
    }
}
