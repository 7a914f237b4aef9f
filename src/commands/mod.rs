//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule for maintainability.

pub mod clear;
pub mod generate;
pub mod init;
pub mod output;
pub mod show;

pub use clear::{execute_clear, ClearOptions, ClearTarget};
pub use generate::{collect_requirements, execute_generate, GenerateOptions};
pub use init::{execute_init, InitOptions};
pub use output::{format_notice, NoticeKind};
pub use show::{execute_show, ShowOptions};
