//! @acp:module "Init Command"
//! @acp:summary "Write a default sitebrief configuration file"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `sitebrief init`.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::config::Config;

/// Options for the init command
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Config file to create
    pub path: PathBuf,
    /// Force overwrite existing config
    pub force: bool,
    /// Model identifier to write
    pub model: Option<String>,
    /// Disable remote generation in the written config
    pub offline: bool,
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    if options.path.exists() && !options.force {
        eprintln!(
            "{} Config file already exists. Use --force to overwrite.",
            style("✗").red()
        );
        std::process::exit(1);
    }

    let config = build_config(&options);
    config.save(&options.path)?;
    println!("{} Created {}", style("✓").green(), options.path.display());

    println!("\n{}", style("Next steps:").bold());
    if config.remote.enabled {
        println!(
            "  1. Export {} with your API key",
            style(&config.remote.api_key_env).cyan()
        );
    } else {
        println!("  1. Remote generation is off; briefs use the built-in rules");
    }
    println!(
        "  2. Run {} to create a brief",
        style("sitebrief generate --theme <テーマ>").cyan()
    );

    Ok(())
}

fn build_config(options: &InitOptions) -> Config {
    let mut config = Config::default();
    if let Some(model) = &options.model {
        config.remote.model = model.clone();
    }
    if options.offline {
        config.remote.enabled = false;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".sitebrief.config.json");
        execute_init(InitOptions {
            path: path.clone(),
            force: false,
            model: Some("gpt-4o".into()),
            offline: true,
        })
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.remote.model, "gpt-4o");
        assert!(!config.remote.enabled);
    }
}
