//! @acp:module "Show Command"
//! @acp:summary "Print the last stored brief"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use super::output;
use crate::config::Config;
use crate::store::FormStore;

/// Options for the show command
#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    /// Also print the stored form fields
    pub inputs: bool,
}

/// Execute the show command
pub fn execute_show(options: ShowOptions, config: &Config) -> Result<()> {
    let store = FormStore::new(config.store.resolve_path());

    if options.inputs {
        let form = store.load_form()?;
        eprintln!("{}", style("Stored inputs:").bold());
        for (key, value) in form.to_fields() {
            if !value.is_empty() {
                eprintln!("  {:10} {}", style(key).cyan(), value);
            }
        }
    }

    match store.load_result()? {
        Some(result) => {
            eprintln!(
                "{} {} result saved {}",
                style("→").dim(),
                result.source,
                result.saved_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
            println!("{}", result.text);
        }
        None => output::info("No stored result. Run 'sitebrief generate' first."),
    }

    Ok(())
}
