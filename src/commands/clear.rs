//! @acp:module "Clear Command"
//! @acp:summary "Confirmed removal of stored inputs or the stored result"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm};

use super::output;
use crate::config::Config;
use crate::store::FormStore;

pub const CONFIRM_INPUTS: &str = "入力した内容をすべてクリアします。よろしいですか？";
pub const CLEARED_INPUTS: &str = "入力内容をクリアしました";
pub const CONFIRM_RESULT: &str = "生成されたプロンプトを削除します。よろしいですか？";
pub const CLEARED_RESULT: &str = "生成結果をクリアしました";
pub const NO_RESULT: &str = "クリアする結果がありません";

/// What to clear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearTarget {
    Inputs,
    Result,
}

/// Options for the clear command
#[derive(Debug, Clone)]
pub struct ClearOptions {
    pub target: ClearTarget,
    /// Skip the confirmation prompt
    pub yes: bool,
}

/// Execute the clear command
pub fn execute_clear(options: ClearOptions, config: &Config) -> Result<()> {
    let store = FormStore::new(config.store.resolve_path());
    let confirm = |prompt: &str| -> Result<bool> {
        if options.yes {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    };

    match options.target {
        ClearTarget::Inputs => {
            if confirm(CONFIRM_INPUTS)? {
                store.clear_form()?;
                output::success(CLEARED_INPUTS);
            }
        }
        ClearTarget::Result => {
            let has_result = store
                .load_result()?
                .map(|r| !r.text.is_empty())
                .unwrap_or(false);
            if !has_result {
                output::info(NO_RESULT);
                return Ok(());
            }
            if confirm(CONFIRM_RESULT)? {
                store.clear_result()?;
                output::success(CLEARED_RESULT);
            }
        }
    }

    Ok(())
}
