//! @acp:module "Generate Command"
//! @acp:summary "Collect requirements and print a website design brief"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `sitebrief generate`. Input layers, lowest priority first:
//! stored form, requirements file, CLI flags, interactive form.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};
use indicatif::{ProgressBar, ProgressStyle};

use super::output;
use crate::classify;
use crate::compose::OutputFormat;
use crate::config::Config;
use crate::error::{BriefError, RemoteError};
use crate::generate::{Generation, Generator, RemoteMode};
use crate::remote::OpenAiClient;
use crate::requirements::{field_keys, field_label, UserRequirements};
use crate::store::FormStore;

pub const MSG_GENERATING: &str = "プロンプト生成中...";
pub const MSG_DONE: &str = "AIプロンプトの生成が完了しました！";
pub const MSG_FALLBACK: &str = "AI生成に失敗しました。従来の方式で生成します。";
pub const MSG_FAILED: &str = "プロンプト生成中にエラーが発生しました";

/// Options for the generate command
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Field values given as flags
    pub fields: UserRequirements,
    /// Requirements file (JSON or YAML)
    pub file: Option<PathBuf>,
    /// Prompt for every field
    pub interactive: bool,
    /// Start from an empty form instead of the stored one
    pub fresh: bool,
    /// Skip the remote endpoint
    pub offline: bool,
    /// Bearer token for the endpoint
    pub api_key: Option<String>,
    /// Output format override
    pub format: Option<OutputFormat>,
    /// Write the brief to a file instead of stdout
    pub output: Option<PathBuf>,
    /// Do not persist the form or the result
    pub no_save: bool,
    /// Print which rule branch each facet used
    pub explain: bool,
}

/// Execute the generate command
pub fn execute_generate(options: GenerateOptions, config: &Config) -> Result<()> {
    let store = FormStore::new(config.store.resolve_path());
    let requirements = collect_requirements(&options, &store)?;

    if !options.no_save {
        store
            .save_form(&requirements)
            .with_context(|| format!("Failed to save form to {}", store.path().display()))?;
    }

    if let Err(err) = requirements.validate() {
        output::error(&err.to_string());
        std::process::exit(1);
    }

    if options.explain {
        eprintln!("{}", style("Rule branches:").bold());
        for (facet, rule) in classify::explain(&requirements) {
            eprintln!("  {:12} {}", facet, style(rule).cyan());
        }
    }

    output::info(MSG_GENERATING);
    let generator = Generator::new(remote_mode(&options, config));
    let generation = match run_with_spinner(&generator, &requirements) {
        Ok(generation) => generation,
        Err(err) => {
            output::error(MSG_FAILED);
            return Err(err).context("Generation failed");
        }
    };

    if let Some(notice) = &generation.notice {
        tracing::debug!("fallback reason: {}", notice);
        output::error(MSG_FALLBACK);
    }

    if let Err(err) = deliver(&generation, &options, config, &store) {
        output::error(MSG_FAILED);
        return Err(err);
    }

    output::success(MSG_DONE);
    Ok(())
}

/// Render, print or write, and remember the result
fn deliver(
    generation: &Generation,
    options: &GenerateOptions,
    config: &Config,
    store: &FormStore,
) -> Result<()> {
    let format = options.format.unwrap_or(config.output.format);
    let rendered = generation.render(format)?;

    match &options.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            output::success(&format!("Wrote {}", path.display()));
        }
        None => println!("{}", rendered),
    }

    if !options.no_save {
        store
            .save_result(&generation.text, generation.source)
            .with_context(|| format!("Failed to save result to {}", store.path().display()))?;
    }
    Ok(())
}

/// Layer stored form, file, flags and interactive answers
pub fn collect_requirements(
    options: &GenerateOptions,
    store: &FormStore,
) -> Result<UserRequirements> {
    let mut requirements = if options.fresh {
        UserRequirements::default()
    } else {
        store.load_form().unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable store {}: {}", store.path().display(), e);
            UserRequirements::default()
        })
    };

    if let Some(path) = &options.file {
        let from_file = UserRequirements::from_path(path)
            .with_context(|| format!("Failed to read requirements from {}", path.display()))?;
        requirements = from_file.merge_over(requirements);
    }

    requirements = options.fields.clone().merge_over(requirements);

    if options.interactive {
        requirements = prompt_form(requirements)?;
    }

    Ok(requirements)
}

fn prompt_form(mut requirements: UserRequirements) -> Result<UserRequirements> {
    let theme = ColorfulTheme::default();
    for key in field_keys() {
        let label = field_label(key).unwrap_or(key);
        let current = requirements.field(key).unwrap_or_default().to_string();
        let answer: String = Input::with_theme(&theme)
            .with_prompt(label)
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()?;
        record_answer(&mut requirements, key, answer);
    }
    Ok(requirements)
}

/// Store a form answer as typed; whitespace-only text still counts as given
fn record_answer(requirements: &mut UserRequirements, key: &str, answer: String) {
    requirements.set_field(key, answer);
}

fn remote_mode(options: &GenerateOptions, config: &Config) -> RemoteMode {
    if options.offline || !config.remote.enabled {
        return RemoteMode::Disabled;
    }
    match config.remote.resolve_api_key(options.api_key.as_deref()) {
        Some(key) => RemoteMode::Backend(Box::new(OpenAiClient::new(&config.remote, key))),
        None => RemoteMode::Unavailable(RemoteError::NotConfigured),
    }
}

fn run_with_spinner(
    generator: &Generator,
    requirements: &UserRequirements,
) -> std::result::Result<Generation, BriefError> {
    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(spinner_style);
    }
    spinner.set_message(MSG_GENERATING);
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = generator.generate(requirements);
    spinner.finish_and_clear();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FormStore {
        FormStore::new(dir.path().join("storage.json"))
    }

    #[test]
    fn test_flags_override_stored_form() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store
            .save_form(&UserRequirements {
                theme: "カフェ".into(),
                keywords: "北欧".into(),
                ..Default::default()
            })
            .unwrap();

        let options = GenerateOptions {
            fields: UserRequirements {
                keywords: "ファンタジー".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let req = collect_requirements(&options, &store).unwrap();
        assert_eq!(req.theme, "カフェ");
        assert_eq!(req.keywords, "ファンタジー");
    }

    #[test]
    fn test_fresh_ignores_stored_form() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save_form(&UserRequirements::with_theme("カフェ")).unwrap();

        let options = GenerateOptions {
            fresh: true,
            ..Default::default()
        };
        assert!(collect_requirements(&options, &store).unwrap().is_empty());
    }

    #[test]
    fn test_file_layer_between_store_and_flags() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let file = dir.path().join("req.yaml");
        std::fs::write(&file, "theme: 絵本のサイト\ntarget: 子ども\n").unwrap();

        let options = GenerateOptions {
            file: Some(file),
            fields: UserRequirements {
                target_audience: "主婦".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let req = collect_requirements(&options, &store).unwrap();
        assert_eq!(req.theme, "絵本のサイト");
        assert_eq!(req.target_audience, "主婦");
    }

    #[test]
    fn test_remote_mode_selection() {
        let mut config = Config::default();
        config.remote.api_key_env = "SITEBRIEF_TEST_UNSET_KEY_VAR".into();

        let offline = GenerateOptions {
            offline: true,
            ..Default::default()
        };
        assert!(matches!(remote_mode(&offline, &config), RemoteMode::Disabled));

        let no_key = GenerateOptions::default();
        assert!(matches!(
            remote_mode(&no_key, &config),
            RemoteMode::Unavailable(RemoteError::NotConfigured)
        ));

        let keyed = GenerateOptions {
            api_key: Some("sk-test".into()),
            ..Default::default()
        };
        assert!(matches!(remote_mode(&keyed, &config), RemoteMode::Backend(_)));

        config.remote.enabled = false;
        assert!(matches!(remote_mode(&keyed, &config), RemoteMode::Disabled));
    }

    #[test]
    fn test_generate_recovers_from_unreadable_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.store.path = Some(dir.path().join("storage.json"));
        std::fs::write(dir.path().join("storage.json"), "{ not json").unwrap();

        let options = GenerateOptions {
            fields: UserRequirements::with_theme("カフェ"),
            offline: true,
            output: Some(dir.path().join("brief.md")),
            ..Default::default()
        };
        execute_generate(options, &config).unwrap();

        let store = store_in(&dir);
        assert_eq!(store.load_form().unwrap().theme, "カフェ");
        assert!(store.load_result().unwrap().is_some());
    }

    #[test]
    fn test_delivery_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let generation = Generator::offline()
            .generate(&UserRequirements::with_theme("カフェ"))
            .unwrap();
        let options = GenerateOptions {
            output: Some(dir.path().join("missing").join("brief.md")),
            ..Default::default()
        };

        let err = deliver(&generation, &options, &Config::default(), &store).unwrap_err();
        assert!(err.to_string().starts_with("Failed to write"));
        assert!(store.load_result().unwrap().is_none());
    }

    #[test]
    fn test_answers_are_kept_as_typed() {
        let mut req = UserRequirements::with_theme("カフェ");
        record_answer(&mut req, "contact", " ".to_string());
        record_answer(&mut req, "memo", "  予約 ".to_string());
        assert_eq!(req.contact_placement, " ");
        assert_eq!(req.freeform_notes, "  予約 ");

        let doc = crate::compose::compose(&req);
        assert!(doc.section("お問い合わせ導線").is_some());
        assert!(doc.section("追加要件・メモ").is_some());
    }
}
