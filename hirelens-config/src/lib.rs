//! Loader for workspace configuration with YAML + environment overlays.
//!
//! `hirelens.yaml` holds three sections: `search` (SerpAPI key and result
//! count), `fetch` (acquisition tuning), and `llm` (provider selection).
//! `HIRELENS_`-prefixed environment variables override file values, and
//! `${VAR}` placeholders inside values are expanded recursively.
use config::{Config, ConfigError, Environment, File};
use hirelens_common::LlmConfig;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

const MAXIMUM_ENV_EXPANSION_DEPTH: usize = 8;

#[derive(Debug, Deserialize)]
pub struct HireLensConfig {
    pub search: SearchConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    pub llm: LlmProviderConfig,
}

#[derive(Debug, Deserialize)]
pub struct SearchConfig {
    /// SerpAPI key; normally `${SERPAPI_API_KEY}` in the file.
    pub api_key: String,
    /// How many organic links a run keeps.
    #[serde(default = "default_result_count")]
    pub result_count: usize,
}

/// Page acquisition tuning. Every field has a default so the whole section
/// may be omitted.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub timeout_secs: u64,
    pub max_paragraphs: usize,
    pub max_prompt_chars: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            max_paragraphs: 20,
            max_prompt_chars: 4000,
        }
    }
}

/// The tag is `provider`; the remaining keys are provider-specific.
#[derive(Debug, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum LlmProviderConfig {
    Azure {
        endpoint: String,
        deployment: String,
        api_key: String,
        #[serde(default)]
        api_version: Option<String>,
    },
    Openai {
        api_key: String,
        model: String,
    },
    Ollama {
        model: String,
        #[serde(default = "default_ollama_endpoint")]
        endpoint: String,
    },
}

impl LlmProviderConfig {
    /// Convert to the provider-agnostic config the `hirelens-llm` clients
    /// are constructed from.
    pub fn to_llm_config(&self) -> LlmConfig {
        match self {
            Self::Azure {
                endpoint,
                deployment,
                api_key,
                api_version,
            } => LlmConfig::AzureOpenAi {
                endpoint: endpoint.clone(),
                deployment: deployment.clone(),
                api_key: api_key.clone(),
                api_version: api_version.clone(),
            },
            Self::Openai { api_key, model } => LlmConfig::OpenAi {
                api_key: api_key.clone(),
                model: model.clone(),
            },
            Self::Ollama { model, endpoint } => LlmConfig::Ollama {
                base_url: endpoint.clone(),
                model: model.clone(),
            },
        }
    }
}

fn default_result_count() -> usize {
    5
}

fn default_ollama_endpoint() -> String {
    "http://localhost:11434".into()
}

fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) => {
            if s.contains('$') {
                let mut cur = std::mem::take(s);
                for _ in 0..MAXIMUM_ENV_EXPANSION_DEPTH {
                    let expanded = match shellexpand::env(&cur) {
                        Ok(cow) => cow.into_owned(),
                        Err(_) => cur.clone(),
                    };
                    if expanded == cur {
                        break;
                    }
                    cur = expanded;
                }
                *s = cur;
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(expand_env_in_value),
        Value::Object(obj) => obj.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Builder hides the `config` crate wiring (YAML + env overrides).
pub struct HireLensConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for HireLensConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl HireLensConfigLoader {
    /// File sources merge in call order; the `HIRELENS_` environment
    /// overlay is added last in [`Self::load`] so it overrides them all.
    pub fn new() -> Self {
        Self {
            builder: Config::builder(),
        }
    }

    /// Attach a YAML/TOML/JSON file; the `config` crate infers format by suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Allow tests/CLI to merge inline YAML snippets.
    ///
    /// ```
    /// use hirelens_config::HireLensConfigLoader;
    ///
    /// let cfg = HireLensConfigLoader::new()
    ///     .with_yaml_str(
    ///         r#"
    /// search:
    ///   api_key: "demo"
    /// llm:
    ///   provider: "ollama"
    ///   model: "llama3"
    /// "#,
    ///     )
    ///     .load()
    ///     .unwrap();
    ///
    /// assert_eq!(cfg.search.api_key, "demo");
    /// assert_eq!(cfg.search.result_count, 5);
    /// assert_eq!(cfg.fetch.timeout_secs, 10);
    /// ```
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, config::FileFormat::Yaml));
        self
    }

    /// Consume the builder and deserialize the merged sources into strongly
    /// typed config.
    ///
    /// `HIRELENS_`-prefixed environment variables merge over every file
    /// source, then `${VAR}` placeholders are expanded before the merged
    /// tree materialises into strongly typed structs.
    ///
    /// ```
    /// use hirelens_config::{HireLensConfigLoader, LlmProviderConfig};
    ///
    /// unsafe { std::env::set_var("SERPAPI_API_KEY", "injected-from-env"); }
    ///
    /// let config = HireLensConfigLoader::new()
    ///     .with_yaml_str(r#"
    /// search:
    ///   api_key: "${SERPAPI_API_KEY}"
    ///   result_count: 3
    /// llm:
    ///   provider: "azure"
    ///   endpoint: "https://myres.openai.azure.com"
    ///   deployment: "research-gpt"
    ///   api_key: "azure-key"
    /// "#)
    ///     .load()
    ///     .expect("valid configuration");
    ///
    /// assert_eq!(config.search.api_key, "injected-from-env");
    /// assert_eq!(config.search.result_count, 3);
    /// match &config.llm {
    ///     LlmProviderConfig::Azure { deployment, api_version, .. } => {
    ///         assert_eq!(deployment, "research-gpt");
    ///         assert!(api_version.is_none());
    ///     }
    ///     _ => panic!("expected Azure configuration"),
    /// }
    ///
    /// unsafe { std::env::remove_var("SERPAPI_API_KEY"); }
    /// ```
    pub fn load(self) -> Result<HireLensConfig, ConfigError> {
        // Env vars arrive as strings; try_parsing turns "9" into a number
        // so numeric fields survive the serde_json round-trip.
        let cfg = self
            .builder
            .add_source(
                Environment::with_prefix("HIRELENS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Convert to serde_json::Value first
        let mut v: Value = cfg.try_deserialize()?;
        // Recursively expand environment variables
        expand_env_in_value(&mut v);

        let typed: HireLensConfig =
            serde_json::from_value(v).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        Ok(typed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use temp_env;

    #[test]
    fn expands_api_key_placeholder() {
        temp_env::with_var("SERPAPI_API_KEY", Some("sk-serp-123"), || {
            let mut v = json!({ "search": { "api_key": "${SERPAPI_API_KEY}" } });
            expand_env_in_value(&mut v);
            assert_eq!(v["search"]["api_key"], "sk-serp-123");
        });
    }

    #[test]
    fn walks_nested_sections_and_leaves_scalars_alone() {
        temp_env::with_vars(
            [
                ("AZURE_RESOURCE", Some("myres")),
                ("AZURE_DEPLOYMENT", Some("research-gpt")),
            ],
            || {
                let mut v = json!({
                    "llm": {
                        "endpoint": "https://${AZURE_RESOURCE}.openai.azure.com",
                        "deployment": "$AZURE_DEPLOYMENT"
                    },
                    "fetch": { "timeout_secs": 10, "cache": false, "note": null },
                    "labels": ["$AZURE_DEPLOYMENT", "static"]
                });
                expand_env_in_value(&mut v);
                assert_eq!(v["llm"]["endpoint"], "https://myres.openai.azure.com");
                assert_eq!(v["llm"]["deployment"], "research-gpt");
                assert_eq!(v["labels"][0], "research-gpt");
                assert_eq!(v["fetch"]["timeout_secs"], 10);
                assert_eq!(v["fetch"]["cache"], false);
            },
        );
    }

    #[test]
    fn follows_indirection_through_env_values() {
        temp_env::with_vars(
            [
                ("DEPLOY_REGION", Some("eastus")),
                // One level of indirection; the expansion loop re-scans.
                ("AZURE_RESOURCE", Some("hirelens-${DEPLOY_REGION}")),
            ],
            || {
                let mut v = json!("https://${AZURE_RESOURCE}.openai.azure.com");
                expand_env_in_value(&mut v);
                assert_eq!(v, json!("https://hirelens-eastus.openai.azure.com"));
            },
        );
    }

    #[test]
    fn self_referential_vars_terminate() {
        temp_env::with_var("LOOPVAR", Some("${LOOPVAR}"), || {
            let mut v = json!("endpoint=${LOOPVAR}");
            // Only termination matters; the depth cap guarantees it.
            expand_env_in_value(&mut v);
            let s = v.as_str().unwrap();
            assert!(s.starts_with("endpoint="));
            assert!(s.contains("${LOOPVAR}"));
        });
    }

    #[test]
    fn missing_vars_are_preserved() {
        temp_env::with_var_unset("HIRELENS_NO_SUCH_VAR", || {
            let mut v = json!("key=${HIRELENS_NO_SUCH_VAR}");
            expand_env_in_value(&mut v);
            assert_eq!(v, json!("key=${HIRELENS_NO_SUCH_VAR}"));
        });
    }

    #[test]
    fn env_overlay_overrides_file_values() {
        temp_env::with_var("HIRELENS_SEARCH__RESULT_COUNT", Some("9"), || {
            let cfg = HireLensConfigLoader::new()
                .with_yaml_str(
                    r#"
search:
  api_key: "k"
  result_count: 3
llm:
  provider: "ollama"
  model: "llama3"
"#,
                )
                .load()
                .unwrap();

            assert_eq!(cfg.search.result_count, 9);
            assert_eq!(cfg.search.api_key, "k");
        });
    }

    #[test]
    fn env_overlay_can_supply_missing_keys() {
        temp_env::with_var("HIRELENS_SEARCH__API_KEY", Some("from-env"), || {
            let cfg = HireLensConfigLoader::new()
                .with_yaml_str(
                    r#"
search:
  result_count: 2
llm:
  provider: "ollama"
  model: "llama3"
"#,
                )
                .load()
                .unwrap();

            assert_eq!(cfg.search.api_key, "from-env");
            assert_eq!(cfg.search.result_count, 2);
        });
    }

    #[test]
    fn fetch_section_defaults_apply() {
        let cfg = HireLensConfigLoader::new()
            .with_yaml_str(
                r#"
search:
  api_key: "k"
fetch:
  timeout_secs: 3
llm:
  provider: "openai"
  api_key: "sk-test"
  model: "gpt-4o-mini"
"#,
            )
            .load()
            .unwrap();

        assert_eq!(cfg.fetch.timeout_secs, 3);
        assert_eq!(cfg.fetch.max_paragraphs, 20);
        assert_eq!(cfg.fetch.max_prompt_chars, 4000);
        assert!(matches!(cfg.llm, LlmProviderConfig::Openai { .. }));
    }

    #[test]
    fn ollama_endpoint_defaults_to_localhost() {
        let cfg = HireLensConfigLoader::new()
            .with_yaml_str(
                r#"
search:
  api_key: "k"
llm:
  provider: "ollama"
  model: "llama3"
"#,
            )
            .load()
            .unwrap();

        match cfg.llm {
            LlmProviderConfig::Ollama { endpoint, model } => {
                assert_eq!(endpoint, "http://localhost:11434");
                assert_eq!(model, "llama3");
            }
            other => panic!("expected ollama config, got {other:?}"),
        }
    }
}
