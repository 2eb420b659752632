// Configuration type definitions

use serde::Deserialize;

/// Lookup/autocomplete configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct LookupConfig {
    /// Quiet period before a keystroke burst settles into one lookup request
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Maximum number of dropdown suggestions
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

fn default_debounce_ms() -> u64 {
    600
}

fn default_max_suggestions() -> usize {
    5
}

impl Default for LookupConfig {
    fn default() -> Self {
        LookupConfig {
            debounce_ms: default_debounce_ms(),
            max_suggestions: default_max_suggestions(),
        }
    }
}

/// Gemini API configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    /// API key; the GEMINI_API_KEY environment variable takes precedence
    pub api_key: Option<String>,

    /// Model for lookup and background requests (search-grounded, fast)
    #[serde(default = "default_flash_model")]
    pub flash_model: String,

    /// Model for report and solution generation (schema-constrained)
    #[serde(default = "default_pro_model")]
    pub pro_model: String,
}

fn default_flash_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_pro_model() -> String {
    "gemini-3-pro-preview".to_string()
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            api_key: None,
            flash_model: default_flash_model(),
            pro_model: default_pro_model(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub lookup: LookupConfig,

    #[serde(default)]
    pub gemini: GeminiConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.lookup.debounce_ms, 600);
        assert_eq!(config.lookup.max_suggestions, 5);
        assert_eq!(config.gemini.api_key, None);
        assert_eq!(config.gemini.flash_model, "gemini-3-flash-preview");
        assert_eq!(config.gemini.pro_model, "gemini-3-pro-preview");
    }

    #[test]
    fn test_full_config_parses() {
        let config: Config = toml::from_str(
            r#"
[lookup]
debounce_ms = 300
max_suggestions = 8

[gemini]
api_key = "AIza-test"
flash_model = "gemini-flash-x"
pro_model = "gemini-pro-x"
"#,
        )
        .unwrap();

        assert_eq!(config.lookup.debounce_ms, 300);
        assert_eq!(config.lookup.max_suggestions, 8);
        assert_eq!(config.gemini.api_key.as_deref(), Some("AIza-test"));
        assert_eq!(config.gemini.flash_model, "gemini-flash-x");
    }

    // For any subset of sections/fields present, parsing succeeds and absent
    // fields fall back to their documented defaults.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_partial_configs_fill_defaults(
            include_lookup in prop::bool::ANY,
            debounce in 1u64..5000u64,
            include_gemini in prop::bool::ANY,
        ) {
            let mut toml_content = String::new();
            if include_lookup {
                toml_content.push_str(&format!("[lookup]\ndebounce_ms = {debounce}\n"));
            }
            if include_gemini {
                toml_content.push_str("[gemini]\n");
            }

            let config: Config = toml::from_str(&toml_content).unwrap();

            if include_lookup {
                prop_assert_eq!(config.lookup.debounce_ms, debounce);
            } else {
                prop_assert_eq!(config.lookup.debounce_ms, 600);
            }
            prop_assert_eq!(config.lookup.max_suggestions, 5);
            prop_assert_eq!(config.gemini.api_key, None);
        }
    }
}
