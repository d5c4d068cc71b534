use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub architecture: ArchitectureConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Directory names pruned at any depth (exact match).
    #[serde(default = "default_ignore_dirs")]
    pub ignore_dirs: Vec<String>,
    /// File names skipped at the leaf level (exact match).
    #[serde(default = "default_ignore_files")]
    pub ignore_files: Vec<String>,
    /// Extract imports on the rayon pool instead of one file at a time.
    #[serde(default = "default_true")]
    pub parallel: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ignore_dirs: default_ignore_dirs(),
            ignore_files: default_ignore_files(),
            parallel: true,
        }
    }
}

impl ScanConfig {
    #[must_use]
    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.ignore_dirs.iter().any(|d| d == name)
    }

    #[must_use]
    pub fn is_ignored_file(&self, name: &str) -> bool {
        self.ignore_files.iter().any(|f| f == name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchitectureConfig {
    #[serde(default = "default_rules")]
    pub rules: Vec<LayerRule>,
}

impl Default for ArchitectureConfig {
    fn default() -> Self {
        Self {
            rules: default_rules(),
        }
    }
}

/// One layering constraint: files whose path contains any `source_tokens`
/// must not reference modules containing any `forbidden_tokens`.
///
/// `message` may use the `{file}` and `{dependency}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerRule {
    #[serde(default)]
    pub name: String,
    pub source_tokens: Vec<String>,
    pub forbidden_tokens: Vec<String>,
    #[serde(default = "default_message")]
    pub message: String,
}

impl LayerRule {
    /// Presentation code (`components`) must not import state (`states`).
    #[must_use]
    pub fn component_state() -> Self {
        Self {
            name: "component-state".to_string(),
            source_tokens: vec!["components".to_string()],
            forbidden_tokens: vec!["states".to_string()],
            message: default_message(),
        }
    }
}

const fn default_true() -> bool { true }

fn default_ignore_dirs() -> Vec<String> {
    [".git", "__pycache__", "node_modules", ".web", "assets"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_ignore_files() -> Vec<String> {
    vec![".DS_Store".to_string()]
}

fn default_rules() -> Vec<LayerRule> {
    vec![LayerRule::component_state()]
}

fn default_message() -> String {
    "Violation: Component '{file}' imports state '{dependency}'".to_string()
}
