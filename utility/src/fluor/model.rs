use serde::{Deserialize, Serialize};
use std::fmt;

/// Language a function is written in, informational only.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Python,
    Rust,
    Go,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Language::Python => "python",
            Language::Rust => "rust",
            Language::Go => "go",
        };
        f.write_str(s)
    }
}

/// Function is a deployable unit of compute as stored by the registry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Function {
    /// Name is the unique key of the function
    pub name: String, //`json:"name"`
    #[serde(default)]
    pub language: Language, //`json:"language"`
    /// Executable is assigned by the registry
    #[serde(default)]
    pub executable: String, //`json:"executable"`
    #[serde(default)]
    pub cpu: String, //`json:"cpu"`
    #[serde(default)]
    pub memory: String, //`json:"memory"`
    /// ReadOnly entries are managed by the registry and can't be mutated
    #[serde(default)]
    pub readonly: bool, //`json:"readonly,omitempty"`
}

/// Trigger binds an HTTP method and path to a function.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Trigger {
    pub name: String, //`json:"name"`
    /// Method is matched case-sensitively
    pub method: String, //`json:"method"`
    /// Path is matched literally
    pub path: String, //`json:"path"`
    /// Function is the name of the target function
    #[serde(rename = "function")]
    pub function_name: String, //`json:"function"`
    #[serde(default)]
    pub readonly: bool, //`json:"readonly,omitempty"`
}

impl Trigger {
    /// matches reports whether the trigger is bound to exactly this method and path
    pub fn matches(&self, method: &str, path: &str) -> bool {
        self.method == method && self.path == path
    }
}
