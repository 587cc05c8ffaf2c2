use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

/// Dashboard variables available to `${name}` substitution
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct VariableSet {
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
}

impl VariableSet {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// Copy of this set with `overrides` layered on top
    pub fn merged(&self, overrides: &BTreeMap<String, String>) -> VariableSet {
        let mut variables = self.variables.clone();
        variables.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        VariableSet { variables }
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl FromIterator<(String, String)> for VariableSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            variables: iter.into_iter().collect(),
        }
    }
}

pub fn load_server_config() -> anyhow::Result<ServerConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/server").required(false))
        .add_source(config::Environment::with_prefix("PANELS").separator("__"))
        .build()
        .context("Failed to load server configuration")?;

    Ok(settings.try_deserialize()?)
}

pub fn load_variables_config() -> anyhow::Result<VariableSet> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/variables").required(false))
        .build()
        .context("Failed to load dashboard variables")?;

    Ok(settings.try_deserialize()?)
}

/// Replace `${name}` placeholders with values from the variable set.
/// Unknown names and unterminated placeholders are left as written.
pub fn replace_with_variables(text: &str, vars: &VariableSet) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                match vars.get(name) {
                    Some(value) => result.push_str(value),
                    None => result.push_str(&rest[start..start + 2 + end + 1]),
                }
                rest = &after[end + 1..];
            }
            None => {
                result.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    result.push_str(rest);
    result
}
