//! Batch configuration types (defarg.toml format).

use crate::error::{ConfigError, Result};
use defarg_core::{CombinationEngine, MethodWrapper, OverloadSink, Visibility, VOID};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Root batch configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenConfig {
    /// Output file (optional; standard output when absent).
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Methods to generate overloads for, in output order.
    #[serde(rename = "method", default)]
    pub methods: Vec<MethodConfig>,
}

/// One target method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodConfig {
    /// Method name.
    pub name: String,

    /// Visibility (package, public, private, protected).
    #[serde(default = "default_visibility")]
    pub visibility: String,

    /// Whether the method is static.
    #[serde(rename = "static", default)]
    pub is_static: bool,

    /// Whether the method is final.
    #[serde(rename = "final", default)]
    pub is_final: bool,

    /// Return type label.
    #[serde(default = "default_return_type")]
    pub return_type: String,

    /// Arguments in declaration order.
    #[serde(rename = "argument", default)]
    pub arguments: Vec<ArgumentConfig>,
}

/// One argument of a target method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentConfig {
    /// Type label.
    #[serde(rename = "type")]
    pub ty: String,

    /// Parameter name.
    pub name: String,

    /// Default literal; the argument is required when absent.
    #[serde(default)]
    pub default: Option<String>,
}

fn default_visibility() -> String {
    Visibility::Package.name().to_string()
}

fn default_return_type() -> String {
    VOID.to_string()
}

impl GenConfig {
    /// Load configuration from a file. `.json` files are read as JSON,
    /// everything else as TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config: GenConfig = if is_json {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        debug!(path = %path.display(), methods = config.methods.len(), "loaded config");
        Ok(config)
    }

    /// Check that the configuration describes at least one method.
    pub fn validate(&self) -> Result<()> {
        if self.methods.is_empty() {
            return Err(ConfigError::Validation("no [[method]] entries".to_string()));
        }
        Ok(())
    }

    /// Find a method by name.
    pub fn find_method(&self, name: &str) -> Option<&MethodConfig> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Build descriptors for every method; fails on the first invalid one.
    pub fn wrappers(&self) -> Result<Vec<MethodWrapper>> {
        self.methods.iter().map(MethodConfig::to_wrapper).collect()
    }

    /// Generate overloads for all methods into one sink, in file order.
    ///
    /// Every method is validated before anything is emitted. A method without
    /// arguments fails with [`OverloadError::NoArguments`] wrapped in
    /// [`ConfigError::Overload`].
    ///
    /// [`OverloadError::NoArguments`]: defarg_core::OverloadError::NoArguments
    pub fn generate<S: OverloadSink + ?Sized>(&self, sink: &mut S) -> Result<usize> {
        self.validate()?;
        let wrappers = self.wrappers()?;
        for wrapper in &wrappers {
            CombinationEngine::new(wrapper).map_err(|source| ConfigError::Overload {
                method: wrapper.name().to_string(),
                source,
            })?;
        }

        let mut emitted = 0;
        for wrapper in &wrappers {
            emitted += wrapper.generate(sink).map_err(|source| ConfigError::Overload {
                method: wrapper.name().to_string(),
                source,
            })?;
            if !sink.wants_more() {
                break;
            }
        }
        Ok(emitted)
    }
}

impl MethodConfig {
    /// Create a void, package-private method entry.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            visibility: default_visibility(),
            is_static: false,
            is_final: false,
            return_type: default_return_type(),
            arguments: Vec::new(),
        }
    }

    /// Add a required argument.
    pub fn with_argument(mut self, ty: &str, name: &str) -> Self {
        self.arguments.push(ArgumentConfig {
            ty: ty.to_string(),
            name: name.to_string(),
            default: None,
        });
        self
    }

    /// Add a defaulted argument.
    pub fn with_default(mut self, ty: &str, name: &str, default: &str) -> Self {
        self.arguments.push(ArgumentConfig {
            ty: ty.to_string(),
            name: name.to_string(),
            default: Some(default.to_string()),
        });
        self
    }

    /// Build the method descriptor this entry describes.
    pub fn to_wrapper(&self) -> Result<MethodWrapper> {
        let visibility = self
            .visibility
            .parse::<Visibility>()
            .map_err(|source| ConfigError::Visibility {
                method: self.name.clone(),
                source,
            })?;
        let overload_err = |source| ConfigError::Overload {
            method: self.name.clone(),
            source,
        };

        let mut wrapper = MethodWrapper::builder()
            .visibility(visibility)
            .set_static(self.is_static)
            .set_final(self.is_final)
            .return_type(self.return_type.as_str())
            .name(self.name.as_str())
            .build()
            .map_err(overload_err)?;

        for arg in &self.arguments {
            wrapper
                .add_argument(arg.ty.as_str(), &arg.name, arg.default.as_deref())
                .map_err(overload_err)?;
        }
        Ok(wrapper)
    }
}
