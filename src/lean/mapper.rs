//! Library name mapper
//!
//! Maps abstract concept names to the library names used in rendered
//! surface text (for example `norm` to `NormedSpace.norm`). The compiled-in
//! defaults cover the common cases; a YAML document with a `mapping:` key
//! can extend or override them. Unmapped names pass through unchanged.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::Path;

static DEFAULT_MAPPING: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("norm", "NormedSpace.norm"),
        ("abs", "abs"),
        ("add", "Add.add"),
        ("mul", "Mul.mul"),
        ("pow", "Pow.pow"),
        ("ge", "ge"),
        ("le", "le"),
        ("eq", "Eq"),
        ("Real", "Real"),
        ("Nat", "Nat"),
    ])
});

/// Errors from loading a mapper configuration.
#[derive(Debug)]
pub enum MapperError {
    Io(io::Error),
    Yaml(serde_yaml::Error),
}

impl fmt::Display for MapperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapperError::Io(err) => write!(f, "failed to read mapper config: {}", err),
            MapperError::Yaml(err) => write!(f, "invalid mapper config: {}", err),
        }
    }
}

impl std::error::Error for MapperError {}

impl From<io::Error> for MapperError {
    fn from(err: io::Error) -> Self {
        MapperError::Io(err)
    }
}

impl From<serde_yaml::Error> for MapperError {
    fn from(err: serde_yaml::Error) -> Self {
        MapperError::Yaml(err)
    }
}

/// On-disk shape of a mapper configuration file.
#[derive(Debug, Deserialize)]
struct MapperConfig {
    #[serde(default)]
    mapping: HashMap<String, String>,
}

/// Abstract-name to library-name lookup table.
#[derive(Debug, Clone)]
pub struct LibraryMapper {
    mapping: HashMap<String, String>,
}

impl Default for LibraryMapper {
    fn default() -> Self {
        let mapping = DEFAULT_MAPPING
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { mapping }
    }
}

impl LibraryMapper {
    /// A mapper with only the compiled-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults extended by the `mapping:` entries of a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, MapperError> {
        let config: MapperConfig = serde_yaml::from_str(yaml)?;
        let mut mapper = Self::default();
        mapper.mapping.extend(config.mapping);
        Ok(mapper)
    }

    /// Loads overrides from a config file. A missing file is not an error
    /// and yields the defaults; an unreadable or malformed file is.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, MapperError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_yaml_str(&contents),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    /// Register one mapping, overriding any existing entry.
    pub fn register(&mut self, name: impl Into<String>, target: impl Into<String>) {
        self.mapping.insert(name.into(), target.into());
    }

    /// The library name for `name`, or `name` itself when unmapped.
    pub fn resolve(&self, name: &str) -> String {
        self.mapping
            .get(name)
            .cloned()
            .unwrap_or_else(|| name.to_string())
    }
}
