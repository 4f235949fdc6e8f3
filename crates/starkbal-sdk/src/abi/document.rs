//! ABI documents

use serde::Deserialize;

use super::types::ParamType;
use crate::SdkError;

/// Whether a function may change state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateMutability {
    /// Read-only
    View,
    /// May write storage
    #[default]
    External,
}

/// Named function parameter or output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbiParam {
    /// Parameter name; Cairo 1 outputs are unnamed
    pub name: String,
    /// Type name as written in the ABI
    pub type_name: String,
}

impl AbiParam {
    /// Resolve the parameter's type
    pub fn param_type(&self) -> Result<ParamType, SdkError> {
        ParamType::parse(&self.type_name)
    }
}

/// Function entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbiFunction {
    /// Function name
    pub name: String,
    /// Input parameters
    pub inputs: Vec<AbiParam>,
    /// Outputs
    pub outputs: Vec<AbiParam>,
    /// View or external
    pub state_mutability: StateMutability,
}

/// Parsed contract ABI
///
/// Only function entries are kept. Types are resolved when a function is
/// encoded or decoded, so unsupported types elsewhere in the document do not
/// prevent using the functions that are supported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Abi {
    functions: Vec<AbiFunction>,
}

impl Abi {
    /// Parse an ABI from JSON text
    pub fn from_json(json: &str) -> Result<Self, SdkError> {
        let entries: Vec<RawEntry> =
            serde_json::from_str(json).map_err(|e| SdkError::InvalidAbi(e.to_string()))?;
        let mut functions = Vec::new();
        collect_functions(entries, &mut functions);
        Ok(Self { functions })
    }

    /// Get a function by name
    pub fn function(&self, name: &str) -> Option<&AbiFunction> {
        self.functions.iter().find(|f| f.name == name)
    }
}

fn collect_functions(entries: Vec<RawEntry>, out: &mut Vec<AbiFunction>) {
    for entry in entries {
        match entry {
            RawEntry::Function(raw) => out.push(raw.into()),
            RawEntry::Interface { items } => collect_functions(items, out),
            RawEntry::Other => {}
        }
    }
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum RawEntry {
    Function(RawFunction),
    Interface {
        #[serde(default)]
        items: Vec<RawEntry>,
    },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
struct RawFunction {
    name: String,
    #[serde(default)]
    inputs: Vec<RawParam>,
    #[serde(default)]
    outputs: Vec<RawParam>,
    #[serde(default, alias = "stateMutability")]
    state_mutability: Option<String>,
}

#[derive(Deserialize)]
struct RawParam {
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    type_name: String,
}

impl From<RawFunction> for AbiFunction {
    fn from(raw: RawFunction) -> Self {
        let state_mutability = match raw.state_mutability.as_deref() {
            Some("view") => StateMutability::View,
            _ => StateMutability::External,
        };
        Self {
            name: raw.name,
            inputs: raw.inputs.into_iter().map(Into::into).collect(),
            outputs: raw.outputs.into_iter().map(Into::into).collect(),
            state_mutability,
        }
    }
}

impl From<RawParam> for AbiParam {
    fn from(raw: RawParam) -> Self {
        Self {
            name: raw.name,
            type_name: raw.type_name,
        }
    }
}
