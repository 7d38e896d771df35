//! Split plan types.
//!
//! A plan is an ordered list of output groups. Group order and the function
//! order inside each group are positional and are preserved all the way to
//! the written files.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One output file: its name, optional header, and ordered function names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSpec {
    /// Output file name (e.g. "zones.rs")
    pub name: String,
    /// Header text written above the extracted functions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    /// Function names in output order
    pub functions: Vec<String>,
}

impl GroupSpec {
    /// Create a new group with no explicit header.
    pub fn new(name: impl Into<String>, functions: Vec<String>) -> Self {
        Self {
            name: name.into(),
            header: None,
            functions,
        }
    }

    /// Set the header text.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// The header to write: the explicit one verbatim, or a generated
    /// one-line comment for groups without one.
    pub fn header_or_default(&self) -> String {
        match &self.header {
            Some(header) => header.clone(),
            None => format!("// {} functionality\n\n", self.name),
        }
    }
}

/// An ordered sequence of groups driving one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitPlan {
    pub groups: Vec<GroupSpec>,
}

impl SplitPlan {
    /// Parse a plan from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let plan: SplitPlan = serde_json::from_str(json)?;
        plan.validate()?;
        Ok(plan)
    }

    /// Load a plan from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Number of groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of functions across all groups.
    pub fn function_count(&self) -> usize {
        self.groups.iter().map(|g| g.functions.len()).sum()
    }

    fn validate(&self) -> Result<()> {
        for group in &self.groups {
            if group.name.is_empty() {
                return Err(Error::Plan("group with empty name".to_string()));
            }
            if group.name.contains('/') || group.name.contains('\\') {
                return Err(Error::Plan(format!(
                    "group name {:?} must not contain path separators",
                    group.name
                )));
            }
        }
        Ok(())
    }
}
