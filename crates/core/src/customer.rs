use serde::{Deserialize, Serialize};

/// A contact remembered for autocomplete, keyed by `mobile_no`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub mobile_no: String,
    pub customer_name: String,
}

impl Customer {
    #[must_use]
    pub fn new(customer_name: impl Into<String>, mobile_no: impl Into<String>) -> Self {
        Self { mobile_no: mobile_no.into(), customer_name: customer_name.into() }
    }
}

/// The three independent collections held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Customers,
    Descriptions,
    Remarks,
}

impl Collection {
    /// Persisted collection name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customers => "customers",
            Self::Descriptions => "descriptions",
            Self::Remarks => "remarks",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row counts per collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionCounts {
    pub customers: usize,
    pub descriptions: usize,
    pub remarks: usize,
}

/// Full contents of every collection, as written to the export file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSnapshot {
    pub customers: Vec<Customer>,
    pub descriptions: Vec<String>,
    pub remarks: Vec<String>,
}

impl ExportSnapshot {
    #[must_use]
    pub fn counts(&self) -> CollectionCounts {
        CollectionCounts {
            customers: self.customers.len(),
            descriptions: self.descriptions.len(),
            remarks: self.remarks.len(),
        }
    }
}

/// Batch delivered by the remote "refresh" actions.
///
/// Every field is optional in the JSON form so a customers-only or
/// vocabulary-only payload parses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshPayload {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub descriptions: Vec<String>,
    #[serde(default)]
    pub remarks: Vec<String>,
}

impl RefreshPayload {
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
