//! Deployment metadata records

use crate::serde_ext::{null_as_default, scalar_as_string};
use serde::{Deserialize, Serialize};

/// One deployed decision definition, as reported by the engine's REST API
///
/// Every field takes its zero value when the source JSON omits it or sets
/// it to `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DefinitionInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(deserialize_with = "null_as_default")]
    pub key: String,

    #[serde(deserialize_with = "null_as_default")]
    pub category: String,

    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(deserialize_with = "null_as_default")]
    pub version: i64,

    /// Name of the deployed resource file
    #[serde(deserialize_with = "null_as_default")]
    pub resource: String,

    #[serde(deserialize_with = "null_as_default")]
    pub deployment_id: String,

    #[serde(deserialize_with = "null_as_default")]
    pub tenant_id: String,

    /// Id of the decision requirements definition this decision belongs to
    #[serde(
        rename = "decisionRequirementsDefinitionId",
        deserialize_with = "null_as_default"
    )]
    pub decision_req_def_id: String,

    /// Key of the decision requirements definition this decision belongs to
    #[serde(
        rename = "decisionRequirementsDefinitionKey",
        deserialize_with = "null_as_default"
    )]
    pub decision_req_def_key: String,

    /// History time to live, kept verbatim as text
    #[serde(rename = "historyTimeToLive", deserialize_with = "scalar_as_string")]
    pub history_ttl: String,
}

/// Ordered collection of [`DefinitionInfo`] records
///
/// Serialized as a bare JSON array. Element order is the order of the
/// source document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefinitionList {
    pub definitions: Vec<DefinitionInfo>,
}

impl DefinitionList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DefinitionInfo> {
        self.definitions.iter()
    }

    /// Find a definition by its id
    pub fn find_by_id(&self, id: &str) -> Option<&DefinitionInfo> {
        self.definitions.iter().find(|d| d.id == id)
    }

    /// All versions of the definition deployed under `key`, in list order
    pub fn find_by_key<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a DefinitionInfo> {
        self.definitions.iter().filter(move |d| d.key == key)
    }

    /// The highest version deployed under `key`
    ///
    /// When two records share the highest version the first one in list
    /// order wins.
    pub fn latest_by_key(&self, key: &str) -> Option<&DefinitionInfo> {
        self.definitions
            .iter()
            .filter(|d| d.key == key)
            .fold(None, |best: Option<&DefinitionInfo>, d| match best {
                Some(b) if b.version >= d.version => Some(b),
                _ => Some(d),
            })
    }
}

impl From<Vec<DefinitionInfo>> for DefinitionList {
    fn from(definitions: Vec<DefinitionInfo>) -> Self {
        Self { definitions }
    }
}

impl FromIterator<DefinitionInfo> for DefinitionList {
    fn from_iter<I: IntoIterator<Item = DefinitionInfo>>(iter: I) -> Self {
        Self {
            definitions: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for DefinitionList {
    type Item = DefinitionInfo;
    type IntoIter = std::vec::IntoIter<DefinitionInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.definitions.into_iter()
    }
}

impl<'a> IntoIterator for &'a DefinitionList {
    type Item = &'a DefinitionInfo;
    type IntoIter = std::slice::Iter<'a, DefinitionInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.definitions.iter()
    }
}

/// The DMN XML document of one deployed decision definition
///
/// `dmn_xml` holds the raw document text. Parse it into a
/// [`crate::Definition`] to inspect the decision table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DmnXml {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(rename = "dmnXml", deserialize_with = "null_as_default")]
    pub dmn_xml: String,
}
