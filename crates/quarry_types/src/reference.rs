//! Resource type references and deployment scopes.
//!
//! A type reference names a resource schema: a provider namespace, one or
//! more type segments, and an API version, written
//! `Microsoft.Compute/virtualMachines/extensions@2019-07-01`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use once_cell::sync::Lazy;
use quarry_foundation::{Error, Result};
use regex::Regex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

static TYPE_REFERENCE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i-u)^(?P<namespace>[a-z0-9][a-z0-9.]*)(?P<types>(?:/[a-z0-9\-]+)+)@(?P<version>[0-9]{4}-[0-9]{2}-[0-9]{2}(?:-[a-z0-9]+)?)$",
    )
    .expect("type reference pattern is valid")
});

/// A parsed resource type reference.
///
/// Equality and hashing ignore ASCII case, matching how the deployment
/// platform compares type names. The original spelling is kept for display.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResourceTypeReference {
    namespace: String,
    types: Vec<String>,
    api_version: String,
}

impl ResourceTypeReference {
    /// Creates a reference from its parts.
    ///
    /// # Panics
    ///
    /// Panics if `types` is empty.
    #[must_use]
    pub fn new(
        namespace: impl Into<String>,
        types: impl IntoIterator<Item = impl Into<String>>,
        api_version: impl Into<String>,
    ) -> Self {
        let types: Vec<String> = types.into_iter().map(Into::into).collect();
        assert!(!types.is_empty(), "a type reference needs at least one type segment");
        Self {
            namespace: namespace.into(),
            types,
            api_version: api_version.into(),
        }
    }

    /// Parses `<namespace>/<type>[/<child>...]@<yyyy-mm-dd>[-<prerelease>]`.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidTypeReference` error if `text` does not match.
    pub fn parse(text: &str) -> Result<Self> {
        let captures = TYPE_REFERENCE_PATTERN
            .captures(text)
            .ok_or_else(|| Error::invalid_type_reference(text))?;

        let types = captures["types"]
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            namespace: captures["namespace"].to_string(),
            types,
            api_version: captures["version"].to_string(),
        })
    }

    /// The provider namespace, e.g. `Microsoft.Storage`.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The type segments, e.g. `["storageAccounts", "blobServices"]`.
    #[must_use]
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// The API version, e.g. `2021-04-01`.
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// The namespace and type segments without the version.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.namespace, self.types.join("/"))
    }

    /// Returns true if this names a child resource type.
    #[must_use]
    pub fn is_child(&self) -> bool {
        self.types.len() > 1
    }

    fn canonical(&self) -> String {
        self.to_string().to_ascii_lowercase()
    }
}

impl PartialEq for ResourceTypeReference {
    fn eq(&self, other: &Self) -> bool {
        self.namespace.eq_ignore_ascii_case(&other.namespace)
            && self.api_version.eq_ignore_ascii_case(&other.api_version)
            && self.types.len() == other.types.len()
            && self
                .types
                .iter()
                .zip(&other.types)
                .all(|(a, b)| a.eq_ignore_ascii_case(b))
    }
}

impl Eq for ResourceTypeReference {}

impl Hash for ResourceTypeReference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl fmt::Display for ResourceTypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.full_name(), self.api_version)
    }
}

impl FromStr for ResourceTypeReference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Where a deployment targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ResourceScope {
    /// The whole tenant.
    Tenant,
    /// A management group.
    ManagementGroup,
    /// A subscription.
    Subscription,
    /// A resource group.
    #[default]
    ResourceGroup,
}

impl ResourceScope {
    /// All scopes, outermost first.
    pub const ALL: [Self; 4] = [
        Self::Tenant,
        Self::ManagementGroup,
        Self::Subscription,
        Self::ResourceGroup,
    ];

    /// Returns the name used in source, e.g. `resourceGroup`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tenant => "tenant",
            Self::ManagementGroup => "managementGroup",
            Self::Subscription => "subscription",
            Self::ResourceGroup => "resourceGroup",
        }
    }
}

impl fmt::Display for ResourceScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
