use crate::presentation::account::Account;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A concrete resource type exposed by the API
///
/// Every operation of [`crate::application::services::ResourceServiceImpl`] is
/// generic over this trait, so the collection path and the identifier are known
/// at compile time instead of being recovered through runtime casts.
pub trait ApiResource:
    Serialize + DeserializeOwned + Clone + Send + Sync + Into<Resource> + 'static
{
    /// Collection path relative to the base URL, e.g. `/accounts`
    const PATH: &'static str;

    /// Identifier used for the singleton endpoints
    fn id(&self) -> &str;
}

/// Any resource returned by the API
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Resource {
    /// An account
    Account(Account),
}

impl Resource {
    /// Identifier of the wrapped resource
    pub fn id(&self) -> &str {
        match self {
            Resource::Account(account) => &account.id,
        }
    }

    /// Type discriminator of the wrapped resource
    pub fn resource_type(&self) -> &str {
        match self {
            Resource::Account(account) => &account.resource_type,
        }
    }

    /// Borrows the wrapped account, if this is one
    pub fn as_account(&self) -> Option<&Account> {
        match self {
            Resource::Account(account) => Some(account),
        }
    }

    /// Unwraps the account, if this is one
    pub fn into_account(self) -> Option<Account> {
        match self {
            Resource::Account(account) => Some(account),
        }
    }
}
