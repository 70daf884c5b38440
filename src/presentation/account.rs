/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{ACCOUNT_PATH, ACCOUNT_TYPE};
use crate::presentation::resource::{ApiResource, Resource};
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Account resource as exchanged with the API
///
/// `created_on`, `modified_on` and `version` are injected by the server; they
/// are optional on input and left out of the request body when unset.
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Account {
    /// Unique identifier (UUID) of the account
    pub id: String,
    /// Creation timestamp set by the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    /// Last modification timestamp set by the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,
    /// Identifier (UUID) of the owning organisation
    pub organisation_id: String,
    /// Type discriminator, always `accounts`
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Record version, incremented by the server on every change
    pub version: i64,
    /// Banking attributes of the account
    pub attributes: Attributes,
}

/// Banking attributes of an [`Account`]
///
/// No validation happens client side: the server reports every violated
/// constraint in its error response. Empty strings are not sent.
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Attributes {
    /// Account number
    #[serde(skip_serializing_if = "String::is_empty")]
    pub account_number: String,
    /// Classification, `Personal` or `Business`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub account_classification: String,
    /// Whether the account opted out of account matching
    pub account_matching_opt_out: bool,
    /// Alternative names the account is known by
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_bank_account_names: Option<Vec<String>>,
    /// Local bank identifier
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bank_id: String,
    /// Type of the bank identifier (e.g. `GBDSC`)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bank_id_code: String,
    /// ISO 4217 currency code
    #[serde(skip_serializing_if = "String::is_empty")]
    pub base_currency: String,
    /// SWIFT BIC
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bic: String,
    /// ISO 3166-1 alpha-2 country code
    #[serde(skip_serializing_if = "String::is_empty")]
    pub country: String,
    /// Customer reference
    #[serde(skip_serializing_if = "String::is_empty")]
    pub customer_id: String,
    /// Whether the account is held jointly
    pub joint_account: bool,
    /// IBAN
    #[serde(skip_serializing_if = "String::is_empty")]
    pub iban: String,
}

impl Account {
    /// Creates an account ready to be sent to the API
    ///
    /// # Arguments
    /// * `id` - Client supplied UUID of the account
    /// * `organisation_id` - UUID of the owning organisation
    /// * `attributes` - Banking attributes
    pub fn new(
        id: impl Into<String>,
        organisation_id: impl Into<String>,
        attributes: Attributes,
    ) -> Self {
        Self {
            id: id.into(),
            organisation_id: organisation_id.into(),
            resource_type: ACCOUNT_TYPE.to_string(),
            attributes,
            ..Self::default()
        }
    }
}

impl ApiResource for Account {
    const PATH: &'static str = ACCOUNT_PATH;

    fn id(&self) -> &str {
        &self.id
    }
}

impl From<Account> for Resource {
    fn from(account: Account) -> Self {
        Resource::Account(account)
    }
}

impl TryFrom<Resource> for Account {
    type Error = Resource;

    fn try_from(resource: Resource) -> Result<Self, Self::Error> {
        match resource {
            Resource::Account(account) => Ok(account),
        }
    }
}
