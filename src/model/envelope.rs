/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Wire envelope used for every request and response body: `{"data": ...}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Body<T> {
    /// Wrapped payload
    pub data: T,
}

impl<T> Body<T> {
    /// Wraps a payload
    pub fn new(data: T) -> Self {
        Self { data }
    }

    /// Unwraps the payload
    pub fn into_inner(self) -> T {
        self.data
    }
}

/// Error body returned by the API when a request fails
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ErrorResponse {
    /// Server provided description of the failure
    #[serde(rename = "error_message", default)]
    pub message: String,
}
