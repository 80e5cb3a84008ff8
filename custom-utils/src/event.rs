use lambda_runtime::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Used in place of the request id when the runtime did not supply one.
pub const MISSING_REQUEST_ID: &str = "N/A";

/// The parts of an API Gateway style proxy event the functions look at.
/// Every field is optional and a `null` map is the same as a missing one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_parameters: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_string_parameters: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl InboundEvent {
    pub fn path_parameter(&self, key: &str) -> Option<&str> {
        self.path_parameters
            .as_ref()
            .and_then(|params| params.get(key))
            .map(String::as_str)
    }

    pub fn query_parameter(&self, key: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.get(key))
            .map(String::as_str)
    }
}

pub fn request_id(context: &Context) -> String {
    if context.request_id.is_empty() {
        MISSING_REQUEST_ID.to_string()
    } else {
        context.request_id.clone()
    }
}
