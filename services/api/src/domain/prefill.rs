use serde::Serialize;

use playground_auth::bearer::BEARER_SCHEME;

/// The mock user reported to the documentation portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaygroundUser {
    pub email: String,
    pub name: String,
}

/// Headers the portal copies into its API playground.
#[derive(Debug, Clone, Serialize)]
pub struct PrefillHeaders {
    #[serde(rename = "Authorization")]
    pub authorization: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlaygroundInputs {
    pub header: PrefillHeaders,
}

/// Body of `GET /api/user`, in the shape the portal expects for playground prefill.
///
/// ```json
/// {
///   "apiPlaygroundInputs": { "header": { "Authorization": "Bearer sk_test_12345" } },
///   "content": { "email": "test@example.com", "name": "Test User" }
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaygroundPrefill {
    pub api_playground_inputs: PlaygroundInputs,
    pub content: PlaygroundUser,
}

impl PlaygroundPrefill {
    /// Prefill that authenticates playground calls with `api_key`.
    pub fn new(user: PlaygroundUser, api_key: &str) -> Self {
        Self {
            api_playground_inputs: PlaygroundInputs {
                header: PrefillHeaders {
                    authorization: format!("{BEARER_SCHEME} {api_key}"),
                },
            },
            content: user,
        }
    }
}
