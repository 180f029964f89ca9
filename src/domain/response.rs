#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Operation-result envelope returned by mutating calls and by most error responses.
pub struct Response {
    pub operation: Option<String>,
    pub response_code: String,
    pub message: Option<String>,
    pub info: Vec<Property>,
    pub warning: Vec<String>,
    pub error: Vec<String>,
    pub request_id: Option<String>,
}

impl Response {
    pub const OK: &'static str = "OK";
    pub const IN_PROGRESS: &'static str = "IN_PROGRESS";
    pub const RESOURCE_NOT_FOUND: &'static str = "RESOURCE_NOT_FOUND";

    /// `true` for `OK` and `IN_PROGRESS` (asynchronous operations accepted by the server).
    pub fn is_success(&self) -> bool {
        self.response_code == Self::OK || self.response_code == Self::IN_PROGRESS
    }

    pub fn is_not_found(&self) -> bool {
        self.response_code == Self::RESOURCE_NOT_FOUND
    }

    /// Value of the named `info` entry, e.g. `natRuleId` after `createNatRule`.
    pub fn info_value(&self, name: &str) -> Option<&str> {
        self.info
            .iter()
            .find(|property| property.name == name)
            .map(|property| property.value.as_str())
    }
}
