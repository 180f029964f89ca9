use serde::{Deserialize, Serialize};

use super::page::TransportError;
use crate::domain::{Property, Response};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseJson {
    #[serde(default)]
    operation: Option<String>,
    response_code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    info: Vec<PropertyJson>,
    #[serde(default)]
    warning: Vec<String>,
    #[serde(default)]
    error: Vec<String>,
    #[serde(default)]
    request_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct PropertyJson {
    name: String,
    value: String,
}

pub fn decode_response_json(json: &str) -> Result<Response, TransportError> {
    let parsed: ResponseJson = serde_json::from_str(json)?;
    Ok(Response {
        operation: parsed.operation,
        response_code: parsed.response_code,
        message: parsed.message,
        info: parsed
            .info
            .into_iter()
            .map(|property| Property {
                name: property.name,
                value: property.value,
            })
            .collect(),
        warning: parsed.warning,
        error: parsed.error,
        request_id: parsed.request_id,
    })
}

#[derive(Debug, Serialize)]
struct IdJson<'a> {
    id: &'a str,
}

/// Body shared by every "delete by id" style call: `{"id": "..."}`.
pub fn encode_id_json(id: &str) -> Result<String, serde_json::Error> {
    serde_json::to_string(&IdJson { id })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_response_json_maps_envelope() {
        let json = r#"
        {
          "operation": "CREATE_NAT_RULE",
          "responseCode": "OK",
          "message": "NAT Rule has been created.",
          "info": [{"name": "natRuleId", "value": "rule-42"}],
          "warning": [],
          "error": [],
          "requestId": "na9_20160321T074626030-0400_7e9fffe7"
        }
        "#;

        let response = decode_response_json(json).unwrap();
        assert_eq!(response.operation.as_deref(), Some("CREATE_NAT_RULE"));
        assert_eq!(response.response_code, "OK");
        assert_eq!(response.info_value("natRuleId"), Some("rule-42"));
        assert_eq!(
            response.request_id.as_deref(),
            Some("na9_20160321T074626030-0400_7e9fffe7")
        );
    }

    #[test]
    fn decode_response_json_defaults_optional_lists() {
        let response = decode_response_json(r#"{"responseCode": "IN_PROGRESS"}"#).unwrap();
        assert!(response.is_success());
        assert!(response.info.is_empty());
        assert!(response.warning.is_empty());
        assert!(response.error.is_empty());
    }

    #[test]
    fn decode_response_json_requires_response_code() {
        assert!(decode_response_json(r#"{"message": "hello"}"#).is_err());
    }

    #[test]
    fn encode_id_json_uses_id_field() {
        assert_eq!(encode_id_json("rule-42").unwrap(), r#"{"id":"rule-42"}"#);
    }
}
