//! Declarative description of a resource's configuration attributes.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Validator {
    StringLenBetween { min: usize, max: usize },
    StringInSlice { values: Vec<String>, ignore_case: bool },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub type_: AttributeType,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    pub force_new: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

impl Attribute {
    pub fn required(name: &'static str, type_: AttributeType) -> Self {
        Self {
            name,
            type_,
            required: true,
            default: None,
            force_new: false,
            validators: Vec::new(),
        }
    }

    pub fn optional(name: &'static str, type_: AttributeType, default: serde_json::Value) -> Self {
        Self {
            name,
            type_,
            required: false,
            default: Some(default),
            force_new: false,
            validators: Vec::new(),
        }
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    pub resource_type: &'static str,
    pub importable: bool,
    pub remote_delete: bool,
    pub attributes: Vec<Attribute>,
}

impl Schema {
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_builders() {
        let attr = Attribute::required("name", AttributeType::String)
            .with_validator(Validator::StringLenBetween { min: 1, max: 10 });
        assert!(attr.required);
        assert!(attr.default.is_none());
        assert_eq!(attr.validators.len(), 1);

        let flag = Attribute::optional("enabled", AttributeType::Bool, serde_json::json!(false));
        assert!(!flag.required);
        assert_eq!(flag.default, Some(serde_json::json!(false)));
    }

    #[test]
    fn test_validator_serialization_is_tagged() {
        let json = serde_json::to_value(Validator::StringLenBetween { min: 1, max: 128 }).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "string_len_between", "min": 1, "max": 128})
        );
    }

    #[test]
    fn test_attribute_serialization_skips_empty() {
        let attr = Attribute::required("name", AttributeType::String);
        let json = serde_json::to_value(&attr).unwrap();
        assert_eq!(json["type"], "string");
        assert!(json.get("default").is_none());
        assert!(json.get("validators").is_none());
    }
}
