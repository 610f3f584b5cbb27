//! Declared output shapes for prompt tasks.
//!
//! Every task tells the model which JSON object it expects back. The same
//! declaration is used twice: rendered as JSON Schema for schema-constrained
//! generation, and to validate whatever the model actually returned.

use crate::core::error::DomainError;
use serde_json::{Map, Value, json};

/// Type of a single output field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    String,
    StringArray,
    Object(Vec<SchemaField>),
}

impl FieldType {
    fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::StringArray => "array",
            FieldType::Object(_) => "object",
        }
    }
}

/// A named field in an output schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaField {
    pub name: String,
    pub description: String,
    pub field_type: FieldType,
    pub required: bool,
}

impl SchemaField {
    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            field_type: FieldType::String,
            required: true,
        }
    }

    pub fn string_array(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            field_type: FieldType::StringArray,
            required: true,
        }
    }

    pub fn object(
        name: impl Into<String>,
        description: impl Into<String>,
        fields: Vec<SchemaField>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            field_type: FieldType::Object(fields),
            required: true,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    fn to_json_schema(&self) -> Value {
        let mut prop = Map::new();
        prop.insert("type".to_string(), json!(self.field_type.type_name()));
        prop.insert("description".to_string(), json!(self.description));
        match &self.field_type {
            FieldType::String => {}
            FieldType::StringArray => {
                prop.insert("items".to_string(), json!({ "type": "string" }));
            }
            FieldType::Object(fields) => {
                let (properties, required) = object_properties(fields);
                prop.insert("properties".to_string(), Value::Object(properties));
                prop.insert("required".to_string(), json!(required));
            }
        }
        Value::Object(prop)
    }

    fn validate(&self, value: &Value, path: &str) -> Result<(), DomainError> {
        let here = if path.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", path, self.name)
        };
        match (&self.field_type, value) {
            (FieldType::String, Value::String(_)) => Ok(()),
            (FieldType::StringArray, Value::Array(items)) => {
                if items.iter().all(Value::is_string) {
                    Ok(())
                } else {
                    Err(DomainError::SchemaMismatch(format!(
                        "'{}' must contain only strings",
                        here
                    )))
                }
            }
            (FieldType::Object(fields), Value::Object(map)) => validate_fields(fields, map, &here),
            (expected, _) => Err(DomainError::SchemaMismatch(format!(
                "'{}' must be of type {}",
                here,
                expected.type_name()
            ))),
        }
    }
}

fn object_properties(fields: &[SchemaField]) -> (Map<String, Value>, Vec<String>) {
    let mut properties = Map::new();
    let mut required = Vec::new();
    for field in fields {
        properties.insert(field.name.clone(), field.to_json_schema());
        if field.required {
            required.push(field.name.clone());
        }
    }
    (properties, required)
}

fn validate_fields(
    fields: &[SchemaField],
    map: &Map<String, Value>,
    path: &str,
) -> Result<(), DomainError> {
    for field in fields {
        match map.get(&field.name) {
            Some(Value::Null) | None if field.required => {
                let name = if path.is_empty() {
                    field.name.clone()
                } else {
                    format!("{}.{}", path, field.name)
                };
                return Err(DomainError::SchemaMismatch(format!(
                    "missing required field '{}'",
                    name
                )));
            }
            Some(Value::Null) | None => {}
            Some(value) => field.validate(value, path)?,
        }
    }
    Ok(())
}

/// The JSON object shape a task expects from the model
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSchema {
    fields: Vec<SchemaField>,
}

impl OutputSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: SchemaField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(&self) -> &[SchemaField] {
        &self.fields
    }

    /// Render as provider-neutral JSON Schema.
    pub fn to_json_schema(&self) -> Value {
        let (properties, required) = object_properties(&self.fields);
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// Check a model result against the declared fields.
    ///
    /// Extra keys are tolerated; missing required keys and type mismatches
    /// are not.
    pub fn validate(&self, value: &Value) -> Result<(), DomainError> {
        match value {
            Value::Object(map) => validate_fields(&self.fields, map, ""),
            _ => Err(DomainError::SchemaMismatch(
                "expected a JSON object".to_string(),
            )),
        }
    }
}
