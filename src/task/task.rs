use crate::task::template::{interpolate, Inputs, TemplateError};
use serde_json::Value;

// Enum to define different output format types
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum OutputFormat {
    Text, // Free-form text output
    Json {
        schema: JsonSchema,
        strict: bool, // Whether to reject fields not named in the schema
    },
}

// JSON Schema definition for validation
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct JsonSchema {
    pub required_fields: Vec<JsonField>,
    pub optional_fields: Vec<JsonField>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct JsonField {
    pub name: String,
    pub field_type: JsonFieldType,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum JsonFieldType {
    String,
    Number,
    Boolean,
    Array(Box<JsonFieldType>),
    Object,
}

/// One unit of work, assigned to exactly one agent by role name.
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug)]
pub struct Task {
    pub description: String,
    pub expected_output: String,
    pub agent: String,
    pub output_format: OutputFormat,
}

impl Task {
    pub fn new(
        description: impl Into<String>,
        expected_output: impl Into<String>,
        agent: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            expected_output: expected_output.into(),
            agent: agent.into(),
            output_format: OutputFormat::Text,
        }
    }

    /// Ask for a JSON object with the given fields instead of free text.
    pub fn with_json_output(
        mut self,
        required_fields: Vec<JsonField>,
        optional_fields: Vec<JsonField>,
        strict: bool,
    ) -> Self {
        self.output_format = OutputFormat::Json {
            schema: JsonSchema {
                required_fields,
                optional_fields,
            },
            strict,
        };
        self
    }

    // Helper to request JSON with just field names and types
    pub fn with_simple_json(self, required_fields: Vec<(String, JsonFieldType)>, strict: bool) -> Self {
        let fields = required_fields
            .into_iter()
            .map(|(name, field_type)| JsonField {
                name,
                field_type,
                description: None,
            })
            .collect();

        self.with_json_output(fields, vec![], strict)
    }

    pub fn expects_json(&self) -> bool {
        matches!(self.output_format, OutputFormat::Json { .. })
    }

    /// Copy of this task with description and expected output filled from `inputs`.
    pub fn interpolate(&self, inputs: &Inputs) -> Result<Task, TemplateError> {
        Ok(Task {
            description: interpolate(&self.description, inputs)?,
            expected_output: interpolate(&self.expected_output, inputs)?,
            agent: self.agent.clone(),
            output_format: self.output_format.clone(),
        })
    }

    // Generate a prompt section describing the expected output format
    pub fn get_format_prompt(&self) -> String {
        match &self.output_format {
            OutputFormat::Text => "Provide your response as plain text.".to_string(),
            OutputFormat::Json { schema, strict } => {
                let mut prompt = "You must respond with valid JSON in the following format:\n\n".to_string();

                prompt.push_str("{\n");
                let total = schema.required_fields.len() + schema.optional_fields.len();
                let fields = schema
                    .required_fields
                    .iter()
                    .map(|f| (f, "REQUIRED"))
                    .chain(schema.optional_fields.iter().map(|f| (f, "OPTIONAL")));
                for (i, (field, marker)) in fields.enumerate() {
                    prompt.push_str(&format!(
                        "  \"{}\": <{}>{}  // {}{}\n",
                        field.name,
                        type_to_string(&field.field_type),
                        if i + 1 == total { "" } else { "," },
                        marker,
                        field.description.as_ref().map(|d| format!(" - {}", d)).unwrap_or_default()
                    ));
                }
                prompt.push_str("}\n\n");

                if *strict {
                    prompt.push_str("IMPORTANT: Only include the specified fields. No additional fields are allowed.\n");
                }

                prompt.push_str("Ensure your response is valid JSON and follows this exact structure. Do not wrap it in markdown code blocks.");
                prompt
            }
        }
    }
}

impl JsonSchema {
    /// Check a parsed value against the schema.
    pub fn validate(&self, parsed: &Value, strict: bool) -> Result<(), String> {
        let obj = parsed
            .as_object()
            .ok_or_else(|| format!("JSON output must be an object, got: {}", parsed))?;

        for field in &self.required_fields {
            let value = obj
                .get(&field.name)
                .ok_or_else(|| format!("Missing required field: '{}'", field.name))?;
            validate_field_type(value, &field.field_type, &field.name)?;
        }

        for field in &self.optional_fields {
            if let Some(value) = obj.get(&field.name) {
                validate_field_type(value, &field.field_type, &field.name)?;
            }
        }

        if strict {
            let expected_fields: std::collections::HashSet<&String> = self
                .required_fields
                .iter()
                .chain(self.optional_fields.iter())
                .map(|f| &f.name)
                .collect();

            if let Some(key) = obj.keys().find(|key| !expected_fields.contains(key)) {
                return Err(format!("Unexpected field in strict mode: '{}'", key));
            }
        }

        Ok(())
    }
}

fn validate_field_type(value: &Value, expected_type: &JsonFieldType, field_name: &str) -> Result<(), String> {
    let ok = match expected_type {
        JsonFieldType::String => value.is_string(),
        JsonFieldType::Number => value.is_number(),
        JsonFieldType::Boolean => value.is_boolean(),
        JsonFieldType::Object => value.is_object(),
        JsonFieldType::Array(element_type) => {
            let arr = value
                .as_array()
                .ok_or_else(|| format!("Field '{}' must be an array, got: {}", field_name, value))?;
            for (i, element) in arr.iter().enumerate() {
                validate_field_type(element, element_type, &format!("{}[{}]", field_name, i))?;
            }
            true
        }
    };

    if ok {
        Ok(())
    } else {
        Err(format!(
            "Field '{}' must be {}, got: {}",
            field_name,
            type_to_string(expected_type),
            value
        ))
    }
}

fn type_to_string(field_type: &JsonFieldType) -> String {
    match field_type {
        JsonFieldType::String => "string".to_string(),
        JsonFieldType::Number => "number".to_string(),
        JsonFieldType::Boolean => "boolean".to_string(),
        JsonFieldType::Array(element_type) => format!("array of {}", type_to_string(element_type)),
        JsonFieldType::Object => "object".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn article_schema() -> JsonSchema {
        JsonSchema {
            required_fields: vec![JsonField {
                name: "title".to_string(),
                field_type: JsonFieldType::String,
                description: None,
            }],
            optional_fields: vec![JsonField {
                name: "tags".to_string(),
                field_type: JsonFieldType::Array(Box::new(JsonFieldType::String)),
                description: Some("keywords".to_string()),
            }],
        }
    }

    #[test]
    fn test_interpolate_keeps_agent_and_format() {
        let task = Task::new("Outline {topic}", "A plan for {topic}", "Content Planner")
            .with_simple_json(vec![("title".to_string(), JsonFieldType::String)], true);
        let inputs = Inputs::from([("topic".to_string(), "AI".to_string())]);

        let resolved = task.interpolate(&inputs).unwrap();
        assert_eq!(resolved.description, "Outline AI");
        assert_eq!(resolved.expected_output, "A plan for AI");
        assert_eq!(resolved.agent, "Content Planner");
        assert!(resolved.expects_json());
    }

    #[test]
    fn test_schema_accepts_valid_object() {
        let schema = article_schema();
        assert!(schema.validate(&json!({"title": "x", "tags": ["a", "b"]}), true).is_ok());
        assert!(schema.validate(&json!({"title": "x"}), true).is_ok());
    }

    #[test]
    fn test_schema_rejections() {
        let schema = article_schema();
        let missing = schema.validate(&json!({"tags": []}), false).unwrap_err();
        assert!(missing.contains("Missing required field: 'title'"));

        let wrong_type = schema.validate(&json!({"title": 3}), false).unwrap_err();
        assert!(wrong_type.contains("'title' must be string"));

        let bad_element = schema.validate(&json!({"title": "x", "tags": [1]}), false).unwrap_err();
        assert!(bad_element.contains("tags[0]"));

        let extra = schema.validate(&json!({"title": "x", "extra": true}), true).unwrap_err();
        assert!(extra.contains("Unexpected field"));
        assert!(schema.validate(&json!({"title": "x", "extra": true}), false).is_ok());

        assert!(schema.validate(&json!(["not", "an", "object"]), false).is_err());
    }

    #[test]
    fn test_format_prompt_lists_fields() {
        let task = Task::new("d", "e", "a").with_json_output(
            article_schema().required_fields,
            article_schema().optional_fields,
            true,
        );
        let prompt = task.get_format_prompt();
        assert!(prompt.contains("\"title\": <string>,  // REQUIRED"));
        assert!(prompt.contains("\"tags\": <array of string>  // OPTIONAL - keywords"));
        assert!(prompt.contains("No additional fields are allowed"));
        assert_eq!(Task::new("d", "e", "a").get_format_prompt(), "Provide your response as plain text.");
    }
}
