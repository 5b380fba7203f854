pub mod task;
pub mod template;

pub use task::{JsonField, JsonFieldType, JsonSchema, OutputFormat, Task};
pub use template::{interpolate, Inputs, TemplateError};
