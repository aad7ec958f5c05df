//! Tool domain value objects: errors produced by tool execution
//!
//! Every failure a tool can report is a [`ToolError`] variant. The only
//! degraded path that is *not* an error is mock mode (missing credential),
//! which tools report as a successful result flagged with `mock_data: true`.

use thiserror::Error;

/// Error that occurred during tool execution.
///
/// | Code | Description |
/// |------|-------------|
/// | `MISSING_INPUT` | Required inputs could not be resolved from any source |
/// | `INVALID_INPUT` | An input was present but unusable |
/// | `EXTERNAL_SERVICE` | A third-party API answered with a non-success status |
/// | `EXECUTION_FAILED` | Any other runtime failure (transport, decoding) |
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolError {
    #[error("Missing required input for '{tool}': {}", .fields.join(", "))]
    MissingInput { tool: String, fields: Vec<String> },

    #[error("Invalid input for '{tool}': {message}")]
    InvalidInput { tool: String, message: String },

    #[error("{service} returned {status}: {body}")]
    ExternalService {
        service: String,
        status: u16,
        body: String,
    },

    #[error("Tool '{tool}' failed: {message}")]
    Execution { tool: String, message: String },
}

impl ToolError {
    pub fn missing_input<I, S>(tool: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingInput {
            tool: tool.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn invalid_input(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            tool: tool.into(),
            message: message.into(),
        }
    }

    pub fn external_service(
        service: impl Into<String>,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        Self::ExternalService {
            service: service.into(),
            status,
            body: body.into(),
        }
    }

    pub fn execution_failed(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Execution {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ToolError::MissingInput { .. } => "MISSING_INPUT",
            ToolError::InvalidInput { .. } => "INVALID_INPUT",
            ToolError::ExternalService { .. } => "EXTERNAL_SERVICE",
            ToolError::Execution { .. } => "EXECUTION_FAILED",
        }
    }

    /// Fields reported missing, empty for other variants
    pub fn missing_fields(&self) -> &[String] {
        match self {
            ToolError::MissingInput { fields, .. } => fields,
            _ => &[],
        }
    }
}
