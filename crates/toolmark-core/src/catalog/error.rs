//! Validation errors for catalog edits.

use super::types::ToolId;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("tool name cannot be empty")]
    EmptyName,

    #[error("\"{name}\" already exists")]
    Duplicate { name: String },

    #[error("no tool with id {id}")]
    NotFound { id: ToolId },
}
