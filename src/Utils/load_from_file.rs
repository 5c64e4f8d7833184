use log::{error, info, warn};
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File '{0}' does not exist")]
    FileNotFound(String),
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No 'content' string found in JSON file '{0}'")]
    MissingContent(String),
}

pub struct LoadData {
    pub file_name: String,
}

impl LoadData {
    pub fn new(file_name: String) -> Self {
        LoadData { file_name }
    }
    pub fn load_response(&self) -> Result<String, LoadError> {
        load_response_from_file(&self.file_name)
    }
}

/// Reads a raw backend response.
/// Plain text files are returned as they are; `.json` files are treated as a
/// chat completion body and the message text is taken from `content`,
/// `message.content` or `choices[0].message.content`, whichever comes first.
pub fn load_response_from_file(file_name: &str) -> Result<String, LoadError> {
    let path = Path::new(file_name);
    if !path.exists() {
        error!("File '{}' does not exist", file_name);
        return Err(LoadError::FileNotFound(file_name.to_string()));
    }
    let text = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if !is_json {
        info!("Loaded {} bytes of response text from '{}'", text.len(), file_name);
        return Ok(text);
    }

    let body: Value = match serde_json::from_str(&text) {
        Ok(body) => body,
        Err(e) => {
            error!(
                "Error parsing '{}' at line {}, column {}: {}",
                file_name,
                e.line(),
                e.column(),
                e
            );
            return Err(e.into());
        }
    };
    match content_from_json(&body) {
        Some(content) => {
            info!("Loaded response content from JSON file '{}'", file_name);
            Ok(content)
        }
        None => {
            warn!("JSON file '{}' has no message content", file_name);
            Err(LoadError::MissingContent(file_name.to_string()))
        }
    }
}

fn content_from_json(body: &Value) -> Option<String> {
    if let Some(s) = body.as_str() {
        return Some(s.to_string());
    }
    let candidates = [
        body.get("content"),
        body.get("message").and_then(|m| m.get("content")),
        body.get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content")),
    ];
    candidates
        .into_iter()
        .flatten()
        .find_map(|v| v.as_str().map(str::to_string))
}
