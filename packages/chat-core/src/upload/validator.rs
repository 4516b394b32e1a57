//! Size and extension checks for uploads.

use serde::{Deserialize, Serialize};

/// Default upload limit in megabytes.
pub const DEFAULT_MAX_FILE_SIZE_MB: u64 = 5;

/// Bytes in one megabyte of the upload limit.
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Default extension allowlist: images, documents, data files.
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".gif", // Images
    ".pdf", ".doc", ".docx", ".txt", // Documents
    ".csv", ".json", ".xml", // Data files
];

/// A file offered by the upload surface, before it is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub name: String,
    /// Size in bytes
    pub size: u64,
    pub mime_type: String,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }

    /// Lower-cased extension with a leading dot, taken after the last `.`.
    ///
    /// A name without any dot yields the whole name, which never matches the allowlist.
    pub fn extension(&self) -> String {
        let tail = self.name.rsplit('.').next().unwrap_or_default();
        format!(".{}", tail.to_lowercase())
    }
}

/// Outcome of validating a [`FileCandidate`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_message: Some(message.into()),
        }
    }
}

/// Limits applied to every upload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UploadPolicy {
    /// Largest accepted file, in megabytes (1 MB = 1024 * 1024 bytes)
    pub max_file_size_mb: u64,
    /// Accepted extensions, each with a leading dot
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size_mb: DEFAULT_MAX_FILE_SIZE_MB,
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }
}

impl UploadPolicy {
    /// Limit in bytes; saturates instead of overflowing for huge settings.
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb.saturating_mul(BYTES_PER_MB)
    }

    /// Check size first, then extension.
    pub fn validate(&self, file: &FileCandidate) -> ValidationResult {
        if file.size > self.max_file_size_bytes() {
            return ValidationResult::invalid(format!(
                "File too large. Maximum size is {}MB.",
                self.max_file_size_mb
            ));
        }

        let extension = file.extension();
        let allowed = self
            .allowed_extensions
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(&extension));
        if !allowed {
            return ValidationResult::invalid(format!(
                "File type not allowed. Allowed types: {}",
                self.allowed_extensions.join(", ")
            ));
        }

        ValidationResult::valid()
    }
}

/// Validate against the default policy.
pub fn validate_file(file: &FileCandidate) -> ValidationResult {
    UploadPolicy::default().validate(file)
}

/// How an accepted upload is presented and sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    File,
}

/// Classify by MIME prefix.
pub fn classify(mime_type: &str) -> FileKind {
    if mime_type.starts_with("image/") {
        FileKind::Image
    } else {
        FileKind::File
    }
}
