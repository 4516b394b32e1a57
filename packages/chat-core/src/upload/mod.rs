//! Upload handling.
//!
//! Validation, image dimension probing, and the session's local attachment references.

mod attachments;
mod metadata;
mod validator;

pub use attachments::{Attachment, AttachmentStore, BLOB_SCHEME};
pub use metadata::{fit_within, DisplayBounds, ImageDimensions, ImageMetadataResolver, ImageSource};
pub use validator::{
    classify, validate_file, FileCandidate, FileKind, UploadPolicy, ValidationResult,
    BYTES_PER_MB, DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_MAX_FILE_SIZE_MB,
};
