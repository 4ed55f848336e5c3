//! Upload validation for submission files.

use assignhub_core::config::StorageConfig;
use assignhub_core::error::AppError;

/// Size and extension constraints applied before any blob write.
#[derive(Debug, Clone)]
pub struct FileConstraints {
    /// Maximum file size in bytes.
    max_size_bytes: u64,
    /// Allowed extensions, lowercase with leading dot.
    allowed_extensions: Vec<String>,
}

impl FileConstraints {
    /// Builds the constraints from storage configuration.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self {
            max_size_bytes: config.max_upload_size_bytes,
            allowed_extensions: config
                .allowed_extensions
                .iter()
                .map(|e| e.to_lowercase())
                .collect(),
        }
    }

    /// Validates a file name and size against the constraints.
    pub fn validate(&self, file_name: &str, size_bytes: u64) -> Result<(), AppError> {
        let lowered = file_name.to_lowercase();
        let allowed = self
            .allowed_extensions
            .iter()
            .any(|ext| lowered.ends_with(ext.as_str()));
        if !allowed {
            return Err(AppError::validation(format!(
                "File type not allowed. Accepted extensions: {}",
                self.allowed_extensions.join(", ")
            )));
        }

        if size_bytes > self.max_size_bytes {
            return Err(AppError::validation(format!(
                "File is too large. Maximum size is {} bytes",
                self.max_size_bytes
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraints() -> FileConstraints {
        FileConstraints::from_config(&StorageConfig::default())
    }

    #[test]
    fn test_accepts_allowed_extensions() {
        let c = constraints();
        for name in ["report.pdf", "notes.DOCX", "photo.JPeG", "readme.txt"] {
            assert!(c.validate(name, 1024).is_ok(), "expected ok for {name}");
        }
    }

    #[test]
    fn test_rejects_disallowed_extension() {
        assert!(constraints().validate("malware.exe", 1024).is_err());
        assert!(constraints().validate("archive.zip", 1024).is_err());
    }

    #[test]
    fn test_rejects_oversized_file() {
        // Default cap is 10 MB.
        assert!(constraints().validate("report.pdf", 10 * 1024 * 1024 + 1).is_err());
        assert!(constraints().validate("report.pdf", 10 * 1024 * 1024).is_ok());
    }
}
