use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A document the backend has accepted and indexed.
/// Records exist only after the ingestion endpoint acknowledged the upload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub size: u64,
    pub upload_date: DateTime<Utc>,
}

impl UploadedFile {
    pub fn new(name: String, size: u64) -> Self {
        Self {
            name,
            size,
            upload_date: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stamps_current_time() {
        let before = Utc::now();
        let file = UploadedFile::new("crash.log".to_string(), 2048);
        let after = Utc::now();
        assert_eq!(file.name, "crash.log");
        assert_eq!(file.size, 2048);
        assert!(file.upload_date >= before && file.upload_date <= after);
    }
}
