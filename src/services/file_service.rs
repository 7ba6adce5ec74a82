use std::sync::Arc;

use uuid::Uuid;

use crate::dto::file_dto::FileDto;
use crate::error::{Error, Result};
use crate::models::file::StoredFile;
use crate::repository::file_store::FileStore;

#[derive(Clone)]
pub struct FileService {
    files: Arc<FileStore>,
}

impl FileService {
    pub fn new(files: Arc<FileStore>) -> Self {
        Self { files }
    }

    pub async fn save(&self, file: FileDto) -> Result<StoredFile> {
        if file.name.trim().is_empty() {
            return Err(Error::BadRequest("Uploaded file must have a name".into()));
        }
        Ok(self.files.save(file))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Option<StoredFile> {
        self.files.find_by_id(id)
    }

    pub async fn delete_by_id(&self, id: Uuid) -> bool {
        self.files.delete_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn nameless_upload_is_rejected() {
        let service = FileService::new(Arc::new(FileStore::new()));
        let result = tokio_test::block_on(service.save(FileDto::new("  ", Bytes::new())));
        assert!(matches!(result, Err(Error::BadRequest(_))));
    }
}
