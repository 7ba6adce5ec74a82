use bytes::Bytes;
use uuid::Uuid;

/// An uploaded attachment held by the file store. Entities reference it by
/// `id`; the store owns the bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredFile {
    pub id: Uuid,
    pub name: String,
    pub content: Bytes,
}
