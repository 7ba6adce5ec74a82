use bytes::Bytes;

/// Raw upload as it leaves the multipart parser: original file name plus the
/// undecoded bytes.
#[derive(Debug, Clone)]
pub struct FileDto {
    pub name: String,
    pub content: Bytes,
}

impl FileDto {
    pub fn new(name: impl Into<String>, content: Bytes) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }
}
