use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DownloadError {
    #[error("CV not found. Please upload {file} to the public folder.")]
    NotFound { file: &'static str, status: u16 },
    #[error("Unable to download CV right now.")]
    Unavailable(String),
}

/// Maps the response status of a file fetch to the message shown next to
/// the download button.
pub fn check_status(file: &'static str, ok: bool, status: u16) -> Result<(), DownloadError> {
    if ok {
        Ok(())
    } else {
        Err(DownloadError::NotFound { file, status })
    }
}
