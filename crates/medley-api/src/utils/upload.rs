//! Common utilities for file upload handlers

use axum::extract::Multipart;
use medley_core::AppError;

/// Raw multipart upload form: one file plus descriptive text fields.
#[derive(Debug, Default)]
pub struct MediaUploadForm {
    pub data: Vec<u8>,
    pub filename: String,
    pub content_type: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub quality: Option<String>,
    pub original_size: Option<String>,
}

/// Extract the upload form from a multipart request.
/// Only one field named "file" is accepted; multiple file fields are rejected.
/// Unknown fields are ignored.
pub async fn extract_upload_form(mut multipart: Multipart) -> Result<MediaUploadForm, AppError> {
    let mut file: Option<(Vec<u8>, String, String)> = None;
    let mut title: Option<String> = None;
    let mut description: Option<String> = None;
    let mut quality: Option<String> = None;
    let mut original_size: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field_name.as_str() {
            "file" => {
                if file.is_some() {
                    return Err(AppError::InvalidInput(
                        "Multiple file fields are not allowed; send exactly one field named 'file'"
                            .to_string(),
                    ));
                }
                let filename = field
                    .file_name()
                    .map(|s: &str| s.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                let content_type = field
                    .content_type()
                    .map(|s: &str| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let data = field.bytes().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read file data: {}", e))
                })?;
                file = Some((data.to_vec(), filename, content_type));
            }
            "title" => title = Some(read_text_field(field).await?),
            "description" => description = Some(read_text_field(field).await?),
            "quality" => quality = Some(read_text_field(field).await?),
            "originalSize" => original_size = Some(read_text_field(field).await?),
            _ => {}
        }
    }

    let (data, filename, content_type) =
        file.ok_or_else(|| AppError::InvalidInput("No file provided".to_string()))?;

    Ok(MediaUploadForm {
        data,
        filename,
        content_type,
        title,
        description,
        quality,
        original_size,
    })
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read form field: {}", e)))
}

/// Validate file size before anything leaves the process.
pub fn validate_file_size(file_size: usize, max_size: usize) -> Result<(), AppError> {
    if file_size == 0 {
        return Err(AppError::InvalidInput("File is empty".to_string()));
    }
    if file_size > max_size {
        return Err(AppError::PayloadTooLarge(format!(
            "{} bytes exceeds max {} bytes",
            file_size, max_size
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_file_size_ok() {
        assert!(validate_file_size(1024, 2048).is_ok());
        assert!(validate_file_size(2048, 2048).is_ok());
    }

    #[test]
    fn test_validate_file_size_empty() {
        let err = validate_file_size(0, 2048).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_validate_file_size_oversized() {
        let err = validate_file_size(4096, 2048).unwrap_err();
        match err {
            AppError::PayloadTooLarge(msg) => {
                assert!(msg.contains("4096"));
                assert!(msg.contains("2048"));
            }
            _ => panic!("Expected PayloadTooLarge variant"),
        }
    }
}
