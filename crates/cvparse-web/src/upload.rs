use axum::extract::Multipart;

/// The type of uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Docx,
}

impl FileType {
    /// Extension used for the temp file, which drives ingest dispatch.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }
}

/// An uploaded file with its data and metadata.
pub struct UploadedFile {
    pub filename: String,
    pub data: Vec<u8>,
    pub file_type: FileType,
}

/// Parse the multipart form upload into the resume file.
pub async fn parse_multipart(mut multipart: Multipart) -> Result<UploadedFile, String> {
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Failed to read form field: {}", e))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| format!("Failed to read file data: {}", e))?
                    .to_vec();

                let file_type = detect_file_type(&filename, &data)?;

                file = Some(UploadedFile {
                    filename,
                    data,
                    file_type,
                });
            }
            _ => {
                // Ignore unknown fields
                let _ = field.bytes().await;
            }
        }
    }

    file.ok_or_else(|| "No file uploaded".to_string())
}

/// Detect file type from extension and magic bytes.
fn detect_file_type(filename: &str, data: &[u8]) -> Result<FileType, String> {
    let lower = filename.to_lowercase();

    if lower.ends_with(".pdf") {
        if !data.starts_with(b"%PDF-") {
            return Err("File has .pdf extension but doesn't appear to be a valid PDF".to_string());
        }
        return Ok(FileType::Pdf);
    }
    if lower.ends_with(".docx") {
        // DOCX is a ZIP container
        if !data.starts_with(b"PK") {
            return Err(
                "File has .docx extension but doesn't appear to be a valid DOCX".to_string(),
            );
        }
        return Ok(FileType::Docx);
    }

    // Try detecting by magic bytes
    if data.starts_with(b"%PDF-") {
        return Ok(FileType::Pdf);
    }
    if data.starts_with(b"PK") {
        return Ok(FileType::Docx);
    }

    Err("Unsupported file type. Only .pdf and .docx are allowed.".to_string())
}
