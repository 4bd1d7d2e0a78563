use std::path::PathBuf;

use actix_web::{HttpResponse, web};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Where uploaded check-in photos land. The directory is served statically
/// under /photos.
#[derive(Debug, Clone)]
pub struct PhotoStore {
    pub dir: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    /// A data URL: `data:image/jpeg;base64,...`
    pub photo: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

fn split_data_url(photo: &str) -> Result<(&str, &str), AppError> {
    let rest = photo
        .strip_prefix("data:")
        .ok_or_else(|| AppError::Validation("Expected a data URL".to_string()))?;
    let (meta, data) = rest
        .split_once(";base64,")
        .ok_or_else(|| AppError::Validation("Expected base64 data URL".to_string()))?;
    let extension = match meta {
        "image/jpeg" | "image/jpg" => "jpg",
        "image/png" => "png",
        "image/webp" => "webp",
        other => {
            return Err(AppError::Validation(format!(
                "Unsupported image type '{other}'"
            )));
        }
    };
    Ok((extension, data))
}

/// POST /api/upload-photo - Decode a base64 data URL to a file, return its
/// public path.
pub async fn upload(
    store: web::Data<PhotoStore>,
    body: web::Json<UploadRequest>,
) -> Result<HttpResponse, AppError> {
    let (extension, data) = split_data_url(&body.photo)?;
    let bytes = STANDARD
        .decode(data)
        .map_err(|e| AppError::Validation(format!("Bad base64 image data: {e}")))?;

    std::fs::create_dir_all(&store.dir)?;
    let token: [u8; 8] = rand::random();
    let filename = format!(
        "{}-{}.{}",
        chrono::Utc::now().timestamp(),
        hex::encode(token),
        extension
    );
    std::fs::write(store.dir.join(&filename), &bytes)?;
    log::info!("Stored photo {filename} ({} bytes)", bytes.len());

    Ok(HttpResponse::Created().json(UploadResponse {
        url: format!("/photos/{filename}"),
    }))
}

#[cfg(test)]
mod tests {
    use super::split_data_url;

    #[test]
    fn accepts_jpeg_data_url() {
        let (ext, data) = split_data_url("data:image/jpeg;base64,AAAA").unwrap();
        assert_eq!(ext, "jpg");
        assert_eq!(data, "AAAA");
    }

    #[test]
    fn rejects_plain_base64() {
        assert!(split_data_url("AAAA").is_err());
    }

    #[test]
    fn rejects_unknown_mime() {
        assert!(split_data_url("data:application/pdf;base64,AAAA").is_err());
    }
}
