use crate::utils::error::{ImportError, Result};
use url::Url;

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.trim().is_empty() {
        return Err(ImportError::config(field_name, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ImportError::config(
                field_name,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(ImportError::config(
            field_name,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ImportError::config(field_name, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(ImportError::config(field_name, "Path contains null bytes"));
    }

    Ok(())
}
