use anyhow::{anyhow, Result};
use async_trait::async_trait;
use billed_domain::{BillStorage, FileStorage, ProofFile};
use gloo::net::http::{Request, Response};
use serde::Deserialize;
use shared::Bill;

#[derive(Debug, Deserialize)]
struct CreatedDocument {
    id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredFile {
    download_url: String,
}

/// HTTP client for the document store: the bills collection and file storage
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client against `base_url` (no trailing slash)
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    fn storage_url(&self, path: &str) -> String {
        let encoded = path
            .split('/')
            .map(|segment| String::from(js_sys::encode_uri_component(segment)))
            .collect::<Vec<_>>()
            .join("/");
        format!("{}/storage/{}", self.base_url, encoded)
    }

    /// Turn a non-2xx response into an error carrying "Erreur <status>"
    async fn status_error(response: Response) -> anyhow::Error {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        if error_text.is_empty() {
            anyhow!("Erreur {}", status)
        } else {
            anyhow!("Erreur {}: {}", status, error_text)
        }
    }
}

#[async_trait(?Send)]
impl BillStorage for ApiClient {
    async fn list_bills(&self) -> Result<Vec<Bill>> {
        let url = format!("{}/bills", self.base_url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to fetch bills: {}", e))?;
        if !response.ok() {
            return Err(Self::status_error(response).await);
        }

        response
            .json::<Vec<Bill>>()
            .await
            .map_err(|e| anyhow!("Failed to parse bills: {}", e))
    }

    async fn add_bill(&self, bill: &Bill) -> Result<String> {
        let url = format!("{}/bills", self.base_url);

        let response = Request::post(&url)
            .json(bill)
            .map_err(|e| anyhow!("Failed to serialize bill: {}", e))?
            .send()
            .await
            .map_err(|e| anyhow!("Network error: {}", e))?;
        if !response.ok() {
            return Err(Self::status_error(response).await);
        }

        let created = response
            .json::<CreatedDocument>()
            .await
            .map_err(|e| anyhow!("Failed to parse response: {}", e))?;
        Ok(created.id)
    }
}

#[async_trait(?Send)]
impl FileStorage for ApiClient {
    async fn put(&self, path: &str, file: &ProofFile) -> Result<String> {
        let url = self.storage_url(path);
        let body = js_sys::Uint8Array::from(file.bytes.as_slice());

        let response = Request::put(&url)
            .header("Content-Type", &file.content_type)
            .body(body)
            .map_err(|e| anyhow!("Failed to build upload request: {}", e))?
            .send()
            .await
            .map_err(|e| anyhow!("Network error: {}", e))?;
        if !response.ok() {
            return Err(Self::status_error(response).await);
        }

        let stored = response
            .json::<StoredFile>()
            .await
            .map_err(|e| anyhow!("Failed to parse upload response: {}", e))?;
        Ok(stored.download_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_storage_url_encodes_each_segment() {
        let client = ApiClient::with_base_url("http://localhost:5678".to_string());
        assert_eq!(
            client.storage_url("justificatifs/note de frais #1.png"),
            "http://localhost:5678/storage/justificatifs/note%20de%20frais%20%231.png"
        );
    }
}
