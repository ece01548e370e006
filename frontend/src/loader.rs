use common::{Dataset, DatasetVersion};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("request for {path} failed: {source}")]
    Request {
        path: String,
        #[source]
        source: reqwasm::Error,
    },
    #[error("request for {path} answered with status {status}")]
    Status { path: String, status: u16 },
    #[error(transparent)]
    Document(#[from] common::Error),
}

/// Fetches and parses the statistics document of `world`, relative to the page.
pub async fn fetch_dataset(world: &str, version: DatasetVersion) -> Result<Dataset, LoadError> {
    let path = version.file_name(world);

    let res = reqwasm::http::Request::get(&path)
        .send()
        .await
        .map_err(|source| LoadError::Request {
            path: path.clone(),
            source,
        })?;
    if !res.ok() {
        return Err(LoadError::Status {
            path,
            status: res.status(),
        });
    }

    let body = res.text().await.map_err(|source| LoadError::Request {
        path: path.clone(),
        source,
    })?;

    Ok(Dataset::from_json_str(&body)?)
}
