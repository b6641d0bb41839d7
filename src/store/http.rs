use super::error::{StoreError, StoreResult};
use super::TaskStore;
use crate::domain::{NewTask, Task, TaskId};
use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;
use url::Url;

/// Collection path relative to the base url
const TODOS_PATH: &str = "todos/";

/// Task store reached over HTTP/JSON
#[derive(Debug, Clone)]
pub struct HttpTaskStore {
    http: Client,
    base_url: Url,
}

impl HttpTaskStore {
    pub fn new(base_url: Url) -> StoreResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("fasttodo/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: normalize_base_url(base_url),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/todos/`
    pub fn collection_url(&self) -> StoreResult<Url> {
        Ok(self.base_url.join(TODOS_PATH)?)
    }

    /// `{base}/todos/{id}` with the id percent-encoded as one segment
    pub fn item_url(&self, id: &TaskId) -> StoreResult<Url> {
        let mut url = self.collection_url()?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| StoreError::InvalidBaseUrl(self.base_url.to_string()))?;
            segments.pop_if_empty().push(&id.to_string());
        }
        Ok(url)
    }

    /// Turn a non-2xx response into `StoreError::Status`
    async fn expect_success(response: Response) -> StoreResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Status { status, body })
    }
}

#[async_trait]
impl TaskStore for HttpTaskStore {
    async fn list(&self) -> StoreResult<Vec<Task>> {
        let url = self.collection_url()?;
        debug!(%url, "GET");
        let response = self.http.get(url).send().await?;
        let text = Self::expect_success(response).await?.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn create(&self, task: &NewTask) -> StoreResult<()> {
        let url = self.collection_url()?;
        debug!(%url, title = %task.title, "POST");
        let response = self.http.post(url).json(task).send().await?;
        Self::expect_success(response).await?;
        Ok(())
    }

    async fn update(&self, task: &Task) -> StoreResult<()> {
        let url = self.item_url(&task.id)?;
        debug!(%url, completed = task.completed, "PUT");
        let response = self.http.put(url).json(task).send().await?;
        Self::expect_success(response).await?;
        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> StoreResult<()> {
        let url = self.item_url(id)?;
        debug!(%url, "DELETE");
        let response = self.http.delete(url).send().await?;
        Self::expect_success(response).await?;
        Ok(())
    }
}

/// Make sure the base url path ends with `/` so joins keep its prefix
pub fn normalize_base_url(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
