use reqwest::{Client, Response, Url};
use tracing::{debug, error, info};

use super::{ErrorBody, NewTopic, Topic};
use crate::config::ApiConfig;
use crate::utils::error::{HelpCenterError, Result};

/// HTTP access to the `/api/topics` resource.
#[derive(Debug, Clone)]
pub struct TopicsClient {
    http: Client,
    topics_url: Url,
}

impl TopicsClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base = config.base_url.trim_end_matches('/');
        let topics_url = Url::parse(&format!("{}/api/topics", base)).map_err(|e| {
            HelpCenterError::Config(format!("Invalid API URL {}: {}", config.base_url, e))
        })?;

        Ok(Self {
            http: Client::new(),
            topics_url,
        })
    }

    pub fn topics_url(&self) -> &Url {
        &self.topics_url
    }

    pub async fn list_topics(&self) -> Result<Vec<Topic>> {
        debug!("GET {}", self.topics_url);
        let response = self.http.get(self.topics_url.clone()).send().await?;
        let topics: Vec<Topic> = Self::check(response).await?.json().await?;

        info!("Fetched {} topics", topics.len());
        Ok(topics)
    }

    /// `id` is the raw route parameter and is sent as-is.
    pub async fn get_topic(&self, id: &str) -> Result<Topic> {
        let url = self.topic_url(id)?;
        debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        let topic: Topic = Self::check(response).await?.json().await?;

        info!("Fetched topic {} with {} tips", topic.topic_id, topic.tips.len());
        Ok(topic)
    }

    pub async fn create_topic(&self, topic: &NewTopic) -> Result<()> {
        debug!("POST {}", self.topics_url);
        let response = self
            .http
            .post(self.topics_url.clone())
            .json(topic)
            .send()
            .await?;
        let response = Self::check(response).await?;

        info!("Created topic '{}' ({})", topic.title, response.status());
        Ok(())
    }

    fn topic_url(&self, id: &str) -> Result<Url> {
        let mut url = self.topics_url.clone();
        url.path_segments_mut()
            .map_err(|_| HelpCenterError::Config(format!("API URL cannot be a base: {}", self.topics_url)))?
            .push(id);
        Ok(url)
    }

    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // An unreadable body just means there is no detail to show.
        let detail = match response.text().await {
            Ok(body) => serde_json::from_str::<ErrorBody>(&body)
                .unwrap_or_default()
                .into_detail(),
            Err(_) => None,
        };

        error!("API request failed with {}: {:?}", status, detail);
        Err(HelpCenterError::Api { status, detail })
    }
}
