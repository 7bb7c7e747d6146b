use modulus_core::query::ModExpQuery;
use reqwest::{Client, StatusCode};
use std::error::Error;

/// Client for the modulus HTTP API.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Send a query to the server and return the evaluated response.
    ///
    /// The response parses into the same query type whether the server
    /// answered briefly or with the full echo.
    pub async fn query(&self, query: &ModExpQuery) -> Result<ModExpQuery, Box<dyn Error>> {
        let url = format!("{}/api/modexp", self.base_url);
        let response = self.client.post(&url).json(query).send().await?;

        match response.status() {
            StatusCode::OK => Ok(response.json::<ModExpQuery>().await?),
            status => Err(format!("API error: {}", status).into()),
        }
    }
}
