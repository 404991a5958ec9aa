use crate::app_config::AppConfig;
use reqwest::Client;
use thiserror::Error;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub fn new_client(config: &AppConfig) -> Result<Client, FirebaseClientError> {
    let client = Client::builder().user_agent(USER_AGENT).timeout(config.database().timeout()).build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum FirebaseClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
}
