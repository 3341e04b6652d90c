//! Posting-API client.
//!
//! Submits the status text as `POST <post-url>` with a JSON body `{"text": ...}` signed
//! with the account's OAuth 1.0a credentials. There is no retry: a single attempt either
//! returns the id of the new post or an error.
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::BotError;
use crate::net::{MAX_BODY_BYTES, error_excerpt, read_capped};
use crate::oauth::OAuthSigner;
use crate::pipeline::StatusPoster;
use crate::result::Result;

/// Request body of the post creation endpoint.
#[derive(Debug, Serialize)]
struct CreatePost<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreatePostResponse {
    data: PostReceipt,
}

/// Confirmation returned for a created post.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostReceipt {
    /// Identifier of the new post.
    pub id: String,
    /// Text as stored by the platform.
    #[serde(default)]
    pub text: String,
}

/// Blocking, authenticated posting client.
#[derive(Debug, Clone)]
pub struct PostPublisher {
    client: Client,
    endpoint: String,
    signer: OAuthSigner,
}

impl PostPublisher {
    /// Build a publisher for `endpoint` signing with `signer`.
    ///
    /// The client keeps `reqwest`'s default timeouts.
    pub fn new(endpoint: &str, signer: OAuthSigner) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            signer,
        })
    }

    /// Build a publisher from the run configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.post_url, OAuthSigner::new(config.credentials.clone()))
    }

    /// Create a post containing `text`.
    pub fn publish(&self, text: &str) -> Result<PostReceipt> {
        let authorization = self
            .signer
            .authorization_header("POST", &self.endpoint, &[])?;
        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, authorization)
            .json(&CreatePost { text })
            .send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(BotError::HttpStatus {
                status: status.as_u16(),
                body: error_excerpt(response),
            });
        }

        let body = read_capped(response, MAX_BODY_BYTES)?;
        let created: CreatePostResponse = serde_json::from_slice(&body)?;
        Ok(created.data)
    }
}

impl StatusPoster for PostPublisher {
    fn post_status(&self, text: &str) -> Result<PostReceipt> {
        self.publish(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_is_text_only() {
        let body = serde_json::to_string(&CreatePost { text: "hi\nthere" }).unwrap();
        assert_eq!(body, r#"{"text":"hi\nthere"}"#);
    }

    #[test]
    fn decodes_created_post() {
        let body = br#"{"data": {"id": "1445880548472328192", "text": "hello", "edit_history_tweet_ids": ["1445880548472328192"]}}"#;
        let created: CreatePostResponse = serde_json::from_slice(body).unwrap();

        assert_eq!(created.data.id, "1445880548472328192");
        assert_eq!(created.data.text, "hello");
    }
}
