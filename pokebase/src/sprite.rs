//! Official artwork downloads.
use crate::Error;
use crate::pokedex;
use crate::pokemon;

use bytes::Bytes;
use reqwest::header;
use std::time::Duration;

/// Downloads sprites, retrying failures that may go away on their own.
#[derive(Debug, Clone)]
pub struct Downloader {
    client: reqwest::Client,
    attempts: usize,
}

impl Downloader {
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()?;

        Ok(Self {
            client,
            attempts: 3,
        })
    }

    pub async fn download(&self, id: pokemon::Id) -> Result<Bytes, Error> {
        let url = pokedex::sprite_url(id);
        let mut attempt = 1;

        loop {
            match self.request(&url).await {
                Ok(bytes) => {
                    log::info!("Downloaded sprite of #{id} ({} bytes)", bytes.len());

                    return Ok(bytes);
                }
                Err(error) if error.is_transient() && attempt < self.attempts => {
                    log::warn!(
                        "Sprite of #{id} failed on attempt {attempt}/{}: {error}",
                        self.attempts
                    );

                    attempt += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }

    async fn request(&self, url: &str) -> Result<Bytes, Error> {
        let response = self.client.get(url).send().await?.error_for_status()?;

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();

        if !is_image(&content_type) {
            return Err(Error::NotAnImage(content_type));
        }

        Ok(response.bytes().await?)
    }
}

fn is_image(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|mime| mime.trim().to_ascii_lowercase().starts_with("image/"))
}
