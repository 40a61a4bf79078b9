use crate::pokebase::pokemon;
use crate::pokebase::sprite::Downloader;

use bytes::Bytes;
use std::fmt;
use std::io;
use std::path::PathBuf;
use tokio::fs;
use tokio::task;

/// Fetches sprites, keeping every successfully decoded download on disk.
#[derive(Debug, Clone)]
pub struct Sprites {
    directory: PathBuf,
    downloader: Downloader,
}

impl Sprites {
    pub fn new(directory: PathBuf) -> Result<Self, anywho::Error> {
        Ok(Self {
            directory,
            downloader: Downloader::new()?,
        })
    }

    pub async fn fetch(self, id: pokemon::Id) -> Result<Image, anywho::Error> {
        let path = self.path(id);

        if let Ok(bytes) = fs::read(&path).await {
            match Image::decode(Bytes::from(bytes)).await {
                Ok(image) => return Ok(image),
                Err(error) => log::warn!("Discarding cached sprite of #{id}: {error}"),
            }
        }

        let bytes = self.downloader.download(id).await?;
        let image = Image::decode(bytes.clone()).await?;

        if let Err(error) = self.store(id, &bytes).await {
            log::warn!("Could not cache sprite of #{id}: {error}");
        }

        Ok(image)
    }

    async fn store(&self, id: pokemon::Id, bytes: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.directory).await?;
        fs::write(self.path(id), bytes).await
    }

    fn path(&self, id: pokemon::Id) -> PathBuf {
        self.directory.join(format!("{id}.png"))
    }
}

/// A decoded sprite, ready to be shown.
#[derive(Clone)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub rgba: Bytes,
}

impl Image {
    async fn decode(bytes: Bytes) -> Result<Self, anywho::Error> {
        Ok(task::spawn_blocking(move || Self::decode_blocking(&bytes)).await??)
    }

    fn decode_blocking(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let image = image::ImageReader::new(io::Cursor::new(bytes))
            .with_guessed_format()?
            .decode()?
            .to_rgba8();

        Ok(Self {
            width: image.width(),
            height: image.height(),
            rgba: Bytes::from(image.into_raw()),
        })
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Image({}x{})", self.width, self.height)
    }
}
