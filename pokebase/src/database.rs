use crate::pokemon;
use crate::{Error, Pokemon};

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// The static list of Pokémon, in national Pokédex order.
#[derive(Clone)]
pub struct Database {
    pokemon: Arc<[Pokemon]>,
    index: Arc<BTreeMap<pokemon::Id, usize>>,
}

impl Database {
    /// Loads the bundled dataset.
    pub async fn load() -> Result<Self, Error> {
        use tokio::task;

        task::spawn_blocking(|| -> Result<Self, Error> {
            let pokemon: Vec<Pokemon> = decompress(include_bytes!(concat!(
                env!("OUT_DIR"),
                "/pokemon.json.gz"
            )))?;

            log::info!("Loaded database with {} Pokémon", pokemon.len());

            Ok(Self::new(pokemon))
        })
        .await?
    }

    /// Loads a dataset from an uncompressed JSON file.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;

        let database = Self::from_json(&bytes)?;

        log::info!(
            "Loaded database with {} Pokémon from {}",
            database.len(),
            path.display()
        );

        Ok(database)
    }

    pub fn from_json(json: &[u8]) -> Result<Self, Error> {
        let pokemon: Vec<Pokemon> = serde_json::from_slice(json)?;

        Ok(Self::new(pokemon))
    }

    pub fn new(pokemon: Vec<Pokemon>) -> Self {
        let index = pokemon
            .iter()
            .enumerate()
            .map(|(i, pokemon)| (pokemon.id, i))
            .collect();

        Self {
            pokemon: pokemon.into(),
            index: Arc::new(index),
        }
    }

    /// Every Pokémon, in the order of the dataset.
    pub fn pokemon(&self) -> &[Pokemon] {
        &self.pokemon
    }

    pub fn get(&self, id: pokemon::Id) -> Option<&Pokemon> {
        self.index.get(&id).map(|&i| &self.pokemon[i])
    }

    pub fn contains(&self, id: pokemon::Id) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.pokemon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pokemon.is_empty()
    }
}

fn decompress(bytes: &[u8]) -> Result<Vec<Pokemon>, Error> {
    use flate2::read::GzDecoder;

    let decoder = GzDecoder::new(bytes);

    Ok(serde_json::from_reader(decoder)?)
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database")
            .field("pokemon", &self.len())
            .finish()
    }
}
