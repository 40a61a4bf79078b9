use crate::pokemon;
use crate::{Database, Error, Storage};

use std::collections::BTreeSet;

/// The set of collected Pokémon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<pokemon::Id>,
}

impl Selection {
    pub const KEY: &'static str = "selectedPokemons";

    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the persisted selection.
    ///
    /// Falls back to an empty selection if nothing is stored or the stored
    /// value is not a JSON array. Items that are not valid Pokédex numbers
    /// are skipped.
    pub fn load(storage: &impl Storage) -> Self {
        let stored = match storage.get(Self::KEY) {
            Ok(Some(stored)) => stored,
            Ok(None) => return Self::new(),
            Err(error) => {
                log::warn!("Could not read selection: {error}");
                return Self::new();
            }
        };

        let items = match serde_json::from_str::<Vec<serde_json::Value>>(&stored) {
            Ok(items) => items,
            Err(error) => {
                log::warn!("Discarding malformed selection: {error}");
                return Self::new();
            }
        };

        let ids: Vec<_> = items
            .iter()
            .filter_map(|item| u32::try_from(item.as_u64()?).ok())
            .map(pokemon::Id)
            .collect();

        let skipped = items.len() - ids.len();

        if skipped > 0 {
            log::warn!("Skipped {skipped} invalid Pokédex numbers in stored selection");
        }

        Self::from_iter(ids)
    }

    /// Overwrites the persisted selection with the whole set.
    pub fn save(&self, storage: &mut impl Storage) -> Result<(), Error> {
        let ids: Vec<_> = self.ids.iter().collect();

        storage.set(Self::KEY, &serde_json::to_string(&ids)?)
    }

    /// Selects `id` if absent, deselects it otherwise.
    ///
    /// Returns whether `id` is selected afterwards.
    pub fn toggle(&mut self, id: pokemon::Id) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            let _ = self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: pokemon::Id) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = pokemon::Id> + '_ {
        self.ids.iter().copied()
    }

    /// Selected ids that are not part of the [`Database`].
    pub fn stale<'a>(&'a self, database: &'a Database) -> impl Iterator<Item = pokemon::Id> + 'a {
        self.iter().filter(|id| !database.contains(*id))
    }
}

impl FromIterator<pokemon::Id> for Selection {
    fn from_iter<I: IntoIterator<Item = pokemon::Id>>(iter: I) -> Self {
        Self {
            ids: BTreeSet::from_iter(iter),
        }
    }
}

/// A [`Selection`] that is persisted after every change.
#[derive(Debug)]
pub struct Store<S> {
    storage: S,
    selection: Selection,
}

impl<S: Storage> Store<S> {
    pub fn open(storage: S) -> Self {
        let selection = Selection::load(&storage);

        Self { storage, selection }
    }

    /// Toggles `id` and writes the new selection to storage.
    ///
    /// The change is kept in memory even if writing fails.
    pub fn toggle(&mut self, id: pokemon::Id) -> Result<bool, Error> {
        let is_selected = self.selection.toggle(id);

        self.selection.save(&mut self.storage)?;

        Ok(is_selected)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
