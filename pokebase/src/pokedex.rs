//! The checklist as it should be displayed.
use crate::pokemon::{self, Location};
use crate::{Database, Pokemon, Selection};

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Regional,
    National,
}

impl Mode {
    pub fn from_national(show_national_dex: bool) -> Self {
        if show_national_dex {
            Self::National
        } else {
            Self::Regional
        }
    }

    pub fn is_national(self) -> bool {
        self == Self::National
    }
}

#[derive(Debug, Clone)]
pub struct View<'a> {
    pub entries: Vec<Entry<'a>>,
    pub progress: Progress,
}

#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    pub pokemon: &'a Pokemon,
    /// The number shown for the current [`Mode`].
    pub number: u32,
    pub is_selected: bool,
}

impl<'a> Entry<'a> {
    pub fn id(&self) -> pokemon::Id {
        self.pokemon.id
    }

    /// Collected entries hide their locations.
    pub fn locations(&self) -> Option<&'a [Location]> {
        if self.is_selected {
            None
        } else {
            Some(&self.pokemon.locations)
        }
    }
}

pub fn sprite_url(id: pokemon::Id) -> String {
    format!(
        "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/{id}.png"
    )
}

/// Selected entries out of the visible ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

impl Progress {
    /// An empty list counts as 0% complete.
    pub fn percentage(self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }

        100.0 * self.current as f32 / self.total as f32
    }

    /// The percentage as a whole number, with halves rounded up.
    pub fn rounded_percentage(self) -> u32 {
        self.percentage().round() as u32
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.current, self.total)
    }
}

pub fn view<'a>(database: &'a Database, mode: Mode, selection: &Selection) -> View<'a> {
    let entry = |pokemon: &'a Pokemon, number| Entry {
        pokemon,
        number,
        is_selected: selection.contains(pokemon.id),
    };

    let entries: Vec<_> = match mode {
        Mode::National => database
            .pokemon()
            .iter()
            .map(|pokemon| entry(pokemon, pokemon.id.number()))
            .collect(),
        Mode::Regional => {
            let mut entries: Vec<_> = database
                .pokemon()
                .iter()
                .filter_map(|pokemon| Some(entry(pokemon, pokemon.regional_number?)))
                .collect();

            entries.sort_by_key(|entry| entry.number);
            entries
        }
    };

    let progress = Progress {
        current: entries.iter().filter(|entry| entry.is_selected).count(),
        total: entries.len(),
    };

    View { entries, progress }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokemon::{Id, Type, Types};

    fn pokemon(id: u32, regional_number: Option<u32>) -> Pokemon {
        Pokemon {
            name: format!("#{id}"),
            id: Id::new(id),
            regional_number,
            types: Types {
                primary: Type::Normal,
                secondary: None,
            },
            locations: vec![Location::from("Route 1")],
        }
    }

    fn scenario() -> Database {
        Database::new(vec![
            pokemon(1, Some(1)),
            pokemon(2, None),
            pokemon(3, Some(3)),
        ])
    }

    fn ids(view: &View<'_>) -> Vec<u32> {
        view.entries.iter().map(|entry| entry.id().number()).collect()
    }

    #[test]
    fn national_view_keeps_dataset_order() {
        let database = Database::new(vec![
            pokemon(10, Some(13)),
            pokemon(1, None),
            pokemon(387, Some(1)),
        ]);

        let view = view(&database, Mode::National, &Selection::new());

        assert_eq!(ids(&view), [10, 1, 387]);
        assert_eq!(
            view.entries.iter().map(|entry| entry.number).collect::<Vec<_>>(),
            [10, 1, 387]
        );
    }

    #[test]
    fn regional_view_filters_and_sorts() {
        let database = Database::new(vec![
            pokemon(10, Some(13)),
            pokemon(1, None),
            pokemon(387, Some(1)),
            pokemon(396, Some(10)),
        ]);

        let view = view(&database, Mode::Regional, &Selection::new());

        assert_eq!(ids(&view), [387, 396, 10]);
        assert_eq!(
            view.entries.iter().map(|entry| entry.number).collect::<Vec<_>>(),
            [1, 10, 13]
        );
    }

    #[test]
    fn scenario_views() {
        let database = scenario();

        let national = view(&database, Mode::National, &Selection::new());
        let regional = view(&database, Mode::Regional, &Selection::new());

        assert_eq!(ids(&national), [1, 2, 3]);
        assert_eq!(ids(&regional), [1, 3]);
    }

    #[test]
    fn regional_view_is_a_sorted_subset_of_national() {
        let database = Database::new(vec![
            pokemon(5, Some(2)),
            pokemon(6, Some(2)),
            pokemon(7, None),
            pokemon(8, Some(1)),
            pokemon(9, Some(40)),
        ]);
        let selection = Selection::from_iter([Id::new(6)]);

        let national = view(&database, Mode::National, &selection);
        let regional = view(&database, Mode::Regional, &selection);

        for entry in &regional.entries {
            assert!(national.entries.iter().any(|other| other.id() == entry.id()));
        }

        assert!(
            regional
                .entries
                .windows(2)
                .all(|pair| pair[0].number <= pair[1].number)
        );

        // Ties keep dataset order
        assert_eq!(ids(&regional), [8, 5, 6, 9]);
    }

    #[test]
    fn progress_only_counts_visible_selections() {
        let database = scenario();
        let selection = Selection::from_iter([Id::new(1), Id::new(2), Id::new(999)]);

        let national = view(&database, Mode::National, &selection);
        let regional = view(&database, Mode::Regional, &selection);

        assert_eq!(
            national.progress,
            Progress {
                current: 2,
                total: 3
            }
        );
        assert_eq!(
            regional.progress,
            Progress {
                current: 1,
                total: 2
            }
        );

        for view in [national, regional] {
            assert!(view.progress.current <= view.progress.total);
        }
    }

    #[test]
    fn empty_progress_is_zero_percent() {
        let database = Database::new(Vec::new());
        let view = view(&database, Mode::Regional, &Selection::new());

        assert_eq!(view.progress.percentage(), 0.0);
        assert_eq!(view.progress.rounded_percentage(), 0);
        assert_eq!(view.progress.to_string(), "0 / 0");
    }

    #[test]
    fn percentage_of_partial_progress() {
        let progress = Progress {
            current: 1,
            total: 4,
        };

        assert_eq!(progress.percentage(), 25.0);
        assert_eq!(progress.rounded_percentage(), 25);
    }

    #[test]
    fn rounded_percentage_rounds_halves_up() {
        let rounded = |current, total| Progress { current, total }.rounded_percentage();

        assert_eq!(rounded(1, 8), 13);
        assert_eq!(rounded(1, 40), 3);
        assert_eq!(rounded(1, 3), 33);
        assert_eq!(rounded(2, 3), 67);
        assert_eq!(rounded(3, 3), 100);
    }

    #[test]
    fn selected_entries_hide_locations() {
        let database = scenario();
        let selection = Selection::from_iter([Id::new(1)]);

        let view = view(&database, Mode::National, &selection);

        assert!(view.entries[0].is_selected);
        assert_eq!(view.entries[0].locations(), None);
        assert!(!view.entries[1].is_selected);
        assert_eq!(
            view.entries[1].locations(),
            Some(&[Location::from("Route 1")][..])
        );
    }

    #[test]
    fn sprite_url_uses_national_number() {
        let database = scenario();
        let view = view(&database, Mode::Regional, &Selection::new());

        assert!(sprite_url(view.entries[1].id()).ends_with("/official-artwork/3.png"));
    }

    #[test]
    fn mode_defaults_to_regional() {
        assert_eq!(Mode::default(), Mode::Regional);
        assert_eq!(Mode::from_national(true), Mode::National);
        assert!(!Mode::from_national(false).is_national());
    }
}
