use crate::config::Config;
use crate::pokebase::pokedex::{self, Mode};
use crate::pokebase::pokemon::{self, Location};
use crate::pokebase::selection;
use crate::pokebase::storage;
use crate::pokebase::Database;
use crate::sprite::{self, Sprites};
use crate::widget::{logo, pokeball};

use iced::border;
use iced::widget::{
    center, checkbox, column, container, horizontal_space, image, pop, progress_bar, row,
    scrollable, text,
};
use iced::{Center, Element, Fill, Task, Theme};

use function::Binary;
use std::collections::HashMap;

pub struct Checklist {
    store: selection::Store<storage::Disk>,
    mode: Mode,
    sprites: Option<Sprites>,
    images: HashMap<pokemon::Id, Sprite>,
}

enum Sprite {
    Loading,
    Loaded(image::Handle),
    Errored,
}

#[derive(Debug, Clone)]
pub enum Message {
    NationalDexToggled(bool),
    Toggled(pokemon::Id),
    SpriteShown(pokemon::Id),
    SpriteFetched(pokemon::Id, Result<sprite::Image, anywho::Error>),
}

impl Checklist {
    pub fn new(config: &Config, database: &Database) -> Self {
        let store = selection::Store::open(storage::Disk::new(config.data_dir()));

        log::info!(
            "Loaded {} selected Pokémon from {}",
            store.selection().len(),
            store.storage().directory().display()
        );

        let stale = store.selection().stale(database).count();

        if stale > 0 {
            log::warn!("{stale} selected Pokémon are not part of the database");
        }

        let sprites = if config.sprites {
            Sprites::new(config.cache_dir())
                .inspect_err(|error| log::error!("Sprites are disabled: {error}"))
                .ok()
        } else {
            None
        };

        Self {
            store,
            mode: Mode::default(),
            sprites,
            images: HashMap::new(),
        }
    }

    pub fn update(&mut self, message: Message, database: &Database) -> Task<Message> {
        match message {
            Message::NationalDexToggled(show_national_dex) => {
                self.mode = Mode::from_national(show_national_dex);

                Task::none()
            }
            Message::Toggled(id) => {
                match self.store.toggle(id) {
                    Ok(is_selected) => {
                        let name = database
                            .get(id)
                            .map(|pokemon| pokemon.name.as_str())
                            .unwrap_or("Unknown");

                        log::info!(
                            "{name} (#{id}) {}",
                            if is_selected { "collected" } else { "unchecked" }
                        );
                    }
                    Err(error) => {
                        log::error!("Failed to save selection: {error}");
                    }
                }

                Task::none()
            }
            Message::SpriteShown(id) => {
                let Some(sprites) = &self.sprites else {
                    return Task::none();
                };

                if self.images.contains_key(&id) {
                    return Task::none();
                }

                let _ = self.images.insert(id, Sprite::Loading);

                Task::perform(sprites.clone().fetch(id), Message::SpriteFetched.with(id))
            }
            Message::SpriteFetched(id, Ok(image)) => {
                let _ = self.images.insert(
                    id,
                    Sprite::Loaded(image::Handle::from_rgba(
                        image.width,
                        image.height,
                        image.rgba,
                    )),
                );

                Task::none()
            }
            Message::SpriteFetched(id, Err(error)) => {
                log::warn!("Sprite of Pokémon #{id} is unavailable: {error}");

                let _ = self.images.insert(id, Sprite::Errored);

                Task::none()
            }
        }
    }

    pub fn view<'a>(&'a self, database: &'a Database) -> Element<'a, Message> {
        let view = pokedex::view(database, self.mode, self.store.selection());

        let header = row![
            logo(24),
            horizontal_space(),
            checkbox("Show national dex", self.mode.is_national())
                .on_toggle(Message::NationalDexToggled)
        ]
        .spacing(20)
        .align_y(Center);

        let progress = {
            let progress = view.progress;
            let percentage = progress.percentage();
            let rounded = progress.rounded_percentage();

            let badge = container(text!("{progress}").size(18))
                .padding([2, 10])
                .style(|theme: &Theme| {
                    let pair = theme.extended_palette().success.weak;

                    container::Style {
                        text_color: Some(pair.text),
                        ..container::Style::default()
                            .background(pair.color)
                            .border(border::rounded(12))
                    }
                });

            column![
                row![badge, horizontal_space(), text!("{rounded}%").size(20)]
                    .align_y(Center),
                progress_bar(0.0..=100.0, percentage),
            ]
            .spacing(10)
        };

        let entries = scrollable(
            column(view.entries.into_iter().map(|entry| self.entry(entry)))
                .spacing(10)
                .padding([0, 10]),
        )
        .height(Fill)
        .spacing(10);

        container(
            column![header, progress, entries]
                .spacing(20)
                .max_width(720),
        )
        .center_x(Fill)
        .padding(20)
        .into()
    }

    fn entry<'a>(&'a self, entry: pokedex::Entry<'a>) -> Element<'a, Message> {
        let id = entry.id();
        let is_selected = entry.is_selected;

        let title = row![
            text!("#{}", entry.number).size(18).style(|theme: &Theme| {
                let palette = theme.extended_palette();

                text::Style {
                    color: Some(palette.background.strong.color),
                }
            }),
            text(entry.pokemon.name.as_str()).size(18),
        ]
        .spacing(10);

        let locations = entry.locations().map(|locations| {
            text(
                locations
                    .iter()
                    .map(Location::plain)
                    .collect::<Vec<_>>()
                    .join(", "),
            )
            .size(14)
        });

        let content = row![
            checkbox("", is_selected)
                .on_toggle(move |_| Message::Toggled(id))
                .size(20),
        ]
        .push_maybe(self.sprite(entry))
        .push(column![title].push_maybe(locations).spacing(5))
        .spacing(15)
        .align_y(Center);

        container(content)
            .width(Fill)
            .padding([8, 16])
            .style(move |theme: &Theme| {
                if is_selected {
                    let pair = theme.extended_palette().success.weak;

                    container::Style {
                        text_color: Some(pair.text),
                        ..container::Style::default()
                            .background(pair.color)
                            .border(border::rounded(8))
                    }
                } else {
                    container::bordered_box(theme)
                }
            })
            .into()
    }

    fn sprite<'a>(&'a self, entry: pokedex::Entry<'a>) -> Option<Element<'a, Message>> {
        const SIZE: f32 = 96.0;

        self.sprites.as_ref()?;
        let id = entry.id();

        Some(match self.images.get(&id) {
            Some(Sprite::Loaded(handle)) => image(handle).width(SIZE).height(SIZE).into(),
            Some(Sprite::Errored) => center(pokeball(SIZE / 3.0))
                .width(SIZE)
                .height(SIZE)
                .into(),
            Some(Sprite::Loading) | None => pop(center(pokeball(SIZE / 2.0))
                .width(SIZE)
                .height(SIZE))
            .key(entry.pokemon.name.as_str())
            .on_show(move |_size| Message::SpriteShown(id))
            .into(),
        })
    }
}
