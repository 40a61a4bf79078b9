use pokebase;

mod config;
mod screen;
mod sprite;
mod widget;

use crate::config::Config;
use crate::pokebase::Database;
use crate::screen::checklist;
use crate::screen::Checklist;
use crate::widget::pokeball;

use iced::widget::{center, column, text};
use iced::{Center, Element, Font, Task, Theme};

pub fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    iced::application(Pokedex::new, Pokedex::update, Pokedex::view)
        .theme(Pokedex::theme)
        .default_font(Font::MONOSPACE)
        .window_size((760.0, 950.0))
        .run()
}

struct Pokedex {
    state: State,
}

enum State {
    Loading,
    Ready {
        database: Database,
        checklist: Checklist,
    },
    Errored(String),
}

#[derive(Debug, Clone)]
enum Message {
    Loaded(Result<(Config, Database), anywho::Error>),
    Checklist(checklist::Message),
}

impl Pokedex {
    fn new() -> (Self, Task<Message>) {
        (
            Self {
                state: State::Loading,
            },
            Task::perform(load(), Message::Loaded),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Loaded(Ok((config, database))) => {
                let checklist = Checklist::new(&config, &database);

                self.state = State::Ready {
                    database,
                    checklist,
                };

                Task::none()
            }
            Message::Loaded(Err(error)) => {
                log::error!("{error}");

                self.state = State::Errored(error.to_string());

                Task::none()
            }
            Message::Checklist(message) => {
                let State::Ready {
                    database,
                    checklist,
                } = &mut self.state
                else {
                    return Task::none();
                };

                checklist.update(message, database).map(Message::Checklist)
            }
        }
    }

    fn view(&self) -> Element<Message> {
        match &self.state {
            State::Loading => center(
                column![pokeball(64), text("Loading...")]
                    .spacing(20)
                    .align_x(Center),
            )
            .into(),
            State::Ready {
                database,
                checklist,
            } => checklist.view(database).map(Message::Checklist),
            State::Errored(error) => center(
                column![
                    pokeball(64),
                    text("The Pokédex could not be loaded"),
                    text(error.as_str()).size(14),
                ]
                .spacing(20)
                .align_x(Center),
            )
            .into(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::CatppuccinMocha
    }
}

async fn load() -> Result<(Config, Database), anywho::Error> {
    let config = Config::load().await;

    let database = match &config.dataset {
        Some(dataset) => Database::open(dataset).await?,
        None => Database::load().await?,
    };

    Ok((config, database))
}
