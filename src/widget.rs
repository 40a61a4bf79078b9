use iced::widget::{canvas, row, text};
use iced::{Center, Element, Pixels};

pub fn logo<'a, Message: 'a>(size: impl Into<Pixels>) -> Element<'a, Message> {
    let size = size.into();

    row![pokeball(size), text("Pokédex").size(size)]
        .spacing(size.0 / 2.0)
        .align_y(Center)
        .into()
}

pub fn pokeball<'a, Message: 'a>(size: impl Into<Pixels>) -> Element<'a, Message> {
    use iced::mouse;
    use iced::widget::canvas::path::Arc;
    use iced::{Point, Radians, Rectangle, Renderer, Size, Theme};
    use std::f32::consts::PI;

    struct Pokeball;

    impl<Message> canvas::Program<Message> for Pokeball {
        type State = canvas::Cache;

        fn draw(
            &self,
            cache: &Self::State,
            renderer: &Renderer,
            theme: &Theme,
            bounds: Rectangle,
            _cursor: mouse::Cursor,
        ) -> Vec<canvas::Geometry> {
            let pokeball = cache.draw(renderer, bounds.size(), |frame| {
                const RADIUS: f32 = 100.0;
                const LINE: f32 = 16.0;

                let palette = theme.palette();

                let center = Point::new(RADIUS, RADIUS);
                let top = canvas::Path::circle(center, RADIUS);
                let bottom = canvas::Path::new(|builder| {
                    builder.arc(Arc {
                        center,
                        radius: RADIUS,
                        start_angle: Radians(0.0),
                        end_angle: Radians(PI),
                    });
                    builder.close();
                });
                let ring = canvas::Path::circle(center, RADIUS / 3.0);
                let button = canvas::Path::circle(center, RADIUS / 5.0);

                let line = Rectangle::new(
                    Point::new(0.0, RADIUS - LINE / 2.0),
                    Size::new(2.0 * RADIUS, LINE),
                );

                let scale = (bounds.width - 0.5) / (2.0 * RADIUS);

                frame.scale(scale);

                frame.fill(&top, palette.danger);
                frame.fill(&bottom, palette.text);
                frame.fill_rectangle(line.position(), line.size(), palette.background);
                frame.fill(&ring, palette.background);
                frame.fill(&button, palette.text);
            });

            vec![pokeball]
        }
    }

    let size = size.into();

    canvas(Pokeball).width(size).height(size).into()
}
