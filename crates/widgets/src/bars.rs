use iced::{
    widget::{container, Column, Row, Space},
    Alignment, Background, Border, Element, Length,
};
use meter_core::{Align, Orientation};
use meter_render::BarRenderer;
use meter_theme::CellStyle;

/// Map the renderer's visible cells onto an iced element tree.
///
/// Vertical bars become a row of columns (segments stacked top-down in
/// reverse layer order, so layer 0 sits at the baseline); horizontal bars
/// become a column of rows in layer order. Hidden cells produce nothing.
pub fn view<'a, Message: 'a>(renderer: &BarRenderer) -> Element<'a, Message> {
    let orientation = renderer.params().orientation;

    let slots: Vec<Element<'a, Message>> = renderer
        .bars()
        .iter()
        .map(|slot| match orientation {
            Orientation::Vertical => {
                let mut column = Column::new();
                for state in slot.cells.iter().rev().filter(|c| c.visible) {
                    column = column.push(segment(&state.style, orientation));
                }
                column.into()
            }
            Orientation::Horizontal => {
                let mut row = Row::new();
                for state in slot.cells.iter().filter(|c| c.visible) {
                    row = row.push(segment(&state.style, orientation));
                }
                row.into()
            }
        })
        .collect();

    match orientation {
        Orientation::Vertical => Row::from_vec(slots)
            .spacing(2.0)
            .align_y(to_alignment(renderer.params().y_align))
            .into(),
        Orientation::Horizontal => {
            let mut column = Column::new().spacing(2.0);
            for slot in slots {
                column = column.push(slot);
            }
            column.align_x(to_alignment(renderer.params().x_align)).into()
        }
    }
}

fn segment<'a, Message: 'a>(style: &CellStyle, orientation: Orientation) -> Element<'a, Message> {
    let (width, height) = match orientation {
        Orientation::Vertical => (style.thickness, style.length),
        Orientation::Horizontal => (style.length, style.thickness),
    };
    let background = style.background.to_iced();
    let radius = style.radii.to_iced();

    container(
        Space::new()
            .width(Length::Fixed(width))
            .height(Length::Fixed(height)),
    )
        .style(move |_: &iced::Theme| container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                radius,
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

// iced has no fill alignment; stretching is the container's job
fn to_alignment(align: Align) -> Alignment {
    match align {
        Align::Start | Align::Fill => Alignment::Start,
        Align::Center => Alignment::Center,
        Align::End => Alignment::End,
    }
}
