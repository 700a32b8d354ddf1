use coulombic::{ForceVector, Vec2};
use libm::{atan2, cos, sin};
use plotters::{coord::types::RangedCoordf64, element::DashedPathElement, prelude::*};

use crate::System;

const POSITIVE_COLOR: RGBColor = RGBColor(0xc8, 0x32, 0x2e);
const NEGATIVE_COLOR: RGBColor = RGBColor(0x2e, 0x5c, 0xc8);
const FORCE_COLOR: RGBColor = RGBColor(0x2e, 0x8b, 0x57);

const LABEL_STYLE: (&str, i32) = ("sans-serif", 30);

/// Half-width of the square chart area: the furthest coordinate of the
/// test charge plus some breathing room.
pub fn chart_span(position: Vec2) -> f64 {
    position.x.abs().max(position.y.abs()) + 2.0
}

/// Scale the force vector so the drawn arrow is about a third of the
/// chart, whatever order of magnitude the force itself has.
pub fn scaled_arrow(force: &ForceVector, span: f64) -> (f64, f64) {
    let largest_component = force.fx.abs().max(force.fy.abs());
    if largest_component <= 0.0 {
        return (0.0, 0.0);
    }
    let scale = span / largest_component * 0.3;
    (force.fx * scale, force.fy * scale)
}

pub fn save_png(system: &System, force: &ForceVector, output_path: String) -> anyhow::Result<()> {
    let span = chart_span(system.position);
    let Vec2 { x, y } = system.position;

    let width = 800;
    let height = 800;
    let dpi_scale = 2;
    let root = BitMapBackend::new(&output_path, (width * dpi_scale, height * dpi_scale))
        .into_drawing_area();
    root.fill(&WHITE)?;

    // Square Cartesian chart centered on the fixed charge.
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .caption(
            format!("Coulomb force between point charges ({})", force.kind),
            ("sans-serif", 50),
        )
        .build_cartesian_2d(-span..span, -span..span)?;

    draw_axes(&mut chart)?;

    // Dashed line joining the two charges.
    chart.draw_series(std::iter::once(DashedPathElement::new(
        vec![(0.0, 0.0), (x, y)],
        8,
        6,
        BLACK.mix(0.5).stroke_width(1),
    )))?;

    draw_force_arrow(&mut chart, system.position, force, span)?;

    // The charges themselves go on top of the line and the arrow tail.
    draw_charge(&mut chart, Vec2::new(0.0, 0.0), system.q1, "Q1")?;
    draw_charge(&mut chart, system.position, system.q2, "Q2")?;

    draw_legend(&mut chart)?;

    // Finished.
    root.present()?;
    println!("Plot saved to {output_path}");
    Ok(())
}

fn charge_color(charge: f64) -> RGBColor {
    if charge >= 0.0 {
        POSITIVE_COLOR
    } else {
        NEGATIVE_COLOR
    }
}

fn draw_axes<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
) -> anyhow::Result<()>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    chart
        .configure_mesh()
        .label_style(LABEL_STYLE)
        .axis_desc_style(LABEL_STYLE)
        .x_desc("x (m)")
        .y_desc("y (m)")
        .draw()?;

    // Overlay bold black axes at x=0 and y=0
    let x_range = chart.as_coord_spec().x_spec().to_owned();
    let y_range = chart.as_coord_spec().y_spec().to_owned();

    chart.draw_series(std::iter::once(PathElement::new(
        vec![(0.0, y_range.range().start), (0.0, y_range.range().end)],
        BLACK.stroke_width(3),
    )))?;

    chart.draw_series(std::iter::once(PathElement::new(
        vec![(x_range.range().start, 0.0), (x_range.range().end, 0.0)],
        BLACK.stroke_width(3),
    )))?;
    Ok(())
}

/// A charge marker: filled circle colored by sign, labelled with the
/// charge value in coulombs.
fn draw_charge<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    at: Vec2,
    charge: f64,
    name: &str,
) -> anyhow::Result<()>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    let color = charge_color(charge);
    let label = format!("{name} = {charge:.2e} C");
    chart.draw_series(PointSeries::of_element(
        vec![(at.x, at.y)],
        10,
        &color,
        &|coord, size, style| {
            EmptyElement::at(coord)
                + Circle::new((0, 0), size, style.filled())
                + Text::new(label.clone(), (12, -12), LABEL_STYLE.into_font())
        },
    ))?;
    Ok(())
}

/// The force arrow, anchored at the test charge: a stroked shaft plus a
/// filled triangular head. Skipped entirely for a zero force.
fn draw_force_arrow<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    at: Vec2,
    force: &ForceVector,
    span: f64,
) -> anyhow::Result<()>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    if force.magnitude <= 0.0 {
        return Ok(());
    }
    let (dx, dy) = scaled_arrow(force, span);
    let tip = (at.x + dx, at.y + dy);

    chart.draw_series(std::iter::once(PathElement::new(
        vec![(at.x, at.y), tip],
        FORCE_COLOR.stroke_width(4),
    )))?;

    // Two back-swept corners make the head.
    let theta = atan2(dy, dx);
    let head_length = span * 0.05;
    let sweep = 0.45;
    let head = vec![
        tip,
        (
            tip.0 - head_length * cos(theta - sweep),
            tip.1 - head_length * sin(theta - sweep),
        ),
        (
            tip.0 - head_length * cos(theta + sweep),
            tip.1 - head_length * sin(theta + sweep),
        ),
    ];
    chart.draw_series(std::iter::once(Polygon::new(head, FORCE_COLOR.filled())))?;

    chart.draw_series([Text::new(
        "F".to_owned(),
        (at.x + dx / 2.0, at.y + dy / 2.0),
        LABEL_STYLE.into_font().color(&FORCE_COLOR),
    )])?;
    Ok(())
}

/// Fixed legend matching the marker color scheme.
// configure_series_labels requires the backend to outlive the chart,
// so this helper names the lifetime.
fn draw_legend<'a, DB: DrawingBackend + 'a>(
    chart: &mut ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
) -> anyhow::Result<()>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    chart
        .draw_series(std::iter::empty::<Circle<(f64, f64), i32>>())?
        .label("Positive charge")
        .legend(|(x, y)| Circle::new((x + 10, y), 7, POSITIVE_COLOR.filled()));
    chart
        .draw_series(std::iter::empty::<Circle<(f64, f64), i32>>())?
        .label("Negative charge")
        .legend(|(x, y)| Circle::new((x + 10, y), 7, NEGATIVE_COLOR.filled()));
    chart
        .draw_series(std::iter::empty::<Circle<(f64, f64), i32>>())?
        .label("Force vector")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], FORCE_COLOR.stroke_width(4)));
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(LABEL_STYLE)
        .draw()?;
    Ok(())
}
