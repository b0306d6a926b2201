use plotters::prelude::*;

use casteljau::{tessellate, Bezier, Primitive, SampleMode, Vec2};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // control points of a degree 4 curve in canvas coordinates
    let cpoints = [
        Vec2::new(80.0, 500.0),
        Vec2::new(200.0, 80.0),
        Vec2::new(420.0, 560.0),
        Vec2::new(600.0, 60.0),
        Vec2::new(720.0, 420.0),
    ];
    let curve = Bezier::new(&cpoints).ok_or("no control points")?;
    println!("degree {} curve, length ~{:.1}", curve.degree(), curve.arclen(256));

    let segments = tessellate(&cpoints, 0.01, SampleMode::Segments);
    let markers = tessellate(&cpoints, 0.05, SampleMode::Markers);

    let root = BitMapBackend::new("casteljau_curve.png", (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    // text needs the ttf feature of plotters, so the chart has no captions or labels
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .build_cartesian_2d(0f32..800f32, 0f32..600f32)?;

    // control polygon and control points
    chart.draw_series(LineSeries::new(cpoints.iter().map(|p| (p.x, p.y)), &BLUE))?;
    chart.draw_series(PointSeries::of_element(
        cpoints.iter().map(|p| (p.x, p.y)),
        5,
        &BLUE,
        &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style.filled()),
    ))?;

    // the curve as line segments, t + step of the last one extrapolates slightly
    chart.draw_series(segments.iter().filter_map(|primitive| match *primitive {
        Primitive::Segment(a, b) => Some(PathElement::new(vec![(a.x, a.y), (b.x, b.y)], RED)),
        Primitive::Marker(_) => None,
    }))?;

    // coarser samples as markers on top
    chart.draw_series(markers.iter().filter_map(|primitive| match *primitive {
        Primitive::Marker(p) => Some(Rectangle::new([(p.x - 4.0, p.y - 4.0), (p.x + 4.0, p.y + 4.0)], RED.filled())),
        Primitive::Segment(..) => None,
    }))?;

    root.present()?;
    println!("wrote casteljau_curve.png");
    Ok(())
}
