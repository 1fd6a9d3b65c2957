use anyhow::Context;
use bsketch::draw::svg::SvgSurface;
use bsketch::draw::{self, Style};
use bsketch::Sketch;
use nalgebra::Vector2;

/// Headless stand-in for the interactive host: replay a few gestures through
/// the model and print the rendered sketch as svg.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let style = match std::env::args().nth(1) {
        Some(path) => {
            Style::load(&path).with_context(|| format!("loading style from {path}"))?
        }
        None => Style::default(),
    };

    let mut sketch = Sketch::new();

    // A wavy stroke across the canvas.
    gesture(
        &mut sketch,
        (0..=12).map(|i| {
            let x = 100.0 + 65.0 * i as f64;
            Vector2::new(x, 500.0 + 300.0 * (i as f64 / 2.0).sin())
        }),
    );
    // A zigzag drawn with a few deliberate clicks.
    gesture(
        &mut sketch,
        [(250.0, 850.0), (400.0, 650.0), (550.0, 850.0), (700.0, 650.0)]
            .into_iter()
            .map(|(x, y)| Vector2::new(x, y)),
    );
    // A stray tap commits as a single marker.
    gesture(&mut sketch, std::iter::once(Vector2::new(870.0, 130.0)));
    // One curve too many.
    gesture(
        &mut sketch,
        [(50.0, 50.0), (950.0, 950.0)]
            .into_iter()
            .map(|(x, y)| Vector2::new(x, y)),
    );
    sketch.undo();

    log::info!("curves: {}", sketch.curve_count());

    let mut surface = SvgSurface::new(0.0, 0.0, 1000.0, 1000.0);
    draw::render_all(&mut surface, &sketch, &style);
    println!("{surface}");
    Ok(())
}

/// Feed one press-drag-release gesture into the sketch.
fn gesture(sketch: &mut Sketch, mut samples: impl Iterator<Item = Vector2<f64>>) {
    if let Some(first) = samples.next() {
        sketch.start_curve(first);
        for point in samples {
            sketch.extend_curve(point);
        }
        sketch.finish_curve();
    }
}
