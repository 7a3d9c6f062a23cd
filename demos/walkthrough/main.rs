//! Prints every line algorithm's output on a small character grid, then
//! walks a parallelogram through a sequence of transforms.
//!
//! Usage:
//! ```text
//! cargo run --example walkthrough                  # default segment (-6,-2)->(7,4)
//! cargo run --example walkthrough -- 0 0 3 9       # custom segment
//! RUST_LOG=gfxlab=trace cargo run --example walkthrough
//! ```

use gfxlab::operations::raster::{rasterize_all, LineStats};
use gfxlab::viewport::GridExtent;
use gfxlab::{GridPoint, Point2, TransformSession, TransformStep};

fn main() {
    // Default: WARN for everything, INFO for gfxlab.
    // Override with RUST_LOG env var (e.g. RUST_LOG=gfxlab=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("gfxlab=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let coords: Vec<i32> = std::env::args()
        .skip(1)
        .filter_map(|a| a.parse().ok())
        .collect();
    let (start, end) = match coords[..] {
        [x0, y0, x1, y1] => (GridPoint::new(x0, y0), GridPoint::new(x1, y1)),
        _ => (GridPoint::new(-6, -2), GridPoint::new(7, 4)),
    };

    let extent = GridExtent::new(-10, 10);
    for (algo, line) in rasterize_all(start, end) {
        let stats = LineStats::of(&line);
        println!(
            "{} [{}]: {} points, {} repeated, {} gaps",
            algo.label(),
            algo,
            stats.points,
            stats.duplicates,
            stats.gaps
        );
        print_grid(&extent, &extent.clip(&line));
        println!();
    }

    let parallelogram = [
        Point2::new(0.0, 0.0),
        Point2::new(60.0, 0.0),
        Point2::new(80.0, 40.0),
        Point2::new(20.0, 40.0),
    ];
    let mut session = TransformSession::new();
    let steps = [
        TransformStep::Translate { dx: 20.0, dy: -10.0 },
        TransformStep::Rotate {
            degrees: 45.0,
            ccw: true,
        },
        TransformStep::Scale { sx: 1.5, sy: 0.5 },
        TransformStep::Shear {
            x_degrees: 15.0,
            y_degrees: 0.0,
        },
        TransformStep::Reflect {
            slope: 1.0,
            intercept: 0.0,
        },
    ];
    for step in steps {
        session.apply(step);
        let corners = session.transform_polygon(&parallelogram);
        let formatted: Vec<String> = corners
            .iter()
            .map(|p| format!("({:.2}, {:.2})", p.x, p.y))
            .collect();
        println!("{step:?}\n  -> {}", formatted.join(" "));
    }
    session.undo();
    println!("after undo: {} steps", session.history().len());
}

fn print_grid(extent: &GridExtent, line: &[GridPoint]) {
    let side = usize::try_from(extent.side()).unwrap_or(1);
    let mut row = String::with_capacity(side * 2);
    for (i, cell) in extent.cells().enumerate() {
        let glyph = if line.contains(&cell) {
            '#'
        } else if cell.x == 0 && cell.y == 0 {
            'O'
        } else {
            '.'
        };
        row.push(glyph);
        row.push(' ');
        if (i + 1) % side == 0 {
            println!("{}", row.trim_end());
            row.clear();
        }
    }
}
