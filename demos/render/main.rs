//! Prints the CSS clip-path and SVG markup of a frame.
//!
//! Usage:
//! ```text
//! cargo run --example render                               # hexagon, 320x120
//! cargo run --example render -- pentagon                   # pentagon
//! cargo run --example render -- pentagon --inverted 240 80 # inverted, 240x80
//! RUST_LOG=facet=trace cargo run --example render          # generation traces
//! ```

use facet::animation::{AnimationPhase, CuePlayer, PhaseBus};
use facet::frames::{Frame, FrameParams, FrameShape};
use facet::render::FrameSurface;
use facet::tessellation::TessellateFill;
use facet::theme::DefaultTheme;

struct LogPlayer;

impl CuePlayer for LogPlayer {
    fn play(&mut self, cue: &str) {
        println!("cue: {cue}");
    }
}

fn main() -> facet::Result<()> {
    // Default: WARN for everything, INFO for facet.
    // Override with RUST_LOG env var (e.g. RUST_LOG=facet=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("facet=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let shape = if args.iter().any(|a| a == "pentagon") {
        FrameShape::Pentagon
    } else {
        FrameShape::Hexagon
    };
    let inverted = args.iter().any(|a| a == "--inverted");
    let mut dims = args.iter().filter_map(|a| a.parse::<f64>().ok());
    let width = dims.next().unwrap_or(320.0);
    let height = dims.next().unwrap_or(120.0);

    let theme = DefaultTheme::default();
    let frame = Frame::new(shape, FrameParams::svg().with_inverted(inverted), 1.0, &theme);

    let mut bus = PhaseBus::new();
    frame.cues().attach(&mut bus, LogPlayer);
    bus.publish(AnimationPhase::Entering);

    println!("{}", frame.clip_path());
    println!("{}", frame.padding().css());

    let mut surface = FrameSurface::new(frame.svg_paths());
    surface.resize(width, height)?;
    if let Some(svg) = surface.markup() {
        println!("{svg}");
    }

    let mesh = TessellateFill::new(&frame.polylines().fill(), width, height).execute()?;
    println!(
        "fill: {} triangles, area {:.1}",
        mesh.triangle_count(),
        mesh.area()
    );

    bus.publish(AnimationPhase::Exiting);
    Ok(())
}
