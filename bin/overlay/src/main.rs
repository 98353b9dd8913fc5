//! Render gamut overlays to PNG and check where pointer events would land.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use gamut_wheel::{
    models::Hsv, wheel_center, Component, HostElement, OverlayConfig, OverlayHost, PlanePoint,
    PointerEvent, PointerGate, PointerKind, SuppressionPolicy, Triangle,
};
use image::{imageops, Rgba, RgbaImage};

#[derive(Parser)]
#[command(name = "gamut-overlay", about = "Render and query gamut wheel overlays.")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Draw the overlay and write it as a PNG.
    Render {
        #[command(flatten)]
        overlay: OverlayArgs,
        /// Where to write the image.
        #[arg(short, long, default_value = "overlay.png")]
        output: PathBuf,
        /// Draw the overlay over a reference color wheel with vertex markers.
        #[arg(long)]
        wheel: bool,
    },
    /// Report whether a point is inside the gamut and if an event there
    /// would be suppressed.
    Query {
        #[command(flatten)]
        overlay: OverlayArgs,
        /// X position on the wheel, in pixels.
        #[arg(allow_negative_numbers = true)]
        x: Component,
        /// Y position on the wheel, in pixels.
        #[arg(allow_negative_numbers = true)]
        y: Component,
        /// Kind of pointer event to simulate.
        #[arg(long, value_enum, default_value_t = Kind::Down)]
        kind: Kind,
    },
}

#[derive(Args)]
struct OverlayArgs {
    /// JSON file with an overlay configuration. Flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Gamut to show: A, B, C or none.
    #[arg(short, long)]
    gamut: Option<String>,
    /// Wheel diameter in pixels.
    #[arg(short, long)]
    size: Option<i32>,
    /// Fill color of the overlay.
    #[arg(short, long)]
    fill: Option<String>,
    /// Never suppress events.
    #[arg(long)]
    edit_mode: bool,
    /// How events outside the gamut are suppressed.
    #[arg(long, value_enum)]
    policy: Option<Policy>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Policy {
    StopPropagation,
    StopImmediatePropagation,
    ReportOnly,
}

impl From<Policy> for SuppressionPolicy {
    fn from(value: Policy) -> Self {
        match value {
            Policy::StopPropagation => SuppressionPolicy::StopPropagation,
            Policy::StopImmediatePropagation => SuppressionPolicy::StopImmediatePropagation,
            Policy::ReportOnly => SuppressionPolicy::ReportOnly,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Down,
    Move,
    Up,
}

impl From<Kind> for PointerKind {
    fn from(value: Kind) -> Self {
        match value {
            Kind::Down => PointerKind::Down,
            Kind::Move => PointerKind::Move,
            Kind::Up => PointerKind::Up,
        }
    }
}

fn load_config(args: &OverlayArgs) -> Result<OverlayConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("could not read {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("invalid overlay config in {}", path.display()))?
        }
        None => OverlayConfig::default(),
    };

    if let Some(gamut) = &args.gamut {
        config.gamut = gamut.clone();
    }
    if let Some(size) = args.size {
        config.size = size;
    }
    if let Some(fill) = &args.fill {
        config.fill_color = fill.clone();
    }
    if args.edit_mode {
        config.edit_mode = true;
    }
    if let Some(policy) = args.policy {
        config.suppression = policy.into();
    }

    log::debug!("using {config:?}");
    Ok(config)
}

/// A fully bright HSV wheel with hue 0 at the top, the layout the overlay is
/// projected onto.
fn color_wheel(size: u32) -> RgbaImage {
    let center = wheel_center(size as i32);
    let radius = size as Component / 2.0;

    RgbaImage::from_fn(size, size, |x, y| {
        let p = PlanePoint::new(x as Component + 0.5, y as Component + 0.5);
        let offset = p - center;
        let saturation = offset.length() / radius;
        if saturation > 1.0 {
            return Rgba([0, 0, 0, 0]);
        }

        let hue = (offset.y.atan2(offset.x).to_degrees() + 90.0).rem_euclid(360.0);
        let rgb = Hsv::new(hue, saturation, 1.0).to_rgb();
        let to_byte = |v: Component| (v.clamp(0.0, 1.0) * 255.0).round() as u8;

        Rgba([to_byte(rgb.red), to_byte(rgb.green), to_byte(rgb.blue), 255])
    })
}

fn mark_vertices(image: &mut RgbaImage, triangle: &Triangle) {
    for v in triangle.vertices() {
        imageproc::drawing::draw_filled_circle_mut(
            image,
            (v.x.round() as i32, v.y.round() as i32),
            3,
            Rgba([0, 0, 0, 255]),
        );
    }
}

fn render(config: &OverlayConfig, output: &Path, wheel: bool) -> Result<()> {
    let mut host = OverlayHost::new();
    let attached = host.attach_config(&HostElement::default(), config)?;
    if attached.is_none() {
        bail!(
            "nothing to draw for gamut {:?} at size {}",
            config.gamut,
            config.size
        );
    }
    let overlay = host.current().context("overlay was not attached")?;

    let image = if wheel {
        let mut image = color_wheel(config.size as u32);
        imageops::overlay(&mut image, overlay.surface(), 0, 0);
        mark_vertices(&mut image, overlay.triangle());
        image
    } else {
        overlay.surface().clone()
    };

    image
        .save(output)
        .with_context(|| format!("could not write image to {}", output.display()))?;

    log::info!(
        "wrote gamut {} overlay to {}",
        overlay.gamut(),
        output.display()
    );
    Ok(())
}

fn query(config: &OverlayConfig, point: PlanePoint, kind: PointerKind) -> Result<()> {
    let mut host = OverlayHost::new();
    let attached = host.attach_config(&HostElement::default(), config)?;
    if attached.is_none() {
        println!("no overlay attached, nothing is gated");
    }

    let mut gate = PointerGate::new(config.gate()).with_callback(|event, inside| {
        log::debug!("{:?} at {:?}: inside = {inside}", event.kind, event.client);
    });

    let mut event = PointerEvent::new(kind, point);
    let inside = host.handle_pointer(&mut gate, &mut event);

    println!("inside: {inside}");
    println!("suppressed: {}", event.default_prevented());
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    match Cli::parse().command {
        Command::Render {
            overlay,
            output,
            wheel,
        } => render(&load_config(&overlay)?, &output, wheel),
        Command::Query {
            overlay,
            x,
            y,
            kind,
        } => query(
            &load_config(&overlay)?,
            PlanePoint::new(x, y),
            kind.into(),
        ),
    }
}
