use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use scenery::{
    BezPath, DrawInfo, Engine, EngineConfig, Filter, FilterPreset, FrameReport, NodeBehavior,
    NodeId, NodeKind, NodeManager, NodeMut, Point, Pose, RecordingContext, RenderContext,
    Transition, TransitionAction, World as _, ZoomTransform,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scenery", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the built-in demo scene headlessly and report every frame.
    Run(RunArgs),
    /// Map a device point into the local space of demo nodes.
    Map(MapArgs),
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Engine config JSON (defaults apply to missing keys).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of frames to run.
    #[arg(long, default_value_t = 120)]
    frames: u64,

    /// Render rate; each frame advances the clock by `1 / fps` seconds.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Write frame reports and the last frame's draw commands as JSON.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct MapArgs {
    /// Engine config JSON (defaults apply to missing keys).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Device x coordinate.
    #[arg(long)]
    x: f64,

    /// Device y coordinate.
    #[arg(long)]
    y: f64,

    /// Frames to run before mapping.
    #[arg(long, default_value_t = 1)]
    frames: u64,

    /// Node names to map into (all demo nodes when omitted).
    #[arg(long = "node")]
    nodes: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Run(args) => cmd_run(args),
        Command::Map(args) => cmd_map(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<EngineConfig> {
    let cfg = match path {
        Some(p) => EngineConfig::from_json_path(p)?,
        None => EngineConfig::default(),
    };
    Ok(cfg)
}

fn frame_time(fps: f64) -> anyhow::Result<f64> {
    if !(fps.is_finite() && fps > 0.0) {
        anyhow::bail!("fps must be a positive number, got {fps}");
    }
    Ok(1.0 / fps)
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let dt = frame_time(args.fps)?;
    let mut engine = Engine::with_manager(config, build_demo()?)?;

    let mut ctx = RecordingContext::with_base(engine.viewport().view_transform());
    let mut reports: Vec<FrameReport> = Vec::new();
    for _ in 0..args.frames {
        ctx.reset();
        let report = engine.run_frame(dt, &mut ctx)?;
        reports.push(report);
        if !report.running {
            break;
        }
    }

    let last = reports.last().copied();
    eprintln!(
        "ran {} frames, {} updates, last frame drew {} nodes",
        reports.len(),
        reports.iter().map(|r| u64::from(r.tick.updates)).sum::<u64>(),
        last.map_or(0, |r| r.stats.nodes_drawn),
    );

    if let Some(out) = &args.out {
        let doc = serde_json::json!({
            "config": engine.config(),
            "frames": reports,
            "commands": ctx.commands(),
        });
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(&doc).context("serialize frame reports")?;
        std::fs::write(out, text).with_context(|| format!("write '{}'", out.display()))?;
        eprintln!("wrote {}", out.display());
    }
    Ok(())
}

fn cmd_map(args: MapArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let dt = config.step_secs();
    let mut engine = Engine::with_manager(config, build_demo()?)?;
    let mut ctx = RecordingContext::new();
    for _ in 0..args.frames {
        engine.run_frame(dt, &mut ctx)?;
    }

    let names = if args.nodes.is_empty() {
        DEMO_NODES.iter().map(|s| (*s).to_owned()).collect()
    } else {
        args.nodes
    };
    let device = Point::new(args.x, args.y);
    let viewport = *engine.viewport();
    let tree = engine.manager_mut().tree_mut();
    for name in &names {
        let id = tree
            .find(name)
            .with_context(|| format!("no live node named '{name}'"))?;
        let local = scenery::space::mapping::device_to_node(&viewport, tree, id, device)
            .with_context(|| format!("map into '{name}'"))?;
        println!("{name:>8} {id}: ({:.3}, {:.3})", local.x, local.y);
    }
    Ok(())
}

const DEMO_NODES: &[&str] = &["main", "orbit", "square", "badge", "zoom", "detail"];

/// Builds the demo: a short intro that hands over to the main scene.
///
/// main
/// ├── orbit (spins)
/// │   ├── square
/// │   └── filter (translation only)
/// │       └── badge
/// └── zoom (1.5x about its centre)
///     └── detail
fn build_demo() -> anyhow::Result<NodeManager> {
    let mut manager = NodeManager::new();
    let tree = manager.tree_mut();

    let main = tree.create_scene("main", Transition::default());
    let intro = tree.create_with_behavior(
        "intro",
        NodeKind::Scene(Transition::default()),
        Countdown {
            remaining: 30,
            next: main,
        },
    );

    let orbit = tree.create_with_behavior("orbit", NodeKind::Group, Spin::new(1.5));
    tree.set_position(orbit, Point::new(400.0, 300.0))?;
    tree.add_child(main, orbit)?;

    let square = tree.create_with_behavior("square", NodeKind::Group, Square(40.0));
    tree.set_position(square, Point::new(120.0, 0.0))?;
    tree.add_child(orbit, square)?;

    let filter = tree.create_node(
        "filter",
        NodeKind::Filter(Filter::with_preset(
            scenery::FilterKind::Translate,
            FilterPreset::InheritOnlyTranslation,
        )),
    );
    tree.add_child(orbit, filter)?;
    let badge = tree.create_with_behavior("badge", NodeKind::Group, Square(10.0));
    tree.set_pose(badge, Pose::at(Point::new(0.0, -60.0)))?;
    tree.add_child(filter, badge)?;

    let zoom = tree.create_node("zoom", NodeKind::Zoom(ZoomTransform::new()));
    tree.set_position(zoom, Point::new(100.0, 100.0))?;
    tree.add_child(main, zoom)?;
    tree.with_zoom(zoom, |z| {
        z.set_zoom_at(Point::new(50.0, 50.0));
        z.set_scale(1.5);
    })?;
    let detail = tree.create_with_behavior("detail", NodeKind::Group, Square(20.0));
    tree.set_position(detail, Point::new(50.0, 50.0))?;
    tree.add_child(zoom, detail)?;

    manager.push_start(intro)?;
    Ok(manager)
}

/// Intro scene: counts fixed updates, then hands over to `next`.
#[derive(Debug)]
struct Countdown {
    remaining: u32,
    next: NodeId,
}

impl NodeBehavior for Countdown {
    fn update(&mut self, _dt: f64, node: &mut NodeMut<'_>) {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            node.request_transition(TransitionAction::ReplaceAndTake, Some(self.next));
        }
    }

    fn on_enter(&mut self, id: NodeId) {
        tracing::info!(scene = %id, updates = self.remaining, "intro started");
    }

    fn receives_updates(&self) -> bool {
        true
    }
}

/// Constant angular velocity, blended between fixed steps for drawing.
#[derive(Debug)]
struct Spin {
    speed: f64,
    previous: f64,
    current: f64,
}

impl Spin {
    fn new(speed: f64) -> Self {
        Self {
            speed,
            previous: 0.0,
            current: 0.0,
        }
    }
}

impl NodeBehavior for Spin {
    fn update(&mut self, dt: f64, _node: &mut NodeMut<'_>) {
        self.previous = self.current;
        self.current += self.speed * dt;
    }

    fn interpolate(&mut self, interpolation: f64, node: &mut NodeMut<'_>) {
        let blended = scenery::transform::vector::lerp(self.previous, self.current, interpolation);
        node.set_rotation(blended);
    }

    fn receives_updates(&self) -> bool {
        true
    }
}

/// Square outline of the given side, centred on the node origin.
#[derive(Debug)]
struct Square(f64);

impl NodeBehavior for Square {
    fn draw(&mut self, ctx: &mut dyn RenderContext, _info: &DrawInfo<'_>) {
        let h = self.0 * 0.5;
        let mut path = BezPath::new();
        path.move_to((-h, -h));
        path.line_to((h, -h));
        path.line_to((h, h));
        path.line_to((-h, h));
        path.close_path();
        ctx.stroke_path(&path);
    }
}
