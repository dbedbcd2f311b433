use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use brushwork::{
    BlendMode, FrameBuffers, Plane, Rgba, StyleParameters, StyleTextures, Stylizer, StylizerOpts,
};

#[derive(Parser, Debug)]
#[command(name = "brushwork", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Stylize a frame and write the last result as a PNG.
    Frame(FrameArgs),
    /// Stylize a run of frames and write each one as a numbered PNG.
    Sequence(SequenceArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Scene color image.
    #[arg(long)]
    color: PathBuf,

    /// Depth image (luma, 1.0 is background).
    #[arg(long)]
    depth: PathBuf,

    /// Encoded view-space normal image.
    #[arg(long)]
    normal: PathBuf,

    /// Brush mask driving the watercolor trail. Defaults to no brush.
    #[arg(long)]
    brush: Option<PathBuf>,

    /// Paper texture. Defaults to a procedural one.
    #[arg(long)]
    paper: Option<PathBuf>,

    /// Cloud noise texture. Defaults to a procedural one.
    #[arg(long)]
    cloud: Option<PathBuf>,

    /// Style parameters JSON.
    #[arg(long)]
    style: Option<PathBuf>,

    /// Override the style file's blend mode (original, sketch, paint, blended).
    #[arg(long)]
    blend: Option<String>,

    /// Seconds per frame fed to the watercolor trail.
    #[arg(long, default_value_t = 1.0 / 30.0)]
    dt: f32,

    /// Seed for procedural textures.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Worker threads for row rendering.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Frames to run over the same inputs before writing.
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct SequenceArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Number of frames to write.
    #[arg(long)]
    frames: u32,

    /// Directory receiving `frame_0000.png`, `frame_0001.png`, ...
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
    }
}

struct Session {
    stylizer: Stylizer,
    frame: FrameBuffers,
    brush: Plane<Rgba>,
    params: StyleParameters,
    dt: f32,
}

impl Session {
    fn prepare(input: &InputArgs) -> anyhow::Result<Self> {
        let color = load_rgba(&input.color, "color")?;
        let depth = brushwork::load_depth_plane(&input.depth)
            .with_context(|| format!("load depth '{}'", input.depth.display()))?;
        let normal = load_rgba(&input.normal, "normal")?;
        let frame = FrameBuffers::new(color, depth, normal).context("assemble frame buffers")?;
        let res = frame.resolution();

        let brush = match &input.brush {
            Some(path) => load_rgba(path, "brush")?,
            None => Plane::filled(res, [0.0; 4]),
        };
        let textures = StyleTextures {
            paper: match &input.paper {
                Some(path) => load_rgba(path, "paper")?,
                None => brushwork::paper_texture(res, input.seed),
            },
            cloud: match &input.cloud {
                Some(path) => load_rgba(path, "cloud")?,
                None => brushwork::cloud_texture(res, input.seed.wrapping_add(1)),
            },
        };

        let mut params = match &input.style {
            Some(path) => StyleParameters::from_path(path)
                .with_context(|| format!("load style '{}'", path.display()))?,
            None => StyleParameters::default(),
        };
        if let Some(name) = &input.blend {
            params.blend_mode = BlendMode::parse(name);
        }

        let opts = StylizerOpts {
            parallel: true,
            threads: input.threads,
        };
        let stylizer = Stylizer::new(res, textures, opts).context("create stylizer")?;

        Ok(Self {
            stylizer,
            frame,
            brush,
            params,
            dt: input.dt,
        })
    }

    fn step(&mut self) -> anyhow::Result<brushwork::OutputFrame> {
        let out = self
            .stylizer
            .render_frame(&self.frame, &self.brush, &self.params, self.dt)
            .with_context(|| format!("stylize frame {}", self.stylizer.accumulator().frames()))?;
        Ok(out)
    }
}

fn load_rgba(path: &Path, what: &str) -> anyhow::Result<Plane<Rgba>> {
    brushwork::load_rgba_plane(path).with_context(|| format!("load {what} '{}'", path.display()))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    if args.frames == 0 {
        anyhow::bail!("--frames must be >= 1");
    }
    let mut session = Session::prepare(&args.input)?;

    let mut last = session.step()?;
    for _ in 1..args.frames {
        last = session.step()?;
    }

    brushwork::write_png(&last, &args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    let mut session = Session::prepare(&args.input)?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    for i in 0..args.frames {
        let out = session.step()?;
        let path = args.out_dir.join(format!("frame_{i:04}.png"));
        brushwork::write_png(&out, &path)
            .with_context(|| format!("write png '{}'", path.display()))?;
        tracing::info!(frame = i, path = %path.display(), "frame written");
    }

    eprintln!("wrote {} frames to {}", args.frames, args.out_dir.display());
    Ok(())
}
