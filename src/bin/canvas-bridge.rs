use std::path::PathBuf;

use anyhow::Context as _;
use canvas_bridge::{
    AssetBridge, AssetSource, BridgeConfig, ExtensionName, GlVersion, GpuSurface, HeadlessGl,
    ImageBitmapOptions, OutputFormat, Platform, ResizeQuality, SurfaceOpts,
};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "canvas-bridge", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print which WebGL extensions a device profile would expose.
    Caps(CapsArgs),
    /// Load an image (path or URL), optionally transform it, and save it in another format.
    Convert(ConvertArgs),
}

#[derive(Parser, Debug)]
struct CapsArgs {
    /// Host operating system.
    #[arg(long, value_enum, default_value_t = PlatformChoice::Desktop)]
    platform: PlatformChoice,

    /// Android SDK level (with `--platform android`).
    #[arg(long, default_value_t = Platform::ANDROID_JELLY_BEAN_MR2)]
    api_level: u32,

    /// iOS version as `major.minor` (with `--platform ios`).
    #[arg(long, default_value = "12.0")]
    ios_version: String,

    /// Context version, e.g. `3.0` or `es2.0`.
    #[arg(long = "gl", default_value = "3.0")]
    gl_version: String,

    /// Driver extension string to advertise (repeatable).
    #[arg(long = "ext")]
    extensions: Vec<String>,

    /// Emit JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlatformChoice {
    Android,
    Ios,
    Desktop,
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input image path or `http(s)://`/`file://` URL.
    #[arg(long = "in")]
    input: String,

    /// Output path.
    #[arg(long)]
    out: PathBuf,

    /// Output format; defaults to the output file extension, then PNG.
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Bridge configuration JSON (pool, fetch).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Flip rows before saving.
    #[arg(long)]
    flip_y: bool,

    /// Resize to this width.
    #[arg(long)]
    width: Option<u32>,

    /// Resize to this height.
    #[arg(long)]
    height: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Caps(args) => cmd_caps(args),
        Command::Convert(args) => cmd_convert(args),
    }
}

fn platform(args: &CapsArgs) -> anyhow::Result<Platform> {
    Ok(match args.platform {
        PlatformChoice::Android => Platform::Android {
            api_level: args.api_level,
        },
        PlatformChoice::Ios => Platform::parse(&format!("ios:{}", args.ios_version))?,
        PlatformChoice::Desktop => Platform::Desktop,
    })
}

#[derive(serde::Serialize)]
struct CapsReport {
    platform: Platform,
    gl: String,
    max_draw_buffers: i32,
    max_color_attachments: i32,
    extensions: Vec<ExtensionRow>,
}

#[derive(serde::Serialize)]
struct ExtensionRow {
    name: &'static str,
    supported: bool,
}

fn cmd_caps(args: CapsArgs) -> anyhow::Result<()> {
    let platform = platform(&args)?;
    let version = GlVersion::parse(&args.gl_version)?;
    let gl = HeadlessGl::new(version).with_extensions(args.extensions.iter().cloned());
    let surface = GpuSurface::with_backend(SurfaceOpts { platform }, gl);

    let report = CapsReport {
        platform,
        gl: version.to_string(),
        max_draw_buffers: surface.max_draw_buffers(),
        max_color_attachments: surface.max_color_attachments(),
        extensions: ExtensionName::ALL
            .iter()
            .map(|ext| ExtensionRow {
                name: ext.as_str(),
                supported: surface.caps().supports(*ext),
            })
            .collect(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("platform: {:?}", report.platform);
    println!("gl: {}", report.gl);
    println!("max_draw_buffers: {}", report.max_draw_buffers);
    println!("max_color_attachments: {}", report.max_color_attachments);
    for row in &report.extensions {
        let mark = if row.supported { "x" } else { " " };
        println!("[{mark}] {}", row.name);
    }
    Ok(())
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => BridgeConfig::from_path(path)?,
        None => BridgeConfig::default(),
    };
    let bridge = AssetBridge::from_config(&config)?;

    let format = match args.format {
        Some(f) => f,
        None => args
            .out
            .extension()
            .and_then(|e| e.to_str())
            .and_then(|e| e.parse().ok())
            .unwrap_or(OutputFormat::Png),
    };

    let source = if args.input.contains("://") {
        AssetSource::Url(args.input.clone())
    } else {
        AssetSource::Path(PathBuf::from(&args.input))
    };

    let handle = bridge.create_asset();
    let loaded = bridge.load_async(handle, source, |_| {});
    if !loaded.wait() {
        anyhow::bail!(
            "load '{}': {}",
            args.input,
            loaded.error().unwrap_or_default()
        );
    }

    let handle = if args.flip_y || args.width.is_some() || args.height.is_some() {
        let opts = ImageBitmapOptions {
            flip_y: args.flip_y,
            resize_width: args.width,
            resize_height: args.height,
            resize_quality: ResizeQuality::High,
            ..Default::default()
        };
        bridge
            .create_image_bitmap(handle, &opts)
            .with_context(|| format!("transform '{}'", args.input))?
    } else {
        handle
    };

    let saved = bridge.save_async(handle, &args.out, format, |_| {});
    if !saved.wait() {
        anyhow::bail!(
            "save '{}': {}",
            args.out.display(),
            saved.error().unwrap_or_default()
        );
    }

    let asset = bridge.asset(handle)?;
    eprintln!(
        "wrote {} ({}x{}, {format})",
        args.out.display(),
        asset.width(),
        asset.height()
    );
    bridge.pool().wait_idle();
    Ok(())
}
