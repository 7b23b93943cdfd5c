use anyhow::Context;
use clap::{ArgAction, Parser};
use sketchpad::script::{self, Command};
use sketchpad::{Config, Sketchpad, util};
use std::io::Read;
use std::path::{Path, PathBuf};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SKETCHPAD_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Freehand raster sketchpad driven by pointer event scripts"
)]
struct Cli {
    /// Event script to replay ("-" reads from stdin)
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Config file to use instead of ~/.config/sketchpad/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the palette and exit
    #[arg(long, action = ArgAction::SetTrue)]
    print_palette: bool,

    /// Print the JSON schema of the config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    print_schema: bool,

    /// Write a default config file (at --config or the default path) and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.print_schema {
        println!(
            "{}",
            serde_json::to_string_pretty(&Config::json_schema())?
        );
        return Ok(());
    }

    if cli.init_config {
        let path = Config::create_default_file(cli.config.as_deref())?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if cli.print_palette {
        for (index, entry) in config.palette.to_palette().iter().enumerate() {
            println!("{index}: {} {}", entry.color, entry.name);
        }
        return Ok(());
    }

    let Some(script_path) = cli.script else {
        println!("sketchpad: Freehand raster sketchpad driven by pointer event scripts");
        println!();
        println!("Usage:");
        println!("  sketchpad <SCRIPT>         Replay an event script and print a summary");
        println!("  sketchpad -                Read the script from stdin");
        println!("  sketchpad --print-palette  List the palette colors");
        println!("  sketchpad --help           Show help");
        println!();
        println!("Script commands (one per line, '#' starts a comment):");
        println!("  down X Y | move X Y | up | leave | enter | offset TOP LEFT");
        println!("  color #RRGGBB | palette N | eraser | clear | width N");
        return Ok(());
    };

    let commands = read_script(&script_path)?;
    log::info!("Replaying {} commands", commands.len());

    let mut pad = Sketchpad::from_config(&config).context("Failed to create drawing surface")?;
    script::replay(&mut pad, &commands).context("Replay failed")?;

    print_summary(&mut pad)
}

fn read_script(path: &Path) -> anyhow::Result<Vec<Command>> {
    let source = if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read script from stdin")?;
        source
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script from {}", path.display()))?
    };

    script::parse_script(&source)
        .with_context(|| format!("Invalid script {}", path.display()))
}

fn print_summary(pad: &mut Sketchpad) -> anyhow::Result<()> {
    let tool = pad.tool;
    println!(
        "brush: {} ({}) {}px",
        tool.brush_color,
        util::color_to_name(&tool.brush_color),
        tool.brush_width
    );
    println!("eraser: {}", if tool.is_eraser { "on" } else { "off" });
    println!(
        "drawing: {}",
        if pad.surface.is_drawing() { "yes" } else { "no" }
    );
    match pad.cursor {
        Some(cursor) => println!(
            "cursor: ({}, {}) {}px {}",
            cursor.x, cursor.y, cursor.size, cursor.color
        ),
        None => println!("cursor: hidden"),
    }

    let raster = pad.surface.snapshot().context("Failed to read surface")?;
    println!(
        "inked pixels: {}",
        raster.count_unlike(pad.surface.background())
    );
    Ok(())
}
