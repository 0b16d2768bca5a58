use clap::{Parser, Subcommand};
use shadowbox_render::{DebugTextRenderer, Renderer};
use shadowbox_scene::Scene;
use shadowbox_tools::SceneInspector;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shadowbox-cli", about = "CLI tool for the shadow mapping demo")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Inspect scene state after a number of fixed-step frames
    Inspect {
        /// Number of 60 Hz frames to advance before inspecting
        #[arg(short, long, default_value = "0")]
        frames: u64,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Run the animation headless and print the scene before and after
    Simulate {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "60")]
        frames: u64,
        /// Frame delta in milliseconds
        #[arg(long, default_value = "16.0")]
        dt_ms: f32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("shadowbox-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("scene: {}", shadowbox_scene::crate_info());
            println!("render: {}", shadowbox_render::crate_info());
            println!("tools: {}", shadowbox_tools::crate_info());
            println!("input: {}", shadowbox_input::crate_info());
        }
        Commands::Inspect { frames, json } => {
            let mut scene = Scene::new();
            for _ in 0..frames {
                scene.advance(1.0 / 60.0);
            }

            let summary = SceneInspector::summary(&scene);
            let objects = SceneInspector::objects(&scene);
            if json {
                let doc = serde_json::json!({
                    "summary": summary,
                    "objects": objects,
                });
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                println!("{summary}");
                for info in &objects {
                    println!("  {info}");
                }
            }
        }
        Commands::Simulate { frames, dt_ms } => {
            println!("Headless run: frames={frames}, dt={dt_ms}ms");

            let renderer = DebugTextRenderer::new();
            let mut scene = Scene::new();
            println!("{}", renderer.render(&scene));

            let dt = dt_ms / 1000.0;
            for _ in 0..frames {
                scene.advance(dt);
                tracing::debug!(
                    "frame {} light_x={:.2} camera_x={:.2}",
                    scene.frame(),
                    scene.light.position.x,
                    scene.camera.position.x
                );
            }

            println!("{}", renderer.render(&scene));
        }
    }

    Ok(())
}
