//! DTerm Demo Binary
//!
//! Run with: cargo run -- [options]
//!
//! Options:
//!   --scene <path>  Build the scene described by a JSON file
//!                   (default: one double-bordered panel of sample text)
//!   --stdin         Read protocol commands from stdin, one JSON object per
//!                   line, answering each on stdout
//!
//! Without `--stdin` the page HTML is printed once and the program exits.

use std::env;
use log::{debug, info};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use dterm::protocol::{handle_line, serialize_response};
use dterm::SceneConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line args
    let args: Vec<String> = env::args().collect();

    let mut scene_path: Option<String> = None;
    let mut interactive = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--scene" => {
                if i + 1 < args.len() {
                    scene_path = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    eprintln!("Error: --scene requires a path");
                    std::process::exit(1);
                }
            }
            "--stdin" => {
                interactive = true;
                i += 1;
            }
            "--help" | "-h" => {
                println!("DTerm demo v0.1.0");
                println!();
                println!("Usage: dterm-demo [--scene <path>] [--stdin]");
                println!();
                println!("Options:");
                println!("  --scene <path>  Build the scene described by a JSON file");
                println!("  --stdin         Read JSON commands from stdin, one per line");
                println!("  --help, -h      Show this help");
                std::process::exit(0);
            }
            arg => {
                eprintln!("Error: unknown argument {}", arg);
                std::process::exit(1);
            }
        }
    }

    let scene = match scene_path {
        Some(ref path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };
    let mut surface = scene.build()?;
    info!(
        "Scene ready: host {}x{}, {} panel(s)",
        scene.host.width,
        scene.host.height,
        surface.panels().len()
    );

    let mut stdout = tokio::io::stdout();

    if !interactive {
        let html = surface.renderer().to_html(surface.host())?;
        stdout.write_all(html.as_bytes()).await?;
        stdout.flush().await?;
        return Ok(());
    }

    let mut reader = BufReader::new(tokio::io::stdin());
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            info!("Input closed");
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        debug!("Command: {}", trimmed);
        let response = handle_line(&mut surface, trimmed);
        stdout
            .write_all(format!("{}\n", serialize_response(&response)).as_bytes())
            .await?;
        stdout.flush().await?;
    }

    Ok(())
}
