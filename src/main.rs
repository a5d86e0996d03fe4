use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;
use vidsite::{config, generate, output};

#[derive(Parser)]
#[command(name = "vidsite")]
#[command(version)]
#[command(about = "Static site generator for video transcript archives")]
#[command(long_about = "\
Static site generator for video transcript archives

Run from the project directory. Each folder under content/ becomes one video
page; the index groups videos by category.

Project structure:

  site.toml                        # Optional overrides (site_title, *_dir)
  content/
  ├── kafka_intro/                 # Folder name is the slug
  │   ├── metadata.yaml            # title, youtube_video_id, description, category
  │   ├── transcript.txt
  │   ├── audio.mp3                # or audio/<any>.mp3
  │   └── thumbnail.jpg            # jpg, jpeg or png; or thumbnail/<any>
  └── spark_tuning/
  templates/
  ├── video_template.html          # {PAGE_TITLE} {VIDEO_TITLE} {TRANSCRIPT_SECTION_HTML} ...
  ├── index_template.html          # {SITE_TITLE} {VIDEO_LIST_HTML}
  └── style.css
  html/                            # Generated site

Set RUST_LOG=debug to see unresolved template placeholders.")]
struct Cli {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    let site = config::load_config(Path::new("."))?;

    println!("==> Generating {} → {}", site.content_dir.display(), site.output_dir.display());
    let summary = generate::build(&site)?;
    output::print_build_output(&summary, &site.output_dir);
    println!("==> Build complete: {}", site.output_dir.display());

    Ok(())
}
