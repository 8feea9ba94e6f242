use ai_photo_editor::ai::mime::extension_for_mime;
use ai_photo_editor::encode::DataUrl;
use ai_photo_editor::presets::{AdjustmentPreset, FilterPreset};
use ai_photo_editor::{EditMode, Hotspot, ImageFile, PhotoEditor, Session};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "ai-photo-editor")]
#[command(about = "Edit photos with a generative image model")]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Localized edit at a pixel coordinate.
    Edit {
        #[command(flatten)]
        io: IoArgs,
        #[arg(long, value_enum, default_value = "modify")]
        mode: EditMode,
        #[arg(long)]
        x: u32,
        #[arg(long)]
        y: u32,
        #[arg(long)]
        prompt: String,
    },
    /// Replace the background behind the main subject.
    Background {
        #[command(flatten)]
        io: IoArgs,
        #[arg(long)]
        prompt: String,
    },
    /// Apply a stylistic filter to the whole image.
    Filter {
        #[command(flatten)]
        io: IoArgs,
        #[arg(long, required_unless_present = "preset", conflicts_with = "preset")]
        prompt: Option<String>,
        #[arg(long, value_enum)]
        preset: Option<FilterPreset>,
    },
    /// Apply a global photo adjustment.
    Adjust {
        #[command(flatten)]
        io: IoArgs,
        #[arg(long, required_unless_present = "preset", conflicts_with = "preset")]
        prompt: Option<String>,
        #[arg(long, value_enum)]
        preset: Option<AdjustmentPreset>,
    },
}

#[derive(Debug, Args)]
struct IoArgs {
    /// Source image.
    #[arg(value_name = "INPUT")]
    input: PathBuf,
    /// Where to write the result; defaults to output/<operation>_<uuid>.<ext>.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn resolve_prompt(prompt: Option<String>, preset: Option<&'static str>) -> String {
    prompt.or_else(|| preset.map(str::to_string)).unwrap_or_default()
}

async fn execute(editor: &PhotoEditor, command: Command) -> Result<(String, IoArgs, &'static str)> {
    match command {
        Command::Edit {
            io,
            mode,
            x,
            y,
            prompt,
        } => {
            let file = ImageFile::from_path(&io.input).await?;
            let url = editor
                .generate_edited_image(&file, &prompt, Hotspot::new(x, y), mode)
                .await?;
            Ok((url, io, "edit"))
        }
        Command::Background { io, prompt } => {
            let file = ImageFile::from_path(&io.input).await?;
            let url = editor
                .generate_replaced_background_image(&file, &prompt)
                .await?;
            Ok((url, io, "background"))
        }
        Command::Filter { io, prompt, preset } => {
            let file = ImageFile::from_path(&io.input).await?;
            let prompt = resolve_prompt(prompt, preset.map(|p| p.prompt()));
            let url = editor.generate_filtered_image(&file, &prompt).await?;
            Ok((url, io, "filter"))
        }
        Command::Adjust { io, prompt, preset } => {
            let file = ImageFile::from_path(&io.input).await?;
            let prompt = resolve_prompt(prompt, preset.map(|p| p.prompt()));
            let url = editor.generate_adjusted_image(&file, &prompt).await?;
            Ok((url, io, "adjust"))
        }
    }
}

async fn save_result(data_url: &str, output: Option<PathBuf>, label: &str) -> Result<PathBuf> {
    let url = DataUrl::parse(data_url)?;
    let bytes = url.decode()?;

    let path = match output {
        Some(path) => path,
        None => Path::new("output").join(format!(
            "{}_{}.{}",
            label,
            Uuid::new_v4(),
            extension_for_mime(&url.mime_type)
        )),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    tokio::fs::write(&path, &bytes)
        .await
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

async fn run(args: CliArgs) -> Result<PathBuf> {
    let editor = PhotoEditor::new(Session::from_env());
    let (data_url, io, label) = execute(&editor, args.command).await?;
    save_result(&data_url, io.output, label).await
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ai_photo_editor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    match run(args).await {
        Ok(path) => {
            info!("Saved result to {}", path.display());
            Ok(())
        }
        Err(e) => {
            error!("Edit failed: {:#}", e);
            std::process::exit(1);
        }
    }
}
