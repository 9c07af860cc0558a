use anyhow::Context;
use clap::Args;
use colored::*;
use learnpath_cli::args::ExportKind;
use learnpath_cli::Config;
use learnpath_formatter::{export_file_name, ExportFormat};
use learnpath_roadmaps::RoadmapStore;
use std::io::Write;
use std::path::PathBuf;

use super::output::confirm;

#[derive(Args)]
pub struct ExportArgs {
    #[arg(value_enum, default_value = "json")]
    pub kind: ExportKind,
    /// Output file; defaults to learning-roadmaps-<date>.<ext> in the current directory
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,
    /// Write the document to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
    /// Gzip backups regardless of LEARNPATH_COMPRESS_BACKUPS
    #[arg(long)]
    pub compress: bool,
}

#[derive(Args)]
pub struct ImportArgs {
    /// JSON snapshot or gzip backup to import
    pub file: PathBuf,
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

pub async fn export(store: &RoadmapStore, config: &Config, args: ExportArgs) -> anyhow::Result<()> {
    let format = args.kind.format(args.compress || config.compress_backups);

    let data = match format {
        ExportFormat::Markdown => store.export_markdown().await.into_bytes(),
        ExportFormat::Json => store.export_json().await?,
        ExportFormat::JsonGzip => store.export_backup(true).await?,
    };

    if args.stdout {
        if format == ExportFormat::JsonGzip {
            anyhow::bail!("Compressed backups cannot be written to stdout");
        }
        std::io::stdout().write_all(&data)?;
        return Ok(());
    }

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(export_file_name(format, store.today())));
    tokio::fs::write(&path, &data)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "{}",
        format!("✅ Exported {} bytes to {}", data.len(), path.display()).green()
    );
    Ok(())
}

pub async fn import(store: &RoadmapStore, args: ImportArgs) -> anyhow::Result<()> {
    let data = tokio::fs::read(&args.file)
        .await
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    if !confirm("Importing replaces all current roadmaps and progress. Continue?", args.yes)? {
        println!("{}", "Import cancelled".yellow());
        return Ok(());
    }

    let summary = store.import_json(&data).await?;
    println!(
        "{}",
        format!(
            "✅ Imported {} roadmaps and {} categories",
            summary.roadmaps, summary.categories
        )
        .green()
    );
    Ok(())
}
