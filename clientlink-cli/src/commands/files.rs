//! Files command - list, link and upload project files

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Subcommand;
use colored::Colorize;

use super::{get_context, get_logger, track};
use crate::output::{create_table, format_size, info, spinner, success};
use clientlink_core::FileUpload;

#[derive(Subcommand)]
pub enum FilesCommands {
    /// List files attached to a work item
    List {
        /// Work item (project) ID
        project_id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the download link of a file
    Url {
        /// File ID
        file_id: String,
    },
    /// Upload a local file to a work item
    Upload {
        /// Path to the file
        path: PathBuf,
        /// Work item (project) ID
        #[arg(long)]
        project: String,
        /// Category label, e.g. "Design"
        #[arg(long)]
        category: String,
        /// Free-text description
        #[arg(long)]
        description: Option<String>,
        /// MIME type (guessed from the extension if omitted)
        #[arg(long)]
        content_type: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Best-effort MIME type from a file extension
fn guess_content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("mp4") => "video/mp4",
        Some("txt") | Some("md") => "text/plain",
        Some("csv") => "text/csv",
        Some("html") | Some("htm") => "text/html",
        _ => "application/octet-stream",
    }
}

pub async fn run(command: FilesCommands) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();
    let slow = ctx.config.simulate_latency;

    match command {
        FilesCommands::List { project_id, json } => {
            let pb = spinner("Fetching files...", slow && !json);
            let result = ctx.file_service.list_files(&project_id).await;
            pb.finish_and_clear();
            let files = track(&logger, "files list", "files", result)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&files)?);
                return Ok(());
            }

            if files.is_empty() {
                info(&format!("No files for project {}.", project_id));
                return Ok(());
            }

            let mut table = create_table();
            table.set_header(vec!["ID", "Name", "Size", "Type", "Category", "Uploaded"]);
            for f in &files {
                table.add_row(vec![
                    f.id.clone(),
                    f.filename.clone(),
                    format_size(f.size),
                    f.content_type.clone(),
                    f.category.clone(),
                    f.upload_date.to_string(),
                ]);
            }
            println!("{}", table);
        }
        FilesCommands::Url { file_id } => {
            let pb = spinner("Generating link...", slow);
            let result = ctx.file_service.download_url(&file_id).await;
            pb.finish_and_clear();
            let url = track(&logger, "files url", "files", result)?;
            println!("{}", url);
        }
        FilesCommands::Upload {
            path,
            project,
            category,
            description,
            content_type,
            json,
        } => {
            let metadata = std::fs::metadata(&path)
                .with_context(|| format!("Cannot read {}", path.display()))?;
            if !metadata.is_file() {
                return Err(anyhow!("{} is not a file", path.display()));
            }
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| anyhow!("{} has no usable file name", path.display()))?;
            let content_type =
                content_type.unwrap_or_else(|| guess_content_type(&path).to_string());
            let upload = FileUpload::new(name, metadata.len(), content_type);

            let pb = spinner(&format!("Uploading {}...", name), slow && !json);
            let result = ctx
                .file_service
                .upload(&upload, &project, &category, description.as_deref())
                .await;
            pb.finish_and_clear();
            let file = track(&logger, "files upload", "files", result)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&file)?);
            } else {
                success(&format!("Uploaded {} ({})", file.filename, format_size(file.size)));
                println!("  ID: {}", file.id.bold());
                println!("  URL: {}", file.url);
            }
        }
    }

    Ok(())
}
