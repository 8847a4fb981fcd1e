//! Upload commands for individual files and ZIP archives.

use super::{format_score, get_database, load_config};
use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use talentlens_core::Resume;
use talentlens_ingest::{DocumentFormat, Pipeline, UploadItem};
use tokio::runtime::Runtime;

pub fn run(files: &[PathBuf], provider: Option<&str>) -> Result<()> {
    let db = get_database()?;
    let config = load_config()?;
    let pipeline = Pipeline::new(db, &config);

    let mut items = Vec::new();
    for path in files {
        items.push(item_from_path(path)?);
    }

    let rt = Runtime::new().context("Failed to create async runtime")?;

    if items.len() == 1 {
        let item = items.remove(0);
        let pb = spinner(&format!("Analyzing {}", item.file_name));

        let resume = rt.block_on(pipeline.upload_one(item, provider))?;

        pb.finish_and_clear();
        println!("{}", "Analyzed:".green().bold());
        print_resume_line(&resume);
    } else {
        let total = items.len();
        let pb = spinner(&format!("Analyzing {} resumes", total));

        let resumes = rt.block_on(pipeline.upload_many(items, provider))?;

        pb.finish_and_clear();
        println!(
            "{} {}/{} resumes",
            "Analyzed:".green().bold(),
            resumes.len(),
            total
        );
        for resume in &resumes {
            print_resume_line(resume);
        }
        if resumes.len() < total {
            println!(
                "{} {} file(s) failed, run with --verbose for details",
                "Skipped:".yellow().bold(),
                total - resumes.len()
            );
        }
    }

    Ok(())
}

pub fn run_zip(archive: &Path, provider: Option<&str>) -> Result<()> {
    let db = get_database()?;
    let config = load_config()?;
    let pipeline = Pipeline::new(db, &config);

    let bytes = std::fs::read(archive)
        .with_context(|| format!("Failed to read archive: {}", archive.display()))?;

    let rt = Runtime::new().context("Failed to create async runtime")?;
    let pb = spinner(&format!("Processing {}", archive.display()));

    let resumes = rt.block_on(pipeline.upload_archive(&bytes, provider))?;

    pb.finish_and_clear();
    println!(
        "{} {} resume(s) from archive",
        "Analyzed:".green().bold(),
        resumes.len()
    );
    for resume in &resumes {
        print_resume_line(resume);
    }

    Ok(())
}

fn item_from_path(path: &Path) -> Result<UploadItem> {
    if !path.is_file() {
        anyhow::bail!("File does not exist: {}", path.display());
    }

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let format = DocumentFormat::from_extension(extension).ok_or_else(|| {
        anyhow::anyhow!(
            "Unsupported file type: {} (expected .pdf, .doc, or .docx)",
            path.display()
        )
    })?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("resume")
        .to_string();
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    Ok(UploadItem {
        file_name,
        mime_type: format.mime_type().to_string(),
        bytes,
    })
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn print_resume_line(resume: &Resume) {
    let name = if resume.candidate_name.is_empty() {
        resume.file_name.as_str()
    } else {
        resume.candidate_name.as_str()
    };
    println!(
        "  {} {} ({})",
        format_score(resume.match_score),
        name.white().bold(),
        resume.file_name
    );
}
