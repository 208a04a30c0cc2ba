//! Build tasks for the feedback-lens workspace.
//!
//! Run with `cargo xtask <task>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace build tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for the CLI and each subcommand
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => generate_man(&out),
        Task::Completions { out } => generate_completions(&out),
    }
}

fn generate_man(out: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;

    let cmd = feedback_lens::command();
    let name = cmd.get_name().to_string();
    write_man_page(out, &name, cmd.clone())?;

    for sub in cmd.get_subcommands() {
        let page = format!("{name}-{}", sub.get_name());
        let sub = sub.clone().name(page.clone());
        write_man_page(out, &page, sub)?;
    }

    println!("man pages written to {}", out.display());
    Ok(())
}

fn write_man_page(out: &Path, name: &str, cmd: clap::Command) -> anyhow::Result<()> {
    let path = out.join(format!("{name}.1"));
    let mut buf = Vec::new();
    clap_mangen::Man::new(cmd)
        .render(&mut buf)
        .with_context(|| format!("failed to render man page for {name}"))?;
    fs::write(&path, buf).with_context(|| format!("failed to write {}", path.display()))
}

fn generate_completions(out: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;

    let mut cmd = feedback_lens::command();
    let name = cmd.get_name().to_string();
    for shell in [
        Shell::Bash,
        Shell::Zsh,
        Shell::Fish,
        Shell::PowerShell,
        Shell::Elvish,
    ] {
        let path = clap_complete::generate_to(shell, &mut cmd, &name, out)
            .with_context(|| format!("failed to generate {shell} completions"))?;
        println!("{}", path.display());
    }
    Ok(())
}
