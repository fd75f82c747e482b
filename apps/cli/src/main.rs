//! `formgate` - check node-tree documents from the command line.
//!
//! Exit status: 0 when the form would be submitted, 1 when validation
//! blocks it, 2 when the document or settings cannot be loaded.

mod cli;
mod output;
mod settings;

use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use formgate_form::{Form, ValidatorRegistry, load_nodes};

use cli::{CheckArgs, Cli, Command};
use settings::Settings;

const EXIT_BLOCKED: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Check(args) => check(&args),
        Command::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "formgate", &mut std::io::stdout());
            Ok(ExitCode::SUCCESS)
        }
    };

    result.unwrap_or_else(|e| {
        eprintln!("error: {e:#}");
        ExitCode::from(EXIT_ERROR)
    })
}

fn check(args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let settings = Settings::load(args)?;
    if let Err(e) = formgate_log::init(&settings.log) {
        eprintln!("warning: {e}");
    }
    tracing::debug!(?settings, "settings loaded");

    let path = &args.file;
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let nodes = load_nodes(&json, &ValidatorRegistry::with_builtins())
        .with_context(|| format!("failed to load {}", path.display()))?;

    let file = path.display().to_string();
    let mut form = Form::new(nodes)
        .should_validate(settings.should_validate)
        .on_submit(move || tracing::info!(file = %file, "form submitted"));
    let submission = form.validate();

    println!("{}", output::render(settings.output, &submission)?.trim_end());

    Ok(if submission.is_submitted() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_BLOCKED)
    })
}
