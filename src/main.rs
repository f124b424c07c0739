mod cli;
mod config;

use cli::{Args, Command};
use config::{ConfigFile, Settings};
use nessus_file_reader::adapters::outbound::console::StderrProgressReporter;
use nessus_file_reader::adapters::outbound::filesystem::{FileSystemPartWriter, FileSystemReader};
use nessus_file_reader::application::dto::{InspectRequest, SplitRequest};
use nessus_file_reader::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use nessus_file_reader::application::use_cases::{InspectScanUseCase, SplitReportUseCase};
use nessus_file_reader::shared::error::ExitCode;
use nessus_file_reader::shared::Result;
use owo_colors::OwoColorize;
use std::process;

fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        // --help and --version exit 0, usage errors exit 2
        Err(e) => e.exit(),
    };

    if let Err(e) = run(args) {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let batch_size = match args.command {
        Command::Split { batch_size, .. } => batch_size,
        _ => None,
    };
    let settings = Settings::resolve(config.as_ref(), args.format, batch_size)?;

    let reader = FileSystemReader::with_max_file_size(settings.max_file_size);
    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let sections = args.command.sections();
    let show_legend = matches!(
        args.command,
        Command::Scan {
            scan_summary_legend: true,
            ..
        }
    );
    match args.command {
        Command::Split { file, .. } => {
            let use_case =
                SplitReportUseCase::new(reader, FileSystemPartWriter::new(), progress_reporter);
            let response = use_case.execute(SplitRequest::new(file, settings.batch_size))?;
            for part in &response.parts {
                println!("{}", part.display());
            }
        }
        Command::File { files, .. } | Command::Host { files } | Command::Scan { files, .. } => {
            let sections = sections.unwrap_or_default();
            let use_case = InspectScanUseCase::new(reader, progress_reporter);
            let response = use_case.execute(InspectRequest::new(files.files, sections))?;

            let mut model = response.model;
            model.show_legend = show_legend;

            if !args.quiet {
                eprintln!("{}", FormatterFactory::progress_message(settings.format));
            }
            let formatted_output = FormatterFactory::create(settings.format).format(&model)?;

            let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
            presenter.present(&formatted_output)?;
        }
    }

    Ok(())
}

/// Explicit `--config` must exist; otherwise `nfr.config.yml` in the current
/// directory is used when present
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => {
            let current_dir = std::env::current_dir()?;
            config::discover_config(&current_dir)
        }
    }
}
