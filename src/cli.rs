use clap::{ArgGroup, Args as ClapArgs, Parser, Subcommand};
use nessus_file_reader::application::dto::{InspectSections, OutputFormat};
use std::path::PathBuf;

/// Query and split Nessus scan result files
#[derive(Parser, Debug)]
#[command(name = "nfr")]
#[command(version)]
#[command(about = "Query and split Nessus (.nessus) scan result files", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Output format: table or json (defaults to the config file, then table)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Config file (defaults to nfr.config.yml in the current directory, if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only print errors on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// File level information
    #[command(group(ArgGroup::new("sections").required(true).multiple(true).args(["size"])))]
    File {
        #[command(flatten)]
        files: FileArgs,

        /// Print file size
        #[arg(long)]
        size: bool,
    },

    /// Scan level information
    #[command(group(
        ArgGroup::new("sections")
            .required(true)
            .multiple(true)
            .args(["scan_summary", "policy_summary", "scan_file_source"])
    ))]
    Scan {
        #[command(flatten)]
        files: FileArgs,

        /// Host counts, credentialed hosts, risk factor totals and scan time
        #[arg(long)]
        scan_summary: bool,

        /// Print a legend under the scan summary
        #[arg(long, requires = "scan_summary")]
        scan_summary_legend: bool,

        /// Policy name, limits, number of plugins and configured login
        #[arg(long)]
        policy_summary: bool,

        /// Product that produced the file (Nessus, Tenable.sc, Tenable.io)
        #[arg(long)]
        scan_file_source: bool,
    },

    /// Host level information, one row per scanned host
    Host {
        #[command(flatten)]
        files: FileArgs,
    },

    /// Split a scan file into parts with at most N hosts each
    Split {
        /// Scan file to split; parts are written next to it
        file: PathBuf,

        /// Hosts per part (defaults to the config file, then 100)
        #[arg(short, long, value_name = "N")]
        batch_size: Option<usize>,
    },
}

#[derive(ClapArgs, Debug)]
pub struct FileArgs {
    /// One or more .nessus files; directories are not traversed
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,
}

impl Command {
    /// Sections requested by a query subcommand, `None` for `split`
    pub fn sections(&self) -> Option<InspectSections> {
        match self {
            Command::File { size, .. } => Some(InspectSections {
                file_size: *size,
                ..Default::default()
            }),
            Command::Scan {
                scan_summary,
                policy_summary,
                scan_file_source,
                ..
            } => Some(InspectSections {
                scan_summary: *scan_summary,
                policy_summary: *policy_summary,
                scan_file_source: *scan_file_source,
                ..Default::default()
            }),
            Command::Host { .. } => Some(InspectSections {
                hosts: true,
                ..Default::default()
            }),
            Command::Split { .. } => None,
        }
    }
}

impl Args {
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
