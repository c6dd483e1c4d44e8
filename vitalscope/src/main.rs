use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vitalscope_core::cli;
use vitalscope_core::cli::ReportArgs;
use vitalscope_core::logging::{OutputFormat, default_output_format, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "vitalscope",
    version,
    about = "Vitalscope: Core Web Vitals field and local reports"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the field and local report for a page
    Report {
        #[arg(long)]
        url: String,

        /// Browser tab the page was loaded in
        #[arg(long)]
        tab: Option<u64>,

        /// Path to the vitalscope config file
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print the cache key for a page URL
    Key { url: String },

    /// Store a local metrics bundle for a page
    Record {
        #[arg(long)]
        url: String,

        /// JSON bundle as written by the metrics collector
        #[arg(long)]
        file: PathBuf,

        #[arg(long)]
        tab: Option<u64>,

        /// The tab was loaded in the background
        #[arg(long, requires = "tab")]
        background: bool,

        /// Cache file to write into
        #[arg(long, default_value = "vitalscope-cache.json")]
        cache: PathBuf,
    },

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Report {
            url,
            tab,
            config,
            format,
        } => {
            let format = format.unwrap_or_else(default_output_format);
            init_logging(format);

            cli::report(ReportArgs {
                url,
                tab,
                config,
                format,
            })
            .await?;
        }

        Command::Key { url } => cli::key(&url)?,

        Command::Record {
            url,
            file,
            tab,
            background,
            cache,
        } => {
            init_logging(default_output_format());

            let key = cli::record(&cache, &url, &file, tab, background).await?;
            println!("✔ Recorded local metrics under key {key}");
        }

        Command::Config { cmd } => {
            init_logging(OutputFormat::Text);
            cli::conf::run(cmd)?;
        }
    }

    Ok(())
}
