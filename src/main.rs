use std::time::Duration;

use chrono::Local;
use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use slides_styles::config::Settings;
use slides_styles::logger::setup_logger;
use slides_styles::theme::{
    CapabilitySnapshot, EnvCapabilities, Preset, TerminalCapabilities, ThemeResolver,
};
use slides_styles::ui::StatusBar;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Behave as if the terminal had colors disabled
    #[arg(long, global = true)]
    no_color: bool,

    /// Behave as if the terminal had a light background
    #[arg(long, global = true)]
    light: bool,

    /// Give up on remote themes after this many seconds
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    /// Log every resolution step
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the style configuration a theme identifier resolves to
    Resolve {
        /// Preset name, URL or path; the configured theme when omitted
        theme: Option<String>,
    },
    /// List the preset names
    Presets,
    /// Print a rendered status bar
    Status {
        #[arg(long, default_value = "")]
        author: String,
        /// Defaults to today
        #[arg(long)]
        date: Option<String>,
        /// One-based slide number
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long, default_value_t = 1)]
        total: usize,
        #[arg(long, default_value_t = 80)]
        width: usize,
        /// Show a search prompt instead of author and date
        #[arg(long)]
        search: Option<String>,
    },
}

impl Cli {
    fn capabilities(&self) -> CapabilitySnapshot {
        let detected = CapabilitySnapshot::capture(&EnvCapabilities);
        CapabilitySnapshot {
            color_disabled: self.no_color || detected.color_disabled,
            dark_background: !self.light && detected.dark_background,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    setup_logger(cli.verbose);

    let settings = Settings::load_or_default();
    let capabilities = cli.capabilities();

    match &cli.command {
        Command::Resolve { theme } => {
            let timeout = cli
                .timeout
                .map(Duration::from_secs)
                .or_else(|| settings.http_timeout());
            let resolver = ThemeResolver::new()
                .with_capabilities(capabilities)
                .with_http_timeout(timeout);
            let config = resolver.resolve(settings.theme_or(theme.as_deref()));
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Command::Presets => {
            for preset in Preset::ALL {
                println!("{}", preset.name());
            }
        }
        Command::Status {
            author,
            date,
            page,
            total,
            width,
            search,
        } => {
            let today = Local::now().format("%Y-%m-%d").to_string();
            let bar = StatusBar {
                author: author.as_str(),
                date: date.as_deref().unwrap_or(&today),
                page: page.saturating_sub(1),
                total: *total,
                search: search.as_deref(),
            };
            println!("{}", bar.render(*width, !capabilities.color_disabled()));
        }
    }

    Ok(())
}
