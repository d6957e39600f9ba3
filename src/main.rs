//! board-detect - print the serial ports that belong to USB-to-UART boards
//!
//! Lists every attached port whose hardware ID carries a known bridge vendor
//! ID (CH340 `1a86`, CP210x `10c4` by default), one device path per line.

mod settings;

use std::io;
use std::path::PathBuf;

use board_locator::{BoardLocator, OutputStyle, SystemPorts};
use clap::Parser;
use log::{debug, warn, LevelFilter};

use crate::settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "board-detect")]
#[command(version, about = "Print serial ports of CH340/CP210x style USB boards")]
struct Cli {
    /// TOML file with the vendor table (default: ./BoardDetect.toml if present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the chip family after each device, tab separated
    #[arg(long)]
    chip: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// No log output at all
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn output_style(&self) -> OutputStyle {
        if self.chip {
            OutputStyle::WithChip
        } else {
            OutputStyle::Plain
        }
    }
}

fn init_logging(cli: &Cli) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(cli.log_level());
    if !cli.quiet && cli.verbose == 0 {
        builder.parse_default_env();
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let settings = Settings::load(cli.config.as_deref())?;
    debug!("Loaded settings: {:?}", settings);

    if cli.print_config {
        print!("{}", settings.to_toml()?);
        return Ok(());
    }

    let vendors = settings.vendor_table()?;
    if vendors.is_empty() {
        warn!("Vendor table is empty, no port can match");
    }
    let locator = BoardLocator::new(vendors);
    let stdout = io::stdout();
    locator.run(SystemPorts, &mut stdout.lock(), cli.output_style())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_is_plain_output() {
        let cli = Cli::try_parse_from(["board-detect"]).unwrap();
        assert_eq!(cli.output_style(), OutputStyle::Plain);
        assert_eq!(cli.log_level(), LevelFilter::Warn);
        assert!(cli.config.is_none());
        assert!(!cli.print_config);
    }

    #[test]
    fn flags() {
        let cli =
            Cli::try_parse_from(["board-detect", "--chip", "-vv", "-c", "boards.toml"]).unwrap();
        assert_eq!(cli.output_style(), OutputStyle::WithChip);
        assert_eq!(cli.log_level(), LevelFilter::Debug);
        assert_eq!(cli.config, Some(PathBuf::from("boards.toml")));

        let cli = Cli::try_parse_from(["board-detect", "-vvvv"]).unwrap();
        assert_eq!(cli.log_level(), LevelFilter::Trace);

        let cli = Cli::try_parse_from(["board-detect", "-q"]).unwrap();
        assert_eq!(cli.log_level(), LevelFilter::Off);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["board-detect", "-q", "-v"]).is_err());
    }

    #[test]
    fn positional_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["board-detect", "/dev/ttyUSB0"]).is_err());
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
