use super::cli_main::run_interactive_menu;
use crate::ResponseParser::parser::ResponseParser;
use crate::Utils::load_from_file::load_response_from_file;
use crate::Utils::pretty_print::{pretty_print, print_possibilities};
use crate::settings::{ChemySettings, DEFAULT_CONFIG_FILE, SettingsError};
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use simplelog::{
    ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::error::Error;
use std::fs::File;

/// Parse chemical synthesis proposals from a chat completion response
#[derive(Parser, Debug)]
#[command(name = "Chemy", version, about)]
pub struct ChemyArgs {
    /// Response file (.txt or chat completion .json); interactive menu when omitted
    pub file: Option<String>,

    /// Print the parsed possibilities as JSON
    #[arg(long)]
    pub json: bool,

    /// Seed for placeholder values and metrics (overrides the settings file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Settings file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,
}

pub fn init_logging(settings: &ChemySettings) -> Result<(), Box<dyn Error>> {
    let level = settings.level_filter()?;
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(log_file) = &settings.log_file {
        loggers.push(WriteLogger::new(
            level,
            Config::default(),
            File::create(log_file)?,
        ));
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}

fn settings_for(args: &ChemyArgs) -> Result<ChemySettings, SettingsError> {
    let mut settings = ChemySettings::load(&args.config)?;
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    Ok(settings)
}

pub fn run(args: ChemyArgs) -> Result<(), Box<dyn Error>> {
    let settings = settings_for(&args)?;
    init_logging(&settings)?;

    let Some(file) = &args.file else {
        return run_interactive_menu(&settings);
    };
    let raw = load_response_from_file(file)?;
    let mut parser: ResponseParser<StdRng> = ResponseParser::with_rng(settings.make_rng());
    let possibilities = parser.parse(&raw)?;
    info!("{} possibilities parsed from '{}'", possibilities.len(), file);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&possibilities)?);
    } else {
        print_possibilities(&possibilities);
        for p in &possibilities {
            println!("\n{}", p.title);
            pretty_print(p, settings.show_units);
        }
    }
    Ok(())
}
