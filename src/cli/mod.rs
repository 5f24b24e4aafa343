mod config;
mod handlers;

pub use config::ConfigFile;

use crate::assembler::OutputSchema;
use crate::error::{ConvertError, Result};
use crate::ids::IdStrategy;
use crate::ConversionOptions;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueEnum};
use std::time::Instant;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SchemaArg {
    Atomic,
    Legacy,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum IdsArg {
    Random,
    Deterministic,
}

pub struct Cli {
    config: ConfigFile,
    start_time: Instant,
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}

impl Cli {
    pub fn new() -> Self {
        Self {
            config: ConfigFile::default(),
            start_time: Instant::now(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        self.run_from(std::env::args_os())
    }

    pub fn run_from<I, T>(&mut self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        self.start_time = Instant::now();
        let matches = build_cli().get_matches_from(args);

        if let Some(config_path) = matches.get_one::<String>("config") {
            self.config = config::load(config_path)?;
        }

        setup_logging(matches.get_count("verbose"))?;

        match matches.subcommand() {
            Some(("convert", sub_matches)) => handlers::handle_convert_command(self, sub_matches),
            Some(("check", sub_matches)) => handlers::handle_check_command(sub_matches),
            Some(("inspect", sub_matches)) => handlers::handle_inspect_command(self, sub_matches),
            _ => {
                println!("No subcommand specified. Use --help for usage information.");
                Ok(())
            }
        }
    }

    pub fn elapsed_ms(&self) -> u128 {
        self.start_time.elapsed().as_millis()
    }

    /// Defaults, then the config file, then command-line flags
    pub fn build_options(&self, matches: &ArgMatches) -> Result<ConversionOptions> {
        let mut options = ConversionOptions::default();
        self.config.apply(&mut options)?;

        if let Some(schema) = opt_arg::<SchemaArg>(matches, "schema") {
            options.schema = match schema {
                SchemaArg::Atomic => OutputSchema::Atomic,
                SchemaArg::Legacy => OutputSchema::Legacy,
            };
        }
        if let Some(ids) = opt_arg::<IdsArg>(matches, "ids") {
            options.id_strategy = match ids {
                IdsArg::Random => IdStrategy::Random,
                IdsArg::Deterministic => IdStrategy::Deterministic,
            };
        }
        if let Some(title) = opt_arg::<String>(matches, "title") {
            options.title = Some(title);
        }
        if let Some(prefix) = opt_arg::<String>(matches, "class-prefix") {
            if prefix.contains(':') {
                return Err(ConvertError::invalid_format(format!(
                    "Class prefix may not contain ':': {}",
                    prefix
                )));
            }
            options.class_prefix = prefix;
        }
        if let Some(seed) = opt_arg::<u64>(matches, "seed") {
            options.seed = Some(seed);
        }
        if flag(matches, "compact") {
            options.pretty = false;
        }
        Ok(options)
    }
}

/// Value of an argument the subcommand may not define
fn opt_arg<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, name: &str) -> Option<T> {
    matches.try_get_one::<T>(name).ok().flatten().cloned()
}

fn flag(matches: &ArgMatches, name: &str) -> bool {
    matches.try_get_one::<bool>(name).ok().flatten().copied().unwrap_or(false)
}

pub(crate) fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a String> {
    matches
        .get_one::<String>(name)
        .ok_or_else(|| ConvertError::invalid_format(format!("Missing argument <{}>", name)))
}

pub fn build_cli() -> Command {
    Command::new(crate::NAME)
        .version(crate::VERSION)
        .about(crate::DESCRIPTION)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path (.toml or .json)")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase verbosity (can be used multiple times)")
                .global(true)
                .action(ArgAction::Count),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a design JSON file into a page-builder document")
                .arg(Arg::new("input").help("Input design JSON file").required(true).index(1))
                .arg(Arg::new("output").short('o').long("output").value_name("FILE").help("Output file (stdout when omitted)"))
                .arg(Arg::new("schema").short('s').long("schema").value_parser(clap::value_parser!(SchemaArg)).help("Output schema"))
                .arg(Arg::new("ids").long("ids").value_parser(clap::value_parser!(IdsArg)).help("Style-class id strategy"))
                .arg(Arg::new("title").long("title").value_name("TITLE").help("Document title"))
                .arg(Arg::new("class-prefix").long("class-prefix").value_name("PREFIX").help("Prefix of generated style-class ids"))
                .arg(Arg::new("seed").long("seed").value_name("N").value_parser(clap::value_parser!(u64)).help("Seed for random id suffixes"))
                .arg(Arg::new("compact").long("compact").help("Write compact JSON").action(ArgAction::SetTrue))
                .arg(Arg::new("stats").long("stats").help("Show conversion statistics").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("check")
                .about("Validate design JSON files without converting them")
                .arg(Arg::new("input").help("Input JSON file or directory").required(true).index(1))
                .arg(Arg::new("recursive").short('r').long("recursive").help("Check all JSON files in directory recursively").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show how each node is classified")
                .arg(Arg::new("input").help("Input design JSON file").required(true).index(1)),
        )
}

fn setup_logging(verbose_count: u8) -> Result<()> {
    let log_level = match verbose_count {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp_secs()
        .try_init()
        .map_err(|e| ConvertError::invalid_format(format!("Failed to set up logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert_matches(args: &[&str]) -> ArgMatches {
        let mut full = vec!["figpress", "convert", "design.json"];
        full.extend_from_slice(args);
        let matches = build_cli().get_matches_from(full);
        matches.subcommand_matches("convert").unwrap().clone()
    }

    #[test]
    fn test_flags_build_options() {
        let matches = convert_matches(&[
            "-s",
            "legacy",
            "--ids",
            "deterministic",
            "--title",
            "Home",
            "--class-prefix",
            "fp-",
            "--compact",
        ]);
        let options = Cli::new().build_options(&matches).unwrap();
        assert_eq!(options.schema, OutputSchema::Legacy);
        assert_eq!(options.id_strategy, IdStrategy::Deterministic);
        assert_eq!(options.title.as_deref(), Some("Home"));
        assert_eq!(options.class_prefix, "fp-");
        assert!(!options.pretty);
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli {
            config: ConfigFile {
                schema: Some("legacy".into()),
                title: Some("From config".into()),
                ..Default::default()
            },
            start_time: Instant::now(),
        };
        let options = cli.build_options(&convert_matches(&["-s", "atomic"])).unwrap();
        assert_eq!(options.schema, OutputSchema::Atomic);
        assert_eq!(options.title.as_deref(), Some("From config"));
        assert!(options.pretty);
    }

    #[test]
    fn test_rejects_colon_prefix() {
        let matches = convert_matches(&["--class-prefix", "e:"]);
        assert!(Cli::new().build_options(&matches).is_err());
    }

    #[test]
    fn test_second_logger_setup_is_an_error() {
        setup_logging(0).ok();
        let err = setup_logging(2).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidFormat { .. }));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        build_cli().debug_assert();
    }
}
