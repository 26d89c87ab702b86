//! Parsing command-line arguments.

use clap::{
    builder::TypedValueParser, crate_description, crate_name, crate_version, error::ErrorKind,
    value_parser, Arg, ArgAction, ArgMatches, Command, Error,
};
use lifegame_lib::Config;
use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
    time::Duration,
};

/// Formats of a configuration file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Yaml,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(ConfigFormat::Json),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "toml" => Some(ConfigFormat::Toml),
            _ => None,
        }
    }

    fn read(self, path: &Path) -> Result<Config, Error> {
        let file = File::open(path).map_err(|e| Error::raw(ErrorKind::Io, e))?;
        let mut reader = BufReader::new(file);
        let config = match self {
            ConfigFormat::Json => serde_json::from_reader(reader)
                .map_err(|e| invalid(format!("Invalid JSON config: {}", e)))?,
            ConfigFormat::Yaml => serde_yaml::from_reader(reader)
                .map_err(|e| invalid(format!("Invalid YAML config: {}", e)))?,
            ConfigFormat::Toml => {
                let mut string = String::new();
                reader
                    .read_to_string(&mut string)
                    .map_err(|e| Error::raw(ErrorKind::Io, e))?;
                toml::from_str(&string)
                    .map_err(|e| invalid(format!("Invalid TOML config: {}", e)))?
            }
        };
        Ok(config)
    }
}

fn invalid(message: String) -> Error {
    Error::raw(ErrorKind::InvalidValue, format!("{}\n", message))
}

/// A struct to store the parse results.
#[derive(Clone, Debug)]
pub(crate) struct Args {
    pub(crate) config: Config,
    pub(crate) patterns: PathBuf,
    pub(crate) interval: Duration,
    pub(crate) generations: u64,
    pub(crate) pattern: Option<usize>,
    #[cfg(feature = "tui")]
    pub(crate) no_tui: bool,
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        Args::from_matches(&Args::command().try_get_matches()?)
    }

    fn command() -> Command {
        let mut command = Command::new(crate_name!())
            .version(crate_version!())
            .about(crate_description!())
            .long_about(
                "Conway's Game of Life on a fixed-size board\n\
                 \n\
                 The board does not wrap around: cells outside it are always dead.\n\
                 Each generation is computed by several worker threads, and only \n\
                 the region that may contain living cells is scanned.\n\
                 \n\
                 Patterns are read from a directory of Plaintext (.txt, .cells) \n\
                 and RLE (.rle) files, sorted by file name.\n",
            )
            .arg(
                Arg::new("WIDTH")
                    .help("Width of the board, a multiple of 8")
                    .index(1)
                    .value_parser(value_parser!(i32).range(1..)),
            )
            .arg(
                Arg::new("HEIGHT")
                    .help("Height of the board")
                    .index(2)
                    .value_parser(value_parser!(i32).range(1..)),
            )
            .arg(
                Arg::new("CONFIG")
                    .help("Reads the configuration from a file")
                    .long_help(
                        "Reads the configuration from a file\n\
                         The format is chosen by the extension: .json, .yaml / .yml or .toml.\n\
                         Other arguments override the values in the file.\n",
                    )
                    .long("config")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("PATTERNS")
                    .help("Directory of pattern files")
                    .long("patterns")
                    .short('p')
                    .default_value("patterns")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("WORKERS")
                    .help("Number of worker threads")
                    .long_help(
                        "Number of worker threads\n\
                         Defaults to the number of hardware threads. \
                         1 computes every generation on the main thread.\n",
                    )
                    .long("workers")
                    .short('w')
                    .value_parser(value_parser!(usize)),
            )
            .arg(
                Arg::new("NOREGION")
                    .help("Scans the whole board in every generation")
                    .long("no-region")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("SEED")
                    .help("Seed of the random board")
                    .long("seed")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("INTERVAL")
                    .help("Milliseconds between two generations in the TUI")
                    .long("interval")
                    .short('i')
                    .default_value("100")
                    .value_parser(value_parser!(u64).map(Duration::from_millis)),
            )
            .arg(
                Arg::new("GENERATIONS")
                    .help("Number of generations to run without the TUI")
                    .long("generations")
                    .short('g')
                    .default_value("100")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("PATTERN")
                    .help("Index of the pattern to start from")
                    .long("pattern")
                    .value_parser(value_parser!(usize)),
            );

        #[cfg(feature = "tui")]
        {
            command = command.arg(
                Arg::new("NOTUI")
                    .help("Runs the generations and prints the result, without entering the TUI")
                    .long("no-tui")
                    .short('n')
                    .action(ArgAction::SetTrue),
            );
        }

        #[cfg(not(feature = "tui"))]
        {
            command = command.arg(
                Arg::new("NOTUI")
                    .help("Ignored: this build has no TUI")
                    .long("no-tui")
                    .short('n')
                    .hide(true)
                    .action(ArgAction::SetTrue),
            );
        }

        command
    }

    fn from_matches(matches: &ArgMatches) -> Result<Self, Error> {
        let mut config = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => match ConfigFormat::from_path(path) {
                Some(format) => format.read(path)?,
                None => {
                    return Err(invalid(format!(
                        "Unknown config format: {}",
                        path.display()
                    )))
                }
            },
            None => Config::default(),
        };

        if let Some(&width) = matches.get_one::<i32>("WIDTH") {
            config.width = width;
        }
        if let Some(&height) = matches.get_one::<i32>("HEIGHT") {
            config.height = height;
        }
        if let Some(&workers) = matches.get_one::<usize>("WORKERS") {
            config.workers = Some(workers);
        }
        if matches.get_flag("NOREGION") {
            config.track_region = false;
        }
        if let Some(&seed) = matches.get_one::<u64>("SEED") {
            config.seed = Some(seed);
        }

        config.validate().map_err(|e| invalid(e.to_string()))?;

        let patterns = matches
            .get_one::<PathBuf>("PATTERNS")
            .cloned()
            .unwrap_or_else(|| PathBuf::from("patterns"));
        let interval = matches
            .get_one::<Duration>("INTERVAL")
            .copied()
            .unwrap_or(Duration::from_millis(100));
        let generations = matches.get_one::<u64>("GENERATIONS").copied().unwrap_or(100);

        Ok(Args {
            config,
            patterns,
            interval,
            generations,
            pattern: matches.get_one::<usize>("PATTERN").copied(),
            #[cfg(feature = "tui")]
            no_tui: matches.get_flag("NOTUI"),
        })
    }
}
