use std::env;
use std::path::{Path, PathBuf};

use log::LevelFilter;

use crate::error::{Error, Result};

/// Runtime options for the solver binary.
#[derive(Clone, Debug)]
pub struct SolverOptions {
    /// Input file path for city records. Empty means stdin.
    pub input: String,
    /// Output file path for the tour. Empty means `<input>.tour`
    /// (stdout when reading from stdin); `-` forces stdout.
    pub output: String,
    /// Structured logging level.
    pub log_level: LogLevel,
    /// Logging output format.
    pub log_format: LogFormat,
    /// Include timestamps in log lines.
    pub log_timestamp: bool,
    /// Optional output file path for logs. Empty means stderr.
    pub log_output: String,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            input: String::new(),
            output: String::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Compact,
            log_timestamp: false,
            log_output: String::new(),
        }
    }
}

impl SolverOptions {
    pub fn from_args() -> Result<Self> {
        Self::parse_cli_args(env::args().skip(1))
    }

    fn parse_cli_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();

        let mut args = args.into_iter().map(|arg| arg.as_ref().to_owned());
        while let Some(arg) = args.next() {
            if arg == "--help" || arg == "-h" {
                return Err(Error::invalid_input(Self::usage()));
            }
            let Some(name) = arg.strip_prefix("--") else {
                return Err(Error::invalid_input(format!("unexpected argument: {arg}")));
            };

            if name == "log-timestamp" {
                options.log_timestamp = true;
                continue;
            }

            let value = args
                .next()
                .ok_or_else(|| Error::invalid_input(format!("--{name} requires a value")))?;
            match name {
                "input" => options.input = value,
                "output" => options.output = value,
                "log-level" => options.log_level = LogLevel::parse(&value)?,
                "log-format" => options.log_format = LogFormat::parse(&value)?,
                "log-output" => options.log_output = value,
                _ => {
                    return Err(Error::invalid_input(format!("unknown option: --{name}")));
                }
            }
        }

        Ok(options)
    }

    pub fn usage() -> &'static str {
        concat!(
            "Options:\n",
            "  --input <path>       City records, one `id x y` per line (default: stdin)\n",
            "  --output <path>      Tour output file; `-` for stdout (default: <input>.tour)\n",
            "  --log-level <level>  error|warn|info|debug|trace|off (default: info)\n",
            "  --log-format <fmt>   compact|pretty (default: compact)\n",
            "  --log-timestamp      Include timestamps in log lines\n",
            "  --log-output <path>  Write logs to a file instead of stderr\n",
        )
    }

    pub fn input_path(&self) -> Option<&Path> {
        if self.input.is_empty() {
            None
        } else {
            Some(Path::new(&self.input))
        }
    }

    /// Resolved tour destination: `None` means stdout.
    pub fn output_path(&self) -> Option<PathBuf> {
        if self.output == "-" {
            return None;
        }
        if !self.output.is_empty() {
            return Some(PathBuf::from(&self.output));
        }
        self.input_path()
            .map(|path| PathBuf::from(format!("{}.tour", path.display())))
    }

    pub fn log_output_path(&self) -> Option<&Path> {
        if self.log_output.is_empty() {
            None
        } else {
            Some(Path::new(&self.log_output))
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            "off" => Ok(Self::Off),
            _ => Err(Error::invalid_input(format!(
                "invalid value for --log-level: {value}"
            ))),
        }
    }

    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogFormat {
    Compact,
    Pretty,
}

impl LogFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            _ => Err(Error::invalid_input(format!(
                "invalid value for --log-format: {value}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LogFormat, LogLevel, SolverOptions};

    fn parse(args: &[&str]) -> crate::Result<SolverOptions> {
        SolverOptions::parse_cli_args(args.iter().copied())
    }

    #[test]
    fn defaults_apply_without_arguments() {
        let options = parse(&[]).unwrap();
        assert!(options.input.is_empty());
        assert_eq!(options.log_level, LogLevel::Info);
        assert_eq!(options.log_format, LogFormat::Compact);
        assert!(!options.log_timestamp);
    }

    #[test]
    fn known_options_are_applied() {
        let options = parse(&[
            "--input",
            "cities.txt",
            "--log-level",
            "debug",
            "--log-format",
            "pretty",
            "--log-timestamp",
        ])
        .unwrap();
        assert_eq!(options.input, "cities.txt");
        assert_eq!(options.log_level, LogLevel::Debug);
        assert_eq!(options.log_format, LogFormat::Pretty);
        assert!(options.log_timestamp);
    }

    #[test]
    fn unknown_options_are_rejected() {
        assert!(parse(&["--frobnicate", "1"]).is_err());
        assert!(parse(&["stray"]).is_err());
        assert!(parse(&["--input"]).is_err());
    }

    #[test]
    fn output_path_defaults_to_input_dot_tour() {
        let options = parse(&["--input", "cities.txt"]).unwrap();
        assert_eq!(
            options.output_path().unwrap().to_string_lossy(),
            "cities.txt.tour"
        );

        let stdin_options = parse(&[]).unwrap();
        assert!(stdin_options.output_path().is_none());

        let dash = parse(&["--input", "cities.txt", "--output", "-"]).unwrap();
        assert!(dash.output_path().is_none());
    }

    #[test]
    fn log_level_aliases_parse() {
        assert_eq!(LogLevel::parse("warning").unwrap(), LogLevel::Warn);
        assert!(LogLevel::parse("loud").is_err());
    }
}
