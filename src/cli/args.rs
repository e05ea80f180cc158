use clap::Parser;
use std::path::PathBuf;

use crate::credential::KeySource;

#[derive(Parser, Debug)]
#[command(name = "trad")]
#[command(about = "Translate a word from the terminal with DeepL")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Optional target country code followed by the word to translate
    #[arg(value_name = "[COUNTRY] WORD", num_args = 0..=2)]
    pub positionals: Vec<String>,

    /// Show the usage text
    #[arg(short = 'h', long)]
    pub help: bool,

    /// Show the version
    #[arg(short = 'v', long)]
    pub version: bool,

    /// List known DeepL target language codes
    #[arg(short = 'l', long)]
    pub languages: bool,

    /// Where the API key comes from
    #[arg(long, env = "TRAD_KEY_SOURCE", value_enum)]
    pub key_source: Option<KeySource>,

    /// Env file providing API_KEY (used with --key-source env)
    #[arg(long, env = "TRAD_ENV_FILE")]
    pub env_file: Option<PathBuf>,

    /// Translate endpoint URL
    #[arg(long, env = "TRAD_ENDPOINT")]
    pub endpoint: Option<String>,
}

/// What a command line asks trad to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Version,
    Languages,
    Translate {
        country: Option<String>,
        word: String,
    },
}

impl Args {
    /// Reduces the parsed flags and positionals to one action.
    ///
    /// Flags win over positionals; without flags, zero positionals show the
    /// usage, one is the word, two are the country then the word.
    pub fn invocation(&self) -> Invocation {
        if self.help {
            return Invocation::Help;
        }
        if self.version {
            return Invocation::Version;
        }
        if self.languages {
            return Invocation::Languages;
        }

        match self.positionals.as_slice() {
            [word] => Invocation::Translate {
                country: None,
                word: word.clone(),
            },
            [country, word, ..] => Invocation::Translate {
                country: Some(country.clone()),
                word: word.clone(),
            },
            [] => Invocation::Help,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("trad").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_arguments_is_help() {
        assert_eq!(parse(&[]).invocation(), Invocation::Help);
    }

    #[test]
    fn test_help_flags() {
        assert_eq!(parse(&["--help"]).invocation(), Invocation::Help);
        assert_eq!(parse(&["-h"]).invocation(), Invocation::Help);
    }

    #[test]
    fn test_version_flags() {
        assert_eq!(parse(&["--version"]).invocation(), Invocation::Version);
        assert_eq!(parse(&["-v"]).invocation(), Invocation::Version);
    }

    #[test]
    fn test_languages_flag() {
        assert_eq!(parse(&["-l"]).invocation(), Invocation::Languages);
    }

    #[test]
    fn test_single_word() {
        assert_eq!(
            parse(&["hello"]).invocation(),
            Invocation::Translate {
                country: None,
                word: "hello".to_string()
            }
        );
    }

    #[test]
    fn test_country_and_word() {
        assert_eq!(
            parse(&["de", "hello"]).invocation(),
            Invocation::Translate {
                country: Some("de".to_string()),
                word: "hello".to_string()
            }
        );
    }

    #[test]
    fn test_help_after_country() {
        assert_eq!(parse(&["de", "--help"]).invocation(), Invocation::Help);
    }

    #[test]
    fn test_too_many_positionals_is_error() {
        assert!(Args::try_parse_from(["trad", "de", "hello", "world"]).is_err());
    }

    #[test]
    fn test_unknown_flag_is_error() {
        assert!(Args::try_parse_from(["trad", "--nope"]).is_err());
    }

    #[test]
    fn test_hyphen_word_after_separator() {
        assert_eq!(
            parse(&["--", "-ish"]).invocation(),
            Invocation::Translate {
                country: None,
                word: "-ish".to_string()
            }
        );
        assert_eq!(
            parse(&["de", "--", "--help"]).invocation(),
            Invocation::Translate {
                country: Some("de".to_string()),
                word: "--help".to_string()
            }
        );
    }

    #[test]
    fn test_key_source_option() {
        let args = parse(&["--key-source", "env", "--env-file", "keys.env", "hello"]);
        assert_eq!(args.key_source, Some(KeySource::Env));
        assert_eq!(args.env_file, Some(PathBuf::from("keys.env")));
    }
}
