//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// How the resulting draft is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored page and question listing
    Text,
    /// The view model as JSON
    Json,
}

/// CLI arguments for pollstream
#[derive(Parser, Debug)]
#[command(name = "pollstream")]
#[command(author, version, about = "Build multi-page surveys from the terminal")]
#[command(long_about = r#"
Pollstream edits a survey draft made of pages and questions.

Every command loads the draft for --survey, applies one change, saves the
draft and prints it. With --template, an empty survey is first seeded from a
built-in template.

Configuration files are loaded from (in priority order):
1. --config <path>          Explicit config file
2. ./pollstream.toml        Project-level config
3. ~/.config/pollstream/config.toml   Global config

Example:
  pollstream --template feedback_form show
  pollstream --survey "Team poll" add-question single_choice
  pollstream --survey "Team poll" add-option 1718000000000_9f3a
"#)]
pub struct Cli {
    /// Operation to run (`show` when omitted)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Survey name; drafts are stored per name
    #[arg(short, long, value_name = "NAME", global = true)]
    pub survey: Option<String>,

    /// Seed an empty survey from a built-in template
    #[arg(short, long, value_name = "ID", global = true)]
    pub template: Option<String>,

    /// Output format (defaults to the configured one)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long, global = true)]
    pub show_config: bool,

    /// Keep the draft in memory only; nothing is read from or written to disk
    #[arg(long, global = true)]
    pub ephemeral: bool,
}

/// One draft operation per invocation
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the draft
    Show,
    /// List question kinds
    Kinds,
    /// List built-in templates
    Templates,

    /// Append a page
    AddPage {
        /// Page title (numbered placeholder when omitted)
        title: Option<String>,
        /// Make the new page current
        #[arg(long)]
        current: bool,
    },
    /// Delete a page (the last page cannot be deleted)
    DeletePage { id: String },
    /// Make a page current
    SwitchPage { id: String },
    /// Rename a page
    RenamePage { id: String, title: String },

    /// Add a question to the current page
    AddQuestion {
        /// Kind wire name, e.g. single_choice, matrix, email
        kind: String,
    },
    /// Delete a question from the current page
    DeleteQuestion { id: String },
    /// Set a question's title
    SetTitle { id: String, text: String },
    /// Mark a question required or optional
    SetRequired {
        id: String,
        #[arg(action = clap::ArgAction::Set)]
        required: bool,
    },

    /// Append an option to a choice question
    AddOption { id: String },
    /// Remove the option at INDEX (0-based)
    RemoveOption { id: String, index: usize },
    /// Replace the option text at INDEX (0-based)
    UpdateOption { id: String, index: usize, text: String },

    /// Append a row to a matrix question
    AddRow { id: String },
    /// Remove the row at INDEX (0-based)
    RemoveRow { id: String, index: usize },
    /// Replace the row text at INDEX (0-based)
    UpdateRow { id: String, index: usize, text: String },

    /// Append a column to a matrix question
    AddCol { id: String },
    /// Remove the column at INDEX (0-based)
    RemoveCol { id: String, index: usize },
    /// Replace the column text at INDEX (0-based)
    UpdateCol { id: String, index: usize, text: String },
}

impl Cli {
    pub fn command_or_show(&self) -> Command {
        self.command.clone().unwrap_or(Command::Show)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "pollstream",
            "add-page",
            "Intro",
            "--current",
            "--survey",
            "Team poll",
            "-vv",
        ])
        .unwrap();

        assert_eq!(
            cli.command_or_show(),
            Command::AddPage {
                title: Some("Intro".to_string()),
                current: true,
            }
        );
        assert_eq!(cli.survey.as_deref(), Some("Team poll"));
        assert_eq!(cli.verbose, 2);
        assert!(cli.format.is_none());
    }

    #[test]
    fn test_parse_set_required_value() {
        let cli = Cli::try_parse_from(["pollstream", "set-required", "q1", "false"]).unwrap();
        assert_eq!(
            cli.command_or_show(),
            Command::SetRequired {
                id: "q1".to_string(),
                required: false,
            }
        );
    }

    #[test]
    fn test_parse_update_option_and_format() {
        let cli = Cli::try_parse_from([
            "pollstream",
            "--format",
            "json",
            "update-option",
            "q1",
            "2",
            "Maybe",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(
            cli.command_or_show(),
            Command::UpdateOption {
                id: "q1".to_string(),
                index: 2,
                text: "Maybe".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_ephemeral_flag() {
        let cli = Cli::try_parse_from(["pollstream", "add-question", "rating", "--ephemeral"])
            .unwrap();
        assert!(cli.ephemeral);
        assert_eq!(
            cli.command_or_show(),
            Command::AddQuestion {
                kind: "rating".to_string(),
            }
        );

        let cli = Cli::try_parse_from(["pollstream", "show"]).unwrap();
        assert!(!cli.ephemeral);
    }

    #[test]
    fn test_missing_subcommand_means_show() {
        let cli = Cli::try_parse_from(["pollstream", "--show-config"]).unwrap();
        assert!(cli.show_config);
        assert_eq!(cli.command_or_show(), Command::Show);
    }
}
