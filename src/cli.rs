use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

use tech_agents::agent::cto::Audience;
use tech_agents::design::Scale;

/// Output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl OutputFormat {
    /// Resolve the effective output format.
    /// If user specified a format, use it.
    /// Otherwise: TTY → Text, non-TTY (pipe) → Json
    pub fn resolve(user_choice: Option<OutputFormat>) -> OutputFormat {
        match user_choice {
            Some(fmt) => fmt,
            None => {
                if std::io::stdout().is_terminal() {
                    OutputFormat::Text
                } else {
                    OutputFormat::Json
                }
            }
        }
    }
}

#[derive(Parser)]
#[command(
    name = "tech-agents",
    about = "CTO and Principal Engineer advisors for technology decisions",
    version,
    after_help = "Logs are written to $TECH_AGENTS_DIR/logs/tech-agents.log when TECH_AGENTS_DIR is set,\notherwise to ~/.local/share/tech-agents/logs/tech-agents.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to tech-agents.yaml config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Log at debug level")]
    pub verbose: bool,

    /// Output format (default: text for TTY, json for pipes)
    #[arg(long, short = 'o', global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Work with the CTO advisor
    Cto {
        /// State file (defaults to <state dir>/cto_agent_state.json)
        #[arg(long)]
        state: Option<PathBuf>,

        #[command(subcommand)]
        action: CtoAction,
    },

    /// Work with the Principal Engineer advisor
    Principal {
        /// State file (defaults to <state dir>/principal_se_state.json)
        #[arg(long)]
        state: Option<PathBuf>,

        #[command(subcommand)]
        action: PrincipalAction,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum CtoAction {
    /// Create a new CTO state file
    Init {
        /// Company name
        #[arg(long)]
        company: String,

        /// Industry the company operates in
        #[arg(long)]
        industry: String,

        /// Overwrite an existing state file
        #[arg(long)]
        force: bool,
    },

    /// Replace strategic goals from a YAML/JSON list
    Goals {
        /// File with the goals
        file: PathBuf,
    },

    /// Add or replace a technology trend from a YAML/JSON record
    AddTrend {
        /// File with the trend (including its name)
        file: PathBuf,
    },

    /// Assess a technology trend
    Assess {
        /// Technology name
        name: String,

        /// Business context entries
        #[arg(long = "context", value_name = "KEY=VALUE")]
        context: Vec<String>,
    },

    /// Rank options from a YAML/JSON decision file ({options, criteria})
    Decide {
        /// File with the decision context
        file: PathBuf,
    },

    /// Show the technology roadmap
    Roadmap {
        /// Roadmap timeframe (e.g. 6m, 1y, 3y)
        #[arg(long, default_value = "1y")]
        timeframe: String,
    },

    /// Communicate the technology strategy
    Strategy {
        /// Target audience
        #[arg(long, value_enum, default_value = "executive")]
        audience: Audience,
    },

    /// Show the stored state
    Show,
}

#[derive(Subcommand)]
pub enum PrincipalAction {
    /// Create a new Principal Engineer state file
    Init {
        /// Engineer name
        #[arg(long)]
        name: String,

        /// Expertise areas (comma separated)
        #[arg(long, value_delimiter = ',')]
        expertise: Vec<String>,

        /// Years of experience
        #[arg(long, default_value = "10")]
        years: u32,

        /// Overwrite an existing state file
        #[arg(long)]
        force: bool,
    },

    /// Add or replace a technology from a YAML/JSON record
    AddTech {
        /// File with the technology (including its name)
        file: PathBuf,
    },

    /// Evaluate a technology against requirements
    Evaluate {
        /// Technology name
        name: String,

        /// Requirement to match against use cases (repeatable)
        #[arg(long = "require", value_name = "REQUIREMENT")]
        requirements: Vec<String>,
    },

    /// Review a source file
    Review {
        /// File to review
        file: PathBuf,

        /// Language of the source
        #[arg(long, default_value = "python")]
        language: String,
    },

    /// Draft and store a system design
    Design {
        /// System name
        #[arg(long)]
        name: String,

        /// Expected scale
        #[arg(long, value_enum)]
        scale: Option<Scale>,

        /// Needs real-time processing
        #[arg(long)]
        real_time: bool,
    },

    /// Ask for mentorship
    Mentor {
        /// The question
        question: String,
    },

    /// Show the technology radar
    Radar,

    /// Show the stored state
    Show,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Get a configuration value
    Get {
        /// Configuration key (dot notation)
        key: String,
    },
}
