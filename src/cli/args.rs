use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "certificate-api")]
#[command(version = "1.0.0")]
#[command(about = "Certificate download URL lookup service for learning-management platforms")]
#[command(long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, env = "CERTIFICATE_API_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose logging (repeat for more verbosity: -v INFO, -vv DEBUG, -vvv TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output raw tab-separated values (no formatting)
    #[arg(short, long, global = true)]
    pub raw: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP service
    Serve {
        /// Address to listen on
        #[arg(long, env = "CERTIFICATE_API_BIND")]
        bind: Option<String>,

        #[command(flatten)]
        source: SourceArgs,
    },
    /// Look up certificate URLs for one user
    Lookup {
        /// User id
        #[arg(long, default_value_t = 0)]
        userid: i64,

        /// User email
        #[arg(long)]
        useremail: Option<String>,

        /// Print the full JSON result instead of one URL per line
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        source: SourceArgs,
    },
    /// Load the dataset and summarize users and certificate issues
    CheckData {
        /// Dataset file (.yaml, .yml or .json)
        #[arg(long, env = "CERTIFICATE_API_DATA")]
        data: Option<String>,
    },
    /// Generate shell completion scripts
    Completion {
        #[command(subcommand)]
        command: CompletionCommands,
    },
}

/// Where records come from and how URLs are rendered
#[derive(Args, Clone, Debug, Default)]
pub struct SourceArgs {
    /// Dataset file (.yaml, .yml or .json)
    #[arg(long, env = "CERTIFICATE_API_DATA")]
    pub data: Option<String>,

    /// Site root for absolute URLs (e.g. https://lms.example.org)
    #[arg(long, env = "CERTIFICATE_API_WWWROOT")]
    pub wwwroot: Option<String>,
}

#[derive(Subcommand)]
pub enum CompletionCommands {
    /// Generate bash completion script
    Bash,
    /// Generate zsh completion script
    Zsh,
    /// Generate fish completion script
    Fish,
    /// Generate PowerShell completion script
    PowerShell,
}

impl CompletionCommands {
    pub fn shell(&self) -> Shell {
        match self {
            CompletionCommands::Bash => Shell::Bash,
            CompletionCommands::Zsh => Shell::Zsh,
            CompletionCommands::Fish => Shell::Fish,
            CompletionCommands::PowerShell => Shell::PowerShell,
        }
    }
}
