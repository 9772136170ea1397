use campaigndesk::model::{CampaignStatus, ContentStatus, ContentType, Platform};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "campaigndesk", bin_name = "campaigndesk", version = get_version())]
#[command(
    about = "Clients, campaigns and a content calendar for a small marketing consultancy",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug diagnostics on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summary counts, recent campaigns and upcoming content (default)
    #[command(alias = "dash", display_order = 1)]
    Dashboard,

    /// Manage clients
    #[command(display_order = 2)]
    Client {
        #[command(subcommand)]
        action: ClientCommands,
    },

    /// Manage campaigns
    #[command(display_order = 3)]
    Campaign {
        #[command(subcommand)]
        action: CampaignCommands,
    },

    /// Manage the content calendar
    #[command(display_order = 4)]
    Content {
        #[command(subcommand)]
        action: ContentCommands,
    },

    /// Aggregated reports
    #[command(display_order = 5)]
    Report {
        #[command(subcommand)]
        kind: ReportCommands,
    },

    /// Get or set configuration
    #[command(display_order = 10)]
    Config {
        /// Configuration key (upcoming-days, recent-limit, currency)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the data file if it does not exist
    #[command(display_order = 11)]
    Init,

    /// Print the location of the data file
    #[command(display_order = 12)]
    Path,

    /// Write all data as JSON to a file or stdout
    #[command(display_order = 13)]
    Export {
        /// Target file (prints to stdout if omitted)
        file: Option<PathBuf>,
    },

    /// Replace all data with the contents of a data file
    #[command(display_order = 14)]
    Import {
        /// Data file to read
        file: PathBuf,
    },
}

/// Record selectors: display indexes (1 2 3), ids or unique id prefixes.
#[derive(Args, Debug)]
pub struct Selectors {
    #[arg(required = true, num_args = 1..)]
    pub records: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum ClientCommands {
    /// Add a client
    #[command(alias = "new")]
    Add {
        name: String,
        #[arg(long, default_value = "")]
        company: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        industry: String,
        #[arg(long)]
        notes: Option<String>,
    },

    /// List clients
    #[command(alias = "ls")]
    List,

    /// Show clients in full
    #[command(alias = "view")]
    Show(Selectors),

    /// Change some fields of a client
    Edit {
        record: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        industry: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete clients (their campaigns and content stay)
    #[command(alias = "delete")]
    Rm(Selectors),
}

#[derive(Subcommand, Debug)]
pub enum CampaignCommands {
    /// Add a campaign
    #[command(alias = "new")]
    Add {
        name: String,
        /// Client name or company
        #[arg(long, default_value = "")]
        client: String,
        #[arg(long, default_value = "")]
        objective: String,
        #[arg(long, default_value = "")]
        budget: String,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
        /// planning, active, paused or completed
        #[arg(long, default_value = "planning")]
        status: CampaignStatus,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        metrics: Option<String>,
    },

    /// List campaigns
    #[command(alias = "ls")]
    List {
        #[arg(long)]
        status: Option<CampaignStatus>,
    },

    /// Show campaigns in full
    #[command(alias = "view")]
    Show(Selectors),

    /// Change some fields of a campaign
    Edit {
        record: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        client: Option<String>,
        #[arg(long)]
        objective: Option<String>,
        #[arg(long)]
        budget: Option<String>,
        #[arg(long)]
        start: Option<NaiveDate>,
        #[arg(long)]
        end: Option<NaiveDate>,
        #[arg(long)]
        status: Option<CampaignStatus>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        metrics: Option<String>,
    },

    /// Delete campaigns
    #[command(alias = "delete")]
    Rm(Selectors),
}

#[derive(Subcommand, Debug)]
pub enum ContentCommands {
    /// Schedule a content item
    #[command(alias = "new")]
    Add {
        title: String,
        /// Facebook, Instagram, Twitter, LinkedIn, Blog, Email or YouTube
        #[arg(long)]
        platform: Platform,
        /// Post, Story, Video, Article, Newsletter or Ad
        #[arg(long = "type", default_value = "Post")]
        content_type: ContentType,
        #[arg(long)]
        client: Option<String>,
        /// Publish date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Publish time (HH:MM)
        #[arg(long, default_value = "")]
        time: String,
        /// scheduled, draft or published
        #[arg(long, default_value = "draft")]
        status: ContentStatus,
        #[arg(long)]
        description: Option<String>,
    },

    /// List the content calendar by publish date
    #[command(alias = "ls")]
    List {
        #[arg(long)]
        platform: Option<Platform>,
        #[arg(long)]
        status: Option<ContentStatus>,
    },

    /// Show content items in full
    #[command(alias = "view")]
    Show(Selectors),

    /// Change some fields of a content item
    Edit {
        record: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        platform: Option<Platform>,
        #[arg(long = "type")]
        content_type: Option<ContentType>,
        #[arg(long)]
        client: Option<String>,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        status: Option<ContentStatus>,
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete content items
    #[command(alias = "delete")]
    Rm(Selectors),
}

#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Totals across all collections
    Overview,
    /// Campaigns, content and budget per client
    Clients,
    /// Campaign count and budget per status
    Status,
    /// Content per platform, split by status
    Platforms,
    /// Content publishing within the next days
    Upcoming {
        /// Window in days (defaults to the upcoming-days setting)
        #[arg(long)]
        days: Option<u32>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_dashboard() {
        let cli = Cli::try_parse_from(["campaigndesk"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_campaign_add() {
        let cli = Cli::try_parse_from([
            "campaigndesk",
            "campaign",
            "add",
            "Spring",
            "--client",
            "Acme",
            "--budget",
            "500",
            "--start",
            "2024-03-01",
            "--end",
            "2024-05-31",
            "--status",
            "Active",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Campaign {
                action: CampaignCommands::Add { status, budget, .. },
            }) => {
                assert_eq!(status, CampaignStatus::Active);
                assert_eq!(budget, "500");
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_platform() {
        let parsed = Cli::try_parse_from([
            "campaigndesk",
            "content",
            "list",
            "--platform",
            "myspace",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn rm_needs_a_selector() {
        assert!(Cli::try_parse_from(["campaigndesk", "client", "rm"]).is_err());
    }
}
