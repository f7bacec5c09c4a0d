pub mod errors;
pub mod render;
pub mod tracing_init;

use clap::{ArgAction, Parser, ValueEnum};

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per result (default)
    #[default]
    Text,
    /// Output as JSON
    Json,
    /// Output as formatted tables
    Table,
}

#[derive(Parser, Debug)]
#[command(
    name = "notion-search",
    author,
    version,
    about = "Search a Notion workspace and list the most recently edited matches",
    long_about = "Searches the pages, data sources and databases shared with a Notion\n\
                  integration for a keyword and lists the ten most recently edited\n\
                  pages and sources.\n\n\
                  If the search API returns nothing for the keyword, the workspace is\n\
                  listed with an empty query and pages whose title contains the\n\
                  keyword are kept.\n\n\
                  The integration token is read from NOTION_API_KEY.\n\n\
                  Examples:\n  \
                  notion-search Tokyo\n  \
                  notion-search --format json 北海道\n  \
                  notion-search -v Tokyo          # Log requests to stderr"
)]
pub struct Cli {
    /// Keyword to search for; page titles must contain it in the fallback
    #[arg(
        value_name = "KEYWORD",
        allow_hyphen_values = true,
        help = "Keyword to search for (default: 北海道)"
    )]
    pub keyword: Option<String>,

    /// Output format for the listing
    #[arg(
        long,
        value_enum,
        default_value = "text",
        help = "Output format for the listing"
    )]
    pub format: OutputFormat,

    /// Output all errors as structured JSON to stderr
    #[arg(long, help = "Output errors in JSON format")]
    pub json_errors: bool,

    /// Increase logging verbosity
    #[arg(
        short = 'v',
        action = ArgAction::Count,
        help = "Increase logging verbosity (-v for debug, -vv for trace)"
    )]
    pub verbosity: u8,
}
