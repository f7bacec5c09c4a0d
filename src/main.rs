use clap::Parser;
use notion_search::cli::errors::print_error_with_json;
use notion_search::cli::render::render;
use notion_search::cli::tracing_init::init_tracing;
use notion_search::cli::Cli;
use notion_search::config::Settings;
use notion_search::error::Error;
use notion_search::notion::SearchClient;
use notion_search::search;

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version print to stdout and exit 0
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };
    init_tracing(cli.verbosity);

    if let Err(e) = run(&cli).await {
        print_error_with_json(&e, cli.json_errors);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Error> {
    let settings = Settings::from_env(cli.keyword.clone())?;
    let client = SearchClient::new(&settings)?;

    let listing = search::run(&client, &settings.keyword).await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&listing, cli.format, &mut out)?;
    Ok(())
}
