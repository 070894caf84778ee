// promo-console/src/main.rs

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use promo_console::logger::init_logger;
use promo_console::{Action, Console, ConsoleConfig, FormState, ResultsTable};
use shared::ApiRevision;

#[derive(Debug, Parser)]
#[command(name = "promo-console", version, about = "Operator console for the promotion service")]
struct Cli {
    /// Promotion service base URL
    #[arg(long, env = "PROMO_API_URL", global = true)]
    api_url: Option<String>,

    /// API revision: current or legacy
    #[arg(long, env = "PROMO_API_REVISION", global = true)]
    revision: Option<ApiRevision>,

    /// Request timeout in seconds
    #[arg(long, env = "PROMO_API_TIMEOUT", global = true)]
    timeout: Option<u64>,

    /// Copy the first search result into the form
    #[arg(long, global = true)]
    promote_first: bool,

    /// Send search values without percent-encoding
    #[arg(long, global = true)]
    raw_query: bool,

    /// Print the result table as HTML
    #[arg(long, global = true)]
    html: bool,

    /// Log filter, e.g. "debug" (RUST_LOG wins when set)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a promotion from the form fields
    Create(FormArgs),
    /// Load one promotion into the form
    Retrieve { id: String },
    /// Replace a promotion with the form fields
    Update {
        id: String,
        #[command(flatten)]
        form: FormArgs,
    },
    Delete { id: String },
    Activate { id: String },
    Deactivate { id: String },
    /// List promotions matching the search criteria
    Search(SearchArgs),
    /// Check the service health endpoint
    Health,
}

#[derive(Debug, Default, Args)]
struct FormArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    code: Option<String>,
    #[arg(long)]
    value: Option<String>,
    #[arg(long = "type")]
    promotion_type: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// Selector value: true or false
    #[arg(long)]
    active: Option<String>,
    #[arg(long)]
    scope: Option<String>,
    #[arg(long)]
    start_date: Option<String>,
    #[arg(long)]
    end_date: Option<String>,
}

impl FormArgs {
    fn fill(self, form: &mut FormState) {
        form.name = self.name.unwrap_or_default();
        form.code = self.code.unwrap_or_default();
        form.value = self.value.unwrap_or_default();
        form.promotion_type = self.promotion_type.unwrap_or_default();
        form.description = self.description.unwrap_or_default();
        form.active = self.active.unwrap_or_default();
        form.scope = self.scope.unwrap_or_default();
        form.start_date = self.start_date.unwrap_or_default();
        form.end_date = self.end_date.unwrap_or_default();
    }
}

#[derive(Debug, Args)]
struct SearchArgs {
    /// Only promotions running at this date/time
    #[arg(long)]
    datetime: Option<String>,
    /// Promotion types, comma separated or repeated
    #[arg(long = "type", value_delimiter = ',')]
    types: Vec<String>,
    /// Promotion scopes, comma separated or repeated
    #[arg(long = "scope", value_delimiter = ',')]
    scopes: Vec<String>,
    /// Legacy revision: exact name
    #[arg(long)]
    name: Option<String>,
    /// Legacy revision: only active promotions when "true"
    #[arg(long)]
    active: Option<String>,
}

impl Cli {
    fn config(&self) -> ConsoleConfig {
        let mut config = ConsoleConfig::from_env();
        if let Some(url) = &self.api_url {
            config.client.base_url = url.clone();
        }
        if let Some(revision) = self.revision {
            config.client.revision = revision;
        }
        if let Some(timeout) = self.timeout {
            config.client.timeout = timeout;
        }
        if self.promote_first {
            config.promote_first_result = true;
        }
        if self.raw_query {
            config.encode_query = false;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logger(cli.log_level.as_deref());

    let config = cli.config();
    let mut console = Console::from_config(&config).context("failed to build HTTP client")?;

    let action = match cli.command {
        Command::Health => {
            let health = console
                .api()
                .health()
                .await
                .context("health check failed")?;
            println!("{} {}", health.status, health.message);
            return Ok(());
        }
        Command::Create(form) => {
            form.fill(console.form_mut());
            Action::Create
        }
        Command::Retrieve { id } => {
            console.form_mut().id = id;
            Action::Retrieve
        }
        Command::Update { id, form } => {
            console.form_mut().id = id;
            form.fill(console.form_mut());
            Action::Update
        }
        Command::Delete { id } => {
            console.form_mut().id = id;
            Action::Delete
        }
        Command::Activate { id } => {
            console.form_mut().id = id;
            Action::Activate
        }
        Command::Deactivate { id } => {
            console.form_mut().id = id;
            Action::Deactivate
        }
        Command::Search(args) => {
            let search = console.search_mut();
            search.datetime = args.datetime.unwrap_or_default();
            search.promotion_types = args.types.clone();
            search.promotion_scopes = args.scopes;

            let form = console.form_mut();
            form.name = args.name.unwrap_or_default();
            form.promotion_type = args.types.first().cloned().unwrap_or_default();
            form.active = args.active.unwrap_or_default();
            Action::Search
        }
    };

    let status = console.perform(action).await.unwrap_or_default().to_string();
    println!("{}", status);

    let state = console.state();
    if action != Action::Search || config.promote_first_result {
        println!("{}", serde_json::to_string_pretty(&state.form)?);
    }
    if let Some(table) = state.results() {
        print_table(table, cli.html);
    }

    Ok(())
}

fn print_table(table: &ResultsTable, html: bool) {
    if html {
        print!("{}", table.to_html());
    } else {
        print!("{}", table.to_text());
    }
}
