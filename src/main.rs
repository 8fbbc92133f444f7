use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};

use stock_dashboard::render::text;
use stock_dashboard::{config, Dashboard, DashboardError};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Language the company description is translated into.
    #[arg(long, global = true, env = "STOCK_DASHBOARD_LANG", default_value = config::DEFAULT_TARGET_LANG)]
    lang: String,

    /// Show the company description in its original language.
    #[arg(long, global = true)]
    no_translate: bool,

    /// HTTP timeout for provider requests, in seconds.
    #[arg(long, global = true, env = "STOCK_DASHBOARD_TIMEOUT", default_value_t = config::DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,

    /// Use raw closes instead of dividend/split adjusted closes.
    #[arg(long, global = true)]
    raw_close: bool,

    /// User agent sent to the data providers.
    #[arg(long, global = true, env = "STOCK_DASHBOARD_USER_AGENT", default_value = config::DEFAULT_USER_AGENT)]
    user_agent: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the dashboard for a ticker to the terminal.
    Show {
        /// Ticker symbol, e.g. AAPL.
        ticker: String,
    },

    /// Serve the dashboard as a web page.
    #[cfg(feature = "server")]
    Serve {
        /// Address to listen on.
        #[arg(long, env = "STOCK_DASHBOARD_ADDR", default_value = config::DEFAULT_BIND_ADDR)]
        addr: String,
    },
}

fn main() -> ExitCode {
    stock_dashboard::init();

    let cli = Cli::parse();
    log::debug!("Command line input recorded: {cli:#?}");

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e}");
            eprint!("{}", text::render_error(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}

fn build_dashboard(cli: &Cli) -> stock_dashboard::Result<Dashboard> {
    let lang = (!cli.no_translate).then_some(cli.lang.as_str());
    Dashboard::builder()
        .timeout(Duration::from_secs(cli.timeout))
        .user_agent(cli.user_agent.as_str())
        .target_language(lang)
        .adjusted(!cli.raw_close)
        .build()
}

fn run(cli: &Cli) -> stock_dashboard::Result<ExitCode> {
    let dashboard = build_dashboard(cli)?;

    match &cli.command {
        Commands::Show { ticker } => match dashboard.analyze(ticker) {
            Ok(report) => {
                print!("{}", text::render(&report));
                Ok(ExitCode::SUCCESS)
            }
            Err(DashboardError::ProfileUnavailable { .. }) => {
                eprint!("{}", text::render_error(dashboard.locale().strings().profile_error));
                Ok(ExitCode::FAILURE)
            }
            Err(e) => Err(e),
        },

        #[cfg(feature = "server")]
        Commands::Serve { addr } => {
            let dashboard = std::sync::Arc::new(dashboard);
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            // the blocking HTTP clients must be dropped outside the runtime,
            // so this function keeps the last reference
            runtime.block_on(stock_dashboard::server::serve(dashboard.clone(), addr))?;
            drop(runtime);
            drop(dashboard);
            Ok(ExitCode::SUCCESS)
        }
    }
}
