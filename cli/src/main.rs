//! InvoiceBlaze CLI - upload invoice PDFs and download the Excel report
//!
//! # Commands
//!
//! ```bash
//! invoiceblaze process a.pdf b.pdf        # Full run: upload, wait, download
//! invoiceblaze submit a.pdf b.pdf         # Upload only, wait until ready
//! invoiceblaze download -o reports/       # Fetch the current report
//! invoiceblaze health                     # Check the processing service
//! ```

use clap::{Parser, Subcommand};
use invoiceblaze::{
    load_files, report_path, runner, save_artifact, ApiClient, CliResult, Config, ConsoleReporter,
};
use invoiceblaze_workflow::{BatchApi, UploadWorkflowController};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "invoiceblaze", version)]
#[command(about = "Upload invoice PDFs in batch and download the generated Excel report", long_about = None)]
struct Cli {
    /// Processing service base URL (overrides INVOICEBLAZE_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload PDFs, wait for the report and download it
    Process {
        /// PDF files to process
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Report file or directory (default: ./invoices_report.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Upload PDFs and wait until the report is ready
    Submit {
        /// PDF files to process
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Download the most recently generated report
    ///
    /// Fetches `/download-excel` directly, without a prior upload in this
    /// process: there is no ready check and no progress, and a failure only
    /// sets the exit code.
    Download {
        /// Report file or directory (default: ./invoices_report.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that the processing service is reachable
    Health,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        match e.http_status() {
            Some(status) => eprintln!("❌ Error: {} (HTTP {})", e, status),
            None => eprintln!("❌ Error: {}", e),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let mut config = Config::from_env()?;
    if let Some(url) = cli.api_url.as_deref() {
        config = config.with_api_url(url)?;
    }
    let client = ApiClient::new(&config)?;

    match cli.command {
        Commands::Process { files, output } => cmd_process(&client, &config, &files, output).await,
        Commands::Submit { files } => cmd_submit(&client, &config, &files).await,
        Commands::Download { output } => cmd_download(&client, output).await,
        Commands::Health => cmd_health(&client).await,
    }
}

async fn cmd_process(
    client: &ApiClient,
    config: &Config,
    paths: &[PathBuf],
    output: Option<PathBuf>,
) -> CliResult<()> {
    let target = report_path(output.as_deref());
    eprintln!("📤 Processing {} file(s) via {}", paths.len(), client.base_url());

    let files = load_files(paths).await?;
    let mut controller = UploadWorkflowController::new();
    let mut reporter = ConsoleReporter::default();

    runner::process(&mut controller, client, files, &config.timing, &target, &mut reporter).await?;

    eprintln!("💾 Report saved to: {}", target.display());
    Ok(())
}

async fn cmd_submit(client: &ApiClient, config: &Config, paths: &[PathBuf]) -> CliResult<()> {
    eprintln!("📤 Submitting {} file(s) to {}", paths.len(), client.base_url());

    let files = load_files(paths).await?;
    let mut controller = UploadWorkflowController::new();
    let mut reporter = ConsoleReporter::default();

    let selected = controller.select_files(files);
    for notification in controller.drain_notifications() {
        eprintln!("{}", notification);
    }
    selected?;

    runner::submit_batch(&mut controller, client, &config.timing, &mut reporter).await?;

    eprintln!("✅ Report ready. Fetch it with 'invoiceblaze download'.");
    Ok(())
}

/// Fetch the latest report without going through the workflow controller:
/// no ready gate, no state change, nothing to reset afterwards.
async fn cmd_download(client: &ApiClient, output: Option<PathBuf>) -> CliResult<()> {
    let target = report_path(output.as_deref());
    eprintln!("📥 Downloading report from {}", client.base_url());

    let artifact = client.download_artifact().await?;
    save_artifact(&target, &artifact).await?;

    eprintln!("💾 Report saved to: {} ({} bytes)", target.display(), artifact.bytes.len());
    Ok(())
}

async fn cmd_health(client: &ApiClient) -> CliResult<()> {
    let body = client.health().await?;
    eprintln!("✅ Processing service is running at {}", client.base_url());
    if !body.is_null() {
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    }
    Ok(())
}
