mod input;

use autoapply_core::collab::TextExtractor;
use autoapply_core::driver::Driver;
use autoapply_core::site::LinkedinAdapter;
use autoapply_engine::collaborators::{FileTextExtractor, HttpGenerator, RegexRecognizer};
use autoapply_engine::config::ConfigLoader;
use autoapply_engine::profile::ProfileBuilder;
use autoapply_engine::report::RunReport;
use autoapply_engine::search::JobSearcher;
use autoapply_engine::submit::ApplicationSubmitter;
use autoapply_webdriver::WebDriverSession;
use clap::Parser;
use input::Args;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = match &args.config {
        Some(path) => ConfigLoader::load_from(path).await?,
        None => ConfigLoader::load_default().await?,
    };
    if let Some(url) = &args.webdriver_url {
        config.webdriver_url = url.clone();
    }

    let params = args.resolve_params()?;
    let wait = config.wait.params();

    // Everything fallible that does not need the browser happens first,
    // so no fatal path below leaks the WebDriver session.
    let resume_text = FileTextExtractor.extract_text(&params.resume)?;
    let recognizer = RegexRecognizer::new();
    let built = ProfileBuilder::new(&recognizer).build(&resume_text, &params.user);
    let generator = HttpGenerator::new(&config.generator)?;

    // Fatal setup failures abort before any job is attempted.
    let mut driver = match WebDriverSession::connect(&config.webdriver_url).await {
        Ok(driver) => driver,
        Err(e) => {
            error!("Failed to set up browser session: {}", e);
            std::process::exit(1);
        }
    };

    let adapter = LinkedinAdapter;
    let searcher = JobSearcher::new(&adapter, wait);
    let listings = match searcher
        .search(&mut driver, &params.site_url, &params.query)
        .await
    {
        Ok(listings) => listings,
        Err(e) => {
            error!("Job search failed: {}", e);
            let _ = driver.close().await;
            std::process::exit(1);
        }
    };

    info!("Found {} listings", listings.len());
    for listing in &listings {
        info!("{}", listing);
    }

    let submitter = ApplicationSubmitter::new(&adapter, &generator, wait, &params.resume);
    let outcomes = submitter
        .run(&mut driver, &listings, &built.profile, &built.context)
        .await;

    driver.close().await?;

    let report = RunReport::new(outcomes);
    println!("{}", report);

    if let Some(path) = &args.report_json {
        std::fs::write(path, serde_json::to_string_pretty(&report)?)?;
        info!("Report written to {}", path.display());
    }

    // Per-job failures are part of a normal run; only setup/search
    // failures exit nonzero.
    Ok(())
}
