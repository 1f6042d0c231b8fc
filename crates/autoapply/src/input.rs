//! Interactive collection of run parameters.

use autoapply_engine::profile::UserDetails;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Search a job site and submit applications automatically")]
pub struct Args {
    /// WebDriver server URL (overrides the config file)
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Config file path (defaults to ./autoapply.yaml, then ~/.autoapply/config.yaml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Job site URL (prompted for when omitted)
    #[arg(long)]
    pub site_url: Option<String>,

    /// Job profile to search for (prompted for when omitted)
    #[arg(long)]
    pub query: Option<String>,

    /// Path to the resume file (prompted for when omitted)
    #[arg(long)]
    pub resume: Option<PathBuf>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Write the run report as JSON to this path
    #[arg(long)]
    pub report_json: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Fully resolved run parameters.
#[derive(Debug)]
pub struct RunParams {
    pub site_url: String,
    pub query: String,
    pub resume: PathBuf,
    pub user: UserDetails,
}

impl Args {
    /// Resolve run parameters, prompting on stdin for anything not given
    /// as a flag.
    pub fn resolve_params(&self) -> io::Result<RunParams> {
        Ok(RunParams {
            site_url: or_prompt(&self.site_url, "Enter the job site URL (e.g., linkedin.com): ")?,
            query: or_prompt(
                &self.query,
                "Enter the job profile you are looking for (e.g., Software Engineer Intern): ",
            )?,
            resume: PathBuf::from(or_prompt(
                &self.resume.as_ref().map(|p| p.display().to_string()),
                "Enter the path to your resume file: ",
            )?),
            user: UserDetails {
                name: or_prompt(&self.name, "Enter your name: ")?,
                address: or_prompt(&self.address, "Enter your address: ")?,
                phone: or_prompt(&self.phone, "Enter your phone number: ")?,
                email: or_prompt(&self.email, "Enter your email: ")?,
            },
        })
    }
}

fn or_prompt(value: &Option<String>, prompt: &str) -> io::Result<String> {
    if let Some(v) = value {
        return Ok(v.clone());
    }
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
