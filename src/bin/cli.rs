//! Faculty Directory CLI
//!
//! Terminal management surface over the directory client core.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use facdir::{
    api::HttpFacultyApi,
    error::Result,
    models::{Config, FacultyRecord},
    services::FacultyStore,
};

/// facdir - CST-CSIT Faculty Directory Manager
#[derive(Parser, Debug)]
#[command(name = "facdir", version, about = "Faculty directory management client")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "facdir.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the faculty directory
    List {
        /// Only show members with this specialization
        #[arg(long)]
        specialization: Option<String>,
    },

    /// Show one member's full profile
    Show {
        /// Server identifier of the member
        id: String,
    },

    /// Add a member from a JSON record file
    Create {
        /// Path to the record file (wire-shaped JSON)
        #[arg(long)]
        file: PathBuf,
    },

    /// Update a member from a JSON record file
    Update {
        /// Server identifier of the member
        id: String,

        /// Path to the record file (wire-shaped JSON)
        #[arg(long)]
        file: PathBuf,
    },

    /// Delete a member by identifier
    Delete {
        /// Server identifier of the member
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Read a wire-shaped JSON record from a file.
fn load_record(path: &Path) -> Result<FacultyRecord> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Ask for confirmation on stdin.
fn confirm(prompt: &str) -> Result<bool> {
    use std::io::Write;

    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

/// Print a one-line directory entry.
fn print_entry(member: &FacultyRecord) {
    let id = member.id.as_deref().unwrap_or("-");
    println!(
        "{:<26}  {:<22}  {:<20}  {}",
        member.name, member.position, member.specialization, id
    );
}

/// Print a full profile.
fn print_profile(member: &FacultyRecord) {
    println!("{}", member.name);
    println!("  Position:       {}", member.position);
    println!("  Specialization: {}", member.specialization);
    println!("  Department:     {}", member.department);
    println!("  Education:      {}", member.education);
    println!("  Experience:     {}", member.experience);
    println!("  Email:          {}", member.email);
    println!("  Phone:          {}", member.phone);
    println!("  Office:         {}", member.office);

    if !member.research_interests.is_empty() {
        println!("  Interests:      {}", member.research_interests.join(", "));
    }
    if !member.publications.is_empty() {
        println!("  Publications:");
        for publication in &member.publications {
            println!("    - {publication}");
        }
    }
    if !member.research_papers.is_empty() {
        println!("  Research papers:");
        for paper in &member.research_papers {
            println!("    - {} ({}) {}", paper.title, paper.journal, paper.link);
        }
    }

    let links = &member.social_links;
    if !links.linkedin.is_empty() || !links.twitter.is_empty() || !links.website.is_empty() {
        println!("  Links:");
        for (label, value) in [
            ("LinkedIn", &links.linkedin),
            ("Twitter", &links.twitter),
            ("Website", &links.website),
        ] {
            if !value.is_empty() {
                println!("    {label}: {value}");
            }
        }
    }
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);
    let api = HttpFacultyApi::new(&config.api)?;
    let mut store = FacultyStore::new(api);

    match cli.command {
        Command::List { specialization } => {
            store.load().await?;

            let members = store.filter_by_specialization(specialization.as_deref());
            if members.is_empty() {
                println!("No faculty members found.");
            } else {
                for member in &members {
                    print_entry(member);
                }
            }

            let specializations = store.specializations();
            if !specializations.is_empty() {
                println!("\nSpecializations: {}", specializations.join(", "));
            }
        }

        Command::Show { id } => {
            store.load().await?;

            match store.find(&id) {
                Some(member) => print_profile(member),
                None => log::error!("No faculty member with id {id}"),
            }
        }

        Command::Create { file } => {
            let record = load_record(&file)?;
            store.create(&record).await?;
            log::info!("Added {} ({} members total)", record.name, store.members().len());
        }

        Command::Update { id, file } => {
            let record = load_record(&file)?;
            store.update(&id, &record).await?;
            log::info!("Updated {id}");
        }

        Command::Delete { id, yes } => {
            if !yes && !confirm("Are you sure you want to delete this faculty member?")? {
                log::info!("Aborted.");
                return Ok(());
            }

            store.delete(&id).await?;
            log::info!("Deleted {id} ({} members remain)", store.members().len());
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            config.validate()?;
            log::info!("Config OK (api.base_url = {})", config.api.base_url);
        }
    }

    Ok(())
}
