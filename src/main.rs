//! pasteboard - command-line access to named macOS pasteboards.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::{Parser, Subcommand};
use pasteboard::{PasteboardClient, KNOWN_PASTEBOARDS};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "pasteboard")]
#[command(about = "Read, write, and inspect named macOS pasteboards", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable logging to specified file
    #[arg(long, global = true)]
    log: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the current text of a pasteboard
    Read {
        /// Pasteboard to address (default: general)
        #[arg(short, long)]
        pasteboard: Option<String>,
    },
    /// Write text to a pasteboard
    Write {
        /// Text to store
        text: String,
        /// Pasteboard to address (default: general)
        #[arg(short, long)]
        pasteboard: Option<String>,
    },
    /// Remove all content from a pasteboard
    Clear {
        /// Pasteboard to address (default: general)
        #[arg(short, long)]
        pasteboard: Option<String>,
    },
    /// Report whether a pasteboard currently holds text
    Has {
        /// Pasteboard to address (default: general)
        #[arg(short, long)]
        pasteboard: Option<String>,
    },
    /// List the type descriptors currently present on a pasteboard
    Types {
        /// Pasteboard to address (default: general)
        #[arg(short, long)]
        pasteboard: Option<String>,
    },
    /// List the known pasteboards and their canonical names
    List,
    /// Write a tagged value to the general and find pasteboards and read it back
    Smoke,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting pasteboard");
    }

    // The table is a constant; answering it must not require a backend.
    if let Command::List = args.command {
        for (key, canonical) in KNOWN_PASTEBOARDS {
            println!("{:<8} {}", key, canonical);
        }
        return Ok(());
    }

    let client = PasteboardClient::new()?;

    match args.command {
        Command::Read { pasteboard } => match client.read_text(pasteboard.as_deref()) {
            Some(text) => println!("{}", text),
            None => std::process::exit(1),
        },
        Command::Write { text, pasteboard } => {
            if !client.write_text(text, pasteboard.as_deref()) {
                eprintln!("Error: write was not confirmed");
                std::process::exit(1);
            }
        }
        Command::Clear { pasteboard } => {
            if !client.clear(pasteboard.as_deref()) {
                eprintln!("Error: clear failed");
                std::process::exit(1);
            }
        }
        Command::Has { pasteboard } => {
            if client.has_text(pasteboard.as_deref()) {
                println!("yes");
            } else {
                println!("no");
                std::process::exit(1);
            }
        }
        Command::Types { pasteboard } => {
            for descriptor in client.types(pasteboard.as_deref()) {
                println!("{}", descriptor);
            }
        }
        Command::List => unreachable!("handled before backend load"),
        Command::Smoke => run_smoke(&client)?,
    }

    if args.log.is_some() {
        tracing::info!("pasteboard exited");
    }

    Ok(())
}

/// Exercise the whole surface once, tagging values so runs can be told apart.
fn run_smoke(client: &PasteboardClient) -> Result<()> {
    let millis = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis();
    let tag = format!("[{}]", millis);

    println!("Known pasteboards: {:?}", client.known_pasteboards());

    println!("Write general...");
    client.write_text(format!("hello general {}", tag), None);
    println!("Read general: {:?}", client.read_text(None));

    println!("Write find...");
    client.write_text(format!("hello find {}", tag), Some("find"));
    println!("Read find: {:?}", client.read_text(Some("find")));

    println!("Has text (general): {}", client.has_text(None));
    println!("Types (general): {:?}", client.types(None));

    Ok(())
}
