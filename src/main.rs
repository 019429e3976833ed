use autosidebar::{config, output, pipeline};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "autosidebar")]
#[command(about = "Generate a navigation sidebar from a docs directory")]
#[command(long_about = "\
Generate a navigation sidebar from a docs directory

The directory tree is the sidebar. Folders become categories, doc files
become links, and number prefixes set the order.

Docs structure:

  docs/
  ├── autosidebar.toml             # Generator config (optional)
  ├── intro.md                     # Doc, id \"intro\"
  ├── 01-getting-started/          # Category \"getting-started\", position 1
  │   ├── _category_.json          # Label, position, link, collapse flags
  │   ├── index.md                 # Category landing page by convention
  │   └── 02-install.md            # Doc \"getting-started/install\", position 2
  ├── _partials/                   # `_` prefix: ignored
  └── .drafts/                     # Hidden: ignored

Ordering (per folder):
  sidebar_position front matter → number prefix → unpositioned last,
  ties broken by file or folder name.

Category landing page (first match wins):
  _category_ link → index.md / README.md / <folder-name>.md → none

Run 'autosidebar gen-config' to generate a documented autosidebar.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Docs root directory
    #[arg(long, default_value = "docs", global = true)]
    docs: PathBuf,

    /// Build the sidebar from this sub-directory of the docs root
    #[arg(long, global = true)]
    autogen_dir: Option<String>,

    /// Keep number prefixes in ids and labels instead of using them as positions
    #[arg(long, global = true)]
    no_number_prefix: bool,

    /// Show debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the sidebar as JSON
    Generate {
        /// Output file (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Validate the docs directory without writing anything
    Check,
    /// Print a stock autosidebar.toml with all options documented
    GenConfig,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Command::Generate { output: out_path } => {
            let config = config::load_config(&cli.docs, cli_overrides(cli))?;
            let sidebar = pipeline::build_sidebar(&cli.docs, &config)?;
            let json = serde_json::to_string_pretty(&sidebar)?;
            match out_path {
                Some(path) => {
                    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(path, format!("{json}\n"))?;
                    log::info!("wrote {}", path.display());
                }
                None => println!("{json}"),
            }
            output::print_sidebar(&sidebar);
        }
        Command::Check => {
            eprintln!("==> Checking {}", cli.docs.display());
            let config = config::load_config(&cli.docs, cli_overrides(cli))?;
            let sidebar = pipeline::build_sidebar(&cli.docs, &config)?;
            output::print_sidebar(&sidebar);
            eprintln!("==> Docs are valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

/// Command-line flags as a TOML overlay for [`config::load_config`].
fn cli_overrides(cli: &Cli) -> Option<toml::Value> {
    let mut table = toml::value::Table::new();
    if let Some(dir) = &cli.autogen_dir {
        table.insert("autogen_dir".into(), toml::Value::String(dir.clone()));
    }
    if cli.no_number_prefix {
        table.insert("number_prefix_parser".into(), toml::Value::Boolean(false));
    }
    (!table.is_empty()).then_some(toml::Value::Table(table))
}
