use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mdhtml")]
#[command(about = "Convert Markdown files to HTML")]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Output HTML file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file
    #[arg(short, long, default_value = "mdhtml.toml")]
    config: PathBuf,

    /// Print the document title (first `# ` line) instead of converting
    #[arg(long)]
    title: bool,
}

fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Read input file
    let markdown = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", cli.input.display(), e);
            std::process::exit(1);
        }
    };

    if cli.title {
        match mdhtml::extract_title(&markdown) {
            Some(title) => println!("{}", title),
            None => {
                eprintln!("Error: {} has no `# ` title line", cli.input.display());
                std::process::exit(1);
            }
        }
        return;
    }

    let config = match mdhtml::Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Convert markdown to HTML
    let html = match mdhtml::markdown_to_html_with_config(&markdown, &config) {
        Ok(html) => html,
        Err(e) => {
            eprintln!("Error converting {}: {}", cli.input.display(), e);
            std::process::exit(1);
        }
    };

    match cli.output {
        Some(output) => {
            if let Err(e) = fs::write(&output, html) {
                eprintln!("Error writing {}: {}", output.display(), e);
                std::process::exit(1);
            }
            info!(output = %output.display(), "wrote html");
        }
        None => println!("{}", html),
    }
}
