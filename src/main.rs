#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use clap::{Parser, Subcommand};
    use simple_folio::{config, generate, output};
    use std::path::PathBuf;
    use tracing_subscriber::EnvFilter;

    #[derive(Parser)]
    #[command(name = "simple-folio")]
    #[command(about = "Static site generator for developer portfolios")]
    #[command(long_about = "\
Static site generator for developer portfolios

A project catalog (JSON) and a translation table become a single page with a
featured-projects carousel, a filterable project grid, project detail modals
with trailers and screenshots, and a CV viewer. The page is driven by a small
runtime that runs in the browser.

Content structure:

  content/
  ├── config.toml                          # Site config (optional)
  ├── about.md                             # About section (optional)
  └── assets/                              # Copied to the output as-is
      ├── projects/projects.json           # Project catalog
      ├── translations/translations.json   # UI texts per locale
      └── docs/                            # CV documents
          ├── CV_LONG_EN_Unity_GameDeveloper.html
          └── pdf/CV_EN_Unity_GameDeveloper.pdf

Catalog entries need id, name, category and description; everything else is
optional. The first catalog candidate in [data] projects that reads and parses
is used.

Run 'simple-folio gen-config' to generate a documented config.toml.")]
    #[command(version)]
    struct Cli {
        /// Content directory
        #[arg(long, default_value = "content", global = true)]
        source: PathBuf,

        /// Output directory
        #[arg(long, default_value = "dist", global = true)]
        output: PathBuf,

        #[command(subcommand)]
        command: Command,
    }

    #[derive(Subcommand)]
    enum Command {
        /// Generate the site
        Build,
        /// Validate content without building
        Check,
        /// Print a stock config.toml with all options documented
        GenConfig,
    }

    pub fn run() -> Result<(), Box<dyn std::error::Error>> {
        let cli = Cli::parse();

        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("simple_folio=info")),
            )
            .with_writer(std::io::stderr)
            .init();

        match cli.command {
            Command::Build => {
                println!("==> Building {} → {}", cli.source.display(), cli.output.display());
                let summary = generate::build(&cli.source, &cli.output)?;
                output::print_build_output(&summary);
                println!("==> Build complete: {}", cli.output.display());
            }
            Command::Check => {
                println!("==> Checking {}", cli.source.display());
                let report = generate::check(&cli.source)?;
                output::print_check_output(&report);
                println!("==> Content is valid");
            }
            Command::GenConfig => {
                print!("{}", config::stock_config_toml());
            }
        }

        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    cli::run()
}

// The page runtime is the library's wasm export; there is no CLI on wasm32.
#[cfg(target_arch = "wasm32")]
fn main() {}
