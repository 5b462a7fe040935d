use clap::{ArgAction, Parser, Subcommand};
use grimoire::context::SiteContext;
use grimoire::generate::{self, GenerateError};
use grimoire::{config, logging, output, scan};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "grimoire")]
#[command(about = "Static documentation site generator for Markdown notes")]
#[command(long_about = "\
Static documentation site generator for Markdown notes

Your folder tree is the table of contents. Folders become categories,
Markdown files become pages, and every page gets the full navigation,
a breadcrumb trail and SEO metadata.

Content structure:

  input/
  ├── notes/                       # Content root (paths.content_folder)
  │   ├── index.md                 # Landing page body (optional)
  │   ├── faq.md                   # Root page, category \"General\"
  │   ├── 01-guides/               # Category \"Guides\" (prefix stripped)
  │   │   ├── intro.md             # Page, title from frontmatter or name
  │   │   └── 02-advanced/         # Subcategory \"Advanced\"
  │   │       └── tuning.md
  │   └── .obsidian/               # Excluded folder, never walked
  └── pages/                       # Static pages rendered at the root
      ├── about.md
      └── contribute.md

  templates/default/
  ├── template.html                # {{PLACEHOLDER}} page template
  ├── css/style.css
  ├── js/app.js
  └── img/

Title resolution (first available wins):
  display_name frontmatter → title frontmatter → formatted file name

Run 'grimoire gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Config file (TOML, or JSON when it ends in .json)
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Content directory (overrides paths.content_folder)
    #[arg(long, visible_alias = "content-dir", global = true)]
    input: Option<PathBuf>,

    /// Output directory (overrides paths.output_folder)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Template directory, or a template name under templates/
    #[arg(long, global = true)]
    template: Option<String>,

    /// Increase diagnostic verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the content directory and write the HTML site
    Build,
    /// Scan the content directory and list what would be built
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Command::Build => {
            let ctx = SiteContext::from_config(load_site_config(&cli)?);
            let content = &ctx.paths.content;

            println!("==> Scanning {}", content.display());
            let result = scan::scan(
                content,
                &ctx.config.paths.exclude_folders,
                &ctx.formatter,
            )?;

            println!("==> Generating HTML \u{2192} {}", ctx.paths.output.display());
            let report = generate::generate(&ctx, &result)?;
            output::print_generate_output(&result, &report);

            println!("==> Build complete: {}", report.output_dir.display());
        }
        Command::Check => {
            let ctx = SiteContext::from_config(load_site_config(&cli)?);
            let content = &ctx.paths.content;

            println!("==> Checking {}", content.display());
            let result = scan::scan(
                content,
                &ctx.config.paths.exclude_folders,
                &ctx.formatter,
            )?;
            if result.pages.is_empty() {
                return Err(GenerateError::NoPages(content.clone()).into());
            }
            output::print_scan_output(&result, content);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load the config file and apply command-line path overrides.
fn load_site_config(cli: &Cli) -> Result<config::SiteConfig, config::ConfigError> {
    let mut site_config = config::load_config(&cli.config)?;
    let paths = &mut site_config.paths;
    if let Some(input) = &cli.input {
        paths.content_folder = input.to_string_lossy().into_owned();
    }
    if let Some(output) = &cli.output {
        paths.output_folder = output.to_string_lossy().into_owned();
    }
    if let Some(template) = &cli.template {
        paths.template_folder = resolve_template(template).to_string_lossy().into_owned();
    }
    Ok(site_config)
}

/// An existing path is used as-is; anything else names a folder under `templates/`.
fn resolve_template(arg: &str) -> PathBuf {
    let path = Path::new(arg);
    if path.exists() {
        path.to_path_buf()
    } else {
        Path::new("templates").join(arg)
    }
}
