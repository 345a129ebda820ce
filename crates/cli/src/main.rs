//! mta-sitecrumbs CLI
//!
//! Renders the breadcrumb trail for a site snapshot describing a site and
//! the request being viewed.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use mta_sitecrumbs_core::{
    format_output, BreadcrumbBuilder, BreadcrumbConfig, OutputFormat, ShortcodeRegistry,
    SiteSnapshot,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Breadcrumb trail generator for content-managed sites
#[derive(Parser)]
#[command(name = "mta-sitecrumbs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Breadcrumb trails for content-managed sites")]
#[command(long_about = r#"
mta-sitecrumbs: Breadcrumb Trails for Content-Managed Sites

Reads a site snapshot (JSON, YAML or TOML) describing the site's pages,
post types, taxonomies and the request being viewed, classifies the view
and renders the Home → Section → … → Current Page trail.

Output formats:
  - HTML (default) - Entry templates joined by the separator
  - List - Entries wrapped in <li> inside a list element
  - JSON / YAML - Structured trail for programmatic use
  - ANSI - Colorful terminal output
  - Text - Entry text only

Examples:
  mta-sitecrumbs site.yaml                          # Render as HTML
  mta-sitecrumbs site.yaml --sep " > " --home Start # Custom separator and label
  mta-sitecrumbs render site.json --format list     # <ol><li>…</li></ol>
  mta-sitecrumbs classify site.toml                 # Print the view kind
  mta-sitecrumbs shortcode site.yaml page.html      # Expand [breadcrumb] tags
"#)]
pub struct Args {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Site snapshot to render (when no subcommand is given)
    pub site: Option<PathBuf>,

    #[command(flatten)]
    pub render: RenderArgs,

    /// Verbose logging (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,
}

/// Options shared by rendering commands. `classify` and `shortcode`
/// reject the ones they cannot honour.
#[derive(clap::Args, Clone, Debug)]
pub struct RenderArgs {
    /// Output format (render only, default: html)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormatArg>,

    /// Configuration file (TOML, YAML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Separator between entries
    #[arg(long, global = true)]
    pub sep: Option<String>,

    /// Home label
    #[arg(long, global = true)]
    pub home: Option<String>,

    /// Posts index label
    #[arg(long, global = true)]
    pub index: Option<String>,

    /// List element for list output (render only)
    #[arg(long, global = true)]
    pub element: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Render the breadcrumb trail
    Render {
        /// Site snapshot file
        site: PathBuf,
    },

    /// Print the classified view kind
    Classify {
        /// Site snapshot file
        site: PathBuf,
    },

    /// Expand [breadcrumb] shortcodes in a content file
    Shortcode {
        /// Site snapshot file
        site: PathBuf,

        /// Content file containing shortcodes
        content: PathBuf,
    },
}

/// Output format argument
#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormatArg {
    Html,
    List,
    Json,
    Yaml,
    Ansi,
    Text,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Html => OutputFormat::Html,
            OutputFormatArg::List => OutputFormat::List,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
            OutputFormatArg::Ansi => OutputFormat::Ansi,
            OutputFormatArg::Text => OutputFormat::Text,
        }
    }
}

/// Log output format argument
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LogFormat {
    Text,
    Json,
}

fn main() {
    let args = Args::parse();
    init_tracing(&args);

    if let Err(err) = run(&args) {
        let label = if atty::is(atty::Stream::Stderr) {
            "error:".red().bold().to_string()
        } else {
            "error:".to_string()
        };
        eprintln!("{} {:#}", label, err);
        std::process::exit(1);
    }
}

/// Initialize tracing on stderr based on CLI flags
fn init_tracing(args: &Args) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = match args.verbose {
        0 => "mta_sitecrumbs=warn,mta_sitecrumbs_core=warn",
        1 => "mta_sitecrumbs=info,mta_sitecrumbs_core=info",
        2 => "mta_sitecrumbs=debug,mta_sitecrumbs_core=debug",
        _ => "mta_sitecrumbs=trace,mta_sitecrumbs_core=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match args.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

fn run(args: &Args) -> Result<()> {
    match &args.command {
        Some(Commands::Render { site }) => run_render(site, &args.render),
        Some(Commands::Classify { site }) => run_classify(site, &args.render),
        Some(Commands::Shortcode { site, content }) => run_shortcode(site, content, &args.render),
        None => match &args.site {
            Some(site) => run_render(site, &args.render),
            None => anyhow::bail!("No site snapshot given (see --help)"),
        },
    }
}

/// Build configuration: defaults, then config file, then flags
fn build_config(args: &RenderArgs) -> Result<BreadcrumbConfig> {
    let mut config = match &args.config {
        Some(path) => BreadcrumbConfig::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => BreadcrumbConfig::default(),
    };

    if let Some(sep) = &args.sep {
        config = config.with_separator(sep.clone());
    }
    if let Some(home) = &args.home {
        config = config.with_home_label(home.clone());
    }
    if let Some(index) = &args.index {
        config = config.with_index_label(index.clone());
    }
    if let Some(element) = &args.element {
        config = config.with_list_element(element.clone());
    }

    debug!(?config, "resolved configuration");
    Ok(config)
}

/// Fail when flags the command ignores were given
fn reject_flags(command: &str, flags: &[(&str, bool)]) -> Result<()> {
    let given: Vec<&str> = flags
        .iter()
        .filter(|(_, set)| *set)
        .map(|(name, _)| *name)
        .collect();
    if !given.is_empty() {
        anyhow::bail!("{} does not accept {}", command, given.join(", "));
    }
    Ok(())
}

fn load_site(path: &Path) -> Result<SiteSnapshot> {
    let site = SiteSnapshot::from_path(path)
        .with_context(|| format!("Failed to load site snapshot {}", path.display()))?;
    info!(
        path = %path.display(),
        items = site.items.len(),
        kinds = ?site.view.kinds,
        "loaded site snapshot"
    );
    Ok(site)
}

fn run_render(site_path: &Path, args: &RenderArgs) -> Result<()> {
    let config = build_config(args)?;
    let site = load_site(site_path)?;

    let builder = BreadcrumbBuilder::new(&site, &config);
    let trail = builder.trail();
    info!(
        depth = trail.depth(),
        current = trail.current_entry().map(|e| e.text.as_str()),
        "built breadcrumb trail"
    );

    let format = args.format.clone().unwrap_or(OutputFormatArg::Html);
    let output = format_output(&builder, format.into()).context("Failed to format breadcrumb")?;

    write_output(&output, args.output.as_ref())
}

fn run_classify(site_path: &Path, args: &RenderArgs) -> Result<()> {
    reject_flags(
        "classify",
        &[
            ("--format", args.format.is_some()),
            ("--config", args.config.is_some()),
            ("--sep", args.sep.is_some()),
            ("--home", args.home.is_some()),
            ("--index", args.index.is_some()),
            ("--element", args.element.is_some()),
        ],
    )?;
    let site = load_site(site_path)?;

    let builder = BreadcrumbBuilder::new(&site, &BreadcrumbConfig::default());
    let label = builder.view_kind().map(|k| k.label()).unwrap_or("none");

    let output = if args.output.is_none() && atty::is(atty::Stream::Stdout) {
        label.green().bold().to_string()
    } else {
        label.to_string()
    };

    write_output(&output, args.output.as_ref())
}

/// Expand shortcodes; tag attributes layer over the resolved configuration
fn run_shortcode(site_path: &Path, content_path: &Path, args: &RenderArgs) -> Result<()> {
    reject_flags(
        "shortcode",
        &[
            ("--format", args.format.is_some()),
            ("--element", args.element.is_some()),
        ],
    )?;
    let config = build_config(args)?;
    let site = load_site(site_path)?;
    let content = fs::read_to_string(content_path)
        .with_context(|| format!("Failed to read content {}", content_path.display()))?;

    let registry = ShortcodeRegistry::with_breadcrumb_config(config);
    let output = registry.expand(&content, &site);

    write_output(&output, args.output.as_ref())
}

fn write_output(output: &str, path: Option<&PathBuf>) -> Result<()> {
    if let Some(path) = path {
        fs::write(path, output).context("Failed to write output file")?;
        info!(path = %path.display(), "wrote output");
    } else {
        println!("{}", output);
    }
    Ok(())
}
