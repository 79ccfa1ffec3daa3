//! CLI command definitions, routing, and tracing setup.

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use sitecrumbs_core::{
    generate_blog_breadcrumbs, generate_breadcrumbs, generate_goodies_breadcrumbs,
    generate_project_breadcrumbs, generate_service_breadcrumbs, slug::content_slug,
    structured_data,
};
use sitecrumbs_shared::{
    AppConfig, BreadcrumbEntry, OutputFormat, init_config, load_config, validate_base_url,
};
use tracing::{debug, info};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// SiteCrumbs — localized breadcrumb trails and JSON-LD for site paths.
#[derive(Parser)]
#[command(
    name = "sitecrumbs",
    version,
    about = "Generate localized breadcrumb trails and BreadcrumbList JSON-LD for site paths.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Site origin (overrides `site.base_url` in the config file).
    #[arg(long, env = "SITECRUMBS_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Output format: text, json, json-ld, or script.
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Print the trail for a request path (e.g. /en/blog/my-post).
    Trail {
        /// Request path.
        path: String,

        /// Label for the current page instead of the title-cased slug.
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Trail for a blog post.
    Blog {
        /// Language code (defaults to `site.default_lang`).
        #[arg(short, long)]
        lang: Option<String>,

        /// Post title.
        #[arg(short, long)]
        title: String,
    },

    /// Trail for a portfolio project page.
    Project {
        /// Language code (defaults to `site.default_lang`).
        #[arg(short, long)]
        lang: Option<String>,

        /// Project title.
        #[arg(short, long)]
        title: String,
    },

    /// Trail for a service page.
    Service {
        /// Language code (defaults to `site.default_lang`).
        #[arg(short, long)]
        lang: Option<String>,

        /// Service title.
        #[arg(short, long)]
        title: String,
    },

    /// Trail for a goodies category or item.
    Goodies {
        /// Language code (defaults to `site.default_lang`).
        #[arg(short, long)]
        lang: Option<String>,

        /// Category slug: css-tricks, snippets, tools, useful-links, ...
        #[arg(short, long)]
        category: String,

        /// Item title; omit for the category page itself.
        #[arg(short, long)]
        item: Option<String>,
    },

    /// Print the URL slug of a localized content entry (e.g. hospeda-en.md).
    Slug {
        /// Content entry id.
        id: String,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
///
/// Logs go to stderr so stdout carries only the rendered trail.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "warn",
        1 => "sitecrumbs_cli=info,sitecrumbs_core=info,sitecrumbs_shared=info",
        2 => "sitecrumbs_cli=debug,sitecrumbs_core=debug,sitecrumbs_shared=debug",
        _ => "sitecrumbs_cli=trace,sitecrumbs_core=trace,sitecrumbs_shared=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
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

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Settings merged from CLI flags, then the config file, then defaults.
struct Resolved {
    base_url: String,
    default_lang: String,
    format: OutputFormat,
}

impl Resolved {
    fn new(
        cli_base_url: Option<&str>,
        cli_format: Option<OutputFormat>,
        config: &AppConfig,
    ) -> Result<Self> {
        let raw = cli_base_url.unwrap_or(&config.site.base_url);
        let base_url = validate_base_url(raw)?;
        let format = cli_format.unwrap_or(config.defaults.format);
        debug!(%base_url, ?format, "resolved output settings");

        Ok(Self {
            base_url,
            default_lang: config.site.default_lang.clone(),
            format,
        })
    }

    fn lang<'a>(&'a self, lang: Option<&'a str>) -> &'a str {
        lang.unwrap_or(&self.default_lang)
    }
}

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let Cli {
        base_url,
        format,
        command,
        ..
    } = cli;

    match command {
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
        Command::Slug { id } => {
            println!("{}", content_slug(&id));
            Ok(())
        }
        command => {
            let config = load_config()?;
            let resolved = Resolved::new(base_url.as_deref(), format, &config)?;
            let trail = build_trail(&command, &resolved)?;
            info!(entries = trail.len(), "generated breadcrumb trail");
            println!("{}", render(&trail, resolved.format)?);
            Ok(())
        }
    }
}

fn build_trail(command: &Command, resolved: &Resolved) -> Result<Vec<BreadcrumbEntry>> {
    let base = resolved.base_url.as_str();
    let trail = match command {
        Command::Trail { path, title } => generate_breadcrumbs(path, base, title.as_deref()),
        Command::Blog { lang, title } => {
            generate_blog_breadcrumbs(resolved.lang(lang.as_deref()), base, title)
        }
        Command::Project { lang, title } => {
            generate_project_breadcrumbs(resolved.lang(lang.as_deref()), base, title)
        }
        Command::Service { lang, title } => {
            generate_service_breadcrumbs(resolved.lang(lang.as_deref()), base, title)
        }
        Command::Goodies {
            lang,
            category,
            item,
        } => generate_goodies_breadcrumbs(
            resolved.lang(lang.as_deref()),
            base,
            category,
            item.as_deref(),
        ),
        Command::Slug { .. } | Command::Config { .. } => {
            return Err(eyre!("command does not produce a breadcrumb trail"));
        }
    };
    Ok(trail)
}

/// Render a trail in the requested output format.
fn render(trail: &[BreadcrumbEntry], format: OutputFormat) -> Result<String> {
    let out = match format {
        OutputFormat::Text => trail
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" > "),
        OutputFormat::Json => serde_json::to_string_pretty(trail)?,
        OutputFormat::JsonLd => structured_data::to_json_ld(trail)?,
        OutputFormat::Script => structured_data::json_ld_script_tag(trail)?,
    };
    Ok(out)
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
