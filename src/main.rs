use chrono::Datelike;
use clap::Parser;
use model_renderer_site::config::{self, SiteConfig};
use model_renderer_site::export::{self, ExportOptions};
use model_renderer_site::naming::ROOT;
use model_renderer_site::output;
use model_renderer_site::pages::Site;
use model_renderer_site::server::{self, AppState};
use model_renderer_site::templates::Templates;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "model-renderer-site")]
#[command(about = "Project site for model-renderer")]
#[command(long_about = "\
Project site for model-renderer

Without flags, serves the site over HTTP. Pages are rendered on request;
append ?lang=ru to any URL for the Russian version.

With --github-pages, writes the whole site as static files instead:

  docs/
  ├── .nojekyll
  ├── index.html               # Home, English
  ├── index_ru.html            # Home, Russian
  ├── features/
  │   ├── index.html
  │   └── index_ru.html
  ├── subprojects/mr-math/
  │   └── ...
  └── assets/                  # Copy of the assets directory

Settings are read from site.toml when it exists; flags override it.")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Export a static site for GitHub Pages and exit
    #[arg(long)]
    github_pages: bool,

    /// Port for the live server [default: 4747]
    #[arg(long)]
    port: Option<u16>,

    /// Address for the live server to bind [default: 0.0.0.0]
    #[arg(long)]
    host: Option<String>,

    /// Output directory for --github-pages [default: docs]
    #[arg(long)]
    output: Option<PathBuf>,

    /// Static assets directory [default: assets]
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Site configuration file (optional)
    #[arg(long, default_value = "site.toml")]
    config: PathBuf,
}

impl Cli {
    /// Flags win over the config file.
    fn apply(&self, config: &mut SiteConfig) {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(output) = &self.output {
            config.export.output_dir = output.clone();
        }
        if let Some(assets) = &self.assets {
            config.export.assets_dir = assets.clone();
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("model_renderer_site=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let mut config = config::load_config(&cli.config)?;
    cli.apply(&mut config);
    config.validate()?;

    let site = Site::standard();
    let templates = Templates::standard();

    if cli.github_pages {
        let options = ExportOptions {
            output_dir: config.export.output_dir.clone(),
            assets_dir: config.export.assets_dir.clone(),
            base_url: config.export.base_url.clone(),
            year: chrono::Local::now().year(),
        };
        let report = export::export(&site, &templates, &options)?;
        output::print_export_report(&report);
        println!();
        output::print_deploy_instructions(&options.output_dir);
        return Ok(());
    }

    let state = Arc::new(AppState {
        site,
        templates,
        base_url: ROOT.to_string(),
    });
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::run(
        state,
        &config.export.assets_dir,
        &config.server.host,
        config.server.port,
    ))?;
    Ok(())
}
