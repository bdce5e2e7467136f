use crate::theme::Theme;
use anyhow::{anyhow, Result};
use clap::Parser;
use std::env;

/// apix - APIs.guru Catalog Explorer
///
/// Terminal UI for browsing the APIs.guru directory of OpenAPI descriptions.
/// Configuration priority: CLI args > Environment variables > Defaults
#[derive(Parser, Debug)]
#[command(name = "apix")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "APIs.guru Catalog Explorer", long_about = None)]
pub struct CliArgs {
    /// Catalog base URL
    #[arg(long, env = "CATALOG_URL")]
    pub catalog_url: Option<String>,

    /// Target UI rendering FPS (1-120)
    #[arg(long, env = "RENDER_FPS")]
    pub render_fps: Option<u32>,

    /// Available FPS options for Ctrl+O cycling (comma-separated, e.g., "20,30,60")
    #[arg(long, env = "RENDER_FPS_CHOICES")]
    pub render_fps_choices: Option<String>,

    /// Color theme: nord, dos-blue, amber-crt, green-phosphor
    #[arg(long, env = "APIX_THEME")]
    pub theme: Option<String>,

    /// Startup route (e.g. "/api-details/adyen.com" or "apix://api-details/adyen.com")
    #[arg(value_name = "ROUTE")]
    pub route: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub catalog_url: String,
    pub render_fps: u32,
    pub render_fps_choices: Vec<u32>,
    pub theme: Theme,
    pub route: Option<String>,
}

/// Validate that a value is within a given range (inclusive)
fn validate_in_range<T>(val: T, min: T, max: T, name: &str) -> Result<T>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if val < min || val > max {
        Err(anyhow!("{name} must be in range [{min}, {max}], got {val}"))
    } else {
        Ok(val)
    }
}

/// Parse comma-separated FPS list and validate each value
fn parse_fps_list(s: &str) -> Vec<u32> {
    s.split(',')
        .filter_map(|v| v.trim().parse::<u32>().ok())
        .filter(|n| (1..=120).contains(n))
        .collect()
}

/// Validate URL format (basic check)
fn validate_url(url: &str, name: &str) -> Result<()> {
    if url.is_empty() {
        return Err(anyhow!("{name} cannot be empty"));
    }

    // Basic scheme validation; the catalog speaks plain HTTP(S)
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(anyhow!("{name} must start with http:// or https://"))
    }
}

/// Load configuration from CLI args and environment variables
/// Priority: CLI args > Environment variables > Defaults
pub fn load() -> Result<Config> {
    let args = CliArgs::parse();

    // Catalog base URL
    let catalog_url = args
        .catalog_url
        .or_else(|| env::var("CATALOG_URL").ok())
        .unwrap_or_else(|| "https://api.apis.guru".to_string());
    validate_url(&catalog_url, "CATALOG_URL")?;

    // FPS choices with validation
    let render_fps_choices = args
        .render_fps_choices
        .or_else(|| env::var("RENDER_FPS_CHOICES").ok())
        .map(|s| parse_fps_list(&s))
        .unwrap_or_else(|| vec![20, 30, 60]);

    // Ensure render_fps_choices is not empty
    if render_fps_choices.is_empty() {
        return Err(anyhow!(
            "RENDER_FPS_CHOICES must contain at least one valid value (1-120)"
        ));
    }

    // Render FPS (default to first choice if not specified)
    let default_fps = *render_fps_choices.first().unwrap();
    let render_fps = args
        .render_fps
        .or_else(|| env::var("RENDER_FPS").ok().and_then(|s| s.parse().ok()))
        .unwrap_or(default_fps);
    let render_fps = validate_in_range(render_fps, 1, 120, "RENDER_FPS")?;

    // Theme
    let theme = match args.theme.or_else(|| env::var("APIX_THEME").ok()) {
        Some(name) => Theme::from_str(&name).map_err(|e| anyhow!(e))?,
        None => Theme::default(),
    };

    Ok(Config {
        catalog_url,
        render_fps,
        render_fps_choices,
        theme,
        route: args.route,
    })
}
