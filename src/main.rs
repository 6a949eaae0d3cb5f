#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tetravers_core::{BackendConfig, SharedBackend, SupabaseClient};
use tracing_subscriber::EnvFilter;

/// Le Tétravers - lore site for a fantasy universe
#[derive(Parser, Debug)]
#[command(name = "tetravers-desktop")]
#[command(about = "Le Tétravers - La Magie au-delà des Illusions")]
struct Args {
    /// Load SUPABASE_URL / SUPABASE_ANON_KEY from this file instead of ./.env
    #[arg(short, long)]
    env_file: Option<PathBuf>,
}

/// Build the PostgREST client from SUPABASE_URL / SUPABASE_ANON_KEY.
fn connect_backend() -> anyhow::Result<SharedBackend> {
    let config = BackendConfig::from_env().context("reading backend configuration")?;
    tracing::info!(url = %config.url, "Starting Le Tétravers");
    let backend: SharedBackend = Arc::new(SupabaseClient::new(&config));
    Ok(backend)
}

fn main() {
    let args = Args::parse();

    // A missing .env is fine; the variables may come from the environment
    let env_loaded = match &args.env_file {
        Some(path) => dotenvy::from_path(path).map(|_| path.clone()),
        None => dotenvy::dotenv(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match env_loaded {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded environment file"),
        Err(e) if args.env_file.is_some() => {
            tracing::warn!(error = %e, "Could not read environment file")
        }
        Err(_) => {}
    }

    let backend = match connect_backend() {
        Ok(backend) => backend,
        Err(e) => {
            tracing::error!("Backend is not configured: {e:#}");
            std::process::exit(1);
        }
    };

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Le Tétravers")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context(backend)
        .launch(app::App);
}
