mod config;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use config::AppConfig;
use tracing::info;

use orgchart::application::output::{render_list, render_profile, render_stats, render_tree};
use orgchart::logger;
use orgchart::{filter_by_search, EngineConfig, FileDirectory, OrgChartService, ViewMode};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = AppConfig::parse();
    logger::init(cfg.log_config());

    let base = match &cfg.config {
        Some(path) => EngineConfig::load(path)
            .await
            .with_context(|| format!("loading engine config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let engine_config = cfg.engine_config(base);

    let source = FileDirectory::new(&cfg.directory)?;
    let service = OrgChartService::new(Arc::new(source), engine_config.clone());

    info!(directory = %cfg.directory.display(), "building org chart");
    let snapshot = if cfg.strict {
        service.refresh_strict().await?
    } else {
        service.refresh().await?
    };

    match engine_config.view_mode {
        ViewMode::Tree => {
            let state = service.view_state().snapshot().await;
            print!("{}", render_tree(&snapshot.nodes, &state));
        }
        ViewMode::List => {
            let matches = filter_by_search(&snapshot.nodes, &cfg.query);
            print!("{}", render_list(&matches));
        }
    }
    println!("{}", render_stats(&snapshot.stats));

    if let Some(id) = &cfg.profile {
        let profile = service.profile(id).await?;
        println!();
        print!("{}", render_profile(&profile));
    }

    Ok(())
}
