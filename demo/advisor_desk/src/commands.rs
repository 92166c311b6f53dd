//! CLI command implementations.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use advisor_core::types::ClientId;
use advisor_desk::dashboard::widget_page;
use advisor_desk::prelude::*;
use advisor_inputs::catalog::{produce, produce_for_client, ProducerId};
use anyhow::{anyhow, Result};
use serde::Serialize;
use tracing::info;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Compose a page for a fresh session
pub fn page(config: &DeskConfig, page: &str, group: Option<&str>) -> Result<()> {
    let page = widget_page(page)?;
    let mut session = DeskSession::from_config(config)?;
    if let Some(group) = group {
        session.select_group(group)?;
    }

    let plan = compose_page(&session, page)?;
    info!(page = page.key(), panels = plan.panels.len(), "page composed");
    print_json(&plan)
}

/// Print the client detail view
pub fn client(config: &DeskConfig, id: &str) -> Result<()> {
    let detail = client_detail(&ClientId::new(id), config)?;
    print_json(&detail)
}

/// List groups for a fresh session
pub fn groups(config: &DeskConfig) -> Result<()> {
    let session = DeskSession::from_config(config)?;
    print_json(&session.list_groups())
}

/// Draft a proposal signed by the configured advisor
pub fn proposal(config: &DeskConfig, client: &str) -> Result<()> {
    let draft = draft_proposal(client, &config.advisor_name)?;
    print_json(&draft)
}

/// Export a catalog dataset as CSV
pub fn export(producer: &str, client: Option<&str>, out: &Path) -> Result<()> {
    let id: ProducerId = producer.parse().map_err(|e: String| anyhow!(e))?;
    let dataset = match client {
        Some(client) => produce_for_client(id, &ClientId::new(client))?,
        None => produce(id)?,
    };

    let file = File::create(out)?;
    dataset.write_csv(file)?;
    info!(producer = id.key(), rows = dataset.len(), path = %out.display(), "dataset exported");
    Ok(())
}
