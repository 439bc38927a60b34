//! CLI Command Handlers
//!
//! Implements all CLI commands against the catalog backend. Each handler
//! takes CLI args and Output, returns ExitCode.

use crate::api::{CatalogClient, CatalogError};
use crate::cli::{
    validate_content_id, ExitCode, InfoCmd, Output, PageCmd, ResolveCmd, SearchCmd,
};
use crate::config::Config;
use crate::preview::{embed_url, youtube_video_id};

fn client(config: &Config) -> CatalogClient {
    CatalogClient::new(config.api_base_url(), config.api_key())
}

/// Map a fetch error to the exit code scripts expect
fn fetch_error(output: &Output, context: &str, err: anyhow::Error) -> ExitCode {
    let code = match err.downcast_ref::<CatalogError>() {
        Some(CatalogError::NotFound) => ExitCode::NotFound,
        _ => ExitCode::NetworkError,
    };
    output.error(format!("{}: {}", context, err), code)
}

// =============================================================================
// Page Command
// =============================================================================

pub async fn page_cmd(cmd: PageCmd, output: &Output, config: &Config) -> ExitCode {
    let client = client(config);
    let window = cmd.window.into();

    output.info(format!("Fetching page ({})...", window));

    match client.page(window).await {
        Ok(page) => {
            if let Err(e) = output.print(&page) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => fetch_error(output, "Page fetch failed", e),
    }
}

// =============================================================================
// Search Command
// =============================================================================

pub async fn search_cmd(cmd: SearchCmd, output: &Output, config: &Config) -> ExitCode {
    let client = client(config);

    output.info(format!("Searching for: {}", cmd.query));

    match client.search(&cmd.query).await {
        Ok(mut hits) => {
            hits.truncate(cmd.limit);
            if let Err(e) = output.print(&hits) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => fetch_error(output, "Search failed", e),
    }
}

// =============================================================================
// Info Command
// =============================================================================

pub async fn info_cmd(cmd: InfoCmd, output: &Output, config: &Config) -> ExitCode {
    let id = match validate_content_id(&cmd.id) {
        Ok(id) => id,
        Err(e) => return output.error(e, ExitCode::InvalidArgs),
    };
    let client = client(config);

    output.info(format!("Getting info for: {}", id));

    match client.movie(id).await {
        Ok(detail) => {
            if let Err(e) = output.print(&detail) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => fetch_error(output, "Info failed", e),
    }
}

// =============================================================================
// Resolve Command
// =============================================================================

pub fn resolve_cmd(cmd: ResolveCmd, output: &Output) -> ExitCode {
    match youtube_video_id(&cmd.url) {
        Some(id) => {
            let value = if cmd.embed { embed_url(id) } else { id.to_string() };
            if output.json {
                if let Err(e) = output.print(&value) {
                    return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
                }
            } else {
                output.line(&value);
            }
            ExitCode::Success
        }
        None => output.error("Not a YouTube video URL", ExitCode::NotFound),
    }
}
