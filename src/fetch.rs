use crate::catalog;
use crate::config::Config;
use crate::types::{AppEvent, FetchRequest};
use anyhow::Result;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

/// Background task that talks to the catalog on demand.
///
/// Receives work items from the UI loop and answers on the event channel.
/// Failures never kill the task: a failed providers fetch is delivered as an
/// empty list, a failed spec fetch as `None`, each after logging the error.
pub async fn run_fetch_worker(
    cfg: Config,
    mut req_rx: UnboundedReceiver<FetchRequest>,
    event_tx: UnboundedSender<AppEvent>,
) -> Result<()> {
    log::info!("[Fetch] Worker started (catalog: {})", cfg.catalog_url);

    while let Some(req) = req_rx.recv().await {
        match req {
            FetchRequest::Providers => {
                let ids = match catalog::list_providers(&cfg.catalog_url).await {
                    Ok(ids) => {
                        log::info!("[Fetch] Providers listed ({} ids)", ids.len());
                        ids
                    }
                    Err(e) => {
                        log::error!("[Fetch] Providers fetch failed: {e:#}");
                        Vec::new()
                    }
                };
                if event_tx.send(AppEvent::ProvidersLoaded(ids)).is_err() {
                    break; // UI loop is gone
                }
            }
            FetchRequest::Spec { provider } => {
                let summary = match catalog::fetch_provider_spec(&cfg.catalog_url, &provider).await
                {
                    Ok(s) => {
                        log::info!("[Fetch] Spec fetched for {provider} (version {})", s.version);
                        Some(s)
                    }
                    Err(e) => {
                        log::error!("[Fetch] Spec fetch failed for {provider}: {e:#}");
                        None
                    }
                };
                if event_tx
                    .send(AppEvent::SpecLoaded { provider, summary })
                    .is_err()
                {
                    break;
                }
            }
        }
    }

    log::info!("[Fetch] Worker shutting down");
    Ok(())
}
