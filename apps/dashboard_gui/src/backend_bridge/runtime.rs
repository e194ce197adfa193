//! Worker thread owning the tokio runtime and the workbench HTTP client.
//!
//! One command in, one `RequestFinished` out. If the UI side has hung up by
//! the time a result arrives, the send fails and the result is dropped; late
//! responses never outlive the dashboard.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use tracing::{error, info, warn};
use workbench_client::{ErrorBodyPolicy, WorkbenchClient};

use crate::backend_bridge::commands::BackendCommand;
use crate::config::StartupConfig;
use crate::controller::events::{UiError, UiEvent};

pub fn start_backend_bridge(
    config: StartupConfig,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BridgeFailed(format!(
                    "failed to build backend runtime: {err}"
                )));
                return;
            }
        };

        runtime.block_on(async move {
            let client = WorkbenchClient::new(&config.api_base_url, ErrorBodyPolicy::DisplayBody);
            info!(base_url = client.base_url(), "backend bridge ready");
            let _ = ui_tx.try_send(UiEvent::BridgeReady);

            while let Ok(cmd) = cmd_rx.recv() {
                let name = cmd.name();
                let screen = cmd.screen();
                let seq = cmd.seq();

                let outcome = match cmd {
                    BackendCommand::ResearchKeywords { request, .. } => {
                        client.research_keywords(&request).await
                    }
                    BackendCommand::BuildBrief { request, .. } => {
                        client.build_brief(&request).await
                    }
                    BackendCommand::GenerateArticle { request, .. } => {
                        client.generate_article(&request).await
                    }
                };

                let outcome = match outcome {
                    Ok(response) => {
                        info!(command = name, seq, "workbench request finished");
                        Ok(response)
                    }
                    Err(err) => {
                        warn!(command = name, seq, "workbench request failed: {err}");
                        Err(UiError::from(err))
                    }
                };

                let _ = ui_tx.try_send(UiEvent::RequestFinished {
                    screen,
                    seq,
                    outcome,
                });
            }
        });
    });
}
