//! Network actor - runs catalog requests in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::CatalogClient;

/// Network actor that turns commands into HTTP calls.
///
/// Every command gets its own task; nothing is queued behind an in-flight
/// request and nothing can be cancelled once sent.
pub struct NetworkActor {
    client: CatalogClient,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(client: CatalogClient, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Shutdown) | None => break,
                        Some(cmd) => {
                            let client = self.client.clone();
                            let response_tx = self.response_tx.clone();
                            self.active_requests.spawn(async move {
                                if let Some(response) = execute(&client, cmd).await {
                                    let _ = response_tx.send(response);
                                }
                            });
                        }
                    }
                }

                Some(_result) = self.active_requests.join_next() => {
                    // Task completed - the response was already sent
                }
            }
        }
    }
}

/// Execute a single command against the catalog service.
///
/// Returns `None` for commands that are not requests.
pub async fn execute(client: &CatalogClient, cmd: NetworkCommand) -> Option<NetworkResponse> {
    let op = cmd.operation()?;
    tracing::info!(id = ?cmd.id(), op = op.as_str(), base = client.base_url(), "Executing request");

    let (id, result) = match cmd {
        NetworkCommand::List { id } => (
            id,
            client.list().await.map(|items| NetworkResponse::Listed { id, items }),
        ),
        NetworkCommand::Create { id, draft } => (
            id,
            client.create(&draft).await.map(|item| NetworkResponse::Saved { id, item }),
        ),
        NetworkCommand::Update { id, item_id, draft } => (
            id,
            client
                .update(item_id, &draft)
                .await
                .map(|item| NetworkResponse::Saved { id, item }),
        ),
        NetworkCommand::Delete { id, item_id } => (
            id,
            client
                .delete(item_id)
                .await
                .map(|()| NetworkResponse::Deleted { id, item_id }),
        ),
        NetworkCommand::Shutdown => return None,
    };

    match result {
        Ok(response) => {
            tracing::info!(id, op = op.as_str(), "Request completed");
            Some(response)
        }
        Err(e) => {
            tracing::error!(id, op = op.as_str(), error = %e, "Request failed");
            Some(NetworkResponse::Failed {
                id,
                op,
                message: e.to_string(),
            })
        }
    }
}
