//! Network actor - runs meal API fetches in the Tokio runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{execute_fetch, MealDbClient};

/// Network actor that turns fetch commands into responses. Each fetch runs
/// in its own task; nothing is cancelled before shutdown.
pub struct NetworkActor {
    client: MealDbClient,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(client: MealDbClient, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
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
                        Some(NetworkCommand::Shutdown) | None => {
                            tracing::info!(in_flight = self.active_requests.len(), "Network actor shutting down");
                            self.active_requests.abort_all();
                            break;
                        }
                        Some(command) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(?command, base = client.base_url(), "Executing fetch");
                                if let Some(result) = execute_fetch(&client, command).await {
                                    tracing::info!(id = result.id(), time_ms = result.time_ms(), "Fetch completed");
                                    let _ = response_tx.send(result);
                                }
                            });
                        }
                    }
                }

                // Reap finished tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}
