//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::config::Config;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that owns the view state. Every handled message is followed
/// by a fresh [`RenderState`] on the render channel.
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        config: &Config,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(config),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // The category list is fetched as soon as anyone observes it
        let cmd = self.state.request_categories();
        let _ = self.network_tx.send(cmd);
        self.publish();

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        tracing::info!("Quit requested");
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    self.publish();
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    self.publish();
                }
                else => break,
            }
        }
    }

    fn publish(&self) {
        let _ = self.render_tx.send(self.state.to_render_state());
    }

    fn send(&self, cmd: Option<NetworkCommand>) {
        if let Some(cmd) = cmd {
            let _ = self.network_tx.send(cmd);
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::MoveUp => self.state.move_up(),
            UiEvent::MoveDown => self.state.move_down(),
            UiEvent::MoveLeft => self.state.move_left(),
            UiEvent::MoveRight => self.state.move_right(),
            UiEvent::Select => {
                let cmd = self.state.select_category();
                self.send(cmd);
            }

            UiEvent::Refresh => {
                let cmd = self.state.refresh();
                self.send(cmd);
            }
            UiEvent::Back => {
                // Back at the root leaves the app
                if !self.state.go_back() {
                    return true;
                }
            }

            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, LoadState, Meal};
    use crate::routes::Route;

    struct Harness {
        ui_tx: mpsc::UnboundedSender<UiEvent>,
        net_resp_tx: mpsc::UnboundedSender<NetworkResponse>,
        net_cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>,
        render_rx: mpsc::UnboundedReceiver<RenderState>,
        handle: tokio::task::JoinHandle<()>,
    }

    fn spawn_actor() -> Harness {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel();
        let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();

        let actor = AppActor::new(&Config::default(), net_cmd_tx, render_tx);
        let handle = tokio::spawn(actor.run(ui_rx, net_resp_rx));
        Harness {
            ui_tx,
            net_resp_tx,
            net_cmd_rx,
            render_rx,
            handle,
        }
    }

    #[tokio::test]
    async fn test_fetches_categories_on_start() {
        let mut h = spawn_actor();

        let cmd = h.net_cmd_rx.recv().await.unwrap();
        let NetworkCommand::FetchCategories { id } = cmd.clone() else {
            panic!("expected category fetch, got {:?}", cmd);
        };

        let first = h.render_rx.recv().await.unwrap();
        assert_eq!(first.route, Route::Main);
        assert!(first.categories.is_loading());

        h.net_resp_tx
            .send(NetworkResponse::CategoriesLoaded {
                id,
                categories: vec![Category::new("Beef", "url1")],
                time_ms: 3,
            })
            .unwrap();
        let loaded = h.render_rx.recv().await.unwrap();
        assert_eq!(loaded.categories, LoadState::Success(vec![Category::new("Beef", "url1")]));

        h.ui_tx.send(UiEvent::Quit).unwrap();
        assert_eq!(h.net_cmd_rx.recv().await, Some(NetworkCommand::Shutdown));
        h.handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_select_then_back() {
        let mut h = spawn_actor();
        let Some(NetworkCommand::FetchCategories { id }) = h.net_cmd_rx.recv().await else {
            panic!("expected category fetch");
        };
        h.render_rx.recv().await.unwrap();

        h.net_resp_tx
            .send(NetworkResponse::CategoriesLoaded {
                id,
                categories: vec![Category::new("Seafood", "u")],
                time_ms: 0,
            })
            .unwrap();
        assert_eq!(h.render_rx.recv().await.unwrap().categories.len(), 1);

        h.ui_tx.send(UiEvent::Select).unwrap();
        let Some(NetworkCommand::FetchMeals { id, category }) = h.net_cmd_rx.recv().await else {
            panic!("expected meal fetch");
        };
        assert_eq!(category, "Seafood");
        let selected = h.render_rx.recv().await.unwrap();
        assert_eq!(selected.route, Route::Meals);
        assert!(selected.meals.is_loading());

        h.net_resp_tx
            .send(NetworkResponse::MealsLoaded {
                id,
                category,
                meals: vec![Meal::new("Sushi", "s")],
                time_ms: 0,
            })
            .unwrap();
        let loaded = h.render_rx.recv().await.unwrap();
        assert_eq!(loaded.chosen_category.as_deref(), Some("Seafood"));
        assert_eq!(loaded.meals.len(), 1);

        h.ui_tx.send(UiEvent::Back).unwrap();
        assert_eq!(h.render_rx.recv().await.unwrap().route, Route::Main);

        // Back at the root quits
        h.ui_tx.send(UiEvent::Back).unwrap();
        assert_eq!(h.net_cmd_rx.recv().await, Some(NetworkCommand::Shutdown));
        h.handle.await.unwrap();
    }
}
