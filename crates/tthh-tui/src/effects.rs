/// Effects module handles side effects triggered by actions.
/// Results come back to the stores as new actions.
use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::stores::FormStore;

/// Endpoint the request would be posted to. Nothing is sent; the payload is
/// logged instead
pub const ABSENCE_ENDPOINT: &str = "/api/v1/ausencias";

pub struct Effects {
    dispatcher: Dispatcher,
    form_store: FormStore,
}

impl Effects {
    pub fn new(dispatcher: Dispatcher, form_store: FormStore) -> Self {
        Self {
            dispatcher,
            form_store,
        }
    }

    /// Runs after the stores have reduced `action`
    pub fn handle(&self, action: &Action) {
        match action {
            Action::SubmitRequest => self.submit_request(),
            Action::ShowError(message) => log::warn!("{}", message),
            _ => {}
        }
    }

    fn submit_request(&self) {
        match self.form_store.build_request() {
            Ok(request) => match serde_json::to_string(&request) {
                Ok(payload) => {
                    log::info!("POST {} {}", ABSENCE_ENDPOINT, payload);
                    self.dispatcher.dispatch(Action::RequestSubmitted(request));
                }
                Err(e) => {
                    log::error!("Failed to serialize request: {}", e);
                    self.dispatcher
                        .dispatch(Action::ShowError(format!("Error interno: {}", e)));
                }
            },
            Err(e) => {
                self.dispatcher.dispatch(Action::ShowError(e.to_string()));
            }
        }
    }
}
