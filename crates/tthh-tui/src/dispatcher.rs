/// Central dispatcher for the flux architecture.
/// Key handlers and effects send Actions here; the app loop drains them into
/// the stores.
use crate::actions::Action;
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Action>,
}

impl Dispatcher {
    pub fn new() -> (Self, ActionReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, ActionReceiver { rx })
    }

    /// Queue an action. A closed receiver means the app is shutting down,
    /// so the action is logged and dropped
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.tx.send(action) {
            log::warn!("Dropped action {:?}: receiver closed", e.0);
        }
    }
}

pub struct ActionReceiver {
    rx: mpsc::UnboundedReceiver<Action>,
}

impl ActionReceiver {
    pub async fn recv(&mut self) -> Option<Action> {
        self.rx.recv().await
    }

    /// Take an already queued action without waiting
    pub fn try_recv(&mut self) -> Option<Action> {
        self.rx.try_recv().ok()
    }
}
