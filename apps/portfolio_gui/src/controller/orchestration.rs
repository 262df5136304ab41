//! Queueing UI actions for the next reducer pass.

use crossbeam_channel::{Sender, TrySendError};

use crate::controller::events::UiAction;

/// Returns false when the action was dropped.
pub fn dispatch_ui_action(actions_tx: &Sender<UiAction>, action: UiAction) -> bool {
    let name = action.name();
    match actions_tx.try_send(action) {
        Ok(()) => {
            tracing::debug!(action = name, "queued ui action");
            true
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(action = name, "ui action queue is full; dropping action");
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::warn!(action = name, "ui action queue disconnected");
            false
        }
    }
}
