use serde::{Deserialize, Serialize};

use super::error::ActionError;

/// Bulk operations offered above a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkAction {
    Export,
    Delete,
    Email,
    UpdateStatus,
}

impl BulkAction {
    /// Action name passed to the handler
    pub fn as_str(&self) -> &'static str {
        match self {
            BulkAction::Export => "export",
            BulkAction::Delete => "delete",
            BulkAction::Email => "email",
            BulkAction::UpdateStatus => "status",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BulkAction::Export => "Export",
            BulkAction::Delete => "Delete",
            BulkAction::Email => "Email",
            BulkAction::UpdateStatus => "Update Status",
        }
    }

    /// Icon name for the action button
    pub fn icon(&self) -> &'static str {
        match self {
            BulkAction::Export => "download",
            BulkAction::Delete => "trash",
            BulkAction::Email => "mail",
            BulkAction::UpdateStatus => "refresh",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "export" => Some(BulkAction::Export),
            "delete" => Some(BulkAction::Delete),
            "email" => Some(BulkAction::Email),
            "status" => Some(BulkAction::UpdateStatus),
            _ => None,
        }
    }
}

/// External collaborator that actually performs a bulk action.
///
/// Fire-and-forget from the list's point of view: the handler is called once
/// and is responsible for surfacing its own failures.
pub trait ActionHandler {
    fn handle(&self, action: &str, ids: &[String]) -> Result<(), ActionError>;
}

impl<F> ActionHandler for F
where
    F: Fn(&str, &[String]) -> Result<(), ActionError>,
{
    fn handle(&self, action: &str, ids: &[String]) -> Result<(), ActionError> {
        self(action, ids)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Nothing selected, handler not called
    Skipped,
    Dispatched { count: usize },
}

/// Forwards `(action, selected ids)` to the injected handler.
#[derive(Debug, Clone)]
pub struct BulkActionDispatcher<H> {
    handler: H,
    actions: Vec<BulkAction>,
}

impl<H: ActionHandler> BulkActionDispatcher<H> {
    pub fn new(handler: H, actions: Vec<BulkAction>) -> Self {
        Self { handler, actions }
    }

    /// Actions in display order
    pub fn actions(&self) -> &[BulkAction] {
        &self.actions
    }

    /// Buttons are disabled while nothing is selected.
    pub fn is_enabled(&self, selected: &[String]) -> bool {
        !selected.is_empty()
    }

    pub fn dispatch(
        &self,
        action: BulkAction,
        selected: &[String],
    ) -> Result<DispatchOutcome, ActionError> {
        if !self.actions.contains(&action) {
            return Err(ActionError::Unsupported(action.as_str().to_string()));
        }
        if !self.is_enabled(selected) {
            log::debug!("bulk action '{}' skipped: empty selection", action.as_str());
            return Ok(DispatchOutcome::Skipped);
        }

        log::info!(
            "bulk action '{}' on {} record(s)",
            action.as_str(),
            selected.len()
        );
        self.handler.handle(action.as_str(), selected)?;
        Ok(DispatchOutcome::Dispatched {
            count: selected.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingHandler {
        calls: RefCell<Vec<(String, Vec<String>)>>,
    }

    impl ActionHandler for RecordingHandler {
        fn handle(&self, action: &str, ids: &[String]) -> Result<(), ActionError> {
            self.calls
                .borrow_mut()
                .push((action.to_string(), ids.to_vec()));
            Ok(())
        }
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_selection_is_noop() {
        let dispatcher =
            BulkActionDispatcher::new(RecordingHandler::default(), vec![BulkAction::Export]);
        let outcome = dispatcher.dispatch(BulkAction::Export, &[]).unwrap();
        assert_eq!(outcome, DispatchOutcome::Skipped);
        assert!(dispatcher.handler.calls.borrow().is_empty());
    }

    #[test]
    fn test_dispatch_forwards_action_and_ids() {
        let dispatcher = BulkActionDispatcher::new(
            RecordingHandler::default(),
            vec![BulkAction::Export, BulkAction::Delete],
        );
        let selected = ids(&["ORD-001", "ORD-003"]);
        let outcome = dispatcher.dispatch(BulkAction::Delete, &selected).unwrap();
        assert_eq!(outcome, DispatchOutcome::Dispatched { count: 2 });
        assert_eq!(
            dispatcher.handler.calls.borrow().as_slice(),
            &[("delete".to_string(), selected)]
        );
    }

    #[test]
    fn test_unsupported_action_is_rejected() {
        let dispatcher =
            BulkActionDispatcher::new(RecordingHandler::default(), vec![BulkAction::Export]);
        let err = dispatcher
            .dispatch(BulkAction::Email, &ids(&["CUS-001"]))
            .unwrap_err();
        assert_eq!(err, ActionError::Unsupported("email".to_string()));
    }

    #[test]
    fn test_handler_error_is_returned() {
        let failing = |action: &str, _: &[String]| -> Result<(), ActionError> {
            Err(ActionError::failed(action, "offline"))
        };
        let dispatcher = BulkActionDispatcher::new(failing, vec![BulkAction::UpdateStatus]);
        let err = dispatcher
            .dispatch(BulkAction::UpdateStatus, &ids(&["A"]))
            .unwrap_err();
        assert_eq!(err.to_string(), "action 'status' failed: offline");
    }

    #[test]
    fn test_action_names_round_trip() {
        for action in [
            BulkAction::Export,
            BulkAction::Delete,
            BulkAction::Email,
            BulkAction::UpdateStatus,
        ] {
            assert_eq!(BulkAction::from_name(action.as_str()), Some(action));
        }
    }
}
