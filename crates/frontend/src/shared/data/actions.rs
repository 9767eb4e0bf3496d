use crate::shared::export::{export_to_csv, CsvExportable};
use contracts::shared::list_view::{ActionError, ActionHandler, ListRecord, ListViewController};
use leptos::prelude::*;

/// Bulk action handler of a list screen.
///
/// `export` downloads the selected records as CSV; everything else has no
/// backend yet and is only logged.
pub struct ListActionHandler<R: Send + Sync + 'static> {
    entity: &'static str,
    list: RwSignal<ListViewController<R>>,
}

impl<R> ListActionHandler<R>
where
    R: ListRecord + Clone + Send + Sync + 'static,
{
    pub fn new(entity: &'static str, list: RwSignal<ListViewController<R>>) -> Self {
        Self { entity, list }
    }

    fn selected_records(&self, ids: &[String]) -> Vec<R> {
        self.list.with_untracked(|c| {
            ids.iter()
                .filter_map(|id| c.find(id).cloned())
                .collect()
        })
    }
}

impl<R> ActionHandler for ListActionHandler<R>
where
    R: ListRecord + CsvExportable + Clone + Send + Sync + 'static,
{
    fn handle(&self, action: &str, ids: &[String]) -> Result<(), ActionError> {
        match action {
            "export" => {
                let records = self.selected_records(ids);
                let filename = format!(
                    "{}_{}.csv",
                    self.entity,
                    chrono::Utc::now().format("%Y%m%d_%H%M%S")
                );
                export_to_csv(&records, &filename).map_err(|e| ActionError::failed(action, e))
            }
            _ => {
                log::info!("would {} {} {}: {:?}", action, ids.len(), self.entity, ids);
                Ok(())
            }
        }
    }
}
