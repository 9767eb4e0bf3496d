//! Generic list view core shared by the Orders and Customers screens.

pub mod controller;
pub mod criteria;
pub mod dispatch;
pub mod error;
pub mod filter_panel;
pub mod pagination;
pub mod record;
pub mod selection;
pub mod sort;
pub mod store;

pub use controller::ListViewController;
pub use criteria::{Constraint, FilterCriteria};
pub use dispatch::{ActionHandler, BulkAction, BulkActionDispatcher, DispatchOutcome};
pub use error::{ActionError, StoreError};
pub use filter_panel::{FilterDraft, FilterPanel};
pub use pagination::{PageLink, Pagination, DEFAULT_PAGE_SIZE};
pub use record::{FieldValue, ListRecord};
pub use selection::{PageSelection, SelectionPolicy, SelectionSet};
pub use sort::{SortDirection, SortState};
pub use store::{InMemoryStore, RecordStore};
