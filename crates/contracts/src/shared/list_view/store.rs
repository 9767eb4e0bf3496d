use super::error::StoreError;

/// Source of the full record collection behind a list view.
///
/// A real dashboard would back this with a REST client or a local cache; the
/// list view only ever asks for the whole collection and treats each answer as
/// an atomic replacement.
pub trait RecordStore<R> {
    fn get_all(&self) -> Result<Vec<R>, StoreError>;
}

/// Store over a fixed in-memory collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore<R> {
    records: Vec<R>,
}

impl<R> InMemoryStore<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Clone> RecordStore<R> for InMemoryStore<R> {
    fn get_all(&self) -> Result<Vec<R>, StoreError> {
        Ok(self.records.clone())
    }
}
