use super::aggregate::CustomerId;
use super::detail::{CustomerMessage, CustomerNote};
use super::segment::CustomerSegment;
use crate::shared::list_view::ActionError;

/// Customer-facing operations triggered from the detail modal.
pub trait CustomerService {
    fn send_message(&self, id: &CustomerId, message: &CustomerMessage) -> Result<(), ActionError>;
    fn add_note(&self, id: &CustomerId, note: &CustomerNote) -> Result<(), ActionError>;
    fn save_segment(&self, segment: &CustomerSegment) -> Result<(), ActionError>;
}

/// Stand-in service: records nothing, only logs what it would do.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingCustomerService;

impl CustomerService for LoggingCustomerService {
    fn send_message(&self, id: &CustomerId, message: &CustomerMessage) -> Result<(), ActionError> {
        log::info!(
            "would send {} to {}: {:?}",
            message.channel.code(),
            id,
            message.subject().unwrap_or("(no subject)")
        );
        Ok(())
    }

    fn add_note(&self, id: &CustomerId, note: &CustomerNote) -> Result<(), ActionError> {
        log::info!("would add note {} to {}", note.id, id);
        Ok(())
    }

    fn save_segment(&self, segment: &CustomerSegment) -> Result<(), ActionError> {
        log::info!(
            "would save segment '{}' with {} condition(s)",
            segment.name,
            segment.conditions.len()
        );
        Ok(())
    }
}
