use async_trait::async_trait;

use crate::AuthError;

/// Access to per-resource capacity counters.
///
/// The counter for a resource is a non-negative number of remaining units
/// (open class slots). It is mutated exclusively through [`try_claim`],
/// which must be a single conditional decrement against the store - never
/// a read followed by a write - so two callers racing for the last unit
/// cannot both win.
///
/// [`try_claim`]: CapacityRepository::try_claim
#[async_trait]
pub trait CapacityRepository {
    /// Claims one unit of `resource_id` if any remain.
    ///
    /// Returns `Ok(false)` - not an error - when the counter is at zero or
    /// the resource does not exist; callers translate that into a
    /// user-visible "fully booked" outcome.
    ///
    /// # Errors
    ///
    /// `AuthError::Database` when the store itself fails.
    async fn try_claim(&self, resource_id: &str) -> Result<bool, AuthError>;
}
