use crate::guard::RoleGuard;
use crate::repository::CapacityRepository;
use crate::AuthError;

/// Reserves one slot of a capacity-limited class for an authorized caller.
///
/// The guard decides admission; the capacity store decides availability
/// with a single conditional decrement, so concurrent reservations for the
/// last slot produce exactly one winner.
pub struct ReserveSlotAction<C> {
    capacity: C,
    guard: RoleGuard,
}

impl<C: CapacityRepository> ReserveSlotAction<C> {
    pub fn new(capacity: C, guard: RoleGuard) -> Self {
        Self { capacity, guard }
    }

    /// Returns `Ok(false)` when the class is fully booked; authorization
    /// failures surface as errors from the guard.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "reserve_slot", skip_all, err)
    )]
    pub async fn execute(
        &self,
        bearer: Option<&str>,
        resource_id: &str,
    ) -> Result<bool, AuthError> {
        self.guard.authorize(bearer)?;
        self.capacity.try_claim(resource_id).await
    }
}
