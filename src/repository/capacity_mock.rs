#![allow(clippy::unwrap_used)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::AuthError;

use super::capacity::CapacityRepository;

/// In-memory capacity store for tests.
///
/// The check-and-decrement happens under one mutex guard, giving the same
/// all-or-nothing guarantee a real store provides with a conditional
/// update.
#[derive(Clone, Default)]
pub struct MockCapacityRepository {
    pub slots: Arc<Mutex<HashMap<String, i64>>>,
}

impl MockCapacityRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(self, resource_id: &str, remaining: i64) -> Self {
        self.slots
            .lock()
            .unwrap()
            .insert(resource_id.to_owned(), remaining);
        self
    }

    pub fn remaining(&self, resource_id: &str) -> Option<i64> {
        self.slots.lock().unwrap().get(resource_id).copied()
    }
}

#[async_trait]
impl CapacityRepository for MockCapacityRepository {
    async fn try_claim(&self, resource_id: &str) -> Result<bool, AuthError> {
        let mut slots = self.slots.lock().unwrap();

        match slots.get_mut(resource_id) {
            Some(remaining) if *remaining > 0 => {
                *remaining -= 1;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_claims_until_exhausted() {
        let store = MockCapacityRepository::new().with_capacity("yoga-101", 2);

        assert!(store.try_claim("yoga-101").await.unwrap());
        assert!(store.try_claim("yoga-101").await.unwrap());
        assert!(!store.try_claim("yoga-101").await.unwrap());
        assert_eq!(store.remaining("yoga-101"), Some(0));
    }

    #[tokio::test]
    async fn test_unknown_resource_is_fully_booked() {
        let store = MockCapacityRepository::new();
        assert!(!store.try_claim("nope").await.unwrap());
    }

    #[tokio::test]
    async fn test_concurrent_claims_never_oversubscribe() {
        let store = MockCapacityRepository::new().with_capacity("spin-7", 1);

        let a = tokio::spawn({
            let store = store.clone();
            async move { store.try_claim("spin-7").await.unwrap() }
        });
        let b = tokio::spawn({
            let store = store.clone();
            async move { store.try_claim("spin-7").await.unwrap() }
        });

        let (a, b) = (a.await.unwrap(), b.await.unwrap());
        assert!(a ^ b, "exactly one claimer must win");
        assert_eq!(store.remaining("spin-7"), Some(0));
    }
}
