use std::collections::HashMap;

use uuid::Uuid;

use crate::models::claim::Claim;

/// Claim persistence contract. The pipeline stays a pure function of the
/// claim it receives and holds no process-wide state; storage is injected
/// behind this trait.
pub trait ClaimRegistry {
    fn get(&self, id: &Uuid) -> Option<Claim>;
    fn put(&mut self, claim: Claim);
    fn delete(&mut self, id: &Uuid) -> bool;
}

/// HashMap-backed registry for orchestration and tests.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    claims: HashMap<Uuid, Claim>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}

impl ClaimRegistry for InMemoryRegistry {
    fn get(&self, id: &Uuid) -> Option<Claim> {
        self.claims.get(id).cloned()
    }

    fn put(&mut self, claim: Claim) {
        self.claims.insert(claim.id, claim);
    }

    fn delete(&mut self, id: &Uuid) -> bool {
        self.claims.remove(id).is_some()
    }
}
