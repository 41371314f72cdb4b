// src/infrastructure/identity.rs

use crate::domain::Principal;

/// Resolves the principal issuing the current request
pub trait IdentitySource: Send + Sync {
    fn caller(&self) -> Principal;
}

/// One fixed caller for the whole process
#[derive(Debug, Clone)]
pub struct StaticIdentity {
    principal: Principal,
}

impl StaticIdentity {
    pub fn new(principal: Principal) -> Self {
        Self { principal }
    }
}

impl Default for StaticIdentity {
    fn default() -> Self {
        Self::new(Principal::anonymous())
    }
}

impl IdentitySource for StaticIdentity {
    fn caller(&self) -> Principal {
        self.principal.clone()
    }
}
