use crate::user::models::UserId;

/// What the caller wants to do with a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Read,
    Write,
}

/// Outcome of an ownership check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allowed(self) -> bool {
        self == Decision::Allow
    }
}

/// Decide whether `caller` may perform `action` on a todo owned by `owner`.
///
/// Single-tenant-per-user model: a todo is visible and mutable only by
/// its owner, for reads and writes alike. There is no administrative
/// override.
pub fn authorize(caller: UserId, owner: UserId, _action: Action) -> Decision {
    if caller == owner {
        Decision::Allow
    } else {
        Decision::Deny
    }
}
