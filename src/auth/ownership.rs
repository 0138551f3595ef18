use uuid::Uuid;

/// Outcome of an ownership check on a looked-up resource.
///
/// `Forbidden` and `NotFound` are deliberately distinct: an authenticated
/// requester probing someone else's resource learns that it exists (403) but
/// nothing more. A missing resource is 404 before ownership is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceAccess {
    Allowed,
    Forbidden,
    NotFound,
}

/// Decide whether `requester` may access a resource recorded as owned by
/// `resource_owner`. Pure comparison; callers pass `None` when the lookup
/// found nothing.
///
/// Access is restricted to the recorded owner only. There is no shared pool:
/// every resource is stamped with exactly one owner at creation, taken from
/// the authenticated identity and never from client input.
pub fn authorize_resource_access(resource_owner: Option<Uuid>, requester: Uuid) -> ResourceAccess {
    match resource_owner {
        None => ResourceAccess::NotFound,
        Some(owner) if owner == requester => ResourceAccess::Allowed,
        Some(_) => ResourceAccess::Forbidden,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_is_allowed() {
        let owner = Uuid::new_v4();
        assert_eq!(
            authorize_resource_access(Some(owner), owner),
            ResourceAccess::Allowed
        );
    }

    #[test]
    fn other_requester_is_forbidden() {
        let owner = Uuid::new_v4();
        let requester = Uuid::new_v4();
        assert_eq!(
            authorize_resource_access(Some(owner), requester),
            ResourceAccess::Forbidden
        );
    }

    #[test]
    fn missing_resource_is_not_found_before_ownership() {
        let requester = Uuid::new_v4();
        assert_eq!(
            authorize_resource_access(None, requester),
            ResourceAccess::NotFound
        );
    }
}
