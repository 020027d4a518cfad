//! Route-group scopes for endpoints shared between roles.
//!
//! Administrators and managers run the same management pages against
//! `/admin/*` and `/manager/*`; managers and employees run the same
//! self-service pages against `/manager/*` and `/employee/*`.

use staffdesk_access::Role;

/// Scope of the management endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManagementScope {
    Admin,
    Manager,
}

impl ManagementScope {
    /// Returns the role that owns this scope.
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Self::Admin => Role::Admin,
            Self::Manager => Role::Manager,
        }
    }

    /// Returns the first path segment, shared by API and page routes.
    #[must_use]
    pub fn segment(&self) -> &'static str {
        self.role().path_segment()
    }

    /// Returns the management scope of `role`, if it has one.
    #[must_use]
    pub fn for_role(role: Role) -> Option<Self> {
        match role {
            Role::Admin => Some(Self::Admin),
            Role::Manager => Some(Self::Manager),
            Role::Employee => None,
        }
    }
}

/// Scope of the self-service endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelfServiceScope {
    Manager,
    Employee,
}

impl SelfServiceScope {
    /// Returns the role that owns this scope.
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Self::Manager => Role::Manager,
            Self::Employee => Role::Employee,
        }
    }

    /// Returns the first path segment, shared by API and page routes.
    #[must_use]
    pub fn segment(&self) -> &'static str {
        self.role().path_segment()
    }

    /// Returns the self-service scope of `role`, if it has one.
    #[must_use]
    pub fn for_role(role: Role) -> Option<Self> {
        match role {
            Role::Admin => None,
            Role::Manager => Some(Self::Manager),
            Role::Employee => Some(Self::Employee),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn management_segments() {
        assert_eq!(ManagementScope::Admin.segment(), "admin");
        assert_eq!(ManagementScope::Manager.segment(), "manager");
    }

    #[test]
    fn self_service_segments() {
        assert_eq!(SelfServiceScope::Manager.segment(), "manager");
        assert_eq!(SelfServiceScope::Employee.segment(), "employee");
    }

    #[test]
    fn scopes_for_roles() {
        assert_eq!(ManagementScope::for_role(Role::Admin), Some(ManagementScope::Admin));
        assert_eq!(ManagementScope::for_role(Role::Employee), None);
        assert_eq!(SelfServiceScope::for_role(Role::Admin), None);
        assert_eq!(
            SelfServiceScope::for_role(Role::Manager),
            Some(SelfServiceScope::Manager)
        );
    }
}
