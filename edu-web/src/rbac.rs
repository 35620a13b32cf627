use actix_web::http::Method;
use edu_error::{rbac::RBACError, WebResult};
use edu_models::domain::prelude::Claims;
use std::collections::HashMap;

/// What a caller must hold to use a protected route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Any valid token.
    Authenticated,
    /// A token carrying the admin role.
    ManageAdmin,
}

impl Capability {
    #[inline]
    pub fn allows(&self, claims: &Claims) -> bool {
        match self {
            Capability::Authenticated => true,
            Capability::ManageAdmin => claims.is_admin(),
        }
    }
}

/// Capability per `(method, route pattern)`, filled once at startup.
#[derive(Debug, Default)]
pub struct PermRegistry {
    rules: HashMap<(Method, String), Capability>,
}

impl PermRegistry {
    pub fn register(
        &mut self,
        method: Method,
        path: String,
        capability: Capability,
    ) -> WebResult<(), RBACError> {
        let key = (method, path);
        if self.rules.contains_key(&key) {
            let (method, path) = key;
            return Err(RBACError::RuleExists {
                method: method.to_string(),
                path,
            });
        }
        self.rules.insert(key, capability);
        Ok(())
    }

    pub fn capability(&self, method: &Method, path: &str) -> Option<Capability> {
        self.rules.get(&(method.clone(), path.to_string())).copied()
    }

    /// Unregistered routes are treated as admin only.
    pub fn check(&self, method: &Method, path: &str, claims: &Claims) -> bool {
        self.capability(method, path)
            .unwrap_or(Capability::ManageAdmin)
            .allows(claims)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edu_models::enums::common::Role;

    fn claims(role: Role) -> Claims {
        Claims::new("edu".into(), "u1".into(), role, 60)
    }

    #[test]
    fn duplicate_rule_is_rejected() {
        let mut registry = PermRegistry::default();
        registry
            .register(Method::GET, "/v1/news".into(), Capability::Authenticated)
            .unwrap();
        let err = registry
            .register(Method::GET, "/v1/news".into(), Capability::ManageAdmin)
            .unwrap_err();
        assert!(matches!(err, RBACError::RuleExists { .. }));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn admin_only_routes_reject_users() {
        let mut registry = PermRegistry::default();
        registry
            .register(Method::POST, "/v1/news".into(), Capability::ManageAdmin)
            .unwrap();
        registry
            .register(Method::GET, "/v1/news".into(), Capability::Authenticated)
            .unwrap();

        assert!(registry.check(&Method::GET, "/v1/news", &claims(Role::User)));
        assert!(!registry.check(&Method::POST, "/v1/news", &claims(Role::User)));
        assert!(registry.check(&Method::POST, "/v1/news", &claims(Role::Admin)));
        assert!(!registry.check(&Method::PUT, "/v1/news", &claims(Role::User)));
    }
}
