//! Explicitly registered services of a route.

use crate::Service;
use std::slice;
use std::sync::Arc;

/// Services in registration order.
///
/// Appending never deduplicates; registering the same service twice lists it twice.
#[derive(Clone, Debug, Default)]
pub struct ServiceRegistry {
    services: Vec<Arc<dyn Service>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, service: Arc<dyn Service>) {
        self.services.push(service);
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Arc<dyn Service>> {
        self.services.iter()
    }

    /// Returns `true` when this exact service instance is registered.
    pub fn contains(&self, service: &Arc<dyn Service>) -> bool {
        self.services
            .iter()
            .any(|registered| Arc::ptr_eq(registered, service))
    }

    /// Independent copy of the registered services in registration order.
    pub fn snapshot(&self) -> Vec<Arc<dyn Service>> {
        self.services.clone()
    }
}

impl From<Vec<Arc<dyn Service>>> for ServiceRegistry {
    fn from(services: Vec<Arc<dyn Service>>) -> Self {
        Self { services }
    }
}

impl Extend<Arc<dyn Service>> for ServiceRegistry {
    fn extend<T: IntoIterator<Item = Arc<dyn Service>>>(&mut self, iter: T) {
        for service in iter {
            self.add(service);
        }
    }
}

impl<'a> IntoIterator for &'a ServiceRegistry {
    type Item = &'a Arc<dyn Service>;
    type IntoIter = slice::Iter<'a, Arc<dyn Service>>;

    fn into_iter(self) -> Self::IntoIter {
        self.services.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::ServiceRegistry;
    use crate::Service;
    use std::sync::Arc;

    #[derive(Debug)]
    struct NamedService(&'static str);

    impl Service for NamedService {}

    fn service(name: &'static str) -> Arc<dyn Service> {
        Arc::new(NamedService(name))
    }

    #[test]
    fn add_appends_in_call_order() {
        let mut registry = ServiceRegistry::new();
        let first = service("first");
        let second = service("second");

        registry.add(first.clone());
        registry.add(second.clone());

        let services = registry.snapshot();
        assert_eq!(services.len(), 2);
        assert!(Arc::ptr_eq(&services[0], &first));
        assert!(Arc::ptr_eq(&services[1], &second));
    }

    #[test]
    fn add_keeps_duplicates() {
        let mut registry = ServiceRegistry::new();
        let shared = service("shared");

        registry.add(shared.clone());
        registry.add(shared.clone());

        assert_eq!(registry.len(), 2);
        assert!(registry.iter().all(|s| Arc::ptr_eq(s, &shared)));
    }

    #[test]
    fn contains_uses_instance_identity() {
        let mut registry = ServiceRegistry::new();
        let registered = service("timer");
        registry.add(registered.clone());

        assert!(registry.contains(&registered));
        assert!(!registry.contains(&service("timer")));
    }

    #[test]
    fn snapshot_does_not_alias_registry() {
        let mut registry = ServiceRegistry::from(vec![service("a")]);

        let mut snapshot = registry.snapshot();
        snapshot.push(service("b"));
        registry.add(service("c"));

        assert_eq!(snapshot.len(), 2);
        assert_eq!(registry.len(), 2);
    }
}
