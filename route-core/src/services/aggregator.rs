//! Effective-service aggregation over registered and contributed services.

use crate::services::registry::ServiceRegistry;
use crate::{AggregationError, Service};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Appends lazily computed services to a route's effective service set.
///
/// Called once per [`aggregate`] call with a sequence already holding the
/// registered services. Implementations may only append; an error aborts the
/// aggregation and reaches the caller as-is.
pub trait ServiceContributor: Send + Sync {
    fn add_services(&self, services: &mut Vec<Arc<dyn Service>>) -> Result<(), AggregationError>;
}

impl<F> ServiceContributor for F
where
    F: Fn(&mut Vec<Arc<dyn Service>>) -> Result<(), AggregationError> + Send + Sync,
{
    fn add_services(&self, services: &mut Vec<Arc<dyn Service>>) -> Result<(), AggregationError> {
        self(services)
    }
}

/// Contributor of plain routes: the effective set is exactly the registry.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoContributions;

impl ServiceContributor for NoContributions {
    fn add_services(&self, _services: &mut Vec<Arc<dyn Service>>) -> Result<(), AggregationError> {
        Ok(())
    }
}

/// Builds the effective service set: the registry's services in registration order,
/// followed by whatever `contributor` appends.
///
/// The registry is never modified. No caching takes place, so each call runs the
/// contributor again.
pub fn aggregate(
    registry: &ServiceRegistry,
    contributor: &dyn ServiceContributor,
) -> Result<Vec<Arc<dyn Service>>, AggregationError> {
    let mut services = registry.snapshot();
    contributor.add_services(&mut services)?;
    Ok(services)
}

pub(crate) struct ContributorSlot(pub(crate) Arc<dyn ServiceContributor>);

impl Default for ContributorSlot {
    fn default() -> Self {
        Self(Arc::new(NoContributions))
    }
}

impl Debug for ContributorSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContributor").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{aggregate, NoContributions, ServiceContributor};
    use crate::services::registry::ServiceRegistry;
    use crate::{AggregationError, Service};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug)]
    struct NamedService(&'static str);

    impl Service for NamedService {}

    fn service(name: &'static str) -> Arc<dyn Service> {
        Arc::new(NamedService(name))
    }

    struct CountingContributor {
        calls: AtomicUsize,
        contributed: Arc<dyn Service>,
    }

    impl ServiceContributor for CountingContributor {
        fn add_services(
            &self,
            services: &mut Vec<Arc<dyn Service>>,
        ) -> Result<(), AggregationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            services.push(self.contributed.clone());
            Ok(())
        }
    }

    #[test]
    fn no_contributions_yields_registry_contents() {
        let registered = service("consumer");
        let registry = ServiceRegistry::from(vec![registered.clone()]);

        let effective = aggregate(&registry, &NoContributions).expect("no-op cannot fail");

        assert_eq!(effective.len(), 1);
        assert!(Arc::ptr_eq(&effective[0], &registered));
    }

    #[test]
    fn contributions_follow_registry_prefix() {
        let a = service("a");
        let b = service("b");
        let c = service("c");
        let registry = ServiceRegistry::from(vec![a.clone(), b.clone()]);
        let contributed = c.clone();
        let contributor =
            move |services: &mut Vec<Arc<dyn Service>>| -> Result<(), AggregationError> {
                services.push(contributed.clone());
                Ok(())
            };

        let effective = aggregate(&registry, &contributor).expect("contributor succeeds");

        assert_eq!(effective.len(), 3);
        assert!(Arc::ptr_eq(&effective[0], &a));
        assert!(Arc::ptr_eq(&effective[1], &b));
        assert!(Arc::ptr_eq(&effective[2], &c));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn contributor_runs_on_every_call() {
        let registry = ServiceRegistry::new();
        let contributor = CountingContributor {
            calls: AtomicUsize::new(0),
            contributed: service("lazy"),
        };

        aggregate(&registry, &contributor).expect("first call succeeds");
        aggregate(&registry, &contributor).expect("second call succeeds");

        assert_eq!(contributor.calls.load(Ordering::SeqCst), 2);
        assert!(registry.is_empty());
    }

    #[test]
    fn contributor_failure_is_returned_without_partial_result() {
        let registry = ServiceRegistry::from(vec![service("consumer")]);
        let contributor =
            |services: &mut Vec<Arc<dyn Service>>| -> Result<(), AggregationError> {
                services.push(Arc::new(NamedService("half-built")));
                Err(AggregationError::service_unavailable(
                    "half-built",
                    "dependency missing",
                ))
            };

        let result = aggregate(&registry, &contributor);

        assert!(matches!(
            result,
            Err(AggregationError::ServiceUnavailable { ref service, .. }) if service == "half-built"
        ));
        assert_eq!(registry.len(), 1);
    }
}
