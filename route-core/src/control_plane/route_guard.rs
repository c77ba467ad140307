//! Lock-holding route operations for owners sharing a route.

use crate::{AggregationError, RouteDescriptor, Service};
use std::sync::Arc;
use tokio::sync::Mutex;

/// A route behind the owner's exclusive-access lock.
pub type SharedRoute = Arc<Mutex<RouteDescriptor>>;

pub fn share_route(route: RouteDescriptor) -> SharedRoute {
    Arc::new(Mutex::new(route))
}

pub async fn register_service(route: &SharedRoute, service: Arc<dyn Service>) {
    let mut route = route.lock().await;
    route.add_service(service);
}

pub async fn replace_services(route: &SharedRoute, services: Vec<Arc<dyn Service>>) {
    let mut route = route.lock().await;
    route.set_services(services);
}

/// Computes the effective service set while holding the lock, so registry
/// changes cannot interleave with the contributor.
pub async fn effective_services(
    route: &SharedRoute,
) -> Result<Vec<Arc<dyn Service>>, AggregationError> {
    let route = route.lock().await;
    route.services_for_route()
}
