/********************************************************************************
 * Copyright (c) 2024 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

use crate::channels::ChannelChain;
use crate::observability::{events, fields};
use crate::properties::PropertyBag;
use crate::services::aggregator::{aggregate, ContributorSlot, ServiceContributor};
use crate::services::registry::ServiceRegistry;
use crate::{AggregationError, Channel, Endpoint, Service};
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;
use tracing::{debug, trace};

const COMPONENT: &str = "route";

/// Binding of one inbound endpoint to its channel chain, properties and services.
///
/// All fields stay freely mutable after construction. The descriptor carries no
/// synchronization; see [`crate::share_route`] for owners that need it.
pub struct RouteDescriptor {
    endpoint: Option<Arc<dyn Endpoint>>,
    channels: ChannelChain,
    services: ServiceRegistry,
    properties: PropertyBag,
    contributor: ContributorSlot,
}

impl RouteDescriptor {
    /// Creates a route with empty channels, services and properties.
    ///
    /// The endpoint is not validated. A route may be created unbound (`None`)
    /// and bound later through [`RouteDescriptor::set_endpoint`]; whether an
    /// unbound route is acceptable is left to the owning runtime.
    pub fn new(endpoint: Option<Arc<dyn Endpoint>>) -> Self {
        debug!(
            event = events::ROUTE_CREATED,
            component = COMPONENT,
            bound = endpoint.is_some(),
            "route created"
        );

        Self {
            endpoint,
            channels: ChannelChain::new(),
            services: ServiceRegistry::new(),
            properties: PropertyBag::new(),
            contributor: ContributorSlot::default(),
        }
    }

    /// Creates a route and registers `services` in order, exactly as repeated
    /// [`RouteDescriptor::add_service`] calls would.
    pub fn with_services<I>(endpoint: Option<Arc<dyn Endpoint>>, services: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Service>>,
    {
        let mut route = Self::new(endpoint);
        for service in services {
            route.add_service(service);
        }
        route
    }

    /// Installs the strategy that contributes services at query time.
    pub fn with_contributor(mut self, contributor: impl ServiceContributor + 'static) -> Self {
        self.set_contributor(contributor);
        self
    }

    pub fn set_contributor(&mut self, contributor: impl ServiceContributor + 'static) {
        self.contributor = ContributorSlot(Arc::new(contributor));
        trace!(
            event = events::ROUTE_CONTRIBUTOR_SET,
            component = COMPONENT,
            route_id = fields::format_route_id(self.id()),
            "service contributor installed"
        );
    }

    pub fn id(&self) -> Option<&str> {
        self.properties.id()
    }

    pub fn endpoint(&self) -> Option<&Arc<dyn Endpoint>> {
        self.endpoint.as_ref()
    }

    pub fn set_endpoint(&mut self, endpoint: Option<Arc<dyn Endpoint>>) {
        debug!(
            event = events::ROUTE_ENDPOINT_SET,
            component = COMPONENT,
            route_id = fields::format_route_id(self.id()),
            bound = endpoint.is_some(),
            "route endpoint set"
        );
        self.endpoint = endpoint;
    }

    /// Returns `true` when the route holds this exact endpoint instance.
    pub fn is_bound_to(&self, endpoint: &Arc<dyn Endpoint>) -> bool {
        self.endpoint
            .as_ref()
            .is_some_and(|bound| Arc::ptr_eq(bound, endpoint))
    }

    /// Channels in processing order, as an independent copy.
    pub fn channels(&self) -> Vec<Arc<dyn Channel>> {
        self.channels.snapshot()
    }

    pub fn channel_chain(&self) -> &ChannelChain {
        &self.channels
    }

    /// Replaces the whole channel chain.
    pub fn set_channels(&mut self, channels: Vec<Arc<dyn Channel>>) {
        self.channels = ChannelChain::from(channels);
        debug!(
            event = events::ROUTE_CHANNELS_REPLACED,
            component = COMPONENT,
            route_id = fields::format_route_id(self.id()),
            channels = self.channels.len(),
            "route channels replaced"
        );
    }

    pub fn properties(&self) -> &PropertyBag {
        &self.properties
    }

    /// Live access to the property bag; this is how the route identifier is set.
    pub fn properties_mut(&mut self) -> &mut PropertyBag {
        &mut self.properties
    }

    /// Explicitly registered services, as an independent copy.
    pub fn services(&self) -> Vec<Arc<dyn Service>> {
        self.services.snapshot()
    }

    pub fn service_registry(&self) -> &ServiceRegistry {
        &self.services
    }

    /// Replaces all explicitly registered services.
    pub fn set_services(&mut self, services: Vec<Arc<dyn Service>>) {
        self.services = ServiceRegistry::from(services);
        debug!(
            event = events::ROUTE_SERVICES_REPLACED,
            component = COMPONENT,
            route_id = fields::format_route_id(self.id()),
            services = self.services.len(),
            "route services replaced"
        );
    }

    /// Appends a service to the registry. Duplicates are kept.
    pub fn add_service(&mut self, service: Arc<dyn Service>) {
        trace!(
            event = events::ROUTE_SERVICE_ADDED,
            component = COMPONENT,
            route_id = fields::format_route_id(self.id()),
            service = ?service,
            position = self.services.len(),
            "adding route service"
        );
        self.services.add(service);
    }

    /// Computes the effective service set of this route.
    ///
    /// The result starts with the registered services in registration order,
    /// followed by the services the installed contributor appends. The contributor
    /// runs on every call. Its error is returned unchanged and the registry is left
    /// as it was.
    pub fn services_for_route(&self) -> Result<Vec<Arc<dyn Service>>, AggregationError> {
        let services = aggregate(&self.services, self.contributor.0.as_ref())?;

        debug!(
            event = events::ROUTE_SERVICES_AGGREGATED,
            component = COMPONENT,
            route_id = fields::format_route_id(self.id()),
            registered = self.services.len(),
            contributed = services.len().saturating_sub(self.services.len()),
            "route services aggregated"
        );

        Ok(services)
    }
}

impl Display for RouteDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Route")
    }
}

impl Debug for RouteDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteDescriptor")
            .field("id", &self.id())
            .field("endpoint", &self.endpoint)
            .field("channels", &self.channels.len())
            .field("services", &self.services.len())
            .field("properties", &self.properties.len())
            .finish_non_exhaustive()
    }
}
