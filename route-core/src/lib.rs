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

//! # route-core
//!
//! `route-core` models a route: the binding between one inbound [`Endpoint`] and the
//! ordered chain of [`Channel`]s and supporting [`Service`]s that handle the messages
//! arriving there.
//!
//! Typical usage is centered on [`RouteDescriptor`]. The effective service set of a
//! route is the explicitly registered services followed by whatever an injected
//! [`ServiceContributor`] appends at query time.
//!
//! ## Quick start
//!
//! ```
//! use std::sync::Arc;
//! use route_core::{Endpoint, RouteDescriptor, Service, ID_PROPERTY};
//!
//! #[derive(Debug)]
//! struct QueueEndpoint;
//! impl Endpoint for QueueEndpoint {}
//!
//! #[derive(Debug)]
//! struct Consumer;
//! impl Service for Consumer {}
//!
//! let endpoint: Arc<dyn Endpoint> = Arc::new(QueueEndpoint);
//! let consumer: Arc<dyn Service> = Arc::new(Consumer);
//!
//! let mut route = RouteDescriptor::with_services(Some(endpoint), [consumer]);
//! route.properties_mut().insert(ID_PROPERTY, "route-7");
//!
//! assert_eq!(route.id(), Some("route-7"));
//! assert_eq!(route.services().len(), 1);
//! assert_eq!(route.services_for_route().unwrap().len(), 1);
//! assert_eq!(route.to_string(), "Route");
//! ```
//!
//! ## Contributed services
//!
//! A route variant supplies lazily computed services through a [`ServiceContributor`].
//! Contributions are appended after the registered services on every query and never
//! touch the registry itself.
//!
//! ```
//! use std::sync::Arc;
//! use route_core::{AggregationError, RouteDescriptor, Service};
//!
//! #[derive(Debug)]
//! struct Timer;
//! impl Service for Timer {}
//!
//! let route = RouteDescriptor::new(None).with_contributor(
//!     |services: &mut Vec<Arc<dyn Service>>| -> Result<(), AggregationError> {
//!         services.push(Arc::new(Timer));
//!         Ok(())
//!     },
//! );
//!
//! assert_eq!(route.services_for_route().unwrap().len(), 1);
//! assert!(route.services().is_empty());
//! ```
//!
//! ## Internal architecture map
//!
//! - Route: the [`RouteDescriptor`] aggregate and its accessors
//! - Properties: typed property bag with the reserved identifier key
//! - Channels: ordered processing-stage chain
//! - Services: explicit registry and the contribution-based aggregator
//! - Control plane: exclusive-access helpers for owners sharing a route
//!
//! ## Concurrency model
//!
//! [`RouteDescriptor`] is a plain unsynchronized value. Owners that share a route
//! across tasks wrap it with [`share_route`] and mutate it through the helpers in
//! the control plane, which hold the lock for the whole operation.
//!
//! ## Observability model
//!
//! The crate uses `tracing` for logs/events.
//! Library code emits events and does not initialize a global subscriber. Binaries
//! and tests are responsible for one-time `tracing_subscriber` initialization.

mod channels;
pub use channels::ChannelChain;

mod collaborators;
pub use collaborators::{Channel, Endpoint, Service};

mod control_plane;
pub use control_plane::route_guard::{
    effective_services, register_service, replace_services, share_route, SharedRoute,
};

mod error;
pub use error::AggregationError;

#[doc(hidden)]
pub mod observability;

mod properties;
pub use properties::{PropertyBag, PropertyValue, ID_PROPERTY};

mod route;
pub use route::RouteDescriptor;

mod services;
pub use services::aggregator::{aggregate, NoContributions, ServiceContributor};
pub use services::registry::ServiceRegistry;
