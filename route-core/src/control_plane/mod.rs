/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
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

//! Control-plane layer.
//!
//! Owns the exclusive-access discipline for routes shared between tasks of the
//! owning runtime. [`crate::RouteDescriptor`] stays unsynchronized; owners wrap it
//! once and go through these helpers, each of which holds the lock for its whole
//! operation.
//!
//! ```
//! use std::sync::Arc;
//! use route_core::{effective_services, register_service, share_route, RouteDescriptor, Service};
//!
//! #[derive(Debug)]
//! struct Consumer;
//! impl Service for Consumer {}
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let route = share_route(RouteDescriptor::new(None));
//! register_service(&route, Arc::new(Consumer)).await;
//!
//! let services = effective_services(&route).await.unwrap();
//! assert_eq!(services.len(), 1);
//! # });
//! ```

pub(crate) mod route_guard;
