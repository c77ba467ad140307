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

//! Services layer.
//!
//! Owns the explicitly registered services of a route and the aggregation that
//! merges them with services contributed at query time. Aggregation always works
//! on a fresh copy, so the registry only changes through its own mutators.
//!
//! ```
//! use std::sync::Arc;
//! use route_core::{aggregate, NoContributions, Service, ServiceRegistry};
//!
//! #[derive(Debug)]
//! struct Consumer;
//! impl Service for Consumer {}
//!
//! let mut registry = ServiceRegistry::new();
//! registry.add(Arc::new(Consumer));
//!
//! let effective = aggregate(&registry, &NoContributions).unwrap();
//! assert_eq!(effective.len(), registry.len());
//! ```

pub(crate) mod aggregator;
pub(crate) mod registry;
