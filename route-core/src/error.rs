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

//! Error types raised while computing a route's effective service set.

use thiserror::Error;

/// Failure of a [`crate::ServiceContributor`] to produce its services.
///
/// Returned unmodified by [`crate::RouteDescriptor::services_for_route`]; no partial
/// service list accompanies it.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AggregationError {
    /// A contributed service could not be obtained.
    #[error("service {service} unavailable: {reason}")]
    ServiceUnavailable {
        /// Name of the service the contributor tried to provide.
        service: String,
        /// Why it could not be provided.
        reason: String,
    },

    /// Resolving contributed services failed in an underlying component.
    #[error("unable to resolve contributed services: {0}")]
    Resolution(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl AggregationError {
    pub fn service_unavailable(service: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            service: service.into(),
            reason: reason.into(),
        }
    }
}
