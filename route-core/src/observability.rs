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

//! Stable event names and field formatting for `tracing` output.

pub mod events {
    pub const ROUTE_CREATED: &str = "route_created";
    pub const ROUTE_ENDPOINT_SET: &str = "route_endpoint_set";
    pub const ROUTE_CHANNELS_REPLACED: &str = "route_channels_replaced";
    pub const ROUTE_SERVICE_ADDED: &str = "route_service_added";
    pub const ROUTE_SERVICES_REPLACED: &str = "route_services_replaced";
    pub const ROUTE_CONTRIBUTOR_SET: &str = "route_contributor_set";
    pub const ROUTE_SERVICES_AGGREGATED: &str = "route_services_aggregated";
}

pub mod fields {
    /// Placeholder emitted for routes that have no identifier yet.
    pub const NO_ROUTE_ID: &str = "<unset>";

    pub fn format_route_id(id: Option<&str>) -> &str {
        id.unwrap_or(NO_ROUTE_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::fields::{format_route_id, NO_ROUTE_ID};

    #[test]
    fn format_route_id_falls_back_to_placeholder() {
        assert_eq!(format_route_id(Some("route-7")), "route-7");
        assert_eq!(format_route_id(None), NO_ROUTE_ID);
    }
}
