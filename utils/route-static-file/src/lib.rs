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

//! Read-only JSON backend seeding route property bags.
//!
//! The file is a JSON object mapping route identifiers to objects of scalar
//! properties:
//!
//! ```json
//! {
//!     "orders-inbound": { "group": "orders", "retries": 3, "trace": true }
//! }
//! ```
//!
//! Entries that cannot be represented are skipped with a warning; only a missing,
//! unreadable or structurally invalid file is an error.

use route_core::{PropertyBag, PropertyValue, RouteDescriptor, ID_PROPERTY};
use serde_json::Value;
use std::fs::{self, canonicalize};
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

const COMPONENT: &str = "route_static_file";

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StaticFileError {
    #[error("static route file not found: {path:?}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to read static route file: {0}")]
    Io(#[from] io::Error),

    #[error("unable to parse static route file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("static route file must be a JSON object mapping route ids to property objects")]
    Format,
}

/// Properties configured for one route.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteProperties {
    pub id: String,
    /// Includes the identifier under [`ID_PROPERTY`].
    pub properties: PropertyBag,
}

impl RouteProperties {
    /// Merges these properties into `route`, overwriting keys it already has.
    pub fn apply_to(&self, route: &mut RouteDescriptor) {
        let bag = route.properties_mut();
        for (key, value) in &self.properties {
            bag.insert(key.clone(), value.clone());
        }
        debug!(
            component = COMPONENT,
            route_id = %self.id,
            properties = self.properties.len(),
            "applied static route properties"
        );
    }
}

pub struct RouteStaticFile {
    static_file: PathBuf,
}

impl RouteStaticFile {
    pub fn new(static_file: impl Into<PathBuf>) -> Self {
        Self {
            static_file: static_file.into(),
        }
    }

    fn canonicalized_static_file_path(&self) -> Result<PathBuf, StaticFileError> {
        debug!("route_json_file: {:?}", self.static_file);

        canonicalize(&self.static_file).map_err(|source| StaticFileError::NotFound {
            path: self.static_file.clone(),
            source,
        })
    }

    fn read_static_config_json(&self) -> Result<Value, StaticFileError> {
        let route_json_file = self.canonicalized_static_file_path()?;
        let data = fs::read_to_string(route_json_file)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn parse_route_properties(route_id: &str, value: &Value) -> Option<RouteProperties> {
        let Some(entries) = value.as_object() else {
            warn!(
                component = COMPONENT,
                route_id, "ignoring non-object property set for route"
            );
            return None;
        };

        let mut properties = PropertyBag::new();
        for (key, raw) in entries {
            match serde_json::from_value::<PropertyValue>(raw.clone()) {
                Ok(property) => {
                    properties.insert(key.clone(), property);
                }
                Err(error) => {
                    warn!(
                        component = COMPONENT,
                        route_id,
                        property = %key,
                        %error,
                        "ignoring non-scalar route property"
                    );
                }
            }
        }

        if let Some(previous) = properties.insert(ID_PROPERTY, route_id) {
            if previous.as_str() != Some(route_id) {
                warn!(
                    component = COMPONENT,
                    route_id,
                    ignored = ?previous,
                    "route key overrides configured id property"
                );
            }
        }

        Some(RouteProperties {
            id: route_id.to_string(),
            properties,
        })
    }

    /// Loads every well-formed route entry, ordered by route id.
    pub fn load(&self) -> Result<Vec<RouteProperties>, StaticFileError> {
        let value = self.read_static_config_json()?;
        let Some(routes) = value.as_object() else {
            return Err(StaticFileError::Format);
        };

        let mut loaded: Vec<RouteProperties> = routes
            .iter()
            .filter_map(|(route_id, properties)| {
                Self::parse_route_properties(route_id, properties)
            })
            .collect();
        loaded.sort_by(|a, b| a.id.cmp(&b.id));

        debug!(
            component = COMPONENT,
            routes = loaded.len(),
            "loaded static route properties"
        );
        Ok(loaded)
    }

    /// Loads the file and returns the entry for `route_id`, if present and well-formed.
    pub fn find(&self, route_id: &str) -> Result<Option<RouteProperties>, StaticFileError> {
        Ok(self
            .load()?
            .into_iter()
            .find(|route| route.id == route_id))
    }
}

#[cfg(test)]
mod tests {
    use super::{RouteStaticFile, StaticFileError};
    use route_core::{PropertyValue, RouteDescriptor, ID_PROPERTY};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn testdata() -> RouteStaticFile {
        RouteStaticFile::new(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/static-configs/testdata.json"
        ))
    }

    fn temp_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes())
            .expect("write temp config");
        file
    }

    #[test]
    fn load_returns_well_formed_routes_sorted_by_id() {
        let routes = testdata().load().expect("testdata loads");

        let ids: Vec<_> = routes.iter().map(|route| route.id.as_str()).collect();
        assert_eq!(ids, vec!["billing-outbound", "orders-inbound"]);
    }

    #[test]
    fn load_maps_scalar_kinds() {
        let orders = testdata()
            .find("orders-inbound")
            .expect("testdata loads")
            .expect("orders route configured");

        let properties = &orders.properties;
        assert_eq!(properties.id(), Some("orders-inbound"));
        assert_eq!(properties.get("group"), Some(&PropertyValue::from("orders")));
        assert_eq!(properties.get("retries"), Some(&PropertyValue::Integer(3)));
        assert_eq!(
            properties.get("redelivery_ratio"),
            Some(&PropertyValue::Float(0.25))
        );
        assert_eq!(properties.get("trace"), Some(&PropertyValue::Boolean(true)));
    }

    #[test]
    fn load_skips_non_scalar_properties() {
        let billing = testdata()
            .find("billing-outbound")
            .expect("testdata loads")
            .expect("billing route configured");

        assert!(!billing.properties.contains_key("tags"));
        assert_eq!(billing.properties.len(), 3);
    }

    #[test]
    fn find_returns_none_for_unknown_or_malformed_route() {
        let file = testdata();

        assert!(file.find("missing").expect("testdata loads").is_none());
        assert!(file.find("audit-tap").expect("testdata loads").is_none());
    }

    #[test]
    fn apply_to_sets_route_identifier() {
        let orders = testdata()
            .find("orders-inbound")
            .expect("testdata loads")
            .expect("orders route configured");
        let mut route = RouteDescriptor::new(None);
        route.properties_mut().insert("group", "legacy");
        route.properties_mut().insert("owner", "ops");

        orders.apply_to(&mut route);

        assert_eq!(route.id(), Some("orders-inbound"));
        assert_eq!(
            route.properties().get("group"),
            Some(&PropertyValue::from("orders"))
        );
        assert_eq!(
            route.properties().get("owner"),
            Some(&PropertyValue::from("ops"))
        );
    }

    #[test]
    fn route_key_wins_over_configured_id() {
        let config = temp_config(r#"{ "route-1": { "id": "something-else" } }"#);

        let routes = RouteStaticFile::new(config.path()).load().expect("config loads");

        assert_eq!(routes.len(), 1);
        assert_eq!(
            routes[0].properties.get(ID_PROPERTY),
            Some(&PropertyValue::from("route-1"))
        );
    }

    #[test]
    fn missing_file_is_not_found() {
        let result = RouteStaticFile::new("does/not/exist.json").load();

        assert!(matches!(result, Err(StaticFileError::NotFound { .. })));
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let config = temp_config("{ not json");

        let result = RouteStaticFile::new(config.path()).load();

        assert!(matches!(result, Err(StaticFileError::Parse(_))));
    }

    #[test]
    fn top_level_array_is_format_error() {
        let config = temp_config(r#"[ { "route-1": {} } ]"#);

        let result = RouteStaticFile::new(config.path()).load();

        assert!(matches!(result, Err(StaticFileError::Format)));
    }
}
