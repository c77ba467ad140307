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

//! Externally owned collaborators a route refers to.
//!
//! A route only holds shared references to these and compares them by pointer
//! identity. Their behavior (consuming messages, processing exchanges, start/stop)
//! belongs to the runtime that owns them.

use std::fmt::Debug;

/// The addressable source of inbound messages a route is bound to.
pub trait Endpoint: Debug + Send + Sync {}

/// One stage in a route's ordered processing chain.
pub trait Channel: Debug + Send + Sync {}

/// A lifecycle-managed component associated with a route.
pub trait Service: Debug + Send + Sync {}
