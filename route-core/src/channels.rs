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

//! Ordered processing-stage chain of a route.

use crate::Channel;
use std::slice;
use std::sync::Arc;

/// Channels in processing order. The chain shape is not interpreted.
#[derive(Clone, Debug, Default)]
pub struct ChannelChain {
    channels: Vec<Arc<dyn Channel>>,
}

impl ChannelChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Arc<dyn Channel>> {
        self.channels.iter()
    }

    /// Independent copy of the chain; later changes to the route do not show through it.
    pub fn snapshot(&self) -> Vec<Arc<dyn Channel>> {
        self.channels.clone()
    }
}

impl From<Vec<Arc<dyn Channel>>> for ChannelChain {
    fn from(channels: Vec<Arc<dyn Channel>>) -> Self {
        Self { channels }
    }
}

impl<'a> IntoIterator for &'a ChannelChain {
    type Item = &'a Arc<dyn Channel>;
    type IntoIter = slice::Iter<'a, Arc<dyn Channel>>;

    fn into_iter(self) -> Self::IntoIter {
        self.channels.iter()
    }
}
