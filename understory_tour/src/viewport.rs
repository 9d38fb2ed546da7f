// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport size tracking.
//!
//! There is no cached state: callers read the size again after every resize or
//! mutation signal.

use kurbo::Size;

use crate::provider::GeometryProvider;

/// Current viewport size: per axis, the larger of the document client size and
/// the window inner size.
pub fn viewport_size<P: GeometryProvider + ?Sized>(provider: &P) -> Size {
    let client = provider.client_size();
    let inner = provider.inner_size();
    Size::new(
        client.width.max(inner.width),
        client.height.max(inner.height),
    )
}
