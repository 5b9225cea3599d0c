// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Kvitto Bridge — uniform print/alert dispatch over host-injected bridge
// objects.  POS webview pages run against wildly different hosts: Sunmi-class
// Android devices inject a native object, the desktop app injects a webview
// api object, a plain browser injects nothing.  This crate gives the page one
// surface over all three, with explicit dependency injection instead of
// ambient globals.

pub mod adapters;
pub mod dispatcher;
pub mod fallback;
pub mod host;

pub use adapters::{BridgeAdapter, NativeDeviceAdapter, NullAdapter, WebviewAdapter};
pub use dispatcher::BridgeDispatcher;
pub use fallback::{FallbackPrompt, StderrPrompt};
pub use host::{HostProbe, NativeHost, StaticHosts, WebviewApi, WebviewHost};
