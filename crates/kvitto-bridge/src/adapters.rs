// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bridge adapters.
//
// One adapter per host integration, each implementing the same capability
// set {print, playAlert, stopAlert}.  Every host invocation is protected: a
// failure from the host callable becomes `KvittoError::HostCall` and is never
// propagated past the dispatcher.

use kvitto_core::error::{KvittoError, Result};
use kvitto_core::types::{Capability, DeviceType};

use crate::host::{NativeHost, WebviewHost};

/// Uniform capability surface over heterogeneous host bridges.
pub trait BridgeAdapter {
    /// Which host integration this adapter fronts.
    fn device_type(&self) -> DeviceType;

    /// Whether the host exposes a callable for this capability.
    fn supports(&self, capability: Capability) -> bool;

    /// Whether the host exposes the minimum method set needed for printing.
    fn is_ready(&self) -> bool;

    fn print(&self, text: &str) -> Result<bool>;
    fn play_alert(&self) -> Result<bool>;
    fn stop_alert(&self) -> Result<bool>;
}

fn host_call_failed(capability: Capability, err: crate::host::HostError) -> KvittoError {
    KvittoError::HostCall {
        capability,
        message: err.to_string(),
    }
}

/// Adapter over the Android-style native bridge object.
///
/// The native methods declare a boolean result, which is passed through
/// verbatim.
pub struct NativeDeviceAdapter<'a> {
    host: &'a NativeHost,
}

impl<'a> NativeDeviceAdapter<'a> {
    pub fn new(host: &'a NativeHost) -> Self {
        Self { host }
    }
}

impl BridgeAdapter for NativeDeviceAdapter<'_> {
    fn device_type(&self) -> DeviceType {
        DeviceType::NativeDevice
    }

    fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::Print => self.host.print.is_some(),
            Capability::PlayAlert => self.host.play_alert.is_some(),
            Capability::StopAlert => self.host.stop_alert.is_some(),
        }
    }

    // Ready iff the print method specifically exists; the alert methods do
    // not gate readiness.
    fn is_ready(&self) -> bool {
        self.host.print.is_some()
    }

    fn print(&self, text: &str) -> Result<bool> {
        let f = self
            .host
            .print
            .as_ref()
            .ok_or(KvittoError::CapabilityAbsent(Capability::Print))?;
        f(text).map_err(|e| host_call_failed(Capability::Print, e))
    }

    fn play_alert(&self) -> Result<bool> {
        let f = self
            .host
            .play_alert
            .as_ref()
            .ok_or(KvittoError::CapabilityAbsent(Capability::PlayAlert))?;
        f().map_err(|e| host_call_failed(Capability::PlayAlert, e))
    }

    fn stop_alert(&self) -> Result<bool> {
        let f = self
            .host
            .stop_alert
            .as_ref()
            .ok_or(KvittoError::CapabilityAbsent(Capability::StopAlert))?;
        f().map_err(|e| host_call_failed(Capability::StopAlert, e))
    }
}

/// Adapter over the desktop webview's api object.
///
/// The api methods declare no return value, so a call that does not fail
/// maps to `true`.
pub struct WebviewAdapter<'a> {
    host: &'a WebviewHost,
}

impl<'a> WebviewAdapter<'a> {
    pub fn new(host: &'a WebviewHost) -> Self {
        Self { host }
    }
}

impl BridgeAdapter for WebviewAdapter<'_> {
    fn device_type(&self) -> DeviceType {
        DeviceType::DesktopWebview
    }

    fn supports(&self, capability: Capability) -> bool {
        let Some(api) = self.host.api.as_ref() else {
            return false;
        };
        match capability {
            Capability::Print => api.print.is_some(),
            Capability::PlayAlert => api.play_alert.is_some(),
            Capability::StopAlert => api.stop_alert.is_some(),
        }
    }

    // Ready as soon as the api object exists, even if individual methods are
    // still missing — the desktop host attaches methods to one object.
    fn is_ready(&self) -> bool {
        self.host.api.is_some()
    }

    fn print(&self, text: &str) -> Result<bool> {
        let f = self
            .host
            .api
            .as_ref()
            .and_then(|api| api.print.as_ref())
            .ok_or(KvittoError::CapabilityAbsent(Capability::Print))?;
        f(text)
            .map(|_| true)
            .map_err(|e| host_call_failed(Capability::Print, e))
    }

    fn play_alert(&self) -> Result<bool> {
        let f = self
            .host
            .api
            .as_ref()
            .and_then(|api| api.play_alert.as_ref())
            .ok_or(KvittoError::CapabilityAbsent(Capability::PlayAlert))?;
        f().map(|_| true)
            .map_err(|e| host_call_failed(Capability::PlayAlert, e))
    }

    fn stop_alert(&self) -> Result<bool> {
        let f = self
            .host
            .api
            .as_ref()
            .and_then(|api| api.stop_alert.as_ref())
            .ok_or(KvittoError::CapabilityAbsent(Capability::StopAlert))?;
        f().map(|_| true)
            .map_err(|e| host_call_failed(Capability::StopAlert, e))
    }
}

/// Adapter for a plain browser with no bridge at all.
pub struct NullAdapter;

impl BridgeAdapter for NullAdapter {
    fn device_type(&self) -> DeviceType {
        DeviceType::Web
    }

    fn supports(&self, _capability: Capability) -> bool {
        false
    }

    fn is_ready(&self) -> bool {
        false
    }

    fn print(&self, _text: &str) -> Result<bool> {
        Err(KvittoError::CapabilityAbsent(Capability::Print))
    }

    fn play_alert(&self) -> Result<bool> {
        Err(KvittoError::CapabilityAbsent(Capability::PlayAlert))
    }

    fn stop_alert(&self) -> Result<bool> {
        Err(KvittoError::CapabilityAbsent(Capability::StopAlert))
    }
}
