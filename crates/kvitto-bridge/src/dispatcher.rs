// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The bridge dispatcher.
//
// Routes each operation to whichever host bridge exposes the matching
// capability method, in fixed priority order: native device first, desktop
// webview second, fallback last.  Detection is per method, so a native
// object that lacks `print` still loses the print route to the webview while
// winning device-type detection — the same behaviour the host pages rely on.
//
// Every call is stateless; the probe is consulted afresh each time, so a
// bridge object injected after page load is picked up on the next operation.

use tracing::{error, info, warn};

use kvitto_core::error::Result;
use kvitto_core::types::{Capability, DeviceType};

use crate::adapters::{BridgeAdapter, NativeDeviceAdapter, NullAdapter, WebviewAdapter};
use crate::fallback::{FallbackPrompt, StderrPrompt};
use crate::host::HostProbe;

/// Uniform print/alert surface over heterogeneous host bridges.
///
/// Public operations return plain booleans and never fail: a host callable
/// that errors is logged and reported as `false`, an absent capability is a
/// detected condition, not a fault.
pub struct BridgeDispatcher<P: HostProbe> {
    probe: P,
    prompt: Box<dyn FallbackPrompt>,
}

impl<P: HostProbe> BridgeDispatcher<P> {
    /// Dispatcher with the default stderr fallback prompt.
    pub fn new(probe: P) -> Self {
        Self::with_prompt(probe, Box::new(StderrPrompt))
    }

    /// Dispatcher with an embedder-supplied fallback prompt (e.g. a blocking
    /// dialog in a UI host).
    pub fn with_prompt(probe: P, prompt: Box<dyn FallbackPrompt>) -> Self {
        Self { probe, prompt }
    }

    /// First adapter (in priority order) whose host exposes the capability
    /// method.  `None` means no bridge can serve this operation.
    fn route(&self, capability: Capability) -> Option<Box<dyn BridgeAdapter + '_>> {
        if let Some(host) = self.probe.native() {
            let adapter = NativeDeviceAdapter::new(host);
            if adapter.supports(capability) {
                return Some(Box::new(adapter));
            }
        }
        if let Some(host) = self.probe.webview() {
            let adapter = WebviewAdapter::new(host);
            if adapter.supports(capability) {
                return Some(Box::new(adapter));
            }
        }
        None
    }

    /// Adapter for whichever marker object is present, methods or not.
    /// Drives `device_type` and `is_ready`.
    fn detect(&self) -> Box<dyn BridgeAdapter + '_> {
        if let Some(host) = self.probe.native() {
            Box::new(NativeDeviceAdapter::new(host))
        } else if let Some(host) = self.probe.webview() {
            Box::new(WebviewAdapter::new(host))
        } else {
            Box::new(NullAdapter)
        }
    }

    /// Print receipt text through the active bridge.
    ///
    /// Returns `true` only when a bridge was found and its call succeeded.
    /// With no print bridge anywhere, the text is surfaced through the
    /// fallback prompt and `false` is returned.
    pub fn print(&self, text: &str) -> bool {
        info!(chars = text.len(), "print requested");

        match self.route(Capability::Print) {
            Some(adapter) => {
                info!(path = %adapter.device_type(), "using print bridge");
                match adapter.print(text) {
                    Ok(ok) => {
                        info!(success = ok, "print call returned");
                        ok
                    }
                    Err(e) => {
                        error!(error = %e, "print bridge call failed");
                        false
                    }
                }
            }
            None => {
                warn!("no print bridge available, showing fallback");
                self.prompt.show_print_fallback(text);
                false
            }
        }
    }

    /// Start the new-order alert sound.  Fails silently when no bridge
    /// exposes it — audio has no fallback surface.
    pub fn play_alert(&self) -> bool {
        self.dispatch_alert(Capability::PlayAlert, |adapter| adapter.play_alert())
    }

    /// Stop the alert sound.  Same silent degradation as [`play_alert`].
    ///
    /// [`play_alert`]: Self::play_alert
    pub fn stop_alert(&self) -> bool {
        self.dispatch_alert(Capability::StopAlert, |adapter| adapter.stop_alert())
    }

    /// Shared alert routing.  `invoke` is the adapter accessor matching
    /// `capability`; pairing them at the two call sites keeps this free of
    /// unmatched-capability cases.
    fn dispatch_alert(
        &self,
        capability: Capability,
        invoke: impl Fn(&dyn BridgeAdapter) -> Result<bool>,
    ) -> bool {
        info!(%capability, "alert control requested");

        match self.route(capability) {
            Some(adapter) => {
                info!(path = %adapter.device_type(), %capability, "using alert bridge");
                match invoke(adapter.as_ref()) {
                    Ok(ok) => {
                        info!(success = ok, %capability, "alert call returned");
                        ok
                    }
                    Err(e) => {
                        error!(error = %e, %capability, "alert bridge call failed");
                        false
                    }
                }
            }
            None => {
                warn!(%capability, "no alert bridge available");
                false
            }
        }
    }

    /// Which host integration is present, by marker object alone.
    pub fn device_type(&self) -> DeviceType {
        self.detect().device_type()
    }

    /// Whether the detected host exposes the minimum method set for
    /// printing: the print method itself on native devices, the api object
    /// at all on desktop webviews.
    pub fn is_ready(&self) -> bool {
        self.detect().is_ready()
    }

    /// New-order convenience flow: sound the alert, then print the receipt.
    ///
    /// Returns the print result; the alert outcome never gates it.  This
    /// does not call [`stop_alert`]: both known hosts stop the alert
    /// themselves once a print goes through.
    ///
    /// [`stop_alert`]: Self::stop_alert
    pub fn handle_new_order(&self, text: &str) -> bool {
        info!("new order received");

        let alerted = self.play_alert();
        let printed = self.print(text);

        info!(alerted, printed, "order processed");
        printed
    }
}
