// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Host environment model.
//
// The hosting runtime injects at most one bridge object: an Android-style
// native object on POS devices, or an api object inside a desktop webview.
// Each is modelled as a descriptor of optional callables — an absent method
// is simply `None`, mirroring a host that injected the object without that
// capability.  The dispatcher never reads ambient global state; the embedder
// hands it a `HostProbe` and the probe is consulted afresh on every call.

/// Error value surfaced by a host-injected callable.
pub type HostError = Box<dyn std::error::Error + 'static>;

/// Native-device print callable: takes the receipt text, returns a declared
/// success boolean.
pub type NativePrintFn = Box<dyn Fn(&str) -> Result<bool, HostError>>;

/// Native-device alert callable (play or stop), declared boolean result.
pub type NativeAlertFn = Box<dyn Fn() -> Result<bool, HostError>>;

/// Webview api print callable — no declared return value; success is assumed
/// when the call does not fail.
pub type ApiPrintFn = Box<dyn Fn(&str) -> Result<(), HostError>>;

/// Webview api alert callable, same no-return convention.
pub type ApiAlertFn = Box<dyn Fn() -> Result<(), HostError>>;

/// The Android-style bridge object injected on native POS devices.
#[derive(Default)]
pub struct NativeHost {
    pub print: Option<NativePrintFn>,
    pub play_alert: Option<NativeAlertFn>,
    pub stop_alert: Option<NativeAlertFn>,
}

impl NativeHost {
    pub fn with_print(mut self, f: impl Fn(&str) -> Result<bool, HostError> + 'static) -> Self {
        self.print = Some(Box::new(f));
        self
    }

    pub fn with_play_alert(mut self, f: impl Fn() -> Result<bool, HostError> + 'static) -> Self {
        self.play_alert = Some(Box::new(f));
        self
    }

    pub fn with_stop_alert(mut self, f: impl Fn() -> Result<bool, HostError> + 'static) -> Self {
        self.stop_alert = Some(Box::new(f));
        self
    }
}

impl std::fmt::Debug for NativeHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeHost")
            .field("print", &self.print.is_some())
            .field("play_alert", &self.play_alert.is_some())
            .field("stop_alert", &self.stop_alert.is_some())
            .finish()
    }
}

/// The method set hanging off the webview marker's `api` object.
#[derive(Default)]
pub struct WebviewApi {
    pub print: Option<ApiPrintFn>,
    pub play_alert: Option<ApiAlertFn>,
    pub stop_alert: Option<ApiAlertFn>,
}

impl WebviewApi {
    pub fn with_print(mut self, f: impl Fn(&str) -> Result<(), HostError> + 'static) -> Self {
        self.print = Some(Box::new(f));
        self
    }

    pub fn with_play_alert(mut self, f: impl Fn() -> Result<(), HostError> + 'static) -> Self {
        self.play_alert = Some(Box::new(f));
        self
    }

    pub fn with_stop_alert(mut self, f: impl Fn() -> Result<(), HostError> + 'static) -> Self {
        self.stop_alert = Some(Box::new(f));
        self
    }
}

impl std::fmt::Debug for WebviewApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebviewApi")
            .field("print", &self.print.is_some())
            .field("play_alert", &self.play_alert.is_some())
            .field("stop_alert", &self.stop_alert.is_some())
            .finish()
    }
}

/// The desktop-webview marker object.
///
/// The marker can exist with its `api` object still unset — desktop hosts
/// inject the marker first and attach the api once their backend is up.
/// Readiness tracks the api object, device-type detection tracks the marker.
#[derive(Debug, Default)]
pub struct WebviewHost {
    pub api: Option<WebviewApi>,
}

impl WebviewHost {
    pub fn with_api(mut self, api: WebviewApi) -> Self {
        self.api = Some(api);
        self
    }
}

/// Explicit environment probe supplied by the embedder.
///
/// Consulted on every dispatcher call, never cached, so an environment that
/// injects a bridge object late is observed live on the next operation.
pub trait HostProbe {
    fn native(&self) -> Option<&NativeHost>;
    fn webview(&self) -> Option<&WebviewHost>;
}

impl<P: HostProbe + ?Sized> HostProbe for &P {
    fn native(&self) -> Option<&NativeHost> {
        (**self).native()
    }

    fn webview(&self) -> Option<&WebviewHost> {
        (**self).webview()
    }
}

/// Ready-made probe for the common case of a fixed environment.
#[derive(Debug, Default)]
pub struct StaticHosts {
    pub native: Option<NativeHost>,
    pub webview: Option<WebviewHost>,
}

impl StaticHosts {
    pub fn with_native(mut self, host: NativeHost) -> Self {
        self.native = Some(host);
        self
    }

    pub fn with_webview(mut self, host: WebviewHost) -> Self {
        self.webview = Some(host);
        self
    }
}

impl HostProbe for StaticHosts {
    fn native(&self) -> Option<&NativeHost> {
        self.native.as_ref()
    }

    fn webview(&self) -> Option<&WebviewHost> {
        self.webview.as_ref()
    }
}
