// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// End-to-end demo of the new-order flow against a simulated desktop webview
// host.  Run with `cargo run --example order_flow`; set RUST_LOG=debug for
// the full dispatch trace.

use kvitto_bridge::{BridgeDispatcher, StaticHosts, WebviewApi, WebviewHost};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Simulated desktop host: api object with print and playAlert attached.
    let env = StaticHosts::default().with_webview(
        WebviewHost::default().with_api(
            WebviewApi::default()
                .with_print(|text| {
                    println!("--- receipt ---\n{text}\n---------------");
                    Ok(())
                })
                .with_play_alert(|| {
                    println!("(alert sound playing)");
                    Ok(())
                }),
        ),
    );

    let bridge = BridgeDispatcher::new(env);
    tracing::info!(device = %bridge.device_type(), ready = bridge.is_ready(), "bridge loaded");

    let receipt = "KVITTO CAFE\nOrder #42\n1x Kanelbulle      25.00\n1x Kaffe           32.00\nTOTAL              57.00";
    let printed = bridge.handle_new_order(receipt);
    tracing::info!(printed, "order flow finished");
}
