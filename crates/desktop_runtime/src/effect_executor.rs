//! Drains reducer-emitted runtime effects in order.

use leptos::*;

use crate::{reducer::RuntimeEffect, runtime_context::DesktopRuntimeContext};

/// Installs the effect executor for `runtime`.
pub fn install(runtime: DesktopRuntimeContext) {
    // The queue is cleared before running so effects that dispatch enqueue a fresh batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_effect(runtime, effect);
        }
    });
}

fn run_effect(runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::OpenExternalUrl(url) => {
            let result = runtime
                .host
                .with_value(|host| host.external_urls.open_url(&url));
            if let Err(err) = result {
                logging::warn!("failed to open {url}: {err}");
            }
        }
    }
}
