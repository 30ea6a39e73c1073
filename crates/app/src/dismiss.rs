//! Document-level listeners that close the sidebar panel.
//!
//! The listeners live in the page and post [`DocumentSignal`]s back over an
//! eval channel. The decision itself is made by
//! [`SidebarState::apply`] on the Rust side.

use dioxus::prelude::*;
use shared_types::{DocumentSignal, SidebarConfig, SidebarState};
use shared_ui::css_token;

/// Prefix of the global slot holding an instance's release function. The
/// panel id completes the key, so each mounted sidebar owns its listeners.
const RELEASE_PREFIX: &str = "__sidebarDismissal:";

/// Register the pointer-down and key-down observers for as long as the
/// calling component is mounted.
pub fn use_document_dismissal(mut state: Signal<SidebarState>, config: &SidebarConfig) {
    let script = listener_script(&config.panel_id, &config.trigger_id);
    let release = release_script(&config.panel_id);

    let release_on_exit = release.clone();
    use_hook(move || {
        spawn(async move {
            let mut listener = document::eval(&script);
            loop {
                match listener.recv::<DocumentSignal>().await {
                    Ok(signal) => {
                        let mut next = *state.peek();
                        if next.apply(&signal) {
                            state.set(next);
                            tracing::debug!(?signal, "sidebar panel dismissed");
                        }
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "sidebar listener channel closed");
                        break;
                    }
                }
            }
            // Nobody is reading anymore.
            document::eval(&release_on_exit);
        })
    });

    use_drop(move || {
        document::eval(&release);
    });
}

fn release_slot(panel_id: &str) -> String {
    format!("{RELEASE_PREFIX}{}", css_token(panel_id))
}

/// Script installing both observers. Listeners left by an earlier mount of
/// the same panel are released first so events never fire twice.
fn listener_script(panel_id: &str, trigger_id: &str) -> String {
    let slot = release_slot(panel_id);
    let panel_id = css_token(panel_id);
    let trigger_id = css_token(trigger_id);
    format!(
        r#"
        var slot = '{slot}';
        if (window[slot]) {{ window[slot](); }}
        var onPointer = function(event) {{
            var panel = document.getElementById('{panel_id}');
            var trigger = document.getElementById('{trigger_id}');
            var hit = null;
            if (panel && trigger) {{
                hit = {{
                    in_panel: panel.contains(event.target),
                    in_trigger: trigger.contains(event.target),
                }};
            }}
            dioxus.send({{ kind: 'pointer_down', hit: hit }});
        }};
        var onKey = function(event) {{
            dioxus.send({{ kind: 'key_down', key: event.key || '' }});
        }};
        document.addEventListener('pointerdown', onPointer);
        document.addEventListener('keydown', onKey);
        window[slot] = function() {{
            document.removeEventListener('pointerdown', onPointer);
            document.removeEventListener('keydown', onKey);
            delete window[slot];
        }};
        "#,
    )
}

fn release_script(panel_id: &str) -> String {
    let slot = release_slot(panel_id);
    format!("if (window['{slot}']) {{ window['{slot}'](); }}")
}
