use dioxus::prelude::*;
use tracing::{error, info};

use crate::core::settings::ServerSettings;
use crate::t;

#[derive(Clone, Debug, PartialEq)]
enum SaveStatus {
    Idle,
    Saved,
    Failed(String),
}

/// Edit and persist the experiment service address.
#[component]
pub fn ServerSettingsPanel() -> Element {
    let mut address = use_signal(|| ServerSettings::load().server_address);
    let mut status = use_signal(|| SaveStatus::Idle);

    let on_save = move |evt: FormEvent| {
        evt.prevent_default();
        let settings = ServerSettings::new(address());
        match settings.save() {
            Ok(()) => {
                info!(server = %settings.server_address, "server address saved");
                address.set(settings.server_address);
                status.set(SaveStatus::Saved);
            }
            Err(err) => {
                error!(error = %err, "failed to save server settings");
                status.set(SaveStatus::Failed(err.to_string()));
            }
        }
    };

    let feedback = match status() {
        SaveStatus::Idle => None,
        SaveStatus::Saved => Some((
            "settings-panel__status settings-panel__status--success",
            t!("settings-saved"),
        )),
        SaveStatus::Failed(err) => Some((
            "settings-panel__status settings-panel__status--error",
            t!("settings-save-failed", error = err),
        )),
    };

    rsx! {
        section { class: "settings-panel",
            h2 { {t!("settings-heading")} }
            form { class: "settings-panel__form", onsubmit: on_save,
                label { r#for: "server-address", {t!("settings-server-label")} }
                input {
                    id: "server-address",
                    r#type: "url",
                    value: "{address}",
                    oninput: move |evt| {
                        address.set(evt.value());
                        status.set(SaveStatus::Idle);
                    },
                }
                button { class: "button button--primary", r#type: "submit", {t!("settings-save")} }
            }
            if let Some((class, text)) = feedback {
                p { class: class, "{text}" }
            }
        }
    }
}
