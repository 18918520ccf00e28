//! Knowledge-base panel: upload control, document list and the backend
//! health indicator.

use crate::session::SessionVm;
use crate::shared::format_utils::{format_size, format_time};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
#[allow(non_snake_case)]
pub fn DocumentPanel(vm: SessionVm) -> impl IntoView {
    let is_uploading = Signal::derive(move || vm.state.get().is_uploading);
    let health = Signal::derive(move || vm.state.get().health);

    view! {
        <aside style="width: 320px; flex-shrink: 0; display: flex; flex-direction: column; height: 100%; border-right: 1px solid var(--colorNeutralStroke2); background: var(--colorNeutralBackground2);">
            <div style="padding: 24px;">
                <Flex align=FlexAlign::Center style="gap: 8px; margin-bottom: 24px;">
                    {icon("database")}
                    <h2 style="font-size: 16px; font-weight: 600; margin: 0;">"Knowledge Base"</h2>
                </Flex>

                <input
                    type="file"
                    accept="application/pdf"
                    style="display: none;"
                    id="document-input"
                    on:change=move |ev| {
                        let input: web_sys::HtmlInputElement =
                            ev.target().unwrap().dyn_into().unwrap();
                        if let Some(file) = input.files().and_then(|list| list.get(0)) {
                            vm.submit_file(file);
                        }
                        // Clear input so picking the same file again re-fires change
                        input.set_value("");
                    }
                />

                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=is_uploading
                    attr:style="width: 100%;"
                    on_click=move |_| {
                        if let Some(window) = web_sys::window() {
                            if let Some(document) = window.document() {
                                if let Some(input) = document.get_element_by_id("document-input") {
                                    if let Ok(input) = input.dyn_into::<web_sys::HtmlElement>() {
                                        input.click();
                                    }
                                }
                            }
                        }
                    }
                >
                    {icon("upload")}
                    {move || if is_uploading.get() { " Uploading..." } else { " Upload PDF" }}
                </Button>
            </div>

            // File list, most recent first
            <div style="flex: 1; overflow-y: auto; padding: 0 24px; display: flex; flex-direction: column; gap: 8px;">
                <p style="font-size: 11px; font-weight: bold; color: var(--colorNeutralForeground3); text-transform: uppercase; letter-spacing: 0.1em; margin: 0 0 8px;">
                    "Files"
                </p>

                {move || {
                    if vm.state.with(|s| s.files.is_empty()) {
                        Some(
                            view! {
                                <div style="display: flex; flex-direction: column; align-items: center; padding: 48px 0; color: var(--colorNeutralForeground4); text-align: center;">
                                    {icon("library")}
                                    <p style="font-size: 14px; margin-top: 8px;">"No documents yet"</p>
                                </div>
                            },
                        )
                    } else {
                        None
                    }
                }}

                <For
                    each=move || vm.state.get().files
                    key=|f| (f.name.clone(), f.upload_date)
                    let:file
                >
                    <Flex
                        align=FlexAlign::Center
                        style="gap: 12px; padding: 12px; border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; background: var(--colorNeutralBackground1);"
                    >
                        {icon("document")}
                        <div style="overflow: hidden;">
                            <p style="font-size: 14px; font-weight: 500; margin: 0; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;">
                                {file.name.clone()}
                            </p>
                            <p style="font-size: 12px; color: var(--colorNeutralForeground3); margin: 0;">
                                {format_size(file.size)}
                            </p>
                        </div>
                    </Flex>
                </For>
            </div>

            // Health indicator, driven by the latest completed probe
            <div style="padding: 24px; border-top: 1px solid var(--colorNeutralStroke2);">
                <Flex align=FlexAlign::Center style="gap: 8px;">
                    <span style=move || {
                        if health.get().online {
                            "width: 10px; height: 10px; border-radius: 50%; background: var(--colorPaletteGreenForeground1);"
                        } else {
                            "width: 10px; height: 10px; border-radius: 50%; background: var(--colorPaletteRedForeground1);"
                        }
                    }></span>
                    <span style="font-size: 14px; font-weight: 500; color: var(--colorNeutralForeground2);">
                        {move || {
                            if health.get().online { "System: Online" } else { "System: Offline" }
                        }}
                    </span>
                </Flex>
                <p style="font-size: 10px; color: var(--colorNeutralForeground4); margin: 8px 0 0;">
                    {move || format!("Last checked: {}", format_time(health.get().checked_at))}
                </p>
            </div>
        </aside>
    }
}
