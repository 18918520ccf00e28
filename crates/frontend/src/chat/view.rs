//! Conversation panel: message history, typing indicator, error banner and
//! the composer. Purely a function of session state; every intent goes back
//! through the [`SessionVm`] actions.

use crate::session::SessionVm;
use crate::shared::format_utils::format_time_short;
use crate::shared::icons::icon;
use contracts::chat::Role;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ChatWindow(vm: SessionVm) -> impl IntoView {
    let input = RwSignal::new(String::new());
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    let is_asking = Signal::derive(move || vm.state.get().is_asking);
    let send_disabled =
        Signal::derive(move || is_asking.get() || input.with(|t| t.trim().is_empty()));

    // Scroll to bottom helper
    let scroll_to_bottom = move || {
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    // Follow new content: list growth and the typing indicator both move
    // the bottom edge.
    Effect::new(move |_| {
        let _ = vm.state.with(|s| (s.messages.len(), s.is_asking));
        scroll_to_bottom();
    });

    // The in-flight and blank checks repeat the controller's own guards so
    // a submit intent is only emitted when it can proceed.
    let handle_send = Callback::new(move |_: ()| {
        let content = input.get_untracked();
        if content.trim().is_empty() || vm.state.get_untracked().is_asking {
            return;
        }
        input.set(String::new());
        vm.submit_question(content);
    });

    view! {
        <div style="flex: 1; display: flex; flex-direction: column; min-width: 0; height: 100%;">
            // Header
            <Flex
                align=FlexAlign::Center
                style="height: 64px; flex-shrink: 0; padding: 0 32px; border-bottom: 1px solid var(--colorNeutralStroke2); gap: 12px;"
            >
                {icon("terminal")}
                <div>
                    <h1 style="font-size: 16px; font-weight: 600; margin: 0;">
                        "AI Incident Intelligence"
                    </h1>
                    <p style="font-size: 12px; color: var(--colorNeutralForeground3); margin: 0;">
                        "RAG-powered AI for logs and system incidents"
                    </p>
                </div>
            </Flex>

            // Messages area
            <div
                node_ref=messages_container_ref
                style="flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 16px; padding: 32px;"
            >
                {move || {
                    if vm.state.with(|s| s.messages.is_empty()) {
                        Some(
                            view! {
                                <div style="height: 100%; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; max-width: 420px; margin: 0 auto; color: var(--colorNeutralForeground3);">
                                    {icon("sparkles")}
                                    <h2 style="font-size: 22px; font-weight: bold; margin: 16px 0 8px; color: var(--colorNeutralForeground1);">
                                        "Intelligent Diagnostics"
                                    </h2>
                                    <p style="line-height: 1.5;">
                                        "Upload log files or incident reports to the knowledge base, and ask me specific questions about your infrastructure status or errors."
                                    </p>
                                </div>
                            },
                        )
                    } else {
                        None
                    }
                }}

                <For
                    each=move || vm.state.get().messages
                    key=|msg| msg.id
                    let:msg
                >
                    {{
                        let is_user = matches!(msg.role, Role::User);
                        let when = format_time_short(msg.timestamp);
                        view! {
                            <div style=if is_user {
                                "align-self: flex-end; max-width: 75%;"
                            } else {
                                "align-self: flex-start; max-width: 75%;"
                            }>
                                <div style=if is_user {
                                    "background: var(--colorBrandBackground2); padding: 10px 14px; border-radius: 12px 12px 0 12px;"
                                } else {
                                    "background: var(--colorNeutralBackground2); border: 1px solid var(--colorNeutralStroke2); padding: 10px 14px; border-radius: 12px 12px 12px 0;"
                                }>
                                    <div style="white-space: pre-wrap; line-height: 1.5;">
                                        {msg.content.clone()}
                                    </div>
                                    <div style="font-size: 10px; opacity: 0.5; margin-top: 6px;">
                                        {when}
                                    </div>
                                </div>
                            </div>
                        }
                    }}
                </For>

                // Typing indicator while an ask is in flight
                {move || {
                    if is_asking.get() {
                        Some(
                            view! {
                                <div style="align-self: flex-start; background: var(--colorNeutralBackground2); border: 1px solid var(--colorNeutralStroke2); border-radius: 12px 12px 12px 0; padding: 14px 16px; display: flex; gap: 6px;">
                                    <span class="typing-dot"></span>
                                    <span class="typing-dot" style="animation-delay: 0.15s;"></span>
                                    <span class="typing-dot" style="animation-delay: 0.3s;"></span>
                                </div>
                            },
                        )
                    } else {
                        None
                    }
                }}

                // Inline error banner, cleared by the next user action
                {move || {
                    vm.state
                        .get()
                        .error
                        .map(|e| {
                            view! {
                                <div style="align-self: center; display: flex; align-items: center; gap: 8px; padding: 8px 16px; background: var(--colorPaletteRedBackground1); border: 1px solid var(--colorPaletteRedBorder1); border-radius: 8px; color: var(--colorPaletteRedForeground1); font-size: 14px;">
                                    {icon("alert")}
                                    {e}
                                </div>
                            }
                        })
                }}
            </div>

            // Composer
            <div style="padding: 16px 32px 24px; border-top: 1px solid var(--colorNeutralStroke2);">
                <Flex style="gap: 8px; align-items: flex-end;">
                    <div style="flex: 1;">
                        <Textarea
                            value=input
                            placeholder="Describe an incident or ask a question... (Enter to send, Shift+Enter for a new line)"
                            attr:style="width: 100%; min-height: 56px; max-height: 200px; resize: vertical;"
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" && !ev.shift_key() {
                                    ev.prevent_default();
                                    handle_send.run(());
                                }
                            }
                        />
                    </div>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=send_disabled
                        on_click=move |_| handle_send.run(())
                    >
                        {icon("send")}
                        {move || if is_asking.get() { " Asking..." } else { " Send" }}
                    </Button>
                </Flex>
                <p style="text-align: center; font-size: 10px; color: var(--colorNeutralForeground4); margin: 10px 0 0; text-transform: uppercase; letter-spacing: 0.05em;">
                    "AI generated responses may require verification. Grounded in your knowledge base."
                </p>
            </div>
        </div>
    }
}
