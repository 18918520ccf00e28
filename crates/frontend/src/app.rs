use crate::chat::ChatWindow;
use crate::documents::DocumentPanel;
use crate::session::{SessionVm, HEALTH_POLL_INTERVAL_MS};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    // One controller instance owns the whole session; the panels only
    // render its state and forward intents back through it.
    let vm = SessionVm::new();
    vm.start_health_polling(HEALTH_POLL_INTERVAL_MS);

    view! {
        <ConfigProvider>
            <style>
                "
                html, body { margin: 0; height: 100%; }
                .typing-dot {
                    width: 6px;
                    height: 6px;
                    border-radius: 50%;
                    background: var(--colorBrandForeground1);
                    animation: typing-bounce 1s infinite ease-in-out;
                }
                @keyframes typing-bounce {
                    0%, 80%, 100% { transform: translateY(0); opacity: 0.4; }
                    40% { transform: translateY(-4px); opacity: 1; }
                }
                "
            </style>
            <div style="display: flex; height: 100vh; overflow: hidden;">
                <DocumentPanel vm=vm />
                <ChatWindow vm=vm />
            </div>
        </ConfigProvider>
    }
}
