use yew::prelude::*;

/// Fire-and-forget notification payload. Emitters get no acknowledgement.
#[derive(Clone, PartialEq)]
pub struct ToastMessage {
    pub title: AttrValue,
    pub description: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub message: ToastMessage,
}

#[function_component(Toast)]
pub fn toast(props: &Props) -> Html {
    html! {
        <div class="toast">
            <style>
                {r#"
                    @keyframes toast-slide-in {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .toast {
                        position: fixed;
                        bottom: 2rem;
                        right: 2rem;
                        z-index: 90;
                        max-width: 360px;
                        background: #111827;
                        color: #fff;
                        border-radius: 16px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.3);
                        padding: 1rem 1.25rem;
                        animation: toast-slide-in 0.4s ease-out;
                    }
                    .toast-title {
                        font-weight: 700;
                        margin-bottom: 0.25rem;
                    }
                    .toast-description {
                        color: #9ca3af;
                        font-size: 0.9rem;
                        line-height: 1.4;
                    }
                "#}
            </style>
            <div class="toast-title">{ props.message.title.to_string() }</div>
            <div class="toast-description">{ props.message.description.to_string() }</div>
        </div>
    }
}
