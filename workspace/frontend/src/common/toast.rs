use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::settings;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn alert_class(self) -> &'static str {
        match self {
            ToastKind::Info => "alert-info",
            ToastKind::Success => "alert-success",
            ToastKind::Error => "alert-error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Info => "fas fa-info-circle",
            ToastKind::Success => "fas fa-check-circle",
            ToastKind::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Clone, PartialEq)]
struct Toast {
    id: usize,
    message: String,
    kind: ToastKind,
}

/// Handle for raising notifications from anywhere below [`ToastProvider`].
#[derive(Clone, PartialEq)]
pub struct ToastContext {
    add_toast: Callback<(String, ToastKind)>,
}

impl ToastContext {
    pub fn show_info(&self, message: impl Into<String>) {
        self.add_toast.emit((message.into(), ToastKind::Info));
    }

    pub fn show_success(&self, message: impl Into<String>) {
        self.add_toast.emit((message.into(), ToastKind::Success));
    }

    pub fn show_error(&self, message: impl Into<String>) {
        self.add_toast.emit((message.into(), ToastKind::Error));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

/// Stacks notifications in the top-right corner. Each one dismisses itself
/// after the configured duration or when closed.
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    // Dismiss timers outlive the render that armed them; `current` is the live list.
    let toasts = use_state(Vec::<Toast>::new);
    let current = use_mut_ref(Vec::<Toast>::new);
    let next_id = use_mut_ref(|| 0usize);

    let remove_toast = {
        let toasts = toasts.clone();
        let current = current.clone();
        use_callback((), move |id: usize, _| {
            current.borrow_mut().retain(|t| t.id != id);
            toasts.set(current.borrow().clone());
        })
    };

    let add_toast = {
        let toasts = toasts.clone();
        let current = current.clone();
        let remove_toast = remove_toast.clone();
        use_callback((), move |(message, kind): (String, ToastKind), _| {
            let id = {
                let mut next_id = next_id.borrow_mut();
                *next_id += 1;
                *next_id
            };
            log::debug!("Toast {} ({:?}): {}", id, kind, message);

            current.borrow_mut().push(Toast { id, message, kind });
            toasts.set(current.borrow().clone());

            let remove_toast = remove_toast.clone();
            Timeout::new(settings::get_settings().toast_duration_ms, move || remove_toast.emit(id)).forget();
        })
    };

    let context = ToastContext { add_toast };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for toasts.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let remove_toast = remove_toast.clone();
                        Callback::from(move |_| remove_toast.emit(id))
                    };

                    html! {
                        <div key={id} class={classes!("alert", toast.kind.alert_class(), "shadow-lg")}>
                            <i class={toast.kind.icon()}></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
