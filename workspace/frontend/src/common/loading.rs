use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub size: LoadingSize,
    #[prop_or_default]
    pub text: Option<String>,
    /// Less padding, for regions inside a card
    #[prop_or_default]
    pub compact: bool,
}

#[derive(Clone, PartialEq, Default)]
pub enum LoadingSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl LoadingSize {
    fn class(&self) -> &'static str {
        match self {
            LoadingSize::Small => "loading-sm",
            LoadingSize::Medium => "loading-md",
            LoadingSize::Large => "loading-lg",
        }
    }
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    let padding = if props.compact { "py-4" } else { "py-12" };

    html! {
        <div class={classes!("flex", "flex-col", "justify-center", "items-center", "gap-4", padding)} aria-busy="true">
            <span class={classes!("loading", "loading-spinner", props.size.class())}></span>
            if let Some(text) = &props.text {
                <p class="text-sm text-gray-500">{text}</p>
            }
        </div>
    }
}

/// Large centered spinner without text
#[function_component(LoadingSpinner)]
pub fn loading_spinner() -> Html {
    html! { <Loading size={LoadingSize::Large} /> }
}
