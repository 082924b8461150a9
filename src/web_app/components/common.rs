// web_app/components/common.rs - Reusable UI components
//
// Pure, stateless components that receive all data via props.

use leptos::prelude::*;

/// Red pill button used for filter labels and card categories
///
/// Carries no click behaviour.
#[component]
pub fn Button(
    /// Button label
    children: Children,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <button type="button" class=button_class(class)>
            {children()}
        </button>
    }
}

fn button_class(extra: &str) -> String {
    if extra.is_empty() {
        "btn".to_string()
    } else {
        format!("btn {}", extra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_class_construction() {
        assert_eq!(button_class(""), "btn");
        assert_eq!(button_class("btn-category"), "btn btn-category");
    }
}
