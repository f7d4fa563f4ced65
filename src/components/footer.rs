//! Page footer component

use maud::{Markup, html};

/// Renders the generator attribution footer
pub fn footer() -> Markup {
    html! {
        footer class="site-footer" {
            p {
                "Generated by "
                strong { "Courseread" }
            }
        }
    }
}
