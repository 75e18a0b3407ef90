//! Page footer with the copyright line.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

/// Footer text, e.g. `© 2025 Ada Lovelace. Crafted with Rust.`
#[must_use]
pub fn copyright_line(year: i32, owner: &str, credit: &str) -> String {
    let credit = credit.trim();
    if credit.is_empty() { format!("© {year} {owner}.") } else { format!("© {year} {owner}. {credit}") }
}

/// `year` is supplied by the caller so the clock read stays at the page root.
#[component]
pub fn Footer(year: i32, owner: String, credit: String) -> impl IntoView {
    view! {
        <footer class="footer">
            <p>{copyright_line(year, &owner, &credit)}</p>
        </footer>
    }
}
