pub mod footer;
pub mod global_context;
pub mod header;

use footer::Footer;
use header::Header;
use leptos::prelude::*;

/// Page chrome shared by every route.
///
/// ```text
/// +------------------------------+
/// |        Header (sticky)       |
/// +------------------------------+
/// |   content of current route   |
/// +------------------------------+
/// |            Footer            |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="site">
            <Header />
            {children()}
            <Footer />
        </div>
    }
}
