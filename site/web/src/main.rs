// J&M Industry landing page, client-side entry point

use jm_site::LandingPage;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(LandingPage);
}
