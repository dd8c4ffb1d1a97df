use future_tech_site::{app, App};

fn main() {
    app::init_logging();
    dioxus::launch(App);
}
