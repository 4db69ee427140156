use dioxus::prelude::*;

fn main() {
    ui::init_logging().expect("failed to init logger");
    dioxus_logger::tracing::info!("starting ergo-token-purchase desktop");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
