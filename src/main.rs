mod catalog;
mod components;
mod geo;
mod model;
mod notify;
mod predict;
mod render;
mod state;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
