use counter_web::yew::CounterApp;
use log::Level;

fn main() {
    _ = console_log::init_with_level(Level::Debug);
    console_error_panic_hook::set_once();
    yew::Renderer::<CounterApp>::new().render();
}
