mod home;

use yew::prelude::*;
use yew_router::{BrowserRouter, Switch};

use userboard_sdk::model::flavor::DEFAULT_FLAVOR;
use userboard_sdk::model::page::Page;

use crate::home::Home;

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Page> render={move |page|
                match page {
                    Page::Home => html!{<Home flavor={DEFAULT_FLAVOR}/>},
                    Page::Backend{flavor} => html!{<Home {flavor}/>},
                }
            }/>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::debug!("mount user interface");
    yew::Renderer::<App>::new().render();
}
