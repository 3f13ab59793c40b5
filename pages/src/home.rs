use yew::prelude::*;

use components::user_interface::UserInterface;

#[derive(Properties, Clone, PartialEq)]
pub struct HomeProps {
    pub flavor: AttrValue,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    html! {
        <main class="flex flex-wrap justify-center items-start min-h-screen bg-gray-900">
            <div class="m-4">
                <UserInterface flavor={props.flavor.clone()} />
            </div>
        </main>
    }
}
