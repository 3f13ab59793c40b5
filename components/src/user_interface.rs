use std::rc::Rc;

use fluent::{FluentBundle, FluentResource};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::Dispatch;

use i18n::{en_us, zh_cn, LanguageType};
use userboard_sdk::api;
use userboard_sdk::board::{DraftField, Epoch, LoadTicket, PendingUpdate, UserBoard};
use userboard_sdk::config::ApiConfig;
use userboard_sdk::model::flavor::Flavor;
use userboard_sdk::model::user::User;
use userboard_sdk::state::I18nState;
use userboard_sdk::Result;
use utils::tr;

use crate::constant::{
    ADD_USER, DELETE_USER, EMAIL, LOADING, LOGO_ALT, NAME, NEW_EMAIL, NEW_NAME, TITLE, UPDATE_USER,
    USER_ID,
};
use crate::user_card::UserCard;

const INPUT_CLASS: &str = "mb-2 w-full p-2 border border-gray-600 rounded bg-gray-800 text-white";
const FORM_CLASS: &str = "mb-6 p-4 bg-gray-700 rounded-lg shadow";

pub struct UserInterface {
    board: UserBoard,
    flavor: Flavor,
    i18n: FluentBundle<FluentResource>,
    lang: LanguageType,
    _i18n_dis: Dispatch<I18nState>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct UserInterfaceProps {
    /// backend flavor, selects `/api/{flavor}` and the theme
    pub flavor: AttrValue,
    #[prop_or_else(ApiConfig::from_env)]
    pub config: ApiConfig,
}

pub enum UserInterfaceMsg {
    Loaded(LoadTicket, Result<Vec<User>>),
    Edit(DraftField, InputEvent),
    Create(SubmitEvent),
    Created(Epoch, Result<User>),
    Update(SubmitEvent),
    Updated(PendingUpdate, Result<()>),
    Delete(i64),
    Deleted(Epoch, i64, Result<()>),
    SwitchLanguage(Event),
    LanguageChanged(Rc<I18nState>),
}

fn create_bundle(lang: LanguageType) -> FluentBundle<FluentResource> {
    utils::create_bundle(match lang {
        LanguageType::ZhCN => zh_cn::USER_INTERFACE,
        LanguageType::EnUS => en_us::USER_INTERFACE,
    })
}

/// classes of the outer panel, flavor name included so pages can style per backend
fn panel_classes(flavor: &Flavor) -> Classes {
    classes!(
        "user-interface",
        flavor.theme().background,
        flavor.as_str().to_string(),
        "w-full", "max-w-md", "mx-auto", "p-6", "my-8", "rounded-lg", "shadow-lg"
    )
}

impl UserInterface {
    fn load(&self, ctx: &Context<Self>, ticket: LoadTicket) {
        let api = api::users(&ctx.props().config, &self.flavor);
        log::debug!("fetch users of {} backend", self.flavor);
        ctx.link().send_future(async move {
            UserInterfaceMsg::Loaded(ticket, api.list().await)
        });
    }

    fn input(&self, ctx: &Context<Self>, field: DraftField, value: &AttrValue, key: &str) -> Html {
        let oninput = ctx
            .link()
            .callback(move |event: InputEvent| UserInterfaceMsg::Edit(field, event));
        html! {
            <input
                placeholder={tr!(self.i18n, key)}
                value={value.clone()}
                {oninput}
                class={INPUT_CLASS} />
        }
    }

    fn language_switch(&self, ctx: &Context<Self>) -> Html {
        let onchange = ctx.link().callback(UserInterfaceMsg::SwitchLanguage);
        html! {
            <div class="language text-white text-sm text-right mb-2">
                <label for="en_us">
                    <input type="radio" name="language" id="en_us" value="en_us" onchange={onchange.clone()} checked={self.lang == LanguageType::EnUS}/>{"\tENG"}
                </label>
                <label for="zh_cn">
                    <input type="radio" name="language" id="zh_cn" value="zh_cn" {onchange} checked={self.lang == LanguageType::ZhCN}/>{"\t中文"}
                </label>
            </div>
        }
    }

    fn loading_hint(&self) -> Html {
        if !self.board.is_loading() {
            return html!();
        }
        html! {
            <div class="text-center text-gray-400">{tr!(self.i18n, LOADING)}</div>
        }
    }

    fn user_list(&self, ctx: &Context<Self>) -> Html {
        let button_class = classes!(
            self.flavor.theme().button,
            "text-white", "py-2", "px-4", "rounded-lg"
        );
        let delete_text = tr!(self.i18n, DELETE_USER);
        self.board
            .users()
            .iter()
            .map(|user| {
                let id = user.id;
                let onclick = ctx.link().callback(move |_| UserInterfaceMsg::Delete(id));
                html! {
                    <div key={id} class="flex items-center justify-between bg-gray-700 p-4 rounded-lg shadow">
                        <UserCard user={user.clone()} lang={self.lang} />
                        <button
                            {onclick}
                            class={button_class.clone()}
                            disabled={self.board.is_deleting(id)}>
                            {delete_text.clone()}
                        </button>
                    </div>
                }
            })
            .collect::<Html>()
    }
}

impl Component for UserInterface {
    type Message = UserInterfaceMsg;

    type Properties = UserInterfaceProps;

    fn create(ctx: &Context<Self>) -> Self {
        let _i18n_dis = Dispatch::global()
            .subscribe_silent(ctx.link().callback(UserInterfaceMsg::LanguageChanged));
        let lang = I18nState::get().lang;
        let mut interface = Self {
            board: UserBoard::new(),
            flavor: Flavor::from(ctx.props().flavor.clone()),
            i18n: create_bundle(lang),
            lang,
            _i18n_dis,
        };
        let ticket = interface.board.begin_load();
        interface.load(ctx, ticket);
        interface
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.flavor != old_props.flavor || props.config != old_props.config {
            self.flavor = Flavor::from(props.flavor.clone());
            let ticket = self.board.retarget();
            self.load(ctx, ticket);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            UserInterfaceMsg::Loaded(ticket, result) => {
                let _ = self.board.finish_load(ticket, result);
                true
            }
            UserInterfaceMsg::Edit(field, event) => {
                match event.target_dyn_into::<HtmlInputElement>() {
                    Some(input) => {
                        self.board.edit(field, input.value());
                        true
                    }
                    None => false,
                }
            }
            UserInterfaceMsg::Create(event) => {
                event.prevent_default();
                let Some((epoch, new_user)) = self.board.begin_create() else {
                    return false;
                };
                let api = api::users(&ctx.props().config, &self.flavor);
                ctx.link().send_future(async move {
                    UserInterfaceMsg::Created(epoch, api.create(new_user).await)
                });
                true
            }
            UserInterfaceMsg::Created(epoch, result) => {
                let _ = self.board.finish_create(epoch, result);
                true
            }
            UserInterfaceMsg::Update(event) => {
                event.prevent_default();
                let Some(pending) = self.board.begin_update() else {
                    return false;
                };
                let api = api::users(&ctx.props().config, &self.flavor);
                ctx.link().send_future(async move {
                    let result = api.update(pending.id, pending.patch()).await;
                    UserInterfaceMsg::Updated(pending, result)
                });
                true
            }
            UserInterfaceMsg::Updated(pending, result) => {
                let _ = self.board.finish_update(pending, result);
                true
            }
            UserInterfaceMsg::Delete(id) => {
                let Some(epoch) = self.board.begin_delete(id) else {
                    return false;
                };
                let api = api::users(&ctx.props().config, &self.flavor);
                ctx.link().send_future(async move {
                    UserInterfaceMsg::Deleted(epoch, id, api.delete(id).await)
                });
                true
            }
            UserInterfaceMsg::Deleted(epoch, id, result) => {
                let _ = self.board.finish_delete(epoch, id, result);
                true
            }
            UserInterfaceMsg::SwitchLanguage(event) => {
                let lang = event
                    .target_dyn_into::<HtmlInputElement>()
                    .and_then(|input| LanguageType::from_value(&input.value()));
                // the store notifies every subscriber, this one included
                if let Some(lang) = lang {
                    I18nState::set_lang(lang);
                }
                false
            }
            UserInterfaceMsg::LanguageChanged(state) => {
                if state.lang == self.lang {
                    return false;
                }
                log::debug!("switch language: {}", state.lang);
                self.lang = state.lang;
                self.i18n = create_bundle(state.lang);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let flavor = self.flavor.as_str().to_string();
        let new_user = self.board.new_user();
        let update_user = self.board.update_user();

        html! {
            <div class="min-h-screen bg-gray-900 flex items-center justify-center">
                <div class={panel_classes(&self.flavor)}>
                    {self.language_switch(ctx)}
                    <img
                        src={self.flavor.logo()}
                        alt={tr!(self.i18n, LOGO_ALT, "flavor" => flavor.clone())}
                        class="w-20 h-20 mb-6 mx-auto" />
                    <h2 class="text-2xl font-bold text-center text-white mb-6">
                        {tr!(self.i18n, TITLE, "flavor" => self.flavor.label())}
                    </h2>

                    // create user
                    <form onsubmit={ctx.link().callback(UserInterfaceMsg::Create)} class={FORM_CLASS}>
                        {self.input(ctx, DraftField::NewName, &new_user.name, NAME)}
                        {self.input(ctx, DraftField::NewEmail, &new_user.email, EMAIL)}
                        <button
                            type="submit"
                            disabled={self.board.is_creating()}
                            class="w-full p-2 text-white bg-blue-500 rounded-lg hover:bg-blue-600">
                            {tr!(self.i18n, ADD_USER)}
                        </button>
                    </form>

                    // update user
                    <form onsubmit={ctx.link().callback(UserInterfaceMsg::Update)} class={FORM_CLASS}>
                        {self.input(ctx, DraftField::UpdateId, &update_user.id, USER_ID)}
                        {self.input(ctx, DraftField::UpdateName, &update_user.name, NEW_NAME)}
                        {self.input(ctx, DraftField::UpdateEmail, &update_user.email, NEW_EMAIL)}
                        <button
                            type="submit"
                            disabled={self.board.is_updating()}
                            class="w-full p-2 text-white bg-green-500 rounded-lg hover:bg-green-600">
                            {tr!(self.i18n, UPDATE_USER)}
                        </button>
                    </form>

                    <div class="space-y-4">
                        {self.loading_hint()}
                        {self.user_list(ctx)}
                    </div>
                </div>
            </div>
        }
    }
}
