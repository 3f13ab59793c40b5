use yew::prelude::*;

use i18n::{en_us, zh_cn, LanguageType};
use userboard_sdk::model::user::User;
use utils::tr;

use crate::constant::ID;

#[derive(Properties, Clone, PartialEq)]
pub struct UserCardProps {
    pub user: User,
    #[prop_or_default]
    pub lang: LanguageType,
}

/// One user record as a card. Pure function of its props.
#[function_component(UserCard)]
pub fn user_card(props: &UserCardProps) -> Html {
    let bundle = use_memo(props.lang, |lang| {
        utils::create_bundle(match lang {
            LanguageType::ZhCN => zh_cn::USER_CARD,
            LanguageType::EnUS => en_us::USER_CARD,
        })
    });
    let user = &props.user;

    html! {
        <div class="bg-gray-800 shadow-lg rounded-lg p-4 mb-4 hover:bg-gray-700">
            <div class="text-sm text-gray-400">{tr!(bundle, ID, "id" => user.id.to_string())}</div>
            <div class="text-lg font-semibold text-white">{&user.name}</div>
            <div class="text-md text-gray-300">{&user.email}</div>
        </div>
    }
}
