use std::rc::Rc;

use serde::{Deserialize, Serialize};
use yewdux::{Dispatch, Store};

use i18n::LanguageType;

/// language type, kept across reloads
#[derive(Debug, Default, Clone, PartialEq, Store, Serialize, Deserialize)]
#[store(storage = "local")]
pub struct I18nState {
    pub lang: LanguageType,
}

impl I18nState {
    pub fn get() -> Rc<Self> {
        Dispatch::<Self>::global().get()
    }

    pub fn set_lang(lang: LanguageType) {
        Dispatch::<Self>::global().reduce_mut(|s| s.lang = lang);
    }
}
