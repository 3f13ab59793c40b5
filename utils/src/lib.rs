use fluent::{FluentBundle, FluentResource};
use unic_langid::langid;

pub use fluent;
pub use log;

/// Formats a message from a bundle, optionally with named arguments:
/// `tr!(bundle, "title", "flavor" => "Go")`.
/// Missing keys format as the key itself so a typo never takes the page down.
#[macro_export]
macro_rules! tr {
    ($model:expr, $key:expr $(, $arg_name:expr => $arg_value:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut args = $crate::fluent::FluentArgs::new();
        $(
            args.set($arg_name, $arg_value);
        )*
        match $model.get_message($key).and_then(|message| message.value()) {
            Some(pattern) => {
                let mut errors = Vec::new();
                let text = $model
                    .format_pattern(pattern, Some(&args), &mut errors)
                    .to_string();
                if !errors.is_empty() {
                    $crate::log::warn!("format message {} failed: {:?}", $key, errors);
                }
                text
            }
            None => {
                $crate::log::warn!("message {} doesn't exist", $key);
                $key.to_string()
            }
        }
    }};
}

pub fn create_bundle(content: impl Into<String>) -> FluentBundle<FluentResource> {
    let lang_id = langid!("en-US");
    let mut bundle = FluentBundle::new(vec![lang_id]);
    // no unicode isolation marks around placeables, they end up in the DOM
    bundle.set_use_isolating(false);
    match FluentResource::try_new(content.into()) {
        Ok(resource) => {
            if let Err(errors) = bundle.add_resource(resource) {
                log::error!("add ftl resource failed: {:?}", errors);
            }
        }
        Err((_, errors)) => log::error!("parse ftl resource failed: {:?}", errors),
    }
    bundle
}

#[cfg(test)]
mod test {
    use i18n::{en_us, zh_cn};

    use super::*;

    #[test]
    fn formats_plain_message() {
        let bundle = create_bundle(en_us::USER_INTERFACE);
        assert_eq!(tr!(bundle, "add_user"), "Add User");
    }

    #[test]
    fn formats_message_with_argument() {
        let bundle = create_bundle(en_us::USER_INTERFACE);
        assert_eq!(tr!(bundle, "title", "flavor" => "Go"), "Go Backend");
        let bundle = create_bundle(en_us::USER_CARD);
        assert_eq!(tr!(bundle, "id", "id" => 5.to_string()), "Id: 5");
    }

    #[test]
    fn missing_key_falls_back_to_key() {
        let bundle = create_bundle(zh_cn::USER_CARD);
        assert_eq!(tr!(bundle, "nope"), "nope");
    }

    #[test]
    fn both_languages_share_keys() {
        let keys = [
            "title",
            "logo_alt",
            "name",
            "email",
            "add_user",
            "user_id",
            "new_name",
            "new_email",
            "update_user",
            "delete_user",
            "loading",
        ];
        let en = create_bundle(en_us::USER_INTERFACE);
        let zh = create_bundle(zh_cn::USER_INTERFACE);
        for key in keys {
            assert!(en.has_message(key), "en_us missing {key}");
            assert!(zh.has_message(key), "zh_cn missing {key}");
        }
    }
}
