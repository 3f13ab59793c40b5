use serde::{Deserialize, Serialize};
use yew::AttrValue;

/// user record as owned by the server
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: AttrValue,
    pub email: AttrValue,
}

/// create form draft, also the `POST` body
#[derive(Serialize, Default, Clone, Debug, PartialEq)]
pub struct NewUser {
    pub name: AttrValue,
    pub email: AttrValue,
}

/// update form draft; `id` keeps whatever the user typed
#[derive(Default, Clone, Debug, PartialEq)]
pub struct UserUpdate {
    pub id: AttrValue,
    pub name: AttrValue,
    pub email: AttrValue,
}

impl UserUpdate {
    /// The record this draft targets, both locally and in the `PUT` path.
    /// Anything that is not an integer targets nothing and is never sent.
    pub fn target_id(&self) -> Option<i64> {
        self.id.trim().parse().ok()
    }

    pub fn patch(&self) -> UserPatch {
        UserPatch {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// `PUT` body
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct UserPatch {
    pub name: AttrValue,
    pub email: AttrValue,
}

#[cfg(test)]
mod test {
    use super::*;

    fn update(id: &'static str, name: &'static str, email: &'static str) -> UserUpdate {
        UserUpdate {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    #[test]
    fn user_list_from_server_json() {
        let users: Vec<User> = serde_json::from_str(
            r#"[{"id":2,"name":"Bob","email":"b@x.com"},{"id":1,"name":"Ann","email":"a@x.com"}]"#,
        )
        .unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, 2);
        assert_eq!(users[1].name.as_str(), "Ann");
    }

    #[test]
    fn create_body_has_no_id() {
        let body = serde_json::to_value(NewUser {
            name: "Ann".into(),
            email: "a@x.com".into(),
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"name": "Ann", "email": "a@x.com"})
        );
    }

    #[test]
    fn update_target_parses_trimmed_integer() {
        assert_eq!(update(" 7 ", "", "").target_id(), Some(7));
        assert_eq!(update("seven", "", "").target_id(), None);
        assert_eq!(update("", "", "").target_id(), None);
        // path tricks never reach the url
        assert_eq!(update("1/../../x", "", "").target_id(), None);
    }

    #[test]
    fn update_patch_carries_name_and_email() {
        let patch = update("3", "Cat", "c@x.com").patch();
        let body = serde_json::to_value(patch).unwrap();
        assert_eq!(body, serde_json::json!({"name": "Cat", "email": "c@x.com"}));
    }
}
