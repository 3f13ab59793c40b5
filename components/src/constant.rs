// message keys shared by the user components
pub const TITLE: &str = "title";
pub const LOGO_ALT: &str = "logo_alt";
pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const ADD_USER: &str = "add_user";
pub const USER_ID: &str = "user_id";
pub const NEW_NAME: &str = "new_name";
pub const NEW_EMAIL: &str = "new_email";
pub const UPDATE_USER: &str = "update_user";
pub const DELETE_USER: &str = "delete_user";
pub const ID: &str = "id";
pub const LOADING: &str = "loading";
