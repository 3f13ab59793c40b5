// user interface component
pub const USER_INTERFACE: &str = r#"
title = { $flavor } Backend
logo_alt = { $flavor } Logo
name = Name
email = Email
add_user = Add User
user_id = User Id
new_name = New Name
new_email = New Email
update_user = Update User
loading = Loading users...
delete_user = Delete User
"#;

// user card component
pub const USER_CARD: &str = r#"
id = Id: { $id }
"#;
