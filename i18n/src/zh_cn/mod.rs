// user interface component
pub const USER_INTERFACE: &str = r#"
title = { $flavor } 后端
logo_alt = { $flavor } 标志
name = 姓名
email = 邮箱
add_user = 添加用户
user_id = 用户ID
new_name = 新姓名
new_email = 新邮箱
update_user = 更新用户
loading = 正在加载用户...
delete_user = 删除用户
"#;

// user card component
pub const USER_CARD: &str = r#"
id = ID: { $id }
"#;
