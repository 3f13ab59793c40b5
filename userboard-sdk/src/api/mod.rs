use crate::config::ApiConfig;
use crate::model::flavor::Flavor;

use self::{http::UserHttp, user::UserApi};

mod http;
pub mod user;

pub fn users(config: &ApiConfig, flavor: &Flavor) -> Box<dyn UserApi> {
    Box::new(UserHttp::new(config.clone(), flavor.clone()))
}
