use gloo_net::http::Request;

use crate::api::user::UserApi;
use crate::config::ApiConfig;
use crate::model::flavor::Flavor;
use crate::model::user::{NewUser, User, UserPatch};
use crate::Result;

use super::RespStatus;

pub struct UserHttp {
    config: ApiConfig,
    flavor: Flavor,
}

impl UserHttp {
    pub fn new(config: ApiConfig, flavor: Flavor) -> Self {
        Self { config, flavor }
    }

    fn users_url(&self) -> String {
        self.config.users_url(self.flavor.as_str())
    }

    fn user_url(&self, id: impl std::fmt::Display) -> String {
        self.config.user_url(self.flavor.as_str(), id)
    }
}

#[async_trait::async_trait(?Send)]
impl UserApi for UserHttp {
    async fn list(&self) -> Result<Vec<User>> {
        let users: Vec<User> = Request::get(&self.users_url())
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(users)
    }

    async fn create(&self, user: NewUser) -> Result<User> {
        log::debug!("create user {:?} at {}", user, self.flavor);
        let user: User = Request::post(&self.users_url())
            .json(&user)?
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(user)
    }

    async fn update(&self, id: i64, user: UserPatch) -> Result<()> {
        Request::put(&self.user_url(id))
            .json(&user)?
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        Request::delete(&self.user_url(id))
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }
}
