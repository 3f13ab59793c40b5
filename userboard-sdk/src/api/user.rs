use crate::model::user::{NewUser, User, UserPatch};
use crate::Result;

#[async_trait::async_trait(?Send)]
pub trait UserApi {
    /// every user, in server order
    async fn list(&self) -> Result<Vec<User>>;

    /// returns the record with its server-assigned id
    async fn create(&self, user: NewUser) -> Result<User>;

    async fn update(&self, id: i64, user: UserPatch) -> Result<()>;

    async fn delete(&self, id: i64) -> Result<()>;
}
