use async_trait::async_trait;
use gloo_net::http::Response;

pub use user::*;

use crate::error::Error;
use crate::Result;

mod user;

#[async_trait(?Send)]
pub trait RespStatus: Sized {
    async fn success(self) -> Result<Self>;
}

#[async_trait(?Send)]
impl RespStatus for Response {
    async fn success(self) -> Result<Self> {
        if self.ok() {
            Ok(self)
        } else {
            let status = self.status();
            // keep whatever the server said for the log
            let body = match self.text().await {
                Ok(body) if !body.is_empty() => body,
                _ => self.status_text(),
            };
            Err(Error::Status { status, body })
        }
    }
}
