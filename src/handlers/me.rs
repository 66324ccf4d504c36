//! Current-user endpoint.
//! Used by: server.

use axum::Json;

use crate::http::CurrentUser;
use crate::users::User;

pub async fn me(CurrentUser(user): CurrentUser) -> Json<User> {
    Json(user)
}
