use actix_web::{HttpResponse, delete, get, post, web};
use payloads::{User, UserId};

use crate::store::{self, UserStore};

use super::APIError;

#[tracing::instrument(skip(users), ret)]
#[get("/users")]
pub async fn list_users(
    users: web::Data<UserStore>,
) -> Result<HttpResponse, APIError> {
    let users = store::list_users(&users).await;
    Ok(HttpResponse::Ok().json(users))
}

#[tracing::instrument(skip(users), ret)]
#[get("/users/{user_id}")]
pub async fn get_user(
    user_id: web::Path<u32>,
    users: web::Data<UserStore>,
) -> Result<HttpResponse, APIError> {
    let user = store::get_user(&UserId(user_id.into_inner()), &users).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[tracing::instrument(skip(users), ret)]
#[post("/users")]
pub async fn create_user(
    details: web::Json<User>,
    users: web::Data<UserStore>,
) -> Result<HttpResponse, APIError> {
    let user = store::create_user(details.into_inner(), &users).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[tracing::instrument(skip(users), ret)]
#[delete("/users/{user_id}")]
pub async fn delete_user(
    user_id: web::Path<u32>,
    users: web::Data<UserStore>,
) -> Result<HttpResponse, APIError> {
    store::delete_user(&UserId(user_id.into_inner()), &users).await?;
    Ok(HttpResponse::Ok().finish())
}
