use super::*;

pub async fn get_user(
    user_id: &UserId,
    store: &UserStore,
) -> Result<User, StoreError> {
    store
        .users
        .read()
        .await
        .get(user_id)
        .cloned()
        .ok_or(StoreError::UserNotFound)
}

/// All users, active or not, ordered by id.
pub async fn list_users(store: &UserStore) -> Vec<User> {
    store.users.read().await.values().cloned().collect()
}

pub async fn create_user(
    user: User,
    store: &UserStore,
) -> Result<User, StoreError> {
    let mut users = store.users.write().await;
    if users.contains_key(&user.id) {
        return Err(StoreError::UserIdNotUnique { id: user.id });
    }
    users.insert(user.id, user.clone());
    Ok(user)
}

pub async fn delete_user(
    user_id: &UserId,
    store: &UserStore,
) -> Result<(), StoreError> {
    store
        .users
        .write()
        .await
        .remove(user_id)
        .map(|_| ())
        .ok_or(StoreError::UserNotFound)
}
