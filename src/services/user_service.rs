use crate::{
    db::Store,
    error::{AppError, Result},
    models::User,
};

/// Register a new user. Names are unique across the service.
pub async fn register(store: &Store, name: &str, email: Option<String>) -> Result<User> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidArgument("Enter a username".to_string()));
    }

    let user = store.insert_user(User::new(name, email)).await?;
    tracing::info!(user = %user.name, "User created");
    Ok(user)
}

pub async fn find_by_name(store: &Store, name: &str) -> Result<User> {
    store.get_user(name).await.ok_or_else(|| {
        AppError::NotFound("A user with that name does not exist".to_string())
    })
}
