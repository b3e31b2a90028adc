use chrono::Utc;

use crate::{
    models::{AccountResponse, LoginRequest, SignupRequest, User},
    services::password::{dummy_hash, hash_password, verify_password},
    store::Datastore,
    utils::{generate_user_id, has_text, has_value, AppError},
};

// User registration
pub async fn signup(
    db: &Datastore,
    request: &SignupRequest,
    bcrypt_cost: u32,
) -> Result<AccountResponse, AppError> {
    let fields_present = has_value(&request.name)
        && has_value(&request.roll)
        && has_text(&request.email)
        && has_text(&request.password);
    let (Some(name), Some(roll), Some(email), Some(password), true) = (
        &request.name,
        &request.roll,
        &request.email,
        &request.password,
        fields_present,
    ) else {
        return Err(AppError::MissingFields);
    };

    // Cheap early rejection before paying for the hash; re-checked under the write lock
    if db.read().await?.find_user_by_email(email).is_some() {
        return Err(AppError::EmailTaken);
    }

    let password_hash = hash_password(password, bcrypt_cost).await?;

    let user = User {
        id: generate_user_id(),
        name: name.clone(),
        roll: roll.clone(),
        email: email.clone(),
        password_hash,
        created_at: Utc::now(),
    };

    let user = db
        .update(move |state| {
            if state.find_user_by_email(&user.email).is_some() {
                return Err(AppError::EmailTaken);
            }
            state.users.push(user.clone());
            Ok(user)
        })
        .await?;

    log::info!("✅ User registered: {} ({})", user.email, user.id);

    Ok(AccountResponse::new("User created", &user))
}

// User login
pub async fn login(
    db: &Datastore,
    request: &LoginRequest,
    bcrypt_cost: u32,
) -> Result<AccountResponse, AppError> {
    let (email, password) = match (&request.email, &request.password) {
        (Some(email), Some(password)) => (email, password),
        _ => return Err(AppError::InvalidCredentials),
    };

    let state = db.read().await?;
    let Some(user) = state.find_user_by_email(email) else {
        // Unknown email still costs one bcrypt check
        verify_password(password, dummy_hash(bcrypt_cost).await?).await?;
        return Err(AppError::InvalidCredentials);
    };

    if !verify_password(password, &user.password_hash).await? {
        return Err(AppError::InvalidCredentials);
    }

    Ok(AccountResponse::new("Login success", user))
}
