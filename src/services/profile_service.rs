use chrono::Utc;

use crate::{
    models::{MessageResponse, Profile, ProfileRequest},
    store::Datastore,
    utils::{has_value, AppError},
};

/// Creates or wholesale replaces the profile of `request.user_id`
pub async fn save_profile(
    db: &Datastore,
    request: &ProfileRequest,
) -> Result<MessageResponse, AppError> {
    let required_present = has_value(&request.user_id)
        && has_value(&request.role)
        && has_value(&request.skills);
    let (Some(user_id), Some(role), Some(skills), true) = (
        &request.user_id,
        &request.role,
        &request.skills,
        required_present,
    ) else {
        return Err(AppError::MissingFields);
    };

    // Ids are always issued as strings, so nothing else can name a user
    let Some(user_id) = user_id.as_str() else {
        return Err(AppError::UserNotFound);
    };

    let profile = Profile {
        user_id: user_id.to_string(),
        role: role.clone(),
        skills: skills.clone(),
        category: request.category.clone(),
        rate: request.rate.clone(),
        mode: request.mode.clone(),
        availability: request.availability.clone(),
        bio: request.bio.clone(),
        updated_at: Utc::now(),
    };

    db.update(move |state| {
        if state.find_user_by_id(&profile.user_id).is_none() {
            return Err(AppError::UserNotFound);
        }
        state.upsert_profile(profile);
        Ok(())
    })
    .await?;

    log::info!("✅ Profile saved for user {}", user_id);

    Ok(MessageResponse {
        message: "Profile saved".to_string(),
    })
}
