//! Short code resolution, registration, listing and deletion.

use std::sync::Arc;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::invite_url::is_discord_invite;
use crate::utils::short_code::{normalize_code, validate_code};

/// Service for everything that touches short code mappings.
///
/// Codes are case-insensitive: every entry point lowercases before it talks
/// to the repository, so the store only ever sees lowercase codes.
pub struct LinkService<M: MappingRepository> {
    repository: Arc<M>,
}

impl<M: MappingRepository> LinkService<M> {
    /// Creates a new link service.
    pub fn new(repository: Arc<M>) -> Self {
        Self { repository }
    }

    /// Resolves a short code to its invite URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist or has expired.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let code = code.to_lowercase();

        self.repository
            .find_active(&code)
            .await?
            .map(|mapping| mapping.discord_url)
            .ok_or_else(|| AppError::not_found(format!("The short code '{code}' was not found.")))
    }

    /// Registers a new short code owned by `owner_id`.
    ///
    /// Both inputs are trimmed and the code is lowercased before validation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - The code is empty, reserved or not a single path segment
    /// - The URL is not exactly `https://discord.gg/<alphanumeric invite>`
    ///
    /// Returns [`AppError::Conflict`] if the code is already registered, by anyone.
    pub async fn register(
        &self,
        raw_code: &str,
        raw_url: &str,
        owner_id: &str,
    ) -> Result<Mapping, AppError> {
        let short_code = normalize_code(raw_code);
        let discord_url = raw_url.trim();

        validate_code(&short_code)?;

        if !is_discord_invite(discord_url) {
            return Err(AppError::bad_request(
                "Invalid Discord URL. Must be https://discord.gg/...",
            ));
        }

        let mapping = self
            .repository
            .create(NewMapping {
                short_code,
                discord_url: discord_url.to_string(),
                owner_id: owner_id.to_string(),
                expires_at: None,
            })
            .await?;

        tracing::info!(
            code = %mapping.short_code,
            owner = %mapping.owner_id,
            "Registered short code"
        );

        Ok(mapping)
    }

    /// Lists the owner's non-expired mappings, newest first.
    pub async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<Mapping>, AppError> {
        self.repository.list_active_by_owner(owner_id).await
    }

    /// Deletes a mapping on behalf of its owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the code is empty.
    /// Returns [`AppError::NotFound`] if the code does not exist, or vanished
    /// between the ownership check and the delete.
    /// Returns [`AppError::Forbidden`] if `requester_id` is not the owner.
    pub async fn delete(&self, raw_code: &str, requester_id: &str) -> Result<(), AppError> {
        let code = normalize_code(raw_code);
        if code.is_empty() {
            return Err(AppError::bad_request("Short code is required"));
        }

        let owner_id = self
            .repository
            .find_owner(&code)
            .await?
            .ok_or_else(|| AppError::not_found(format!("The short code '{code}' was not found.")))?;

        if owner_id != requester_id {
            return Err(AppError::forbidden(format!(
                "You can only delete links that you created. '{code}' belongs to another user."
            )));
        }

        // Owner is re-checked by the delete predicate itself.
        let deleted = self.repository.delete_owned(&code, requester_id).await?;
        if deleted == 0 {
            return Err(AppError::not_found(
                "No link was deleted. It may have already been removed.",
            ));
        }

        tracing::info!(code = %code, owner = %requester_id, "Deleted short code");

        Ok(())
    }
}
