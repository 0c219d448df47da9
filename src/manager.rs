//! User account management for a single project.
//!
//! [`UserManager`] validates caller input, builds requests against the
//! identity endpoint, and turns the endpoint's responses into
//! [`UserRecord`]s or typed errors. Every request path is scoped under
//! `projects/{project_id}/`.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use identity_admin::{StaticToken, UserAttributes, UserManager, UserQuery};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = UserManager::new("my-project", StaticToken::new("ya29.token"))?;
//!
//! let created = manager
//!     .create_user(UserAttributes::new().email("jane@example.com").password("secret123"))
//!     .await?;
//!
//! let found = manager.get_user_by(&UserQuery::by_email("jane@example.com")).await?;
//! assert_eq!(found.map(|u| u.uid().to_string()), Some(created.uid().to_string()));
//! # Ok(())
//! # }
//! ```

mod builder;

pub use builder::UserManagerBuilder;

use crate::config::{UserManagerConfig, validate_project_id};
use crate::error::{AdminError, AdminResult, ValidationError};
use crate::http::{CredentialProvider, HttpClient, HttpResponse, ReqwestHttpClient};
use crate::user::value_objects::Uid;
use crate::user::{UserAttributes, UserQuery, UserRecord, UserUpdate};
use log::{debug, info, warn};
use serde::Serialize;
use serde_json::{Value, json};

/// Page size used by [`UserManager::list_users`].
pub const MAX_LIST_RESULTS: usize = 1000;

/// Client for managing the user accounts of one project.
///
/// The manager holds no mutable state. It can be shared across tasks as long
/// as its HTTP client can.
#[derive(Debug, Clone)]
pub struct UserManager<H> {
    project_id: String,
    client: H,
}

impl<C: CredentialProvider> UserManager<ReqwestHttpClient<C>> {
    /// Create a manager for `project_id` against the default endpoint.
    ///
    /// No request is made until an operation is called.
    pub fn new(project_id: impl Into<String>, credentials: C) -> AdminResult<Self> {
        Self::from_config(UserManagerConfig::new(project_id), credentials)
    }

    /// Create a manager from a full configuration.
    pub fn from_config(config: UserManagerConfig, credentials: C) -> AdminResult<Self> {
        let base_url = config.validate()?;
        let client = ReqwestHttpClient::new(base_url, credentials, config.timeout)?;
        Ok(Self {
            project_id: config.project_id,
            client,
        })
    }
}

impl<H: HttpClient> UserManager<H> {
    /// Create a manager around an existing HTTP client.
    pub fn with_client(project_id: impl Into<String>, client: H) -> AdminResult<Self> {
        let project_id = project_id.into();
        validate_project_id(&project_id)?;
        Ok(Self { project_id, client })
    }

    /// Get the project all requests are scoped to.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Get the underlying HTTP client.
    pub fn client(&self) -> &H {
        &self.client
    }

    /// Create a user account and return its stored state.
    ///
    /// Only the attributes that are set are sent. On success the account is
    /// read back by uid, so the returned record is what the server stored
    /// rather than what the create call echoed.
    pub async fn create_user(&self, attributes: UserAttributes) -> AdminResult<UserRecord> {
        let payload = attributes.to_create_payload()?;

        let response = self.post("accounts", &payload).await?;
        let Some(uid) = local_id(&response) else {
            warn!("Create user response has no localId: {}", response);
            return Err(AdminError::CreateUser { response });
        };

        info!("Created user {} in project {}", uid, self.project_id);
        self.read_back(uid).await
    }

    /// Update the given fields of an existing account and return its new state.
    ///
    /// Unset fields in `update` are left untouched on the server.
    pub async fn update_user(&self, uid: &str, update: UserUpdate) -> AdminResult<UserRecord> {
        let uid = Uid::new(uid.to_string())?;
        let payload = update.to_update_payload(&uid)?;

        let uid = self
            .patch_user(&payload)
            .await?
            .map_err(|response| AdminError::UpdateUser { response })?;

        info!("Updated user {} in project {}", uid, self.project_id);
        self.read_back(uid).await
    }

    /// Replace the custom claims of an account.
    ///
    /// `claims` is serialized to a JSON string and stored as-is. Size and
    /// reserved-name limits are enforced by the server.
    pub async fn set_custom_claims<T>(&self, uid: &str, claims: &T) -> AdminResult<UserRecord>
    where
        T: Serialize + ?Sized,
    {
        let uid = Uid::new(uid.to_string())?;
        let payload = json!({
            "localId": uid,
            "customAttributes": serde_json::to_string(claims)?,
        });

        let uid = self
            .patch_user(&payload)
            .await?
            .map_err(|response| AdminError::SetCustomClaims { response })?;

        info!("Set custom claims for user {} in project {}", uid, self.project_id);
        self.read_back(uid).await
    }

    /// List the first page of accounts, in server order.
    ///
    /// Only a single page of up to [`MAX_LIST_RESULTS`] accounts is fetched.
    pub async fn list_users(&self) -> AdminResult<Vec<UserRecord>> {
        let max_results = MAX_LIST_RESULTS.to_string();
        let response = self
            .get("accounts:batchGet", &[("maxResults", max_results.as_str())])
            .await?;

        if !response.is_success() {
            warn!("List users failed for project {}: {}", self.project_id, response);
            return Err(AdminError::ListUsers { response });
        }

        let users = users(&response)
            .iter()
            .cloned()
            .map(UserRecord::from_value)
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Listed {} users in project {}", users.len(), self.project_id);
        Ok(users)
    }

    /// Find a user by uid, email or phone number.
    ///
    /// Exactly one key is sent; see [`UserQuery::resolve`] for how it is
    /// picked. A missing user is `Ok(None)`, not an error.
    pub async fn get_user_by(&self, query: &UserQuery) -> AdminResult<Option<UserRecord>> {
        let key = query.resolve()?;
        debug!("Looking up user by {}", key.field_name());

        let response = self.post("accounts:lookup", &key.to_payload()).await?;
        if !response.is_success() {
            warn!("User lookup failed for project {}: {}", self.project_id, response);
            return Err(AdminError::GetUser { response });
        }

        match users(&response).first() {
            Some(user) => Ok(Some(UserRecord::from_value(user.clone())?)),
            None => {
                debug!("No user matched {}", key.field_name());
                Ok(None)
            }
        }
    }

    /// Find a user by uid.
    pub async fn get_user(&self, uid: &str) -> AdminResult<Option<UserRecord>> {
        self.get_user_by(&UserQuery::by_uid(uid)).await
    }

    /// Find a user by primary email.
    pub async fn get_user_by_email(&self, email: &str) -> AdminResult<Option<UserRecord>> {
        self.get_user_by(&UserQuery::by_email(email)).await
    }

    /// Find a user by primary phone number.
    pub async fn get_user_by_phone_number(
        &self,
        phone_number: &str,
    ) -> AdminResult<Option<UserRecord>> {
        self.get_user_by(&UserQuery::by_phone_number(phone_number))
            .await
    }

    /// Delete one account. The raw response is returned for the caller to
    /// inspect.
    pub async fn delete_user(&self, uid: &str) -> AdminResult<HttpResponse> {
        let uid = Uid::new(uid.to_string())?;

        let response = self
            .post("accounts:delete", &json!({ "localId": uid }))
            .await?;
        info!(
            "Delete user {} in project {} returned {}",
            uid, self.project_id, response.status
        );
        Ok(response)
    }

    /// Delete several accounts in one call, including enabled ones.
    ///
    /// Every uid is validated first; an empty batch is rejected. The raw
    /// response is returned for the caller to inspect.
    pub async fn delete_users<I, S>(&self, uids: I) -> AdminResult<HttpResponse>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let uids = uids
            .into_iter()
            .map(|uid| Uid::new(uid.into()))
            .collect::<Result<Vec<_>, _>>()?;
        if uids.is_empty() {
            return Err(ValidationError::missing_required("localIds").into());
        }

        let payload = json!({ "localIds": uids, "force": true });
        let response = self.post("accounts:batchDelete", &payload).await?;
        info!(
            "Batch delete of {} users in project {} returned {}",
            uids.len(),
            self.project_id,
            response.status
        );
        Ok(response)
    }

    // Shared by update_user and set_custom_claims: the uid echoed back is the
    // success marker. On failure the raw response is handed back for the
    // caller to wrap in its own error kind.
    async fn patch_user(&self, payload: &Value) -> AdminResult<Result<String, HttpResponse>> {
        let response = self.post("accounts:update", payload).await?;
        match local_id(&response) {
            Some(uid) => Ok(Ok(uid)),
            None => {
                warn!("Update response has no localId: {}", response);
                Ok(Err(response))
            }
        }
    }

    async fn read_back(&self, uid: String) -> AdminResult<UserRecord> {
        let user = self.get_user(&uid).await?;
        user.ok_or(AdminError::UserNotFound { uid })
    }

    fn scoped(&self, path: &str) -> String {
        format!("projects/{}/{}", self.project_id, path)
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> AdminResult<HttpResponse> {
        Ok(self.client.get(&self.scoped(path), query).await?)
    }

    async fn post(&self, path: &str, body: &Value) -> AdminResult<HttpResponse> {
        Ok(self.client.post(&self.scoped(path), body).await?)
    }
}

fn local_id(response: &HttpResponse) -> Option<String> {
    response
        .field("localId")
        .and_then(Value::as_str)
        .filter(|uid| !uid.is_empty())
        .map(str::to_string)
}

fn users(response: &HttpResponse) -> &[Value] {
    response
        .field("users")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}
