use wanikani_client::{Request, Result};

use crate::body::{PreferencesUpdate, UpdateUserRequest, UserUpdate};
use crate::envelope::Report;
use crate::user::User;

impl super::WaniKaniClient {
    /// The owner of the API token.
    pub fn get_user(&self) -> Request<Report<User>> {
        self.get("user")
    }

    /// Change user preferences. Only the preferences set in `preferences`
    /// are sent.
    pub fn update_user(&self, preferences: &PreferencesUpdate) -> Result<Request<Report<User>>> {
        let body = UpdateUserRequest {
            user: UserUpdate {
                preferences: preferences.clone(),
            },
        };
        let builder = self.http.put("user").json(&body)?;
        Ok(self.request(builder))
    }
}
