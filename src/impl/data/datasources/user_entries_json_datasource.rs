use fractic_server_error::ServerError;

use crate::{
    data::models::user_entry_model::UserEntryModel, entities::UserEntry, errors::InvalidJson,
};

pub trait UserEntriesJsonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<UserEntry>, ServerError>;
}

pub struct UserEntriesJsonDatasourceImpl;

impl UserEntriesJsonDatasourceImpl {
    pub fn new() -> Self {
        Self
    }
}

impl UserEntriesJsonDatasource for UserEntriesJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<UserEntry>, ServerError> {
        // Empty payload means the user has no entries.
        if s.trim().is_empty() {
            return Ok(Vec::new());
        }
        let models: Vec<UserEntryModel> =
            serde_json::from_str(s).map_err(|e| InvalidJson::with_debug(&e))?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}
