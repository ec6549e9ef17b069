use crate::client::Client;
use crate::utils::{FUNCTIONS_PATH, TRIGGERS_PATH};
use utility::model::{Function, Trigger};
use utility::Result;

impl<'s> Client<'s> {
    /// list_functions lists the functions known to the registry
    pub async fn list_functions(&self) -> Result<Vec<Function>> {
        self.get_json(FUNCTIONS_PATH).await
    }

    /// list_triggers lists the triggers known to the registry, in registry order
    pub async fn list_triggers(&self) -> Result<Vec<Trigger>> {
        self.get_json(TRIGGERS_PATH).await
    }
}
