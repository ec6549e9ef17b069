use crate::client::Client;
use crate::utils::{function_path, trigger_path};
use tracing::info;
use utility::{Error, Result};

impl<'s> Client<'s> {
    /// delete_function removes a function from the registry, read-only functions are refused
    pub async fn delete_function(&self, function_name: &str) -> Result<()> {
        let function = self.require_function(function_name).await?;
        if function.readonly {
            return Err(Error::ReadOnly(format!("function {}", function_name)));
        }

        self.delete(function_path(function_name).as_str()).await?;
        info!(function = function_name, "function removed");
        Ok(())
    }

    /// delete_trigger removes a trigger from the registry, read-only triggers are refused
    pub async fn delete_trigger(&self, trigger_name: &str) -> Result<()> {
        let trigger = self
            .list_triggers()
            .await?
            .into_iter()
            .find(|t| t.name == trigger_name)
            .ok_or_else(|| Error::NotFound(format!("trigger {}", trigger_name)))?;
        if trigger.readonly {
            return Err(Error::ReadOnly(format!("trigger {}", trigger_name)));
        }

        self.delete(trigger_path(trigger_name).as_str()).await?;
        info!(trigger = trigger_name, "trigger removed");
        Ok(())
    }
}
