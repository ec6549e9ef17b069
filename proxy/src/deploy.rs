use crate::client::Client;
use crate::utils::{function_path, trigger_path, FUNCTIONS_PATH, TRIGGERS_PATH};
use reqwest::Method;
use tracing::info;
use utility::model::{Function, Trigger};
use utility::{Error, Result};

impl<'s> Client<'s> {
    /// create_function registers a new function. The executable is assigned by the
    /// registry and read-only entries can only be made by the registry itself
    pub async fn create_function(&self, function: &Function) -> Result<Function> {
        if function.readonly {
            return Err(Error::ReadOnly(format!("function {}", function.name)));
        }
        let function = Function {
            executable: String::new(),
            ..function.clone()
        };

        let created: Function = self
            .send_json(Method::POST, FUNCTIONS_PATH, &function)
            .await?;
        info!(function = created.name.as_str(), "function created");
        Ok(created)
    }

    /// update_function replaces the resources and language of an existing function.
    /// Read-only functions are refused before anything is sent
    pub async fn update_function(&self, function: &Function) -> Result<Function> {
        let current = self.require_function(function.name.as_str()).await?;
        if current.readonly {
            return Err(Error::ReadOnly(format!("function {}", function.name)));
        }
        let function = Function {
            executable: current.executable,
            readonly: false,
            ..function.clone()
        };

        let updated: Function = self
            .send_json(
                Method::PUT,
                function_path(function.name.as_str()).as_str(),
                &function,
            )
            .await?;
        info!(function = updated.name.as_str(), "function updated");
        Ok(updated)
    }

    /// create_trigger binds a method and path to a function
    pub async fn create_trigger(&self, trigger: &Trigger) -> Result<Trigger> {
        if trigger.readonly {
            return Err(Error::ReadOnly(format!("trigger {}", trigger.name)));
        }

        let created: Trigger = self
            .send_json(Method::POST, TRIGGERS_PATH, trigger)
            .await?;
        info!(trigger = created.name.as_str(), "trigger created");
        Ok(created)
    }

    /// update_trigger rebinds an existing trigger, read-only triggers are refused before anything is sent
    pub async fn update_trigger(&self, trigger: &Trigger) -> Result<Trigger> {
        let current = self
            .list_triggers()
            .await?
            .into_iter()
            .find(|t| t.name == trigger.name)
            .ok_or_else(|| Error::NotFound(format!("trigger {}", trigger.name)))?;
        if current.readonly {
            return Err(Error::ReadOnly(format!("trigger {}", trigger.name)));
        }
        let trigger = Trigger {
            readonly: false,
            ..trigger.clone()
        };

        let updated: Trigger = self
            .send_json(
                Method::PUT,
                trigger_path(trigger.name.as_str()).as_str(),
                &trigger,
            )
            .await?;
        info!(trigger = updated.name.as_str(), "trigger updated");
        Ok(updated)
    }
}
