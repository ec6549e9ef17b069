use utility::model::Trigger;
use utility::{Error, Result};

/// resolve returns the first trigger bound to exactly this method and path.
///
/// Matching is literal on both fields: no case folding and no trailing slash handling.
/// Duplicate bindings are the registry's concern, the earliest one in input order wins.
pub fn resolve<'t>(triggers: &'t [Trigger], method: &str, path: &str) -> Option<&'t Trigger> {
    triggers.iter().find(|t| t.matches(method, path))
}

/// resolve_route is resolve with the miss turned into a RouteNotFound error
pub fn resolve_route<'t>(triggers: &'t [Trigger], method: &str, path: &str) -> Result<&'t Trigger> {
    resolve(triggers, method, path).ok_or_else(|| Error::RouteNotFound {
        method: method.to_string(),
        path: path.to_string(),
    })
}
