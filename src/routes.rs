// Route path constants - single source of truth for the special-cased paths

pub const HEALTH: &str = "/health";
pub const NEW_ROUTE: &str = "/newroute";
