//! Landing screen shown when the app starts

use async_trait::async_trait;

use super::{Route, Screen};

pub const HOME_WELCOME: &str = "Welcome to the Home Screen";
pub const HOME_INSTRUCTION: &str = "Open the drawer to navigate to other screens";

/// Landing screen. Owns no SDK resources.
#[derive(Debug, Default)]
pub struct HomeScreen;

impl HomeScreen {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Screen for HomeScreen {
    fn route(&self) -> Route {
        Route::Home
    }

    async fn status_lines(&self) -> Vec<String> {
        vec![HOME_WELCOME.to_string(), HOME_INSTRUCTION.to_string()]
    }
}
