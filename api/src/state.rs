use db::Store;
use services::{
    AuthenticationService, ContentService, MemoryAuthenticationService, MemoryContentService,
    MemoryUserService, UserService,
};
use std::sync::Arc;

/// Collaborators shared by every handler.
#[derive(Clone)]
pub struct AppState {
    auth: Arc<dyn AuthenticationService>,
    users: Arc<dyn UserService>,
    contents: Arc<dyn ContentService>,
}

impl AppState {
    pub fn new(
        auth: Arc<dyn AuthenticationService>,
        users: Arc<dyn UserService>,
        contents: Arc<dyn ContentService>,
    ) -> Self {
        Self {
            auth,
            users,
            contents,
        }
    }

    pub fn auth(&self) -> &dyn AuthenticationService {
        self.auth.as_ref()
    }

    pub fn users(&self) -> &dyn UserService {
        self.users.as_ref()
    }

    pub fn contents(&self) -> &dyn ContentService {
        self.contents.as_ref()
    }
}

/// The in-memory collaborators over one shared store. The concrete handles
/// stay reachable for seeding accounts and issuing credentials.
#[derive(Clone)]
pub struct MemoryServices {
    pub auth: Arc<MemoryAuthenticationService>,
    pub users: Arc<MemoryUserService>,
    pub contents: Arc<MemoryContentService>,
}

impl MemoryServices {
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            auth: Arc::new(MemoryAuthenticationService::new(store.clone())),
            users: Arc::new(MemoryUserService::new(store.clone())),
            contents: Arc::new(MemoryContentService::new(store)),
        }
    }

    pub fn app_state(&self) -> AppState {
        AppState::new(
            self.auth.clone(),
            self.users.clone(),
            self.contents.clone(),
        )
    }
}
