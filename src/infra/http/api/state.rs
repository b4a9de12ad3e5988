use std::{sync::Arc, time::Duration};

use crate::application::cache::KvCache;
use crate::application::greeting::GreetingService;
use crate::application::messages::MessageService;
use crate::application::repos::{MessagesRepo, UsersRepo};
use crate::application::users::UserService;
use crate::infra::db::SqliteRepositories;

#[derive(Clone)]
pub struct ApiState {
    pub greeting: GreetingService,
    pub users: Arc<UserService>,
    pub messages: Arc<MessageService>,
    pub db: Arc<SqliteRepositories>,
}

impl ApiState {
    /// Wire the services over one set of repositories and a cache backend.
    pub fn new(db: Arc<SqliteRepositories>, cache: Arc<dyn KvCache>, hello_ttl: Duration) -> Self {
        let users_repo: Arc<dyn UsersRepo> = db.clone();
        let messages_repo: Arc<dyn MessagesRepo> = db.clone();

        let greeting = GreetingService::new(cache, hello_ttl);
        let users = Arc::new(UserService::new(users_repo));
        let messages = Arc::new(MessageService::new(messages_repo, greeting.clone()));

        Self {
            greeting,
            users,
            messages,
            db,
        }
    }
}
