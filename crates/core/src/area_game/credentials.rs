use tokio::sync::RwLock;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub user_name: String,
    pub password: String,
}

impl Credentials {
    pub fn new(user_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            password: password.into(),
        }
    }
}

/// Login info, replaced as a whole on every edit. Nothing is validated here.
pub struct CredentialsStore {
    current: RwLock<Credentials>,
}

impl CredentialsStore {
    pub fn new(initial: Credentials) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    pub async fn get(&self) -> Credentials {
        self.current.read().await.clone()
    }

    pub async fn set_user_name(&self, user_name: impl Into<String>) -> Credentials {
        let mut current = self.current.write().await;
        *current = Credentials {
            user_name: user_name.into(),
            password: current.password.clone(),
        };
        current.clone()
    }

    pub async fn set_password(&self, password: impl Into<String>) -> Credentials {
        let mut current = self.current.write().await;
        *current = Credentials {
            user_name: current.user_name.clone(),
            password: password.into(),
        };
        current.clone()
    }
}
