//! Authenticated client for the Dodam backends
//!
//! This crate owns the session (a persisted access/refresh token pair), an
//! HTTP client that attaches it and recovers from an expired access token
//! once per request, and typed wrappers for the endpoints the dashboard
//! uses.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use client::{Clients, FileStorage, TokenStore, TracingNotifier};
//! use common::ClientConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::from_env()?;
//!     let store = TokenStore::new(FileStorage::new(&config.token_storage_path));
//!     let clients = Clients::from_config(&config, store, Arc::new(TracingNotifier))?;
//!
//!     clients.auth().login("student", "password").await?;
//!     let profile = clients.member().my_profile().await?;
//!     println!("Hello, {}", profile.name);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod http;
pub mod models;
pub mod notify;
pub mod session;
pub mod storage;

use std::sync::Arc;

use common::{ClientConfig, ClientResult};

pub use http::{AuthClient, ClientOptions};
pub use notify::{Notification, Notifier, RecordingNotifier, TracingNotifier};
pub use session::{Session, TokenStore};
pub use storage::{FileStorage, MemoryStorage, SessionStorage, StorageError};

use crate::api::{
    AuthApi, BannerApi, BusApi, ConferenceApi, DauthApi, DgitApi, LeaveApi, MealApi, MemberApi,
    NightStudyApi, ScheduleApi, WakeupSongApi,
};

/// One client per backend, all sharing a session and a notifier
#[derive(Clone)]
pub struct Clients {
    /// Main backend
    pub dodam: AuthClient,
    /// Client registry backend
    pub dauth: AuthClient,
    /// GitHub ranking backend
    pub dgit: AuthClient,
}

impl Clients {
    pub fn from_config(
        config: &ClientConfig,
        store: TokenStore,
        notifier: Arc<dyn Notifier>,
    ) -> ClientResult<Self> {
        let options = ClientOptions::from_config(config);
        let client = |base_url: &str| {
            AuthClient::new(base_url, options.clone(), store.clone(), notifier.clone())
        };

        Ok(Self {
            dodam: client(&config.api_url)?,
            dauth: client(&config.dauth_api_url)?,
            dgit: client(&config.dgit_api_url)?,
        })
    }

    pub fn store(&self) -> &TokenStore {
        self.dodam.store()
    }

    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.dodam.clone())
    }

    pub fn member(&self) -> MemberApi {
        MemberApi::new(self.dodam.clone())
    }

    pub fn schedule(&self) -> ScheduleApi {
        ScheduleApi::new(self.dodam.clone())
    }

    pub fn meal(&self) -> MealApi {
        MealApi::new(self.dodam.clone())
    }

    pub fn bus(&self) -> BusApi {
        BusApi::new(self.dodam.clone())
    }

    pub fn night_study(&self) -> NightStudyApi {
        NightStudyApi::new(self.dodam.clone())
    }

    pub fn wakeup_song(&self) -> WakeupSongApi {
        WakeupSongApi::new(self.dodam.clone())
    }

    pub fn leave(&self) -> LeaveApi {
        LeaveApi::new(self.dodam.clone())
    }

    pub fn conference(&self) -> ConferenceApi {
        ConferenceApi::new(self.dodam.clone())
    }

    pub fn banner(&self) -> BannerApi {
        BannerApi::new(self.dodam.clone())
    }

    pub fn dauth(&self) -> DauthApi {
        DauthApi::new(self.dauth.clone())
    }

    pub fn dgit(&self) -> DgitApi {
        DgitApi::new(self.dgit.clone())
    }
}
