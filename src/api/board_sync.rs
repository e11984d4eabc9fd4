use std::sync::Arc;

use crate::activity::ActivityBoard;
use crate::api::client::{ActivityApi, ApiError, HttpActivityClient, SignupReceipt, SignupRequest};
use crate::storage::config::Config;

/// Completion of a background request, delivered back to the UI task.
#[derive(Debug)]
pub enum BoardEvent {
    ActivitiesLoaded {
        seq: u64,
        result: Result<ActivityBoard, ApiError>,
    },
    SignupFinished {
        request: SignupRequest,
        result: Result<SignupReceipt, ApiError>,
    },
    RemovalFinished {
        activity: String,
        email: String,
        result: Result<(), ApiError>,
    },
}

/// Runs board requests against an [`ActivityApi`] and packages each outcome
/// as a [`BoardEvent`]. Cheap to clone so every request task can own one.
#[derive(Clone)]
pub struct BoardSync {
    api: Arc<dyn ActivityApi>,
}

impl BoardSync {
    pub fn new(config: &Config) -> Self {
        let client = HttpActivityClient::new(config.server.base_url.clone());
        tracing::info!("Using activity API at {}", client.base_url());
        Self::with_api(Arc::new(client))
    }

    pub fn with_api(api: Arc<dyn ActivityApi>) -> Self {
        Self { api }
    }

    pub async fn fetch_board(&self) -> Result<ActivityBoard, ApiError> {
        self.api.list_activities().await
    }

    pub async fn load(&self, seq: u64) -> BoardEvent {
        tracing::debug!("Starting activity load #{}", seq);
        let result = self.api.list_activities().await;
        BoardEvent::ActivitiesLoaded { seq, result }
    }

    pub async fn signup(&self, request: SignupRequest) -> BoardEvent {
        let result = self.api.signup(&request.activity, &request.email).await;
        BoardEvent::SignupFinished { request, result }
    }

    pub async fn remove(&self, activity: String, email: String) -> BoardEvent {
        let result = self.api.remove_participant(&activity, &email).await;
        BoardEvent::RemovalFinished { activity, email, result }
    }
}
