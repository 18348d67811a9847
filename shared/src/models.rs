//! Shared data models.

use serde::{Deserialize, Serialize};

/// Pre-packaged Seldon model server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModelServer {
    #[default]
    SklearnServer,
    TensorflowServer,
    MlflowServer,
    XgboostServer,
}

impl ModelServer {
    /// Wire name, e.g. `SKLEARN_SERVER`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelServer::SklearnServer => "SKLEARN_SERVER",
            ModelServer::TensorflowServer => "TENSORFLOW_SERVER",
            ModelServer::MlflowServer => "MLFLOW_SERVER",
            ModelServer::XgboostServer => "XGBOOST_SERVER",
        }
    }
}

/// Which model to serve and on what server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeldonDetail {
    pub model_name: String,
    #[serde(default)]
    pub implementation: ModelServer,
}

/// Deploy request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployRequest {
    /// Name of the selected model file, e.g. `model.joblib`.
    pub filename: String,
    /// Path of the file relative to the repository root, e.g. `./models/model.joblib`.
    pub path: String,
    pub seldon_detail: SeldonDetail,
}

/// Where a model lives and where it will be served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentTarget {
    pub model_name: String,
    pub implementation: ModelServer,
    /// Key of the model file inside the bucket.
    pub object_key: String,
    pub model_uri: String,
    pub endpoint: String,
}

/// Deploy response payload.
#[derive(Debug, Serialize)]
pub struct DeployResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<DeploymentTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeployResponse {
    pub fn success(target: DeploymentTarget) -> Self {
        Self {
            success: true,
            target: Some(target),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            target: None,
            error: Some(message.into()),
        }
    }
}
