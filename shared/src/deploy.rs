//! Resolves deploy requests against the loaded configuration.

use tracing::info;

use crate::models::{DeployRequest, DeploymentTarget};
use crate::{Config, Error, Result};

impl Config {
    /// Work out the S3 location of the model file and the Seldon endpoint
    /// it will be served on.
    ///
    /// The object key is the repository-relative `path` without its leading
    /// `./`. A path that is empty or names a directory falls back to
    /// `<path>/<filename>`.
    pub fn deployment_target(&self, request: &DeployRequest) -> Result<DeploymentTarget> {
        let filename = request.filename.trim();
        if filename.is_empty() {
            return Err(Error::Validation("filename must not be empty".to_string()));
        }
        if filename.contains('/') {
            return Err(Error::Validation(format!(
                "filename must not contain '/': {filename}"
            )));
        }

        let model_name = request.seldon_detail.model_name.trim();
        if model_name.is_empty() {
            return Err(Error::Validation("model_name must not be empty".to_string()));
        }

        let object_key = object_key(&request.path, filename);
        let target = DeploymentTarget {
            model_name: model_name.to_string(),
            implementation: request.seldon_detail.implementation,
            model_uri: format!("s3://{}/{}", self.bucket_name(), object_key),
            object_key,
            endpoint: join_url(self.seldon_api_url(), model_name),
        };

        info!(
            model_name = %target.model_name,
            implementation = target.implementation.as_str(),
            model_uri = %target.model_uri,
            endpoint = %target.endpoint,
            "Resolved deployment target"
        );

        Ok(target)
    }
}

fn object_key(path: &str, filename: &str) -> String {
    let relative = path.trim();
    let relative = relative.strip_prefix("./").unwrap_or(relative);
    let relative = relative.trim_start_matches('/');

    if relative.is_empty() || relative == "." {
        return filename.to_string();
    }
    if relative.ends_with('/') {
        return format!("{relative}{filename}");
    }
    if relative == filename || relative.ends_with(&format!("/{filename}")) {
        return relative.to_string();
    }
    format!("{relative}/{filename}")
}

fn join_url(base: &str, segment: &str) -> String {
    if base.ends_with('/') {
        format!("{base}{segment}")
    } else {
        format!("{base}/{segment}")
    }
}
