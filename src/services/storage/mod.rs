//! Client for the external object-storage collaborator.
//!
//! Attachments are validated locally (count, size, type) before a single
//! byte leaves the machine; a rejected batch makes zero collaborator calls.
//! Valid batches are uploaded concurrently and come back as the same
//! [`DocumentationFile`] records the events table stores.

use anyhow::{anyhow, bail, Context, Result};
use uuid::Uuid;

use crate::models::event::DocumentationFile;

pub mod validation;

pub use validation::{validate_files, AttachmentError, MAX_FILES, MAX_FILE_SIZE};

/// An attachment as picked from disk, not yet uploaded.
#[derive(Debug, Clone)]
pub struct LocalFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// The upload surface of the object-storage collaborator.
#[cfg_attr(test, mockall::automock)]
pub trait ObjectStore {
    /// Upload already-validated files and return their storage records.
    fn upload_files(&self, files: &[LocalFile]) -> Result<Vec<DocumentationFile>>;

    /// Public URL for a stored object path.
    fn public_url(&self, path: &str) -> String;
}

/// Validate and upload a submission's attachments.
///
/// This is the only path the UI uses; validation failing here means the
/// store was never invoked.
pub fn upload_attachments(
    store: &dyn ObjectStore,
    files: &[LocalFile],
) -> Result<Vec<DocumentationFile>> {
    if files.is_empty() {
        return Ok(Vec::new());
    }

    validate_files(files).map_err(|e| anyhow!(e))?;
    store.upload_files(files)
}

struct PlannedUpload {
    id: String,
    path: String,
    extension: String,
    original_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

/// Supabase-storage-compatible HTTP implementation.
pub struct SupabaseStore {
    runtime: tokio::runtime::Runtime,
    client: reqwest::Client,
    base_url: String,
    bucket: String,
    api_key: String,
}

impl SupabaseStore {
    pub fn new(
        base_url: impl Into<String>,
        bucket: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .context("Failed to build upload runtime")?;

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .context("Failed to build storage HTTP client")?;

        Ok(Self {
            runtime,
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bucket: bucket.into(),
            api_key: api_key.into(),
        })
    }

    /// Stored objects get opaque UUID names; only the extension survives
    /// from the original file name.
    fn plan(&self, files: &[LocalFile]) -> Result<Vec<PlannedUpload>> {
        files
            .iter()
            .map(|file| {
                let extension = validation::extension_of(&file.name)
                    .ok_or_else(|| anyhow!("{} has no file extension", file.name))?;
                let folder = validation::folder_for(&extension)
                    .ok_or_else(|| anyhow!("{}: unsupported file type", file.name))?;
                let id = Uuid::new_v4().to_string();

                Ok(PlannedUpload {
                    path: format!("{}/{}.{}", folder, id, extension),
                    id,
                    extension,
                    original_name: file.name.clone(),
                    content_type: file.content_type.clone(),
                    bytes: file.bytes.clone(),
                })
            })
            .collect()
    }

    fn object_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url, self.bucket, path
        )
    }
}

impl ObjectStore for SupabaseStore {
    fn upload_files(&self, files: &[LocalFile]) -> Result<Vec<DocumentationFile>> {
        let planned = self.plan(files)?;
        let count = planned.len();

        self.runtime.block_on(async {
            let mut tasks = tokio::task::JoinSet::new();

            for (index, plan) in planned.into_iter().enumerate() {
                let client = self.client.clone();
                let url = self.object_url(&plan.path);
                let public_url = self.public_url(&plan.path);
                let full_path = format!("{}/{}", self.bucket, plan.path);
                let api_key = self.api_key.clone();

                tasks.spawn(async move {
                    let response = client
                        .post(&url)
                        .bearer_auth(&api_key)
                        .header(reqwest::header::CONTENT_TYPE, &plan.content_type)
                        .header(reqwest::header::CACHE_CONTROL, "max-age=3600")
                        .body(plan.bytes)
                        .send()
                        .await
                        .with_context(|| format!("Network error uploading {}", plan.original_name))?;

                    if !response.status().is_success() {
                        bail!(
                            "Upload of {} failed with HTTP status {}",
                            plan.original_name,
                            response.status()
                        );
                    }

                    Ok::<_, anyhow::Error>((
                        index,
                        DocumentationFile {
                            id: plan.id,
                            path: plan.path,
                            url: public_url,
                            full_path,
                            file_type: Some(plan.extension),
                            file_name: Some(plan.original_name),
                        },
                    ))
                });
            }

            // Tasks finish in arbitrary order; results keep submission order.
            let mut uploaded: Vec<Option<DocumentationFile>> = vec![None; count];
            while let Some(joined) = tasks.join_next().await {
                let (index, file) = joined.context("Upload task panicked")??;
                uploaded[index] = Some(file);
            }

            uploaded
                .into_iter()
                .map(|slot| slot.ok_or_else(|| anyhow!("Upload produced no result")))
                .collect()
        })
    }

    fn public_url(&self, path: &str) -> String {
        let encoded = path
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");

        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, encoded
        )
    }
}
