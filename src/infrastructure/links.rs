//! Object storage URL construction.
//!
//! Download and view links are pure functions of the service endpoint, the
//! project id and the bucket id; no backend round trip is needed.

/// Coordinates of the object storage bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links {
    pub endpoint: String,
    pub project_id: String,
    pub bucket_id: String,
}

impl Links {
    #[must_use]
    pub fn new(endpoint: impl Into<String>, project_id: impl Into<String>, bucket_id: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            project_id: project_id.into(),
            bucket_id: bucket_id.into(),
        }
    }

    fn object_url(&self, bucket_file_id: &str, action: &str) -> String {
        format!(
            "{}/storage/buckets/{}/files/{}/{action}?project={}",
            self.endpoint.trim_end_matches('/'),
            self.bucket_id,
            bucket_file_id,
            self.project_id
        )
    }

    /// URL that downloads the object as an attachment.
    ///
    /// # Examples
    ///
    /// ```
    /// use filedeck::infrastructure::Links;
    ///
    /// let links = Links::new("https://cloud.example.com/v1/", "proj", "files");
    /// assert_eq!(
    ///     links.construct_download_url("obj-1"),
    ///     "https://cloud.example.com/v1/storage/buckets/files/files/obj-1/download?project=proj"
    /// );
    /// ```
    #[must_use]
    pub fn construct_download_url(&self, bucket_file_id: &str) -> String {
        self.object_url(bucket_file_id, "download")
    }

    /// URL that renders the object inline.
    #[must_use]
    pub fn construct_file_url(&self, bucket_file_id: &str) -> String {
        self.object_url(bucket_file_id, "view")
    }
}

impl Default for Links {
    fn default() -> Self {
        Self::new("http://localhost/v1", "filedeck", "files")
    }
}
