use crate::{Repository, Result};

impl Repository {
    /// URL of the named remote, or `None` when the remote is not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository configuration cannot be read.
    pub fn remote_url(&self, name: &str) -> Result<Option<String>> {
        let Ok(remote) = self.inner.find_remote(name) else {
            return Ok(None);
        };

        Ok(remote.url().map(String::from))
    }
}
