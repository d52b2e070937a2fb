//! Remote photo library picture source.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use rummy_types::{
    DateRange, Dimensions, Picture, PictureId, PictureSource, Result, RummyError,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::url::{content_url, media_item_url, media_items_url};
use crate::{
    AccessToken, ApiClient, MediaItem, MediaItemsPage, Page, Paginator, TokenProvider,
    parse_creation_time,
};

/// A photo library account.
///
/// Each instance owns its HTTP client and its access token. The token is
/// requested once, before the first listing request, and reused for every
/// later listing and download made through this instance.
#[derive(Debug)]
pub struct RemoteSource {
    account: String,
    client: ApiClient,
    tokens: Arc<dyn TokenProvider>,
    token: OnceCell<AccessToken>,
    paginator: Paginator,
}

impl RemoteSource {
    /// Creates a source for `account`.
    #[must_use]
    pub fn new(
        account: impl Into<String>,
        client: ApiClient,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            account: account.into(),
            client,
            tokens,
            token: OnceCell::new(),
            paginator: Paginator::default(),
        }
    }

    /// Replaces the paginator, e.g. to lower the page limit.
    #[must_use]
    pub const fn with_paginator(mut self, paginator: Paginator) -> Self {
        self.paginator = paginator;
        self
    }

    /// Returns the account name.
    #[must_use]
    pub fn account(&self) -> &str {
        &self.account
    }

    async fn access_token(&self) -> Result<&AccessToken> {
        self.token
            .get_or_try_init(|| async {
                info!(account = %self.account, "authenticating account");
                self.tokens.token(&self.account).await
            })
            .await
    }

    async fn fetch_page(
        &self,
        token: &AccessToken,
        handle: Arc<dyn PictureSource>,
        page_token: Option<String>,
    ) -> Result<Page<Picture>> {
        let config = self.client.config();
        let url = media_items_url(&config.base_url);
        let mut query = vec![("pageSize", config.page_size.to_string())];
        if let Some(page_token) = page_token {
            query.push(("pageToken", page_token));
        }

        let page: MediaItemsPage = self.client.get_json(&url, &query, token).await?;
        let items = page
            .media_items
            .into_iter()
            .filter(MediaItem::is_candidate)
            .map(|item| into_picture(item, handle.clone()))
            .collect();

        Ok(Page {
            items,
            next_page_token: page.next_page_token,
        })
    }

    async fn download(
        &self,
        picture: &Picture,
        dimensions: Dimensions,
        output_dir: &Path,
    ) -> Result<PathBuf> {
        let token = self.access_token().await?;
        tokio::fs::create_dir_all(output_dir).await?;

        let detail_url = media_item_url(&self.client.config().base_url, picture.id().as_str());
        let item: MediaItem = self.client.get_json(&detail_url, &[], token).await?;
        let base_url = item.base_url.as_deref().ok_or_else(|| RummyError::Metadata {
            item: item.id.clone(),
            field: "baseUrl",
        })?;

        let bytes = self
            .client
            .get_bytes(&content_url(base_url, dimensions), token)
            .await?;

        let path = output_dir.join(output_name(&item.filename, picture.id()));
        tokio::fs::write(&path, &bytes).await?;
        Ok(path)
    }
}

fn into_picture(item: MediaItem, handle: Arc<dyn PictureSource>) -> Picture {
    let picture = Picture::new(PictureId::new(item.id), handle).with_filename(item.filename);
    match item.media_metadata.creation_time {
        Some(creation_time) => picture.with_captured(creation_time),
        None => picture,
    }
}

/// Keeps only the final path component of a service-provided filename.
fn output_name(filename: &str, id: &PictureId) -> String {
    Path::new(filename)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| id.to_string())
}

#[async_trait]
impl PictureSource for RemoteSource {
    fn name(&self) -> &str {
        &self.account
    }

    async fn get_pictures(self: Arc<Self>, range: DateRange) -> Result<Vec<Picture>> {
        let token = self.access_token().await?;
        let handle: Arc<dyn PictureSource> = self.clone();

        info!(account = %self.account, %range, "fetching photos");
        let collected = self
            .paginator
            .collect(
                range,
                |page_token| self.fetch_page(token, handle.clone(), page_token),
                Picture::date,
            )
            .await?;

        info!(
            account = %self.account,
            pages = collected.pages,
            candidates = collected.items.len(),
            "fetched photos"
        );
        Ok(collected.items)
    }

    fn capture_date(&self, picture: &Picture) -> Result<NaiveDateTime> {
        parse_creation_time(picture.captured().unwrap_or_default())
    }

    async fn resolve_and_download(
        &self,
        picture: &Picture,
        dimensions: Dimensions,
        output_dir: &Path,
    ) -> Result<bool> {
        match self.download(picture, dimensions, output_dir).await {
            Ok(path) => {
                debug!(id = %picture.id(), path = %path.display(), "downloaded");
                Ok(true)
            }
            Err(e) => {
                warn!(
                    account = %self.account,
                    id = %picture.id(),
                    error = %e,
                    "failed to download"
                );
                Ok(false)
            }
        }
    }
}
