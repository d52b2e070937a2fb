//! In-memory sources and sinks shared by the unit tests.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use rummy_types::{
    DateRange, Dimensions, Picture, PictureId, PictureSource, Result, RummyError,
};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::ProgressSink;

/// How the fake source answers a download request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Saved,
    Failed,
    Broken,
}

#[derive(Debug)]
pub(crate) struct FakeSource {
    name: String,
    dates: HashMap<String, NaiveDateTime>,
    order: Vec<String>,
    outcomes: HashMap<String, Outcome>,
    pub(crate) downloads: Mutex<Vec<String>>,
}

impl FakeSource {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            dates: HashMap::new(),
            order: Vec::new(),
            outcomes: HashMap::new(),
            downloads: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with(mut self, id: &str, date: NaiveDateTime) -> Self {
        self.order.push(id.to_string());
        self.dates.insert(id.to_string(), date);
        self
    }

    pub(crate) fn with_outcome(mut self, id: &str, date: NaiveDateTime, outcome: Outcome) -> Self {
        self.outcomes.insert(id.to_string(), outcome);
        self.with(id, date)
    }

    pub(crate) fn picture(self: &Arc<Self>, id: &str) -> Picture {
        Picture::new(PictureId::new(id), self.clone())
    }
}

#[async_trait]
impl PictureSource for FakeSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get_pictures(self: Arc<Self>, range: DateRange) -> Result<Vec<Picture>> {
        let handle: Arc<dyn PictureSource> = self.clone();
        Ok(self
            .order
            .iter()
            .filter(|id| range.contains(self.dates[*id]))
            .map(|id| Picture::new(PictureId::new(id.as_str()), handle.clone()))
            .collect())
    }

    fn capture_date(&self, picture: &Picture) -> Result<NaiveDateTime> {
        self.dates
            .get(picture.id().as_str())
            .copied()
            .ok_or_else(|| RummyError::DateParse {
                value: picture.id().to_string(),
            })
    }

    async fn resolve_and_download(
        &self,
        picture: &Picture,
        _dimensions: Dimensions,
        output_dir: &Path,
    ) -> Result<bool> {
        let id = picture.id().to_string();
        self.downloads.lock().unwrap().push(id.clone());
        match self.outcomes.get(&id).copied().unwrap_or(Outcome::Saved) {
            Outcome::Saved => {
                tokio::fs::create_dir_all(output_dir).await?;
                tokio::fs::write(output_dir.join(format!("{id}.jpg")), id.as_bytes()).await?;
                Ok(true)
            }
            Outcome::Failed => Ok(false),
            Outcome::Broken => Err(RummyError::Io(std::io::Error::other("disk on fire"))),
        }
    }
}

/// A source whose listing always fails.
#[derive(Debug)]
pub(crate) struct FailingSource;

#[async_trait]
impl PictureSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn get_pictures(self: Arc<Self>, _range: DateRange) -> Result<Vec<Picture>> {
        Err(RummyError::DateParse {
            value: "yesterday-ish".to_string(),
        })
    }

    fn capture_date(&self, picture: &Picture) -> Result<NaiveDateTime> {
        Err(RummyError::DateParse {
            value: picture.id().to_string(),
        })
    }

    async fn resolve_and_download(
        &self,
        _picture: &Picture,
        _dimensions: Dimensions,
        _output_dir: &Path,
    ) -> Result<bool> {
        Ok(false)
    }
}

/// Records every progress call.
#[derive(Debug, Default)]
pub(crate) struct RecordingProgress {
    pub(crate) events: Mutex<Vec<String>>,
}

impl ProgressSink for RecordingProgress {
    fn start(&self, label: &str, total: Option<u64>) {
        self.events
            .lock()
            .unwrap()
            .push(format!("start {label} {total:?}"));
    }

    fn advance(&self, n: u64) {
        self.events.lock().unwrap().push(format!("advance {n}"));
    }

    fn finish(&self, message: &str) {
        self.events.lock().unwrap().push(format!("finish {message}"));
    }
}

pub(crate) fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}
