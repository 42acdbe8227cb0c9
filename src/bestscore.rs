use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The highest score reached so far, plus where to keep it on disk
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct BestScore {
    score: u32,
    /// `None` if the best score should not be saved
    path: Option<PathBuf>,
}

impl BestScore {
    /// Return the default best-score file path
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("termsnake").join("best-score.json"))
    }

    /// Create a best score that lives only in memory
    #[cfg(test)]
    pub(crate) fn unsaved(score: u32) -> BestScore {
        BestScore { score, path: None }
    }

    /// Read the best score from the file at `path`.  A missing file counts
    /// as a best score of zero.
    ///
    /// If reading fails, the error is returned alongside a best score of
    /// zero that will still be saved to `path`.
    pub(crate) fn load(path: PathBuf) -> (BestScore, Option<LoadError>) {
        match read_score(&path) {
            Ok(score) => (
                BestScore {
                    score,
                    path: Some(path),
                },
                None,
            ),
            Err(e) => (
                BestScore {
                    score: 0,
                    path: Some(path),
                },
                Some(e),
            ),
        }
    }

    pub(crate) fn get(&self) -> u32 {
        self.score
    }

    /// Record `score` if it beats the current best, saving the new best to
    /// disk.  Returns `true` if the best score went up.
    ///
    /// Save failures are logged and otherwise ignored.
    pub(crate) fn update(&mut self, score: u32) -> bool {
        if score <= self.score {
            return false;
        }
        self.score = score;
        if let Err(e) = self.save() {
            tracing::warn!(error = %e, source = ?std::error::Error::source(&e), "Could not save best score");
        }
        true
    }

    pub(crate) fn save(&self) -> Result<(), SaveError> {
        let Some(ref path) = self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        let mut src = serde_json::to_string(&BestScoreFile {
            best_score: self.score,
        })
        .map_err(SaveError::serialize)?;
        src.push('\n');
        fs_err::write(path, &src).map_err(SaveError::write)?;
        Ok(())
    }
}

fn read_score(path: &Path) -> Result<u32, LoadError> {
    let src = match fs_err::read(path) {
        Ok(src) => src,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(LoadError::read(e)),
    };
    serde_json::from_slice::<BestScoreFile>(&src)
        .map(|f| f.best_score)
        .map_err(LoadError::deserialize)
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
struct BestScoreFile {
    best_score: u32,
}

#[derive(Debug, Error)]
#[error("Failed to save best score to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn serialize(e: serde_json::Error) -> Self {
        SaveError(SaveErrorSource::Serialize(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize best score")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write best score to disk")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read best score from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn deserialize(e: serde_json::Error) -> Self {
        LoadError(LoadErrorSource::Deserialize(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to read best score file")]
    Read(#[source] std::io::Error),
    #[error("failed to deserialize best score")]
    Deserialize(#[source] serde_json::Error),
}
