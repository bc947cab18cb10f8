use crate::docket::{Docket, DocketEntry};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

pub(crate) fn sample_docket() -> Docket {
    Docket {
        id: 65748821,
        case_name: "Doe v. Roe".to_string(),
        docket_number: "1:23-cv-00001".to_string(),
        court_id: "nysd".to_string(),
        pacer_case_id: Some("590000".to_string()),
    }
}

pub(crate) fn sample_entry() -> DocketEntry {
    DocketEntry {
        document_number: "12".to_string(),
        attachment_number: None,
        description: "MOTION to Dismiss for Lack of Jurisdiction".to_string(),
        short_description: "Motion to Dismiss".to_string(),
        filepath_local: Some(
            "recap/gov.uscourts.nysd.590000/gov.uscourts.nysd.590000.12.0.pdf".to_string(),
        ),
    }
}

pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}
