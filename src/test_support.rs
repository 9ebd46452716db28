use crate::config::AssistantProfile;
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

/// Write a shell script to `dir/name` and return its path.
pub(crate) fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

/// Assistant profile that runs `script` through `sh`, with default flags.
pub(crate) fn script_profile(script: &Path) -> AssistantProfile {
    AssistantProfile {
        command: format!(
            "sh {}",
            shell_words::quote(&script.to_string_lossy())
        ),
        ..Default::default()
    }
}

/// Write the plan and implement templates under `<root>/.claude/commands/`.
pub(crate) fn write_templates(root: &Path, plan_name: &str, plan: &str, implement: &str) {
    let commands_dir = root.join(".claude").join("commands");
    std::fs::create_dir_all(&commands_dir).unwrap();
    std::fs::write(commands_dir.join(format!("{}.md", plan_name)), plan).unwrap();
    std::fs::write(commands_dir.join("implement.md"), implement).unwrap();
}
