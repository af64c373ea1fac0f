//! Result bookkeeping for the system-check harness page.

#[cfg(test)]
#[path = "checks_test.rs"]
mod checks_test;

/// Outcome of one named check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckStatus {
    Pending,
    Passed,
    Failed,
}

/// One named check and its latest outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    /// Wall-clock time of the finished check; absent while pending.
    pub duration_ms: Option<u32>,
}

/// Harness state: an ordered list of check results plus run status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChecksState {
    pub results: Vec<CheckResult>,
    pub running: bool,
    /// Name of the check currently executing, if any.
    pub current: Option<String>,
}

impl ChecksState {
    /// Drop all results; a new run starts from an empty list.
    pub fn reset(&mut self) {
        self.results.clear();
        self.current = None;
    }

    /// Update the named check in place, or append it. List order is the
    /// order checks were first reported.
    pub fn upsert(
        &mut self,
        name: &str,
        status: CheckStatus,
        message: impl Into<String>,
        duration_ms: Option<u32>,
    ) {
        let message = message.into();
        match self.results.iter_mut().find(|r| r.name == name) {
            Some(existing) => {
                existing.status = status;
                existing.message = message;
                existing.duration_ms = duration_ms;
            }
            None => self.results.push(CheckResult {
                name: name.to_owned(),
                status,
                message,
                duration_ms,
            }),
        }
    }

    #[must_use]
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.status == CheckStatus::Passed).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| r.status == CheckStatus::Failed).count()
    }

    /// True once no check is still pending.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.results.iter().all(|r| r.status != CheckStatus::Pending)
    }
}
