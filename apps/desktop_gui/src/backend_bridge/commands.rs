//! Backend commands queued from UI to backend worker.

use shared::protocol::SummarizeRequest;

pub enum BackendCommand {
    Summarize { request: SummarizeRequest },
    CheckHealth,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Summarize { .. } => "summarize",
            BackendCommand::CheckHealth => "check_health",
        }
    }
}
