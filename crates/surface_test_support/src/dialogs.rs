use crate::FakeSurface;
use editor::DialogHost;

impl DialogHost for FakeSurface {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    /// Answers come from [`FakeSurface::answer_prompts`]; with none queued
    /// the prompt is cancelled.
    fn prompt(&mut self, question: &str, default: &str) -> Option<String> {
        self.prompts.push((question.to_string(), default.to_string()));
        self.answers.pop_front().flatten()
    }
}
