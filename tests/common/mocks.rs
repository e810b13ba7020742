use async_trait::async_trait;
use qa_service::{
    Error, Result,
    model::{Answer, QaModel},
};
use std::sync::{Arc, Mutex};

/// Mock inference handle for testing: scripted answers plus a record of
/// every (question, context) pair it was invoked with.
#[derive(Debug)]
pub struct MockQaModel {
    pub answers: Arc<Mutex<Vec<Answer>>>,
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    pub error: Option<String>,
}

impl MockQaModel {
    pub fn new() -> Self {
        Self {
            answers: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_answer(self, answer: &str) -> Self {
        self.answers.lock().unwrap().push(Answer {
            answer: answer.to_string(),
            score: Some(0.9),
        });
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl QaModel for MockQaModel {
    async fn answer(&self, question: &str, context: &str) -> Result<Answer> {
        self.calls
            .lock()
            .unwrap()
            .push((question.to_string(), context.to_string()));

        if let Some(ref error) = self.error {
            return Err(Error::model(error.clone()));
        }

        let mut answers = self.answers.lock().unwrap();
        if answers.is_empty() {
            return Err(Error::model("No more mock answers available"));
        }

        Ok(answers.remove(0))
    }
}

impl Default for MockQaModel {
    fn default() -> Self {
        Self::new()
    }
}
