#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use roast_api::generation::validator::PassThroughValidator;
use roast_api::llm_client::{ChatPrompt, LlmError, TextGenerator};
use roast_api::routes::build_router;
use roast_api::state::AppState;

pub enum Reply {
    Text(&'static str),
    Fail,
}

/// Stand-in for the Gemini client: fixed reply, records every prompt.
pub struct ScriptedGenerator {
    reply: Reply,
    calls: AtomicUsize,
    prompts: Mutex<Vec<ChatPrompt>>,
}

impl ScriptedGenerator {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<ChatPrompt> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &ChatPrompt) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.clone());
        match self.reply {
            Reply::Text(text) => Ok(text.to_string()),
            Reply::Fail => Err(LlmError::Api {
                status: 503,
                message: "model overloaded".to_string(),
            }),
        }
    }
}

pub fn app(generator: Arc<ScriptedGenerator>) -> axum::Router {
    build_router(AppState {
        generator,
        validator: Arc::new(PassThroughValidator),
    })
}
