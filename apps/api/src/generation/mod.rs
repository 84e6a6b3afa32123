// Roast/compliment generation: input normalization, prompt assembly, one model call.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod generator;
pub mod handlers;
pub mod normalize;
pub mod prompts;
pub mod validator;
