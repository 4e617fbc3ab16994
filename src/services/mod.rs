pub mod chat_client;
pub mod generation_service;
pub mod input_decoder;
pub mod prompt_renderer;
pub mod response_unwrapper;
