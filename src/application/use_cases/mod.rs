mod answer_question;
mod inference_client;

pub use answer_question::*;
pub use inference_client::*;
