// Static site content: the records the front end renders and the context
// block the chat assistant answers from.

pub mod context;
pub mod data;
pub mod handlers;
