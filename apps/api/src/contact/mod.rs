// Contact form: submission and AI polishing of the draft message.

pub mod form;
pub mod handlers;
