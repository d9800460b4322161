//! Console UI
//!
//! # Architecture
//!
//! - **Widgets** (`widgets`): plain-text building blocks without business logic
//! - **Components** (`components`): one module per dialog kind, turning props
//!   into a prompt and an answer line into a response
//! - **Console** (`console`): the renderer task that follows the dialog slot

pub mod components;
pub mod console;
pub mod widgets;
